//! Concurrent callers sharing one machine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use table_fsm::{Action, Guard, StateMachine, TransitionRule};

fn ping_pong() -> StateMachine<&'static str, &'static str> {
    StateMachine::new(
        "S0",
        vec![
            TransitionRule::new("S0", "go", "S1"),
            TransitionRule::new("S1", "back", "S0"),
        ],
    )
}

#[test]
fn concurrent_steps_never_corrupt_state() {
    let machine = ping_pong();

    thread::scope(|scope| {
        for i in 0..100 {
            let machine = &machine;
            scope.spawn(move || {
                let event = if i % 2 == 0 { "go" } else { "back" };
                let _ = machine.step(event);
            });
        }
    });

    let state = machine.current_state();
    assert!(state == "S0" || state == "S1", "unexpected state {state}");
}

#[test]
fn successful_steps_match_final_state_parity() {
    let machine = ping_pong();
    let successes = AtomicUsize::new(0);

    thread::scope(|scope| {
        for i in 0..200 {
            let machine = &machine;
            let successes = &successes;
            scope.spawn(move || {
                let event = if i % 3 == 0 { "back" } else { "go" };
                if machine.step(event).is_ok() {
                    successes.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    // Every success toggles the state, so the count's parity fixes the end state.
    let expected = if successes.load(Ordering::SeqCst) % 2 == 0 {
        "S0"
    } else {
        "S1"
    };
    assert_eq!(machine.current_state(), expected);
}

#[test]
fn actions_observe_a_linear_order() {
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let forward = Arc::clone(&log);
    let backward = Arc::clone(&log);

    let machine = StateMachine::new(
        "S0",
        vec![
            TransitionRule {
                action: Some(Action::new(move || forward.lock().unwrap().push("S1"))),
                ..TransitionRule::new("S0", "go", "S1")
            },
            TransitionRule {
                action: Some(Action::new(move || backward.lock().unwrap().push("S0"))),
                ..TransitionRule::new("S1", "back", "S0")
            },
        ],
    );

    thread::scope(|scope| {
        for i in 0..64 {
            let machine = &machine;
            scope.spawn(move || {
                for _ in 0..10 {
                    let _ = machine.step(if i % 2 == 0 { "go" } else { "back" });
                }
            });
        }
    });

    // Actions run under the write lock, so the log is a valid walk from S0.
    let log = log.lock().unwrap();
    let mut state = "S0";
    for &entered in log.iter() {
        let expected = if state == "S0" { "S1" } else { "S0" };
        assert_eq!(entered, expected);
        state = entered;
    }
    assert_eq!(machine.current_state(), state);
}

#[test]
fn guard_and_commit_are_atomic() {
    // Guard admits only the first caller; a race would let two through.
    let tickets = Arc::new(AtomicUsize::new(1));
    let remaining = Arc::clone(&tickets);
    let entered = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&entered);

    let machine = StateMachine::new(
        "closed",
        vec![
            TransitionRule {
                guard: Some(Guard::new(move || {
                    let left = remaining.load(Ordering::SeqCst);
                    if left == 0 {
                        return false;
                    }
                    thread::yield_now();
                    remaining.store(left - 1, Ordering::SeqCst);
                    true
                })),
                action: Some(Action::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
                ..TransitionRule::new("closed", "enter", "open")
            },
            TransitionRule::new("open", "leave", "closed"),
        ],
    );

    thread::scope(|scope| {
        for i in 0..50 {
            let machine = &machine;
            scope.spawn(move || {
                let _ = machine.step(if i % 2 == 0 { "enter" } else { "leave" });
            });
        }
    });

    assert_eq!(entered.load(Ordering::SeqCst), 1);
    assert_eq!(tickets.load(Ordering::SeqCst), 0);
}

#[test]
fn independent_machines_do_not_contend() {
    let fast = ping_pong();

    // Drive one machine from inside another's action, i.e. under its write lock.
    let blocker = StateMachine::new(
        "S0",
        vec![TransitionRule {
            action: Some(Action::new(move || {
                fast.step("go").unwrap();
                assert_eq!(fast.current_state(), "S1");
            })),
            ..TransitionRule::new("S0", "go", "S1")
        }],
    );

    blocker.step("go").unwrap();
    assert_eq!(blocker.current_state(), "S1");
}

#[test]
fn reset_races_with_steps() {
    let machine = Arc::new(ping_pong());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let machine = Arc::clone(&machine);
            thread::spawn(move || {
                for _ in 0..100 {
                    if i == 0 {
                        machine.reset();
                    } else {
                        let _ = machine.step("go");
                        let _ = machine.step("back");
                    }
                    let state = machine.current_state();
                    assert!(state == "S0" || state == "S1");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    machine.reset();
    assert_eq!(machine.current_state(), "S0");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn machine_is_shareable_across_tasks() {
    let machine = Arc::new(ping_pong());
    let mut tasks = Vec::new();

    for i in 0..100 {
        let machine = Arc::clone(&machine);
        tasks.push(tokio::spawn(async move {
            let event = if i % 2 == 0 { "go" } else { "back" };
            machine.step(event).is_ok()
        }));
    }

    let mut successes = 0;
    for task in tasks {
        if task.await.unwrap() {
            successes += 1;
        }
    }

    let expected = if successes % 2 == 0 { "S0" } else { "S1" };
    assert_eq!(machine.current_state(), expected);
}
