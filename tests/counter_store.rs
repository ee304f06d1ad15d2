mod common;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use common::{assert_invariant, record_states};
use counterplusplus::counter::{CounterIntent, CounterState, CounterStore, TimerState};
use counterplusplus::ui::app::App;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn fresh_store_defaults() {
    let store = CounterStore::new(Handle::current());
    let state = store.state();
    assert_eq!(state.count, 0);
    assert!(!state.auto_enabled);
    assert_eq!(state.interval_ms, 1000);
    assert_eq!(store.timer_state(), TimerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn with_interval_sets_initial_interval_only() {
    let store = CounterStore::with_interval(Handle::current(), 3000);
    assert_eq!(store.state().interval_ms, 3000);
    assert!(!store.state().auto_enabled);
    assert_eq!(store.timer_state(), TimerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn walkthrough_from_fresh_store() {
    let store = CounterStore::new(Handle::current());

    store.increment();
    store.increment();
    store.increment();
    assert_eq!(store.state().count, 3);

    store.reset();
    assert_eq!(store.state().count, 0);

    store.toggle_auto_increment();
    assert!(store.state().auto_enabled);
    assert!(matches!(
        store.timer_state(),
        TimerState::Running { interval, .. } if interval == ms(1000)
    ));

    sleep(ms(2_001)).await;
    assert_eq!(store.state().count, 2);

    store.set_auto_increment_interval(5000);
    assert!(matches!(
        store.timer_state(),
        TimerState::Running { interval, .. } if interval == ms(5000)
    ));
    sleep(ms(4_998)).await;
    assert_eq!(store.state().count, 2, "no tick before the new interval elapses");
    sleep(ms(3)).await;
    assert_eq!(store.state().count, 3);

    store.toggle_auto_increment();
    assert!(!store.state().auto_enabled);
    assert_eq!(store.timer_state(), TimerState::Idle);
    sleep(Duration::from_secs(60)).await;
    assert_eq!(store.state().count, 3);
}

#[tokio::test(start_paused = true)]
async fn rapid_toggle_leaves_exactly_one_timer() {
    let store = CounterStore::new(Handle::current());

    store.toggle_auto_increment();
    assert_invariant(&store);
    store.toggle_auto_increment();
    assert_invariant(&store);
    store.toggle_auto_increment();
    assert_invariant(&store);

    sleep(ms(1_001)).await;
    assert_eq!(store.state().count, 1);
    sleep(ms(1_000)).await;
    assert_eq!(store.state().count, 2);
}

#[tokio::test(start_paused = true)]
async fn toggle_set_interval_toggle_burst_keeps_final_config() {
    let store = CounterStore::new(Handle::current());

    store.toggle_auto_increment();
    store.set_auto_increment_interval(3000);
    store.toggle_auto_increment();
    store.set_auto_increment_interval(2000);
    store.toggle_auto_increment();
    assert_invariant(&store);
    assert!(matches!(
        store.timer_state(),
        TimerState::Running { interval, .. } if interval == ms(2000)
    ));

    sleep(ms(1_999)).await;
    assert_eq!(store.state().count, 0);
    sleep(ms(2)).await;
    assert_eq!(store.state().count, 1);
    sleep(ms(2_000)).await;
    assert_eq!(store.state().count, 2);
}

#[tokio::test(start_paused = true)]
async fn interval_change_discards_partial_wait() {
    let store = CounterStore::new(Handle::current());
    store.set_auto_increment_interval(4000);
    store.toggle_auto_increment();

    sleep(ms(3_500)).await;
    assert_eq!(store.state().count, 0);

    // Old timer would have fired 500 ms from now.
    store.set_auto_increment_interval(4000);
    sleep(ms(3_999)).await;
    assert_eq!(store.state().count, 0);
    sleep(ms(2)).await;
    assert_eq!(store.state().count, 1);
}

#[tokio::test(start_paused = true)]
async fn set_interval_while_off_starts_nothing() {
    let store = CounterStore::new(Handle::current());
    store.set_auto_increment_interval(2000);
    assert_eq!(store.state().interval_ms, 2000);
    assert_eq!(store.timer_state(), TimerState::Idle);

    sleep(Duration::from_secs(30)).await;
    assert_eq!(store.state().count, 0);

    store.toggle_auto_increment();
    sleep(ms(2_001)).await;
    assert_eq!(store.state().count, 1);
}

#[tokio::test(start_paused = true)]
async fn user_intents_interleave_with_ticks() {
    let store = CounterStore::new(Handle::current());
    store.toggle_auto_increment();

    sleep(ms(1_500)).await;
    store.decrement();
    store.decrement();
    sleep(ms(1_000)).await;
    assert_eq!(store.state().count, 0);

    store.reset();
    sleep(ms(1_000)).await;
    assert_eq!(store.state().count, 1);
}

#[tokio::test(start_paused = true)]
async fn observers_receive_ticks_and_intents() {
    let store = CounterStore::new(Handle::current());
    let (first, _first_sub) = record_states(&store);
    let (second, _second_sub) = record_states(&store);

    store.toggle_auto_increment();
    sleep(ms(1_001)).await;
    store.toggle_auto_increment();

    let expected: Vec<(i64, bool)> = vec![(0, true), (1, true), (1, false)];
    for seen in [first, second] {
        let seen: Vec<(i64, bool)> = seen
            .lock()
            .iter()
            .map(|s| (s.count, s.auto_enabled))
            .collect();
        assert_eq!(seen, expected);
    }
}

#[tokio::test(start_paused = true)]
async fn dispatch_matches_named_operations() {
    let store = CounterStore::new(Handle::current());
    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Decrement);
    store.dispatch(CounterIntent::SetInterval { interval_ms: 6000 });
    let state = store.state();
    assert_eq!(state.count, 1);
    assert_eq!(state.interval_ms, 6000);
}

#[tokio::test(start_paused = true)]
async fn dropping_last_handle_cancels_timer() {
    let store = CounterStore::new(Handle::current());
    let ticks = Arc::new(AtomicU64::new(0));
    let sink = Arc::clone(&ticks);
    let sub = store.subscribe(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    store.toggle_auto_increment();
    sleep(ms(1_001)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 2);

    drop(sub);
    drop(store);
    sleep(Duration::from_secs(10)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn running_timer_does_not_keep_store_alive() {
    let store = CounterStore::new(Handle::current());
    let marker = Arc::new(());
    let held = Arc::clone(&marker);
    let _sub = store.subscribe(move |_| {
        let _ = &held;
    });

    store.toggle_auto_increment();
    sleep(ms(1_001)).await;
    assert_eq!(Arc::strong_count(&marker), 2);

    drop(store);
    sleep(ms(1_001)).await;
    assert_eq!(Arc::strong_count(&marker), 1, "store state was leaked by its timer");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_increments_are_serialized() {
    let store = CounterStore::new(Handle::current());
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..1_000 {
                    store.increment();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker panicked");
    }
    assert_eq!(store.state().count, 4_000);
}

#[tokio::test(start_paused = true)]
async fn shutdown_keeps_invariant_and_notifies() {
    let store = CounterStore::new(Handle::current());
    let (seen, _sub) = record_states(&store);
    store.toggle_auto_increment();
    store.shutdown();
    assert_invariant(&store);
    assert!(!seen.lock().last().expect("notified").auto_enabled);

    sleep(Duration::from_secs(5)).await;
    assert_eq!(store.state().count, 0);

    // Idle shutdown is a silent no-op.
    let notifications = seen.lock().len();
    store.shutdown();
    assert_eq!(seen.lock().len(), notifications);
}

#[tokio::test]
async fn late_snapshot_from_other_thread_does_not_win() {
    let store = CounterStore::new(Handle::current());
    let mut app = App::new(store.clone());

    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let entered_tx = Mutex::new(entered_tx);
    let release_rx = Mutex::new(release_rx);
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&delivered);
    let _sub = store.subscribe(move |state: &CounterState| {
        // Hold the first delivery until the second mutation has been observed.
        if state.count == 1 {
            let _ = entered_tx.lock().send(());
            let _ = release_rx.lock().recv();
        }
        sink.lock().push(*state);
    });

    let writer = store.clone();
    let first = thread::spawn(move || writer.increment());
    entered_rx.recv().expect("first delivery started");
    store.increment();
    release_tx.send(()).expect("first delivery waiting");
    first.join().expect("writer thread");

    let delivered = delivered.lock().clone();
    let counts: Vec<i64> = delivered.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![2, 1]);

    for state in delivered {
        app.on_state(state);
    }
    assert_eq!(*app.counter(), store.state());
    assert_eq!(app.counter().count, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn no_tick_lands_after_auto_turned_off() {
    let store = CounterStore::new(Handle::current());
    let (seen, _sub) = record_states(&store);

    for _ in 0..50 {
        store.set_auto_increment_interval(1);
        store.toggle_auto_increment();
        store.set_auto_increment_interval(2);
        sleep(ms(3)).await;
        store.set_auto_increment_interval(1);
        store.toggle_auto_increment();

        let off = store.state();
        assert!(!off.auto_enabled);
        assert_invariant(&store);

        sleep(ms(5)).await;
        assert_eq!(store.state(), off, "tick applied after auto-increment was turned off");
    }

    let last = store.state();
    assert!(seen.lock().iter().all(|s| !s.is_newer_than(&last)));
    assert!(last.count > 0, "timers never fired");
}
