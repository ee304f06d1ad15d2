use crate::config::UiConfig;
use crate::counter::CounterStore;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the terminal UI until the user quits or a signal arrives.
///
/// The store is shut down (timer cancelled) before the terminal is restored.
pub fn run(store: CounterStore, config: &UiConfig, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(store.clone());
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let state_tx = events.sender();
    let subscription = store.subscribe(move |state| {
        let _ = state_tx.send(AppEvent::State(*state));
    });
    tracing::info!("Counter UI started");

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() || shutdown.is_shutting_down() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::State(state)) => app.on_state(state),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Shutdown) => break Ok(()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    subscription.unsubscribe();
    store.shutdown();
    drop(guard);
    tracing::info!(count = store.state().count, "Counter UI stopped");
    result
}
