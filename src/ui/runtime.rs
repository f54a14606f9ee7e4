use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::shutdown::{spawn_signal_listener, ShutdownHandle};
use crate::sync::{command_channel, spawn_worker, SyncClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// How long the worker gets to notice shutdown before the process exits.
const WORKER_GRACE: Duration = Duration::from_secs(1);

/// Drive the UI on the calling thread until quit, Ctrl-C or SIGTERM.
///
/// The sync worker and signal listener run on `runtime`.
pub fn run(
    mut app: App,
    client: SyncClient,
    tick_rate: Duration,
    runtime: &Handle,
) -> io::Result<()> {
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let (commands, receiver) = command_channel();
    let report = events.sender();
    let worker = {
        let _enter = runtime.enter();
        let worker = spawn_worker(
            client,
            receiver,
            move |event| {
                let _ = report.send(AppEvent::Sync(event));
            },
            shutdown.clone(),
        );
        spawn_signal_listener(shutdown.clone());
        worker
    };
    app.set_sync_sender(commands);
    app.refresh_stock();

    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!("UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Sync(event)) => app.on_sync_event(event),
            Ok(AppEvent::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    if runtime
        .block_on(tokio::time::timeout(WORKER_GRACE, worker))
        .is_err()
    {
        tracing::warn!("Sync worker did not stop in time");
    }
    tracing::info!("UI stopped");
    Ok(())
}
