use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::{InventoryItem, LogEntry};
use crate::shutdown::ShutdownHandle;

use super::client::SyncClient;
use super::error::SyncError;
use super::wire::PushReceipt;

const COMMAND_CHANNEL_SIZE: usize = 8;

/// Work requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    PushLogs { logs: Vec<LogEntry> },
    PullStock,
}

/// Completion reported back to the UI loop.
#[derive(Debug)]
pub enum SyncEvent {
    PushFinished(Result<PushReceipt, SyncError>),
    StockFinished(Result<Vec<InventoryItem>, SyncError>),
}

pub type SyncCommandSender = mpsc::Sender<SyncCommand>;

pub fn command_channel() -> (SyncCommandSender, mpsc::Receiver<SyncCommand>) {
    mpsc::channel(COMMAND_CHANNEL_SIZE)
}

/// Run commands one at a time until the channel closes or shutdown is signalled.
///
/// An exchange cut short by shutdown reports nothing.
pub fn spawn_worker<F>(
    client: SyncClient,
    mut commands: mpsc::Receiver<SyncCommand>,
    report: F,
    shutdown: ShutdownHandle,
) -> JoinHandle<()>
where
    F: Fn(SyncEvent) + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            let command = tokio::select! {
                command = commands.recv() => command,
                _ = shutdown.wait() => None,
            };
            let Some(command) = command else {
                break;
            };

            let event = tokio::select! {
                event = execute(&client, command) => event,
                _ = shutdown.wait() => break,
            };
            report(event);
        }
        tracing::debug!("Sync worker stopped");
    })
}

async fn execute(client: &SyncClient, command: SyncCommand) -> SyncEvent {
    match command {
        SyncCommand::PushLogs { logs } => SyncEvent::PushFinished(client.push_logs(&logs).await),
        SyncCommand::PullStock => SyncEvent::StockFinished(client.pull_stock().await),
    }
}
