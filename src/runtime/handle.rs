use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, warn};

use crate::{
    contract::{CompanyContract, ContractError, ContractResult},
    ledger::LedgerState,
    op::Surface,
};

use super::events::ContractEvent;

/// Errors surfaced by [`ContractHandle`] calls.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The contract rejected the call.
    #[error(transparent)]
    Contract(#[from] ContractError),
    /// The worker has stopped.
    #[error("contract runtime is closed")]
    ChannelClosed,
}

/// Queue and event sizing for the runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Commands buffered before callers wait.
    pub command_queue_bound: usize,
    /// Events retained for lagging subscribers.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_queue_bound: 256,
            event_capacity: 1024,
        }
    }
}

/// Cloneable handle to a contract owned by a single worker.
///
/// Calls are applied one at a time in arrival order, so index appends made
/// through one handle never race each other.
pub struct ContractHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<ContractEvent>,
}

impl Clone for ContractHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

enum Command {
    Call {
        surface: Surface,
        function: String,
        args: Vec<String>,
        resp: oneshot::Sender<ContractResult>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Moves `contract` onto a blocking worker and returns a handle to it.
///
/// Must be called from within a tokio runtime.
pub fn spawn_contract<L>(contract: CompanyContract<L>, config: RuntimeConfig) -> ContractHandle
where
    L: LedgerState + 'static,
{
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<ContractEvent>(config.event_capacity.max(1));

    let events_tx_loop = events_tx.clone();

    tokio::task::spawn_blocking(move || {
        let mut contract = contract;

        while let Some(cmd) = cmd_rx.blocking_recv() {
            match cmd {
                Command::Call {
                    surface,
                    function,
                    args,
                    resp,
                } => {
                    let res = dispatch(&mut contract, &events_tx_loop, surface, &function, &args);
                    if let Err(err) = &res {
                        warn!(%surface, function = %function, error = %err, "call failed");
                    }
                    let _ = resp.send(res);
                }
                Command::Shutdown { resp } => {
                    let _ = resp.send(());
                    break;
                }
            }
        }
        debug!("contract worker stopped");
    });

    ContractHandle { cmd_tx, events_tx }
}

impl ContractHandle {
    /// Subscribes to events published after successful invokes.
    pub fn subscribe(&self) -> broadcast::Receiver<ContractEvent> {
        self.events_tx.subscribe()
    }

    /// Sends a transaction call.
    pub async fn invoke(
        &self,
        function: impl Into<String>,
        args: Vec<String>,
    ) -> Result<Option<Vec<u8>>, RuntimeError> {
        self.call(Surface::Invoke, function.into(), args).await
    }

    /// Sends a query call.
    pub async fn query(
        &self,
        function: impl Into<String>,
        args: Vec<String>,
    ) -> Result<Option<Vec<u8>>, RuntimeError> {
        self.call(Surface::Query, function.into(), args).await
    }

    /// Stops the worker after queued calls have been applied.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    async fn call(
        &self,
        surface: Surface,
        function: String,
        args: Vec<String>,
    ) -> Result<Option<Vec<u8>>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Call {
                surface,
                function,
                args,
                resp: tx,
            })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        let res = rx.await.map_err(|_| RuntimeError::ChannelClosed)?;
        Ok(res?)
    }
}

fn dispatch<L: LedgerState>(
    contract: &mut CompanyContract<L>,
    events_tx: &broadcast::Sender<ContractEvent>,
    surface: Surface,
    function: &str,
    args: &[String],
) -> ContractResult {
    let (op, out) = contract.call(surface, function, args)?;
    if let Some(event) = ContractEvent::for_operation(&op) {
        let _ = events_tx.send(event);
    }
    Ok(out)
}
