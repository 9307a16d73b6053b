//! Command orchestration from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use planner_client::SubmissionError;

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the worker. On failure `status` explains why and the
/// error is returned so the caller can roll back its own state.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Result<(), SubmissionError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            Err(SubmissionError::Unavailable(format!(
                "command queue full while sending {cmd_name}"
            )))
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Planning worker disconnected; restart the app".to_string();
            Err(SubmissionError::Unavailable(format!(
                "worker disconnected while sending {cmd_name}"
            )))
        }
    }
}
