//! Message source running on its own thread.
//!
//! Stands in for the real-time channel that feeds the chat panel: it plays a
//! scripted conversation on a Tokio runtime and hands each message to the UI
//! over a crossbeam channel.

mod script;

pub use script::{DEMO_CONVERSATION, ScriptLine};

use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};

use crate::message::{ChatMessage, MessageId};
use crate::protocol::{FeedEvent, SourceAction};

/// Play `script` with `interval` between lines, then report `SourceClosed`.
///
/// Returns early when the UI sends `Shutdown` or drops its receiver.
pub fn run_source(
    script: &[ScriptLine],
    interval: Duration,
    action_rx: Receiver<SourceAction>,
    event_tx: Sender<FeedEvent>,
) {
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {}", e);
            let _ = event_tx.send(FeedEvent::SourceClosed(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut next_id = 1u64;

        for entry in script {
            tokio::time::sleep(interval).await;

            // Check for actions from the UI (non-blocking)
            if let Ok(SourceAction::Shutdown) = action_rx.try_recv() {
                tracing::info!("message source shut down by UI");
                return;
            }

            let msg = ChatMessage::new(MessageId(next_id), Local::now(), entry.role, entry.content);
            next_id += 1;

            if event_tx.send(FeedEvent::MessageReceived(msg)).is_err() {
                tracing::debug!("UI receiver dropped, stopping message source");
                return;
            }
        }

        let _ = event_tx.send(FeedEvent::SourceClosed("Conversation finished".to_string()));
    });
}
