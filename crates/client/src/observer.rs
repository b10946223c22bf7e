//! Logs published armory events per topic.

use armory_runtime::{EventBus, Topic};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Spawns one logging task per topic. Each task ends once the bus is dropped.
pub fn spawn(bus: &EventBus) -> Vec<JoinHandle<usize>> {
    bus.subscribe_multiple(&Topic::ALL)
        .into_iter()
        .map(|(topic, mut receiver)| {
            tokio::spawn(async move {
                let mut seen = 0;
                loop {
                    match receiver.recv().await {
                        Ok(event) => {
                            seen += 1;
                            tracing::info!(
                                ?topic,
                                frame = event.frame,
                                event = event.payload.name(),
                                "{:?}",
                                event.payload
                            );
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(?topic, skipped, "observer lagged");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
                seen
            })
        })
        .collect()
}
