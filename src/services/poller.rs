use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::AppError;

/// 定期実行タスクのハンドル
/// The loop winds down on [`PollerHandle::stop`] or when the handle is
/// dropped, so a poller never outlives the view that owns it.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Signal the loop to exit after the current tick.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Stop and wait for the loop to wind down.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn a named repeating task with a stable interval. The first tick runs
/// after one full interval. Tick failures are logged and the loop continues.
pub fn spawn<F, Fut>(name: &'static str, interval: Duration, mut tick: F) -> PollerHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), AppError>> + Send,
{
    let (shutdown, mut rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        info!("Starting {} poller (interval: {:?})", name, interval);

        loop {
            // 最初は指定時間待機
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                changed = rx.changed() => {
                    match changed {
                        Ok(()) if *rx.borrow() => break,
                        Ok(()) => continue,
                        // Sender gone: the handle was dropped.
                        Err(_) => break,
                    }
                }
            }

            if let Err(e) = tick().await {
                // エラーが発生してもループは継続
                warn!("{} poll failed: {:?}", name, e);
            }
        }

        info!("{} poller stopped", name);
    });

    PollerHandle { shutdown, task }
}
