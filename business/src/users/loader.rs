//! One-shot background load of the user list.
//!
//! The request runs off the UI thread and its result is handed back through
//! a `flume` channel. The UI drains it with [`UsersLoader::poll`] once per
//! frame, so nothing here blocks rendering.

use flume::{Receiver, TryRecvError};
use log::{debug, warn};

use super::api;
use crate::error::{ApiError, ApiResult};
use crate::user::User;

pub type LoadResult = ApiResult<Vec<User>>;

/// Holds the receiving end of the running load, if any. Each load gets its
/// own channel, so a task that stops without sending shows up as a
/// disconnect.
#[derive(Debug, Default)]
pub struct UsersLoader {
    receiver: Option<Receiver<LoadResult>>,
}

impl UsersLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts loading from `users_url`. `on_done` runs after the result is
    /// queued, typically to request a repaint.
    ///
    /// Returns `false` without doing anything when a load is already running.
    pub fn start(&mut self, users_url: &str, on_done: impl FnOnce() + Send + 'static) -> bool {
        if self.is_in_flight() {
            debug!("Users load already in flight, ignoring");
            return false;
        }

        let (sender, receiver) = flume::bounded(1);
        self.receiver = Some(receiver);

        let url = users_url.to_owned();
        spawn(async move {
            let result = api::list_users(&url).await;
            // The loader may have been dropped with the screen.
            let _ = sender.send_async(result).await;
            on_done();
        });
        true
    }

    /// Takes the finished result, if any. Never blocks.
    ///
    /// A load whose task ended without a result (runtime failure, panic)
    /// finishes with [`ApiError::Runtime`].
    pub fn poll(&mut self) -> Option<LoadResult> {
        let result = match self.receiver.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                warn!("Users load ended without a result");
                Err(ApiError::Runtime("load ended without a result".to_owned()))
            }
        };
        self.receiver = None;
        Some(result)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn(task: impl std::future::Future<Output = ()> + Send + 'static) {
    std::thread::spawn(move || {
        match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(task),
            // Dropping `task` drops its sender; `poll` reports the disconnect
            Err(err) => log::error!("Failed to start users loader runtime: {err}"),
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn(task: impl std::future::Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(task);
}
