//! Holder-scoped background tasks.

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// What to do when an operation is launched while its previous run is
/// still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPolicy {
    /// Keep the pending run and drop the new request.
    Ignore,
    /// Abort the pending run and start the new one.
    Supersede,
}

/// At most one running task per operation key.
///
/// Dropping the scope aborts everything it launched. Launching requires a
/// tokio runtime context.
#[derive(Default)]
pub struct TaskScope {
    tasks: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the launch was ignored.
    pub fn launch<F>(&self, key: impl Into<String>, policy: LaunchPolicy, task: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let key = key.into();
        let mut tasks = self.tasks.lock();

        if let Some(pending) = tasks.get(&key).filter(|handle| !handle.is_finished()) {
            match policy {
                LaunchPolicy::Ignore => {
                    tracing::debug!(operation = %key, "Operation already running, ignoring");
                    return false;
                }
                LaunchPolicy::Supersede => {
                    tracing::debug!(operation = %key, "Superseding running operation");
                    pending.abort();
                }
            }
        }

        tasks.retain(|_, handle| !handle.is_finished());
        tasks.insert(key, tokio::spawn(task));
        true
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks
            .lock()
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn cancel(&self, key: &str) {
        if let Some(handle) = self.tasks.lock().remove(key) {
            handle.abort();
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.get_mut().drain() {
            handle.abort();
        }
    }
}
