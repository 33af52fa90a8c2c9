//! Execution context for blocking store work.

use crate::store::reminder_store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Where repository calls run their store operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoContext {
    /// Runs each job on tokio's blocking thread pool.
    #[default]
    Blocking,
    /// Runs each job inline on the calling task. Meant for tests and
    /// single-threaded tools.
    Immediate,
}

impl IoContext {
    /// Runs `job` on this context and returns its result.
    ///
    /// # Errors
    /// - Propagates the job's own `StoreError`.
    /// - Returns `StoreError::TaskJoin` when the blocking task panics.
    pub async fn run<T, F>(self, job: F) -> StoreResult<T>
    where
        F: FnOnce() -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        match self {
            Self::Blocking => tokio::task::spawn_blocking(job)
                .await
                .map_err(|err| StoreError::TaskJoin(err.to_string()))?,
            Self::Immediate => job(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IoContext;
    use crate::store::reminder_store::StoreError;

    #[tokio::test]
    async fn both_contexts_return_job_output() {
        assert_eq!(IoContext::Immediate.run(|| Ok(3)).await.unwrap(), 3);
        assert_eq!(IoContext::Blocking.run(|| Ok(4)).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn blocking_panic_becomes_task_join_error() {
        let result: Result<(), _> = IoContext::Blocking
            .run(|| panic!("store blew up"))
            .await;
        assert!(matches!(result, Err(StoreError::TaskJoin(_))));
    }
}
