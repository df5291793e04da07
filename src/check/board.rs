//! Per-endpoint status map.
//!
//! One entry per endpoint id, moving through idle → loading → success or
//! failure. Updates are serialized per key by taking the write lock for the
//! whole test-and-set, which is what suppresses duplicate checks: a check
//! for an endpoint already `loading` must not dispatch a second request.

use super::types::{CheckResult, EndpointState, ProbeState};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct StatusBoard {
    inner: Arc<RwLock<HashMap<String, EndpointState>>>,
}

impl StatusBoard {
    /// Creates a board with every known endpoint id seeded as `idle`.
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        let entries = ids.into_iter().map(|id| (id, EndpointState::idle()));
        Self {
            inner: Arc::new(RwLock::new(entries.collect())),
        }
    }

    /// Marks `id` as loading. Returns false without touching the entry when
    /// a check for that id is already in flight.
    pub async fn begin(&self, id: &str) -> bool {
        let mut map = self.inner.write().await;
        match map.get(id) {
            Some(state) if state.status == ProbeState::Loading => false,
            _ => {
                map.insert(id.to_string(), EndpointState::loading());
                true
            }
        }
    }

    /// Records the outcome of a finished check.
    pub async fn finish(&self, id: &str, result: &CheckResult) {
        let mut map = self.inner.write().await;
        map.insert(id.to_string(), EndpointState::from(result));
    }

    /// Current state of every endpoint, for the status API.
    pub async fn snapshot(&self) -> HashMap<String, EndpointState> {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_board_is_idle() {
        let board = StatusBoard::new(["a".to_string(), "b".to_string()]);
        let snapshot = board.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["a"].status, ProbeState::Idle);
        assert_eq!(snapshot["b"].status, ProbeState::Idle);
    }

    #[tokio::test]
    async fn test_begin_suppresses_duplicates() {
        let board = StatusBoard::new(["a".to_string()]);

        assert!(board.begin("a").await);
        // Second begin while loading is a no-op
        assert!(!board.begin("a").await);

        let result = CheckResult::success("ok".to_string(), 1);
        board.finish("a", &result).await;
        assert_eq!(board.snapshot().await["a"].status, ProbeState::Success);

        // Once settled, a new check may start
        assert!(board.begin("a").await);
    }

    #[tokio::test]
    async fn test_finish_overwrites_prior_state() {
        let board = StatusBoard::new(["a".to_string()]);
        board.begin("a").await;
        board
            .finish("a", &CheckResult::failure("Timeout".to_string(), 5000))
            .await;

        let snapshot = board.snapshot().await;
        assert_eq!(snapshot["a"].status, ProbeState::Failure);
        assert_eq!(snapshot["a"].message.as_deref(), Some("Timeout"));

        board.begin("a").await;
        board
            .finish("a", &CheckResult::success("{}".to_string(), 10))
            .await;
        assert_eq!(board.snapshot().await["a"].status, ProbeState::Success);
    }

    #[tokio::test]
    async fn test_unknown_id_can_begin() {
        // Ids outside the seeded set are still tracked once checked
        let board = StatusBoard::default();
        assert!(board.begin("late").await);
        assert!(!board.begin("late").await);
    }
}
