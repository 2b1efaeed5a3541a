//! Published scheduling decision.

use std::sync::Arc;

use tokio::sync::RwLock;

use wattgrid_core::{DecisionSnapshot, EndpointDecision};

/// The decision cell shared between the agent and request-serving
/// readers.
///
/// Readers clone an `Arc` to the current snapshot under a shared lock;
/// the agent replaces the snapshot wholesale under a brief exclusive
/// lock. A reader therefore never observes variants from two different
/// scheduling cycles, and a snapshot it holds stays valid after the
/// next publish.
#[derive(Debug, Default)]
pub struct DecisionBoard {
    current: RwLock<Arc<DecisionSnapshot>>,
}

impl DecisionBoard {
    pub fn new(initial: DecisionSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The current snapshot, as one consistent unit.
    pub async fn snapshot(&self) -> Arc<DecisionSnapshot> {
        Arc::clone(&*self.current.read().await)
    }

    /// Decision for one endpoint, if any applies.
    ///
    /// `None` means the routing layer passes the request through
    /// unmodified.
    pub async fn endpoint(&self, name: &str) -> Option<EndpointDecision> {
        self.current.read().await.get(name).cloned()
    }

    /// Replace the published snapshot in full.
    pub async fn publish(&self, next: DecisionSnapshot) {
        *self.current.write().await = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wattgrid_core::{ClassDecision, ParameterSet, TrafficClass};

    fn snapshot_with(endpoint: &str, savings: f64) -> DecisionSnapshot {
        let class = ClassDecision {
            parameters: ParameterSet::default(),
            expected_savings: savings,
            expected_draw: 0.0,
        };
        let mut snapshot = DecisionSnapshot::new();
        snapshot.insert(
            endpoint.to_string(),
            EndpointDecision::new([class.clone(), class.clone(), class]),
        );
        snapshot
    }

    #[tokio::test]
    async fn publish_replaces_the_snapshot_in_full() {
        let board = DecisionBoard::new(snapshot_with("/old", 1.0));
        assert!(board.endpoint("/old").await.is_some());

        board.publish(snapshot_with("/new", 2.0)).await;
        assert!(board.endpoint("/old").await.is_none());
        let new = board.endpoint("/new").await.unwrap();
        assert_eq!(new.for_class(TrafficClass::Sustained).expected_savings, 2.0);
    }

    #[tokio::test]
    async fn held_snapshot_survives_a_publish() {
        let board = DecisionBoard::new(snapshot_with("/api", 1.0));
        let held = board.snapshot().await;

        board.publish(snapshot_with("/api", 9.0)).await;

        // The reader's copy is the cycle it started with.
        assert_eq!(
            held["/api"].for_class(TrafficClass::Balanced).expected_savings,
            1.0
        );
        let fresh = board.snapshot().await;
        assert_eq!(
            fresh["/api"].for_class(TrafficClass::Balanced).expected_savings,
            9.0
        );
    }

    #[tokio::test]
    async fn unknown_endpoint_has_no_decision() {
        let board = DecisionBoard::default();
        assert!(board.endpoint("/anything").await.is_none());
    }
}
