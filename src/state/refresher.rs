use crate::state::messages::NetworkRequest;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Periodic rankings re-fetch — every five minutes. Another league member
/// may have reordered the board from their own session; last write wins and
/// the refresh keeps this one caught up.
pub struct PeriodicRefresher {
    network_requests: mpsc::Sender<NetworkRequest>,
}

impl PeriodicRefresher {
    pub fn new(network_requests: mpsc::Sender<NetworkRequest>) -> Self {
        Self { network_requests }
    }

    pub async fn run(self) {
        let mut rankings_interval = interval(Duration::from_secs(300));
        // Skip the immediate first tick so startup loading isn't double-triggered.
        rankings_interval.tick().await;

        loop {
            rankings_interval.tick().await;
            let _ = self
                .network_requests
                .send(NetworkRequest::LoadRankings)
                .await;
        }
    }
}
