use crate::state::messages::{NetworkRequest, NetworkResponse, SaveKind};
use league_api::client::{ApiError, LeagueApi};
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Serial request worker. One request at a time, so at most one write is
/// ever in flight against the table store.
pub struct NetworkWorker {
    client: LeagueApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        client: LeagueApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let save_kind = save_kind(&request);
            let result = match request {
                NetworkRequest::LoadRankings => self.handle_load_rankings().await,
                NetworkRequest::LoadSchedule => self.handle_load_schedule().await,
                NetworkRequest::LoadDeadlines => self.handle_load_deadlines().await,
                NetworkRequest::SaveRanks { changes } => self.handle_save_ranks(changes).await,
                NetworkRequest::SaveWriteup { id, writeup } => {
                    self.handle_save_writeup(id, writeup).await
                }
                NetworkRequest::SaveDeadline { deadline } => {
                    self.handle_save_deadline(deadline).await
                }
                NetworkRequest::SaveMatchup { matchup } => {
                    self.handle_save_matchup(matchup).await
                }
            };

            debug!("network request complete");
            self.stop_loading_animation(result.is_ok()).await;

            let response = result.unwrap_or_else(|err| match save_kind {
                Some(kind) => NetworkResponse::SaveFailed { kind, message: err.to_string() },
                None => NetworkResponse::Error { message: err.to_string() },
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_rankings(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading power rankings");
        let teams = self.client.fetch_power_rankings().await?;
        Ok(NetworkResponse::RankingsLoaded { teams })
    }

    async fn handle_load_schedule(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading weekly schedule");
        let weeks = self.client.fetch_schedule().await?;
        Ok(NetworkResponse::ScheduleLoaded { weeks })
    }

    async fn handle_load_deadlines(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading deadlines");
        let deadlines = self.client.fetch_deadlines().await?;
        Ok(NetworkResponse::DeadlinesLoaded { deadlines })
    }

    async fn handle_save_ranks(
        &self,
        changes: Vec<league_api::RankChange>,
    ) -> Result<NetworkResponse, ApiError> {
        debug!("saving {} rank changes", changes.len());
        self.client.save_rank_changes(&changes).await?;
        Ok(NetworkResponse::Saved { kind: SaveKind::Ranks })
    }

    async fn handle_save_writeup(
        &self,
        id: String,
        writeup: String,
    ) -> Result<NetworkResponse, ApiError> {
        debug!("saving writeup for {id}");
        self.client.save_writeup(&id, &writeup).await?;
        Ok(NetworkResponse::Saved { kind: SaveKind::Writeup })
    }

    async fn handle_save_deadline(
        &self,
        deadline: league_api::Deadline,
    ) -> Result<NetworkResponse, ApiError> {
        debug!("saving {} deadline", deadline.kind.column_value());
        self.client.save_deadline(&deadline).await?;
        Ok(NetworkResponse::Saved { kind: SaveKind::Deadline })
    }

    async fn handle_save_matchup(
        &self,
        matchup: league_api::Matchup,
    ) -> Result<NetworkResponse, ApiError> {
        debug!("saving matchup {}", matchup.matchup_key);
        self.client.save_matchup(&matchup).await?;
        Ok(NetworkResponse::Saved { kind: SaveKind::Matchup })
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}

fn save_kind(request: &NetworkRequest) -> Option<SaveKind> {
    match request {
        NetworkRequest::SaveRanks { .. } => Some(SaveKind::Ranks),
        NetworkRequest::SaveWriteup { .. } => Some(SaveKind::Writeup),
        NetworkRequest::SaveDeadline { .. } => Some(SaveKind::Deadline),
        NetworkRequest::SaveMatchup { .. } => Some(SaveKind::Matchup),
        NetworkRequest::LoadRankings
        | NetworkRequest::LoadSchedule
        | NetworkRequest::LoadDeadlines => None,
    }
}
