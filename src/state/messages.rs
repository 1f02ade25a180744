use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use league_api::{Deadline, Matchup, RankChange, TeamRanking, WeekSchedule};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadRankings,
    LoadSchedule,
    LoadDeadlines,
    SaveRanks { changes: Vec<RankChange> },
    SaveWriteup { id: String, writeup: String },
    SaveDeadline { deadline: Deadline },
    SaveMatchup { matchup: Matchup },
}

/// Which table a failed write was headed for. Drives the reload that
/// replaces the optimistic local state with the authoritative rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Ranks,
    Writeup,
    Deadline,
    Matchup,
}

impl SaveKind {
    /// The read that re-fetches the table this save was writing to.
    pub fn reload_request(self) -> NetworkRequest {
        match self {
            SaveKind::Ranks | SaveKind::Writeup => NetworkRequest::LoadRankings,
            SaveKind::Deadline => NetworkRequest::LoadDeadlines,
            SaveKind::Matchup => NetworkRequest::LoadSchedule,
        }
    }
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    RankingsLoaded { teams: Vec<TeamRanking> },
    ScheduleLoaded { weeks: Vec<WeekSchedule> },
    DeadlinesLoaded { deadlines: Vec<Deadline> },
    /// A write landed; local optimistic state is now authoritative.
    Saved { kind: SaveKind },
    /// A write failed after the optimistic local update. The main loop
    /// reloads the affected table rather than attempting a rollback.
    SaveFailed { kind: SaveKind, message: String },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
