use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, MatchupField};
use chrono::Local;
use league_api::{Deadline, Matchup, RankChange, TeamRanking, WeekSchedule};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Rankings,
    Schedule,
    Deadlines,
    Rules,
    Draft,
    History,
    Punishments,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let app = Self {
            state: AppState::new(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_rankings_loaded(&mut self, teams: Vec<TeamRanking>) {
        self.state.last_error = None;
        self.state.rankings.load(teams);
    }

    pub fn on_schedule_loaded(&mut self, weeks: Vec<WeekSchedule>) {
        self.state.last_error = None;
        self.state.schedule.load(weeks);
    }

    pub fn on_deadlines_loaded(&mut self, deadlines: Vec<Deadline>) {
        self.state.last_error = None;
        self.state.deadlines.load(deadlines);
    }

    pub fn on_save_failed(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        self.state.status = None;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Rankings — grab, typed rank, write-up
    // -----------------------------------------------------------------------

    /// Drop the grabbed team at its target slot. Returns the renumbered rows
    /// for persistence; None means nothing changed.
    pub fn rankings_drop(&mut self) -> Option<Vec<RankChange>> {
        let (id, target) = self.state.rankings.take_drop()?;
        let board = self.state.rankings.board.as_mut()?;
        match board.move_to_position(&id, target) {
            Ok(changes) if changes.is_empty() => None,
            Ok(changes) => Some(changes),
            Err(e) => {
                self.state.last_error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply a typed rank to the selected team. A rank outside 1..=N is
    /// rejected with the board untouched.
    pub fn rankings_submit_rank(&mut self) -> Option<Vec<RankChange>> {
        let (id, rank) = self.state.rankings.take_rank_entry()?;
        let board = self.state.rankings.board.as_mut()?;
        match board.move_to_rank(&id, rank) {
            Ok(changes) if changes.is_empty() => None,
            Ok(changes) => {
                if let Some(pos) = board.position_of(&id) {
                    self.state.rankings.selected = pos;
                }
                Some(changes)
            }
            Err(e) => {
                self.state.status = Some(e.to_string());
                None
            }
        }
    }

    /// Commit the write-up editor locally and return (id, text) to persist.
    pub fn rankings_submit_writeup(&mut self) -> Option<(String, String)> {
        let (id, input) = self.state.rankings.take_writeup()?;
        let text = if input.trim().is_empty() {
            league_api::PLACEHOLDER_WRITEUP.to_string()
        } else {
            input.trim().to_string()
        };
        let board = self.state.rankings.board.as_mut()?;
        if let Err(e) = board.set_writeup(&id, &text) {
            self.state.last_error = Some(e.to_string());
            return None;
        }
        Some((id, text))
    }

    // -----------------------------------------------------------------------
    // Schedule and deadline editors
    // -----------------------------------------------------------------------

    pub fn schedule_begin_edit(&mut self, field: MatchupField) {
        self.state.schedule.begin_edit(field);
    }

    pub fn schedule_submit_edit(&mut self) -> Option<Matchup> {
        match self.state.schedule.take_edit() {
            Ok(updated) => updated,
            Err(message) => {
                self.state.status = Some(message);
                None
            }
        }
    }

    pub fn deadline_submit_edit(&mut self) -> Option<Deadline> {
        match self.state.deadlines.take_edit() {
            Ok(updated) => updated,
            Err(message) => {
                self.state.status = Some(message);
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Standings export
    // -----------------------------------------------------------------------

    pub fn export_standings(&mut self) {
        let Some(board) = self.state.rankings.board.as_ref() else {
            self.state.status = Some("Nothing to export yet".to_string());
            return;
        };
        let path = standings_path();
        match write_standings_file(&path, board.standings()) {
            Ok(()) => {
                self.state.status = Some(format!("Standings written to {}", path.display()));
            }
            Err(e) => self.state.last_error = Some(e),
        }
    }
}

fn write_standings_file(path: &PathBuf, standings: &[TeamRanking]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| format!("create dir failed: {e}"))?;
    }
    let payload = serde_json::to_string_pretty(standings)
        .map_err(|e| format!("serialize standings failed: {e}"))?;
    std::fs::write(path, payload).map_err(|e| format!("write standings failed: {e}"))?;
    Ok(())
}

fn standings_path() -> PathBuf {
    let file_name = format!("standings_{}.json", Local::now().format("%Y-%m-%d"));
    if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME")
        && !config_dir.trim().is_empty()
    {
        return PathBuf::from(config_dir).join("leaguetui").join(file_name);
    }
    if let Ok(home) = std::env::var("HOME")
        && !home.trim().is_empty()
    {
        return PathBuf::from(home)
            .join(".config")
            .join("leaguetui")
            .join(file_name);
    }
    PathBuf::from(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_api::TeamRanking;

    fn app_with_board() -> App {
        let mut app = App::new();
        app.on_rankings_loaded(vec![
            TeamRanking { id: "a".into(), name: "A".into(), rank: 1, writeup: String::new() },
            TeamRanking { id: "b".into(), name: "B".into(), rank: 2, writeup: String::new() },
            TeamRanking { id: "c".into(), name: "C".into(), rank: 3, writeup: String::new() },
        ]);
        app
    }

    #[test]
    fn dropping_a_grab_returns_the_renumbered_rows() {
        let mut app = app_with_board();
        app.state.rankings.begin_grab();
        app.state.rankings.select_down();
        app.state.rankings.select_down();

        let changes = app.rankings_drop().unwrap();
        let ids: Vec<&str> = changes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn dropping_in_place_saves_nothing() {
        let mut app = app_with_board();
        app.state.rankings.begin_grab();
        assert!(app.rankings_drop().is_none());
    }

    #[test]
    fn a_rank_past_the_bottom_is_rejected_in_place() {
        let mut app = app_with_board();
        app.state.rankings.begin_rank_entry();
        app.state.rankings.push_char('9');
        assert!(app.rankings_submit_rank().is_none());
        assert!(app.state.status.is_some());

        let order: Vec<&str> = app
            .state
            .rankings
            .board
            .as_ref()
            .unwrap()
            .standings()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn typed_rank_moves_selection_with_the_team() {
        let mut app = app_with_board();
        app.state.rankings.select_down();
        app.state.rankings.select_down(); // select c
        app.state.rankings.begin_rank_entry();
        app.state.rankings.push_char('1');

        let changes = app.rankings_submit_rank().unwrap();
        assert_eq!(changes.len(), 3);
        assert_eq!(app.state.rankings.selected, 0);
    }

    #[test]
    fn clearing_a_writeup_stores_the_placeholder() {
        let mut app = app_with_board();
        app.state.rankings.begin_writeup_edit();
        let (id, text) = app.rankings_submit_writeup().unwrap();
        assert_eq!(id, "a");
        assert_eq!(text, league_api::PLACEHOLDER_WRITEUP);
    }

    #[test]
    fn help_returns_to_the_previous_tab() {
        let mut app = App::new();
        app.update_tab(MenuItem::Draft);
        app.update_tab(MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Draft);
    }
}
