use crate::app::MenuItem;
use chrono::{NaiveDate, TimeZone, Utc};
use league_api::board::RankBoard;
use league_api::{Deadline, DeadlineKind, Matchup, Prediction, TeamRanking, WeekSchedule};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Rankings state
// ---------------------------------------------------------------------------

/// Input mode for the rankings tab. Browse is plain list navigation; the
/// other three capture keys until Enter/Esc.
#[derive(Debug, Default, PartialEq)]
pub enum RankingsMode {
    #[default]
    Browse,
    /// A team has been grabbed; j/k move the drop target, Enter drops.
    Grab { id: String, target: usize },
    /// Typed-rank entry, digits only.
    RankEntry { id: String, input: String },
    /// Inline write-up editor for the selected team.
    EditWriteup { id: String, input: String },
}

#[derive(Debug, Default)]
pub struct RankingsState {
    pub board: Option<RankBoard>,
    pub selected: usize,
    pub mode: RankingsMode,
}

/// One row of the rankings list as drawn: the provisional rank reflects the
/// grab preview, not yet-persisted state.
pub struct RankRow<'a> {
    pub rank: u32,
    pub team: &'a TeamRanking,
    pub selected: bool,
    pub grabbed: bool,
}

impl RankingsState {
    /// Replace the board with freshly fetched rows. Any in-progress grab or
    /// edit is abandoned; the fetched order is authoritative.
    pub fn load(&mut self, teams: Vec<TeamRanking>) {
        let board = RankBoard::new(teams);
        self.selected = self.selected.min(board.len().saturating_sub(1));
        self.mode = RankingsMode::Browse;
        self.board = Some(board);
    }

    fn len(&self) -> usize {
        self.board.as_ref().map(RankBoard::len).unwrap_or(0)
    }

    pub fn select_down(&mut self) {
        let max = self.len().saturating_sub(1);
        match &mut self.mode {
            RankingsMode::Grab { target, .. } => *target = (*target + 1).min(max),
            RankingsMode::Browse => self.selected = (self.selected + 1).min(max),
            _ => {}
        }
    }

    pub fn select_up(&mut self) {
        match &mut self.mode {
            RankingsMode::Grab { target, .. } => *target = target.saturating_sub(1),
            RankingsMode::Browse => self.selected = self.selected.saturating_sub(1),
            _ => {}
        }
    }

    pub fn begin_grab(&mut self) {
        if self.mode != RankingsMode::Browse {
            return;
        }
        if let Some(board) = &self.board
            && let Some(team) = board.get(self.selected)
        {
            self.mode = RankingsMode::Grab { id: team.id.clone(), target: self.selected };
        }
    }

    /// Finish a grab, returning (team id, drop index) for the board mutation.
    pub fn take_drop(&mut self) -> Option<(String, usize)> {
        match std::mem::take(&mut self.mode) {
            RankingsMode::Grab { id, target } => Some((id, target)),
            other => {
                self.mode = other;
                None
            }
        }
    }

    pub fn begin_rank_entry(&mut self) {
        if self.mode != RankingsMode::Browse {
            return;
        }
        if let Some(board) = &self.board
            && let Some(team) = board.get(self.selected)
        {
            self.mode = RankingsMode::RankEntry { id: team.id.clone(), input: String::new() };
        }
    }

    /// Finish typed-rank entry. Empty input cancels (returns None).
    pub fn take_rank_entry(&mut self) -> Option<(String, u32)> {
        match std::mem::take(&mut self.mode) {
            RankingsMode::RankEntry { id, input } => {
                input.parse::<u32>().ok().map(|rank| (id, rank))
            }
            other => {
                self.mode = other;
                None
            }
        }
    }

    pub fn begin_writeup_edit(&mut self) {
        if self.mode != RankingsMode::Browse {
            return;
        }
        if let Some(board) = &self.board
            && let Some(team) = board.get(self.selected)
        {
            // Seed with the current text unless it is still the placeholder.
            let input = if team.writeup == league_api::PLACEHOLDER_WRITEUP {
                String::new()
            } else {
                team.writeup.clone()
            };
            self.mode = RankingsMode::EditWriteup { id: team.id.clone(), input };
        }
    }

    pub fn take_writeup(&mut self) -> Option<(String, String)> {
        match std::mem::take(&mut self.mode) {
            RankingsMode::EditWriteup { id, input } => Some((id, input)),
            other => {
                self.mode = other;
                None
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        match &mut self.mode {
            RankingsMode::RankEntry { input, .. } => {
                if c.is_ascii_digit() && input.len() < 3 {
                    input.push(c);
                }
            }
            RankingsMode::EditWriteup { input, .. } => input.push(c),
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        match &mut self.mode {
            RankingsMode::RankEntry { input, .. }
            | RankingsMode::EditWriteup { input, .. } => {
                input.pop();
            }
            _ => {}
        }
    }

    pub fn cancel_mode(&mut self) {
        self.mode = RankingsMode::Browse;
    }

    /// Rows in draw order. During a grab the grabbed team is shown at the
    /// drop target with everyone renumbered, previewing the drop.
    pub fn display_rows(&self) -> Vec<RankRow<'_>> {
        let Some(board) = &self.board else {
            return Vec::new();
        };

        let mut order: Vec<&TeamRanking> = board.standings().iter().collect();
        let (marker_index, grabbed_id) = match &self.mode {
            RankingsMode::Grab { id, target } => {
                if let Some(from) = order.iter().position(|t| t.id == *id) {
                    let team = order.remove(from);
                    let target = (*target).min(order.len());
                    order.insert(target, team);
                    (target, Some(id.as_str()))
                } else {
                    (self.selected, None)
                }
            }
            _ => (self.selected, None),
        };

        order
            .into_iter()
            .enumerate()
            .map(|(idx, team)| RankRow {
                rank: idx as u32 + 1,
                team,
                selected: idx == marker_index,
                grabbed: grabbed_id == Some(team.id.as_str()),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Schedule state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleRow {
    Week(usize),
    Matchup(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchupField {
    Writeup,
    Prediction,
}

#[derive(Debug)]
pub struct MatchupEditor {
    pub week_idx: usize,
    pub matchup_idx: usize,
    pub field: MatchupField,
    pub input: String,
}

#[derive(Debug, Default)]
pub struct ScheduleState {
    pub weeks: Vec<WeekSchedule>,
    pub expanded: HashSet<u32>,
    pub selected: usize,
    pub editor: Option<MatchupEditor>,
}

impl ScheduleState {
    pub fn load(&mut self, weeks: Vec<WeekSchedule>) {
        self.weeks = weeks;
        self.editor = None;
        self.selected = self.selected.min(self.visible_rows().len().saturating_sub(1));
    }

    /// The flattened list the cursor moves over: week headers, with the
    /// week's matchups inlined when expanded.
    pub fn visible_rows(&self) -> Vec<ScheduleRow> {
        let mut rows = Vec::new();
        for (w, week) in self.weeks.iter().enumerate() {
            rows.push(ScheduleRow::Week(w));
            if self.expanded.contains(&week.week) {
                for m in 0..week.matchups.len() {
                    rows.push(ScheduleRow::Matchup(w, m));
                }
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<ScheduleRow> {
        self.visible_rows().get(self.selected).copied()
    }

    pub fn select_down(&mut self) {
        let max = self.visible_rows().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Enter on a week header toggles the panel open or closed.
    pub fn toggle_selected_week(&mut self) {
        let Some(ScheduleRow::Week(w)) = self.selected_row() else {
            return;
        };
        let week_no = self.weeks[w].week;
        if !self.expanded.remove(&week_no) {
            self.expanded.insert(week_no);
        }
        // Collapsing can shrink the row list out from under the cursor.
        self.selected = self.selected.min(self.visible_rows().len().saturating_sub(1));
    }

    pub fn matchup(&self, week_idx: usize, matchup_idx: usize) -> Option<&Matchup> {
        self.weeks.get(week_idx)?.matchups.get(matchup_idx)
    }

    pub fn begin_edit(&mut self, field: MatchupField) {
        let Some(ScheduleRow::Matchup(w, m)) = self.selected_row() else {
            return;
        };
        let Some(matchup) = self.matchup(w, m) else {
            return;
        };
        let input = match field {
            MatchupField::Writeup => {
                if matchup.writeup == league_api::PLACEHOLDER_MATCHUP_WRITEUP {
                    String::new()
                } else {
                    matchup.writeup.clone()
                }
            }
            MatchupField::Prediction => matchup
                .prediction
                .as_ref()
                .map(|p| format!("{} by {}", p.winner, p.margin))
                .unwrap_or_default(),
        };
        self.editor = Some(MatchupEditor { week_idx: w, matchup_idx: m, field, input });
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(editor) = &mut self.editor {
            editor.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(editor) = &mut self.editor {
            editor.input.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Apply the open editor to the local schedule and return the updated
    /// matchup for persistence. Err means the input didn't parse and the
    /// editor stays open.
    pub fn take_edit(&mut self) -> Result<Option<Matchup>, String> {
        let Some(editor) = self.editor.take() else {
            return Ok(None);
        };

        let parsed = match editor.field {
            MatchupField::Writeup => EditValue::Writeup(editor.input.trim().to_string()),
            MatchupField::Prediction => {
                let input = editor.input.trim();
                if input.is_empty() {
                    EditValue::Prediction(None)
                } else {
                    match parse_prediction(input) {
                        Some(p) => EditValue::Prediction(Some(p)),
                        None => {
                            let err = format!("Could not parse prediction: {input:?} (expected \"<team> by <margin>\")");
                            self.editor = Some(editor);
                            return Err(err);
                        }
                    }
                }
            }
        };

        let Some(matchup) = self
            .weeks
            .get_mut(editor.week_idx)
            .and_then(|w| w.matchups.get_mut(editor.matchup_idx))
        else {
            return Ok(None);
        };

        match parsed {
            EditValue::Writeup(text) => {
                matchup.writeup = if text.is_empty() {
                    league_api::PLACEHOLDER_MATCHUP_WRITEUP.to_string()
                } else {
                    text
                };
            }
            EditValue::Prediction(p) => matchup.prediction = p,
        }
        Ok(Some(matchup.clone()))
    }
}

enum EditValue {
    Writeup(String),
    Prediction(Option<Prediction>),
}

/// "Zweeg by 7.5" → winner "Zweeg", margin 7.5.
fn parse_prediction(input: &str) -> Option<Prediction> {
    let (winner, margin) = input.rsplit_once(" by ")?;
    let winner = winner.trim();
    if winner.is_empty() {
        return None;
    }
    let margin = margin.trim().parse::<f32>().ok()?;
    if !margin.is_finite() || margin < 0.0 {
        return None;
    }
    Some(Prediction { winner: winner.to_string(), margin })
}

// ---------------------------------------------------------------------------
// Deadlines state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct DeadlinesState {
    pub deadlines: Vec<Deadline>,
    pub selected: usize,
    /// Date entry buffer, YYYY-MM-DD. None when not editing.
    pub editor: Option<String>,
}

impl DeadlinesState {
    pub fn load(&mut self, deadlines: Vec<Deadline>) {
        self.deadlines = deadlines;
        self.editor = None;
        self.selected = self.selected.min(self.deadlines.len().saturating_sub(1));
    }

    pub fn select_down(&mut self) {
        let max = self.deadlines.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_deadline(&self) -> Option<&Deadline> {
        self.deadlines.get(self.selected)
    }

    pub fn begin_edit(&mut self) {
        if let Some(d) = self.selected_deadline() {
            let seed = d
                .date
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            self.editor = Some(seed);
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(input) = &mut self.editor
            && (c.is_ascii_digit() || c == '-')
            && input.len() < 10
        {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(input) = &mut self.editor {
            input.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Apply the date buffer to the selected deadline, returning the updated
    /// deadline for persistence. An empty buffer clears the date; a string
    /// that is not YYYY-MM-DD keeps the editor open.
    pub fn take_edit(&mut self) -> Result<Option<Deadline>, String> {
        let Some(input) = self.editor.take() else {
            return Ok(None);
        };
        let input = input.trim().to_string();

        let date = if input.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
                Ok(d) => {
                    let midnight = d.and_hms_opt(0, 0, 0).unwrap_or_default();
                    Some(Utc.from_utc_datetime(&midnight))
                }
                Err(_) => {
                    let err = format!("Invalid date {input:?} (expected YYYY-MM-DD)");
                    self.editor = Some(input);
                    return Err(err);
                }
            }
        };

        let Some(deadline) = self.deadlines.get_mut(self.selected) else {
            return Ok(None);
        };
        deadline.date = date;
        Ok(Some(deadline.clone()))
    }
}

// ---------------------------------------------------------------------------
// Static-content tab state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RulesState {
    pub query: String,
    pub searching: bool,
    pub scroll: u16,
}

impl RulesState {
    pub fn begin_search(&mut self) {
        self.searching = true;
        self.query.clear();
        self.scroll = 0;
    }

    pub fn push_char(&mut self, c: char) {
        if self.searching {
            self.query.push(c);
            self.scroll = 0;
        }
    }

    pub fn pop_char(&mut self) {
        if self.searching {
            self.query.pop();
        }
    }

    pub fn end_search(&mut self) {
        self.searching = false;
    }

    pub fn clear_search(&mut self) {
        self.searching = false;
        self.query.clear();
    }

    pub fn matches(&self, text: &str) -> bool {
        self.query.is_empty() || text.to_lowercase().contains(&self.query.to_lowercase())
    }
}

#[derive(Debug)]
pub struct DraftState {
    pub round: u8,
}

impl Default for DraftState {
    fn default() -> Self {
        Self { round: 1 }
    }
}

impl DraftState {
    pub fn next_round(&mut self) {
        self.round = if self.round >= crate::content::DRAFT_ROUNDS { 1 } else { self.round + 1 };
    }

    pub fn prev_round(&mut self) {
        self.round = if self.round <= 1 { crate::content::DRAFT_ROUNDS } else { self.round - 1 };
    }
}

#[derive(Debug, Default)]
pub struct HistoryState {
    pub scroll: u16,
}

#[derive(Debug, Default)]
pub struct PunishmentsState {
    pub show_sackos: bool,
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub last_error: Option<String>,
    /// Transient status line text (export confirmations, rejections).
    pub status: Option<String>,
    pub rankings: RankingsState,
    pub schedule: ScheduleState,
    pub deadlines: DeadlinesState,
    pub rules: RulesState,
    pub draft: DraftState,
    pub history: HistoryState,
    pub punishments: PunishmentsState,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.deadlines.load(DeadlinesState::placeholder());
        state
    }

    /// True while any tab holds an open text buffer; keys go to the buffer.
    /// A grab is not text entry, its keys stay with the list bindings.
    pub fn editing(&self) -> bool {
        matches!(
            self.rankings.mode,
            RankingsMode::RankEntry { .. } | RankingsMode::EditWriteup { .. }
        ) || self.schedule.editor.is_some()
            || self.deadlines.editor.is_some()
            || self.rules.searching
    }
}

impl DeadlinesState {
    /// Both kinds with no date, shown until the first fetch lands.
    pub fn placeholder() -> Vec<Deadline> {
        vec![
            Deadline { kind: DeadlineKind::Trade, date: None },
            Deadline { kind: DeadlineKind::Keeper, date: None },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, name: &str, rank: u32) -> TeamRanking {
        TeamRanking {
            id: id.to_string(),
            name: name.to_string(),
            rank,
            writeup: String::new(),
        }
    }

    fn rankings3() -> RankingsState {
        let mut state = RankingsState::default();
        state.load(vec![team("a", "A", 1), team("b", "B", 2), team("c", "C", 3)]);
        state
    }

    #[test]
    fn grab_preview_reorders_without_touching_the_board() {
        let mut state = rankings3();
        state.begin_grab(); // grabs A at index 0
        state.select_down();
        state.select_down();

        let preview: Vec<&str> = state.display_rows().iter().map(|r| r.team.name.as_str()).collect();
        assert_eq!(preview, ["B", "C", "A"]);
        // Board itself is unchanged until the drop is applied.
        let actual: Vec<&str> = state
            .board
            .as_ref()
            .unwrap()
            .standings()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(actual, ["A", "B", "C"]);

        assert_eq!(state.take_drop(), Some(("a".to_string(), 2)));
        assert_eq!(state.mode, RankingsMode::Browse);
    }

    #[test]
    fn grab_target_clamps_at_the_list_edges() {
        let mut state = rankings3();
        state.begin_grab();
        for _ in 0..10 {
            state.select_down();
        }
        assert_eq!(state.take_drop(), Some(("a".to_string(), 2)));
    }

    #[test]
    fn rank_entry_accepts_digits_only() {
        let mut state = rankings3();
        state.select_down(); // select B
        state.begin_rank_entry();
        state.push_char('x');
        state.push_char('1');
        state.push_char(' ');
        assert_eq!(state.take_rank_entry(), Some(("b".to_string(), 1)));
    }

    #[test]
    fn empty_rank_entry_is_a_cancel() {
        let mut state = rankings3();
        state.begin_rank_entry();
        assert_eq!(state.take_rank_entry(), None);
        assert_eq!(state.mode, RankingsMode::Browse);
    }

    #[test]
    fn load_abandons_an_open_grab() {
        let mut state = rankings3();
        state.begin_grab();
        state.load(vec![team("a", "A", 1), team("b", "B", 2)]);
        assert_eq!(state.mode, RankingsMode::Browse);
        assert!(state.selected <= 1);
    }

    fn schedule2() -> ScheduleState {
        let mk = |week: u32, key: &str| Matchup {
            id: format!("id-{key}"),
            matchup_key: key.to_string(),
            week,
            team1: "Zweeg".to_string(),
            team2: "Pink Sock".to_string(),
            writeup: league_api::PLACEHOLDER_MATCHUP_WRITEUP.to_string(),
            prediction: None,
        };
        let mut state = ScheduleState::default();
        state.load(vec![
            WeekSchedule { week: 1, matchups: vec![mk(1, "1-1"), mk(1, "1-2")] },
            WeekSchedule { week: 2, matchups: vec![mk(2, "2-1")] },
        ]);
        state
    }

    #[test]
    fn expanding_a_week_inlines_its_matchups() {
        let mut state = schedule2();
        assert_eq!(state.visible_rows().len(), 2);

        state.toggle_selected_week(); // expand week 1
        assert_eq!(
            state.visible_rows(),
            vec![
                ScheduleRow::Week(0),
                ScheduleRow::Matchup(0, 0),
                ScheduleRow::Matchup(0, 1),
                ScheduleRow::Week(1),
            ]
        );

        state.toggle_selected_week(); // collapse again
        assert_eq!(state.visible_rows().len(), 2);
    }

    #[test]
    fn collapsing_pulls_the_cursor_back_in_range() {
        let mut state = schedule2();
        state.toggle_selected_week();
        state.select_down();
        state.select_down();
        state.select_down(); // on Week(1)
        state.select_up();
        state.select_up();
        state.select_up(); // back on Week(0)
        state.toggle_selected_week();
        assert!(state.selected < state.visible_rows().len());
    }

    #[test]
    fn prediction_editor_round_trips_the_by_format() {
        let mut state = schedule2();
        state.toggle_selected_week();
        state.select_down(); // Matchup(0, 0)
        state.begin_edit(MatchupField::Prediction);
        for c in "Zweeg by 7.5".chars() {
            state.push_char(c);
        }
        let saved = state.take_edit().unwrap().unwrap();
        assert_eq!(
            saved.prediction,
            Some(Prediction { winner: "Zweeg".to_string(), margin: 7.5 })
        );

        // Reopening seeds the buffer from the stored prediction.
        state.begin_edit(MatchupField::Prediction);
        assert_eq!(state.editor.as_ref().unwrap().input, "Zweeg by 7.5");
    }

    #[test]
    fn bad_prediction_input_keeps_the_editor_open() {
        let mut state = schedule2();
        state.toggle_selected_week();
        state.select_down();
        state.begin_edit(MatchupField::Prediction);
        for c in "no margin here".chars() {
            state.push_char(c);
        }
        assert!(state.take_edit().is_err());
        assert!(state.editor.is_some());
    }

    #[test]
    fn clearing_a_writeup_restores_the_placeholder() {
        let mut state = schedule2();
        state.toggle_selected_week();
        state.select_down();
        state.begin_edit(MatchupField::Writeup);
        let saved = state.take_edit().unwrap().unwrap();
        assert_eq!(saved.writeup, league_api::PLACEHOLDER_MATCHUP_WRITEUP);
    }

    #[test]
    fn deadline_editor_parses_dates_and_clears_on_empty() {
        let mut state = DeadlinesState::default();
        state.load(DeadlinesState::placeholder());

        state.begin_edit();
        for c in "2025-11-18".chars() {
            state.push_char(c);
        }
        let saved = state.take_edit().unwrap().unwrap();
        assert_eq!(saved.kind, DeadlineKind::Trade);
        assert_eq!(
            saved.date.unwrap().format("%Y-%m-%d").to_string(),
            "2025-11-18"
        );

        state.begin_edit();
        for _ in 0..10 {
            state.pop_char();
        }
        let cleared = state.take_edit().unwrap().unwrap();
        assert!(cleared.date.is_none());
    }

    #[test]
    fn deadline_editor_rejects_garbage_dates() {
        let mut state = DeadlinesState::default();
        state.load(DeadlinesState::placeholder());
        state.begin_edit();
        for c in "2025-13-99".chars() {
            state.push_char(c);
        }
        assert!(state.take_edit().is_err());
        assert!(state.editor.is_some());
    }

    #[test]
    fn rules_search_is_case_insensitive() {
        let mut state = RulesState::default();
        state.begin_search();
        for c in "faab".chars() {
            state.push_char(c);
        }
        assert!(state.matches("FAAB (Free Agent Acquisition Budget) system"));
        assert!(!state.matches("Snake draft with randomized order"));
        state.clear_search();
        assert!(state.matches("anything"));
    }

    #[test]
    fn draft_round_cycling_wraps() {
        let mut state = DraftState::default();
        state.prev_round();
        assert_eq!(state.round, crate::content::DRAFT_ROUNDS);
        state.next_round();
        assert_eq!(state.round, 1);
    }
}
