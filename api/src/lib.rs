pub mod board;
pub mod client;
pub mod rest;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the PostgREST wire format
// ---------------------------------------------------------------------------

/// One team in the power rankings. `rank` is 1-based and dense: across the
/// whole board the ranks are always exactly 1..=N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRanking {
    pub id: String,
    pub name: String,
    pub rank: u32,
    pub writeup: String,
}

/// A single changed (row id, new rank) pair produced by a board mutation.
/// Only these rows are written back to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankChange {
    pub id: String,
    pub rank: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineKind {
    Trade,
    Keeper,
}

impl DeadlineKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeadlineKind::Trade => "Trade Deadline",
            DeadlineKind::Keeper => "Keeper Deadline",
        }
    }

    /// Value stored in the `type` column of the deadlines table.
    pub fn column_value(&self) -> &'static str {
        match self {
            DeadlineKind::Trade => "trade",
            DeadlineKind::Keeper => "keeper",
        }
    }

    pub fn from_column_value(s: &str) -> Option<Self> {
        match s {
            "trade" => Some(DeadlineKind::Trade),
            "keeper" => Some(DeadlineKind::Keeper),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deadline {
    pub kind: DeadlineKind,
    pub date: Option<DateTime<Utc>>, // None = not set yet
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub winner: String,
    pub margin: f32,
}

/// One weekly head-to-head matchup with the commissioner's write-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    /// Row id assigned by storage; empty until the row has been persisted.
    pub id: String,
    /// Stable logical key, "{week}-{slot}". Upserts are keyed on this.
    pub matchup_key: String,
    pub week: u32,
    pub team1: String,
    pub team2: String,
    pub writeup: String,
    pub prediction: Option<Prediction>,
}

#[derive(Debug, Clone, Default)]
pub struct WeekSchedule {
    pub week: u32,
    pub matchups: Vec<Matchup>,
}

/// Group a flat matchup list into per-week buckets, ascending by week.
/// Within a week, matchups keep their matchup_key order.
pub fn group_by_week(mut matchups: Vec<Matchup>) -> Vec<WeekSchedule> {
    matchups.sort_by(|a, b| {
        a.week
            .cmp(&b.week)
            .then_with(|| a.matchup_key.cmp(&b.matchup_key))
    });

    let mut weeks: Vec<WeekSchedule> = Vec::new();
    for m in matchups {
        match weeks.last_mut() {
            Some(w) if w.week == m.week => w.matchups.push(m),
            _ => weeks.push(WeekSchedule { week: m.week, matchups: vec![m] }),
        }
    }
    weeks
}

// ---------------------------------------------------------------------------
// League constants — the 12 fixed franchises and the regular season shape
// ---------------------------------------------------------------------------

pub const DEFAULT_TEAMS: [&str; 12] = [
    "The Silverbacks",
    "Team Gone Jawnson",
    "Pink Sock",
    "The Pancake Football Team",
    "Zweeg",
    "Maui Mooseknuckles",
    "NJ Old School",
    "Central Saudi Scammers",
    "Jersey Shore Supplements",
    "Calamari Ballsrings",
    "Sonalika Scorchers",
    "Maine Course",
];

pub const PLACEHOLDER_WRITEUP: &str =
    "Click edit to add power ranking analysis for this team...";
pub const PLACEHOLDER_MATCHUP_WRITEUP: &str =
    "Click edit to add commissioner analysis for this matchup...";

pub const WEEK_COUNT: u32 = 13;
pub const MATCHUPS_PER_WEEK: usize = 6;

/// The full regular-season schedule as (team1, team2) name pairs per week.
/// Index 0 is week 1. Six matchups per week over the 12 franchises.
pub const WEEK_PAIRINGS: [[(&str, &str); MATCHUPS_PER_WEEK]; WEEK_COUNT as usize] = [
    // Week 1
    [
        ("Team Gone Jawnson", "Jersey Shore Supplements"),
        ("Maui Mooseknuckles", "NJ Old School"),
        ("The Silverbacks", "Calamari Ballsrings"),
        ("The Pancake Football Team", "Zweeg"),
        ("Pink Sock", "Sonalika Scorchers"),
        ("Maine Course", "Central Saudi Scammers"),
    ],
    // Week 2
    [
        ("Team Gone Jawnson", "NJ Old School"),
        ("Jersey Shore Supplements", "Calamari Ballsrings"),
        ("Maui Mooseknuckles", "Zweeg"),
        ("The Silverbacks", "Sonalika Scorchers"),
        ("The Pancake Football Team", "Pink Sock"),
        ("Central Saudi Scammers", "Maine Course"),
    ],
    // Week 3
    [
        ("The Silverbacks", "Jersey Shore Supplements"),
        ("Central Saudi Scammers", "Sonalika Scorchers"),
        ("Zweeg", "Maine Course"),
        ("Pink Sock", "Calamari Ballsrings"),
        ("Team Gone Jawnson", "Maui Mooseknuckles"),
        ("The Pancake Football Team", "NJ Old School"),
    ],
    // Week 4
    [
        ("Pink Sock", "Maui Mooseknuckles"),
        ("Jersey Shore Supplements", "Maine Course"),
        ("The Silverbacks", "The Pancake Football Team"),
        ("Calamari Ballsrings", "Sonalika Scorchers"),
        ("NJ Old School", "Central Saudi Scammers"),
        ("Zweeg", "Team Gone Jawnson"),
    ],
    // Week 5
    [
        ("Calamari Ballsrings", "Maine Course"),
        ("Pink Sock", "NJ Old School"),
        ("The Silverbacks", "Maui Mooseknuckles"),
        ("The Pancake Football Team", "Jersey Shore Supplements"),
        ("Sonalika Scorchers", "Team Gone Jawnson"),
        ("Central Saudi Scammers", "Zweeg"),
    ],
    // Week 6
    [
        ("Calamari Ballsrings", "The Pancake Football Team"),
        ("Team Gone Jawnson", "Central Saudi Scammers"),
        ("Maine Course", "Sonalika Scorchers"),
        ("Pink Sock", "Zweeg"),
        ("NJ Old School", "The Silverbacks"),
        ("Maui Mooseknuckles", "Jersey Shore Supplements"),
    ],
    // Week 7
    [
        ("The Silverbacks", "Zweeg"),
        ("Calamari Ballsrings", "Maui Mooseknuckles"),
        ("The Pancake Football Team", "Sonalika Scorchers"),
        ("Team Gone Jawnson", "Maine Course"),
        ("Central Saudi Scammers", "Pink Sock"),
        ("NJ Old School", "Jersey Shore Supplements"),
    ],
    // Week 8
    [
        ("The Silverbacks", "Central Saudi Scammers"),
        ("Maine Course", "The Pancake Football Team"),
        ("NJ Old School", "Calamari Ballsrings"),
        ("Pink Sock", "Team Gone Jawnson"),
        ("Sonalika Scorchers", "Maui Mooseknuckles"),
        ("Zweeg", "Jersey Shore Supplements"),
    ],
    // Week 9
    [
        ("Jersey Shore Supplements", "Central Saudi Scammers"),
        ("Team Gone Jawnson", "The Pancake Football Team"),
        ("Maui Mooseknuckles", "Maine Course"),
        ("Calamari Ballsrings", "Zweeg"),
        ("NJ Old School", "Sonalika Scorchers"),
        ("Pink Sock", "The Silverbacks"),
    ],
    // Week 10
    [
        ("Team Gone Jawnson", "The Silverbacks"),
        ("Jersey Shore Supplements", "Pink Sock"),
        ("Central Saudi Scammers", "Calamari Ballsrings"),
        ("Maine Course", "NJ Old School"),
        ("Zweeg", "Sonalika Scorchers"),
        ("Maui Mooseknuckles", "The Pancake Football Team"),
    ],
    // Week 11
    [
        ("Jersey Shore Supplements", "Sonalika Scorchers"),
        ("Calamari Ballsrings", "Team Gone Jawnson"),
        ("NJ Old School", "Zweeg"),
        ("Pink Sock", "The Pancake Football Team"),
        ("Central Saudi Scammers", "Maui Mooseknuckles"),
        ("The Silverbacks", "Maine Course"),
    ],
    // Week 12
    [
        ("Team Gone Jawnson", "Jersey Shore Supplements"),
        ("Maui Mooseknuckles", "NJ Old School"),
        ("The Silverbacks", "Calamari Ballsrings"),
        ("The Pancake Football Team", "Zweeg"),
        ("Pink Sock", "Sonalika Scorchers"),
        ("Maine Course", "Central Saudi Scammers"),
    ],
    // Week 13
    [
        ("Team Gone Jawnson", "NJ Old School"),
        ("Jersey Shore Supplements", "Calamari Ballsrings"),
        ("Maui Mooseknuckles", "Zweeg"),
        ("The Silverbacks", "Sonalika Scorchers"),
        ("The Pancake Football Team", "Central Saudi Scammers"),
        ("Pink Sock", "Maine Course"),
    ],
];

/// Build the unsaved default schedule: every week's pairings with the
/// placeholder write-up and no prediction.
pub fn default_schedule() -> Vec<Matchup> {
    let mut out = Vec::with_capacity(WEEK_COUNT as usize * MATCHUPS_PER_WEEK);
    for (week_idx, pairings) in WEEK_PAIRINGS.iter().enumerate() {
        let week = week_idx as u32 + 1;
        for (slot, (team1, team2)) in pairings.iter().enumerate() {
            out.push(Matchup {
                id: String::new(),
                matchup_key: format!("{week}-{}", slot + 1),
                week,
                team1: (*team1).to_string(),
                team2: (*team2).to_string(),
                writeup: PLACEHOLDER_MATCHUP_WRITEUP.to_string(),
                prediction: None,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_covers_every_week() {
        let weeks = group_by_week(default_schedule());
        assert_eq!(weeks.len(), WEEK_COUNT as usize);
        for (idx, week) in weeks.iter().enumerate() {
            assert_eq!(week.week, idx as u32 + 1);
            assert_eq!(week.matchups.len(), MATCHUPS_PER_WEEK);
        }
    }

    #[test]
    fn every_team_plays_once_per_week() {
        for (week_idx, pairings) in WEEK_PAIRINGS.iter().enumerate() {
            let mut seen: Vec<&str> = pairings
                .iter()
                .flat_map(|(a, b)| [*a, *b])
                .collect();
            seen.sort_unstable();
            let mut expected: Vec<&str> = DEFAULT_TEAMS.to_vec();
            expected.sort_unstable();
            assert_eq!(seen, expected, "week {} roster mismatch", week_idx + 1);
        }
    }

    #[test]
    fn group_by_week_sorts_weeks_ascending() {
        let mut matchups = default_schedule();
        matchups.reverse();
        let weeks = group_by_week(matchups);
        let order: Vec<u32> = weeks.iter().map(|w| w.week).collect();
        assert_eq!(order, (1..=WEEK_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn deadline_kind_column_round_trip() {
        assert_eq!(
            DeadlineKind::from_column_value(DeadlineKind::Trade.column_value()),
            Some(DeadlineKind::Trade)
        );
        assert_eq!(
            DeadlineKind::from_column_value(DeadlineKind::Keeper.column_value()),
            Some(DeadlineKind::Keeper)
        );
        assert_eq!(DeadlineKind::from_column_value("waiver"), None);
    }
}
