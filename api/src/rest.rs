/// PostgREST raw wire types — serde shapes for the league's Supabase tables.
/// These map to our clean domain types via the free functions in client.rs.
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// power_rankings
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct RankingRow {
    pub id: String,
    pub team_name: String,
    pub rank_position: u32,
    pub writeup: Option<String>,
    pub updated_at: Option<String>,
}

/// Insert body used when seeding an empty table. The id and timestamps come
/// back from the database.
#[derive(Debug, Serialize, Clone)]
pub struct NewRankingRow {
    pub team_name: String,
    pub rank_position: u32,
    pub writeup: String,
}

#[derive(Debug, Serialize)]
pub struct RankPatch {
    pub rank_position: u32,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct WriteupPatch {
    pub writeup: String,
    pub updated_at: String,
}

// ---------------------------------------------------------------------------
// deadlines
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct DeadlineRow {
    #[serde(rename = "type")]
    pub kind: String,
    pub deadline: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeadlineUpsert {
    #[serde(rename = "type")]
    pub kind: String,
    pub deadline: Option<String>,
    pub updated_at: String,
}

// ---------------------------------------------------------------------------
// matchups
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct MatchupRow {
    pub id: String,
    pub week: u32,
    pub matchup_id: String,
    pub team1: String,
    pub team2: String,
    pub writeup: Option<String>,
    pub prediction_winner: Option<String>,
    pub prediction_margin: Option<f32>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct MatchupUpsert {
    pub week: u32,
    pub matchup_id: String,
    pub team1: String,
    pub team2: String,
    pub writeup: String,
    pub prediction_winner: Option<String>,
    pub prediction_margin: Option<f32>,
    pub updated_at: String,
}
