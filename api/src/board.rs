use crate::{RankChange, TeamRanking};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    NotFound(String),
    OutOfRange { rank: u32, len: usize },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::NotFound(id) => write!(f, "No team with id {id}"),
            RankError::OutOfRange { rank, len } => {
                write!(f, "Rank {rank} is out of range (valid: 1-{len})")
            }
        }
    }
}

impl std::error::Error for RankError {}

/// The ordered power rankings. Invariant: the ranks of the held teams are
/// always exactly 1..=N with no gaps or duplicates, and the backing Vec is
/// kept sorted by rank, so index i holds the team ranked i+1.
#[derive(Debug, Clone, Default)]
pub struct RankBoard {
    teams: Vec<TeamRanking>,
}

impl RankBoard {
    pub fn new(mut teams: Vec<TeamRanking>) -> Self {
        teams.sort_by_key(|t| t.rank);
        let mut board = Self { teams };
        board.renumber();
        board
    }

    /// Current order, ascending by rank.
    pub fn standings(&self) -> &[TeamRanking] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TeamRanking> {
        self.teams.get(index)
    }

    pub fn team(&self, id: &str) -> Option<&TeamRanking> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// 0-based index of a team in the rank order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.id == id)
    }

    pub fn set_writeup(&mut self, id: &str, writeup: &str) -> Result<(), RankError> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RankError::NotFound(id.to_string()))?;
        team.writeup = writeup.to_string();
        Ok(())
    }

    /// Drop the team at a 0-based target index. The index is clamped to the
    /// board; the team is removed from the order and reinserted at the target
    /// (stable splice), then everyone is renumbered to index + 1.
    ///
    /// Returns only the (id, rank) pairs that changed. A drop on the team's
    /// current slot is a no-op and returns an empty set.
    pub fn move_to_position(
        &mut self,
        id: &str,
        target_index: usize,
    ) -> Result<Vec<RankChange>, RankError> {
        let from = self
            .position_of(id)
            .ok_or_else(|| RankError::NotFound(id.to_string()))?;
        let target = target_index.min(self.teams.len() - 1);
        if target == from {
            return Ok(Vec::new());
        }

        let team = self.teams.remove(from);
        self.teams.insert(target, team);
        Ok(self.renumber())
    }

    /// Typed rank entry, 1-based. Ranks outside 1..=N are rejected before any
    /// mutation; valid ranks delegate to the splice in `move_to_position`.
    pub fn move_to_rank(&mut self, id: &str, new_rank: u32) -> Result<Vec<RankChange>, RankError> {
        if new_rank == 0 || new_rank as usize > self.teams.len() {
            return Err(RankError::OutOfRange { rank: new_rank, len: self.teams.len() });
        }
        self.move_to_position(id, new_rank as usize - 1)
    }

    fn renumber(&mut self) -> Vec<RankChange> {
        let mut changes = Vec::new();
        for (idx, team) in self.teams.iter_mut().enumerate() {
            let rank = idx as u32 + 1;
            if team.rank != rank {
                team.rank = rank;
                changes.push(RankChange { id: team.id.clone(), rank });
            }
        }
        changes
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

    /// [A:1, B:2, C:3, D:4, E:5]
    fn board5() -> RankBoard {
        RankBoard::new(vec![
            team("a", "A", 1),
            team("b", "B", 2),
            team("c", "C", 3),
            team("d", "D", 4),
            team("e", "E", 5),
        ])
    }

    fn order(board: &RankBoard) -> Vec<&str> {
        board.standings().iter().map(|t| t.name.as_str()).collect()
    }

    fn assert_dense(board: &RankBoard) {
        let ranks: Vec<u32> = board.standings().iter().map(|t| t.rank).collect();
        let expected: Vec<u32> = (1..=board.len() as u32).collect();
        assert_eq!(ranks, expected, "ranks must be exactly 1..=N in order");
    }

    #[test]
    fn move_to_rank_promotes_last_to_first() {
        let mut board = board5();
        let changes = board.move_to_rank("e", 1).unwrap();
        assert_eq!(order(&board), ["E", "A", "B", "C", "D"]);
        assert_dense(&board);
        // Every team shifted, so all five rows changed.
        assert_eq!(changes.len(), 5);
    }

    #[test]
    fn move_to_position_demotes_toward_the_back() {
        let mut board = board5();
        board.move_to_position("b", 4).unwrap();
        assert_eq!(order(&board), ["A", "C", "D", "E", "B"]);
        assert_dense(&board);
    }

    #[test]
    fn changed_rows_exclude_untouched_teams() {
        let mut board = board5();
        // C to the front: A and B shift down, D and E stay put.
        let changes = board.move_to_position("c", 0).unwrap();
        let ids: Vec<&str> = changes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_dense(&board);
    }

    #[test]
    fn no_op_move_returns_no_changes() {
        let mut board = board5();
        let before = board.standings().to_vec();
        assert!(board.move_to_position("c", 2).unwrap().is_empty());
        assert!(board.move_to_rank("c", 3).unwrap().is_empty());
        assert_eq!(board.standings(), before.as_slice());
    }

    #[test]
    fn entry_points_are_equivalent() {
        // move_to_position(id, p) and move_to_rank(id, p + 1) agree for every
        // team and every slot on the board.
        let ids = ["a", "b", "c", "d", "e"];
        for id in ids {
            for p in 0..5usize {
                let mut by_position = board5();
                let mut by_rank = board5();
                let pos_changes = by_position.move_to_position(id, p).unwrap();
                let rank_changes = by_rank.move_to_rank(id, p as u32 + 1).unwrap();
                assert_eq!(by_position.standings(), by_rank.standings());
                assert_eq!(pos_changes, rank_changes);
                assert_dense(&by_position);
            }
        }
    }

    #[test]
    fn round_trip_restores_original_order() {
        let mut board = board5();
        let original = board.standings().to_vec();
        board.move_to_rank("b", 5).unwrap();
        board.move_to_rank("b", 2).unwrap();
        assert_eq!(board.standings(), original.as_slice());
    }

    #[test]
    fn rank_zero_and_rank_past_end_are_rejected() {
        let mut board = board5();
        let before = board.standings().to_vec();
        assert_eq!(
            board.move_to_rank("a", 0),
            Err(RankError::OutOfRange { rank: 0, len: 5 })
        );
        assert_eq!(
            board.move_to_rank("a", 6),
            Err(RankError::OutOfRange { rank: 6, len: 5 })
        );
        assert_eq!(board.standings(), before.as_slice());
    }

    #[test]
    fn unknown_id_is_rejected_without_mutation() {
        let mut board = board5();
        let before = board.standings().to_vec();
        assert_eq!(
            board.move_to_position("zz", 0),
            Err(RankError::NotFound("zz".to_string()))
        );
        assert_eq!(
            board.move_to_rank("zz", 3),
            Err(RankError::NotFound("zz".to_string()))
        );
        assert_eq!(board.standings(), before.as_slice());
    }

    #[test]
    fn drop_index_clamps_to_the_last_slot() {
        let mut board = board5();
        board.move_to_position("a", 99).unwrap();
        assert_eq!(order(&board), ["B", "C", "D", "E", "A"]);
        assert_dense(&board);
    }

    #[test]
    fn ranks_stay_dense_under_arbitrary_move_sequences() {
        let mut board = board5();
        let moves: &[(&str, usize)] = &[
            ("e", 0),
            ("a", 4),
            ("c", 1),
            ("b", 3),
            ("d", 0),
            ("a", 2),
            ("e", 4),
            ("c", 0),
        ];
        for (id, target) in moves {
            board.move_to_position(id, *target).unwrap();
            assert_dense(&board);
        }
        // Still the same five teams.
        let mut names = order(&board);
        names.sort_unstable();
        assert_eq!(names, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn construction_sorts_and_renumbers_sparse_input() {
        // Rows can arrive with gaps (e.g. after a partial write elsewhere);
        // construction restores the dense 1..=N numbering in rank order.
        let board = RankBoard::new(vec![
            team("c", "C", 7),
            team("a", "A", 1),
            team("b", "B", 4),
        ]);
        assert_eq!(order(&board), ["A", "B", "C"]);
        assert_dense(&board);
    }

    #[test]
    fn set_writeup_targets_one_team() {
        let mut board = board5();
        board.set_writeup("c", "the midseason surge is real").unwrap();
        assert_eq!(board.team("c").unwrap().writeup, "the midseason surge is real");
        assert!(board.team("a").unwrap().writeup.is_empty());
        assert_eq!(
            board.set_writeup("zz", "nope"),
            Err(RankError::NotFound("zz".to_string()))
        );
    }
}
