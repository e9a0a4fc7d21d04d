//! Scoring module - pluggable score policies
//!
//! The board asks its policy for the points a lock is worth once it knows how
//! many rows that lock cleared. Every policy must award zero for zero rows and
//! never return a negative amount (guaranteed by `u32`).

use std::fmt;

/// Base points for clearing N rows at level 0 (index = rows cleared)
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Rows per level for [`ClassicScoring`]
pub const LINES_PER_LEVEL: u32 = 10;

pub trait ScoringPolicy: fmt::Debug {
    /// Points for one lock that cleared `lines` rows.
    ///
    /// `lines_before` is the session's cleared-row total before this lock.
    fn points(&self, lines: u32, lines_before: u32) -> u32;
}

/// One point per cleared row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinesScoring;

impl ScoringPolicy for LinesScoring {
    fn points(&self, lines: u32, _lines_before: u32) -> u32 {
        lines
    }
}

/// Classic table scoring: 40/100/300/1200 times (level + 1).
///
/// Level is `lines_before / 10`. Clears of more than four rows (only reachable
/// from a hand-built grid) score as four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassicScoring;

impl ScoringPolicy for ClassicScoring {
    fn points(&self, lines: u32, lines_before: u32) -> u32 {
        if lines == 0 {
            return 0;
        }
        let level = lines_before / LINES_PER_LEVEL;
        let base = LINE_SCORES[(lines as usize).min(LINE_SCORES.len() - 1)];
        base.saturating_mul(level + 1)
    }
}

/// Named policies, for selecting one from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    #[default]
    Lines,
    Classic,
}

impl ScoringRule {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lines" => Some(ScoringRule::Lines),
            "classic" => Some(ScoringRule::Classic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringRule::Lines => "lines",
            ScoringRule::Classic => "classic",
        }
    }
}

impl ScoringPolicy for ScoringRule {
    fn points(&self, lines: u32, lines_before: u32) -> u32 {
        match self {
            ScoringRule::Lines => LinesScoring.points(lines, lines_before),
            ScoringRule::Classic => ClassicScoring.points(lines, lines_before),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lines_score_nothing() {
        assert_eq!(LinesScoring.points(0, 37), 0);
        assert_eq!(ClassicScoring.points(0, 37), 0);
        assert_eq!(ScoringRule::Classic.points(0, 0), 0);
    }

    #[test]
    fn test_lines_scoring_counts_rows() {
        assert_eq!(LinesScoring.points(1, 0), 1);
        assert_eq!(LinesScoring.points(4, 100), 4);
    }

    #[test]
    fn test_classic_scoring_table() {
        assert_eq!(ClassicScoring.points(1, 0), 40);
        assert_eq!(ClassicScoring.points(2, 0), 100);
        assert_eq!(ClassicScoring.points(3, 0), 300);
        assert_eq!(ClassicScoring.points(4, 0), 1200);
    }

    #[test]
    fn test_classic_scoring_level_multiplier() {
        // 10 rows already cleared -> level 1 -> x2
        assert_eq!(ClassicScoring.points(1, 10), 80);
        assert_eq!(ClassicScoring.points(4, 25), 3600);
        assert_eq!(ClassicScoring.points(6, 0), 1200);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ScoringRule::from_str("Classic"), Some(ScoringRule::Classic));
        assert_eq!(ScoringRule::from_str("lines"), Some(ScoringRule::Lines));
        assert_eq!(ScoringRule::from_str("tetris-ds"), None);
        assert_eq!(ScoringRule::default().as_str(), "lines");
    }
}
