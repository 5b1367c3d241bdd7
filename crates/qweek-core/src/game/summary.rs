//! Final summary.

use serde::Serialize;

use crate::participant::{NewParticipant, PlayerName, score_percentage};

/// Formats seconds as `{m}m {s}s`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

/// The final screen's content and the record to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalSummary {
    pub player: PlayerName,
    pub score: u32,
    pub total: u32,
    pub elapsed_seconds: u64,
}

impl FinalSummary {
    pub fn percentage(&self) -> u32 {
        score_percentage(self.score, self.total)
    }

    pub fn formatted_time(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }

    /// The participant record this result is saved as.
    pub fn to_new_participant(&self) -> NewParticipant {
        NewParticipant {
            first_name: self.player.first_name().to_string(),
            last_name: self.player.last_name().to_string(),
            score: self.score,
            total: self.total,
            time_seconds: Some(self.elapsed_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0m 0s");
        assert_eq!(format_elapsed(59), "0m 59s");
        assert_eq!(format_elapsed(125), "2m 5s");
    }

    #[test]
    fn test_summary_record() {
        let summary = FinalSummary {
            player: PlayerName::new("Ana", "Lopez").unwrap(),
            score: 7,
            total: 10,
            elapsed_seconds: 83,
        };
        assert_eq!(summary.percentage(), 70);
        assert_eq!(summary.formatted_time(), "1m 23s");

        let record = summary.to_new_participant();
        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.score, 7);
        assert_eq!(record.total, 10);
        assert_eq!(record.time_seconds, Some(83));
    }
}
