//! Result-screen review rows.

use serde::Serialize;

use crate::matching::Answers;
use crate::question::{Round1Item, Round2Item};

/// Shown in place of an answer the player left unset.
pub const NOT_ANSWERED: &str = "No respondida";

/// One question on a result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRow {
    pub prompt_id: String,
    pub prompt: String,
    /// Display text of what the player answered, `None` if unanswered.
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl ReviewRow {
    pub fn user_answer_text(&self) -> &str {
        self.user_answer.as_deref().unwrap_or(NOT_ANSWERED)
    }
}

/// Everything a result screen shows for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReview {
    pub round: u8,
    pub rows: Vec<ReviewRow>,
    pub score: u32,
    pub total: u32,
}

impl RoundReview {
    /// Round 1 review, rows in the order the prompts were shown.
    pub fn round1(prompts: &[Round1Item], answers: &Answers) -> Self {
        let rows: Vec<ReviewRow> = prompts
            .iter()
            .map(|item| {
                let correct = item.answer();
                let user_answer = answers.get(item.id).cloned();
                ReviewRow {
                    prompt_id: item.id.to_string(),
                    prompt: item.prompt.to_string(),
                    is_correct: user_answer.as_deref() == Some(correct.as_str()),
                    user_answer,
                    correct_answer: correct,
                }
            })
            .collect();
        Self::from_rows(1, rows)
    }

    /// Round 2 review. `choices` resolves connected ids to the action-plan
    /// text the player saw.
    pub fn round2(prompts: &[Round2Item], choices: &[Round2Item], answers: &Answers) -> Self {
        let rows: Vec<ReviewRow> = prompts
            .iter()
            .map(|item| {
                let connected = answers.get(item.id);
                let user_answer = connected.and_then(|to| {
                    choices
                        .iter()
                        .find(|c| c.id == to)
                        .map(|c| c.action_plan.to_string())
                });
                ReviewRow {
                    prompt_id: item.id.to_string(),
                    prompt: item.prompt.to_string(),
                    user_answer,
                    correct_answer: item.action_plan.to_string(),
                    is_correct: connected.is_some_and(|to| to == item.id),
                }
            })
            .collect();
        Self::from_rows(2, rows)
    }

    fn from_rows(round: u8, rows: Vec<ReviewRow>) -> Self {
        let score = rows.iter().filter(|r| r.is_correct).count() as u32;
        let total = rows.len() as u32;
        Self {
            round,
            rows,
            score,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R1: &[Round1Item] = &[
        Round1Item { id: "a", prompt: "A", quantity: 2 },
        Round1Item { id: "b", prompt: "B", quantity: 1 },
    ];

    const R2: &[Round2Item] = &[
        Round2Item { id: "x", prompt: "X", action_plan: "plan x" },
        Round2Item { id: "y", prompt: "Y", action_plan: "plan y" },
    ];

    #[test]
    fn test_round1_review_marks_unanswered() {
        let answers: Answers = [("a".to_string(), "2".to_string())].into_iter().collect();
        let review = RoundReview::round1(R1, &answers);

        assert_eq!(review.score, 1);
        assert_eq!(review.total, 2);
        assert!(review.rows[0].is_correct);
        assert!(!review.rows[1].is_correct);
        assert_eq!(review.rows[1].user_answer_text(), NOT_ANSWERED);
        assert_eq!(review.rows[1].correct_answer, "1");
    }

    #[test]
    fn test_round2_review_resolves_plan_text() {
        let answers: Answers = [
            ("x".to_string(), "y".to_string()),
            ("y".to_string(), "x".to_string()),
        ]
        .into_iter()
        .collect();
        let review = RoundReview::round2(R2, R2, &answers);

        assert_eq!(review.score, 0);
        assert_eq!(review.rows[0].user_answer.as_deref(), Some("plan y"));
        assert_eq!(review.rows[0].correct_answer, "plan x");
    }
}
