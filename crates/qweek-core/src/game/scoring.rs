//! Scoring rules.

use crate::matching::Answers;
use crate::question::{Round1Item, Round2Item};

/// Round 1: an answer is correct when the chosen value equals the item's
/// quantity as a string. Unanswered items score nothing.
pub fn score_round1(items: &[Round1Item], answers: &Answers) -> u32 {
    items
        .iter()
        .filter(|item| answers.get(item.id).is_some_and(|a| *a == item.answer()))
        .count() as u32
}

/// Round 2: a connection is correct when the prompt is connected to the
/// choice carrying its own id. Text is never compared.
pub fn score_round2(items: &[Round2Item], answers: &Answers) -> u32 {
    items
        .iter()
        .filter(|item| answers.get(item.id).is_some_and(|to| to == item.id))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const R1: &[Round1Item] = &[Round1Item {
        id: "A",
        prompt: "Prompt A",
        quantity: 3,
    }];

    const R2: &[Round2Item] = &[
        Round2Item {
            id: "A",
            prompt: "Prompt A",
            action_plan: "Same plan",
        },
        Round2Item {
            id: "B",
            prompt: "Prompt B",
            action_plan: "Same plan",
        },
    ];

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_round1_exact_string_match() {
        assert_eq!(score_round1(R1, &answers(&[("A", "3")])), 1);
        assert_eq!(score_round1(R1, &answers(&[("A", "2")])), 0);
        assert_eq!(score_round1(R1, &answers(&[("A", "03")])), 0);
        assert_eq!(score_round1(R1, &answers(&[])), 0);
    }

    #[test]
    fn test_round2_matches_by_id() {
        assert_eq!(score_round2(&R2[..1], &answers(&[("A", "A")])), 1);
        assert_eq!(score_round2(&R2[..1], &answers(&[("A", "B")])), 0);
    }

    #[test]
    fn test_round2_ignores_identical_text() {
        // Both plans read the same; only the id decides.
        assert_eq!(score_round2(R2, &answers(&[("A", "B"), ("B", "A")])), 0);
        assert_eq!(score_round2(R2, &answers(&[("A", "A"), ("B", "B")])), 2);
    }
}
