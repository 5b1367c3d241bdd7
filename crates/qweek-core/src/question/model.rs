//! Quiz item models.

use serde::Serialize;

/// A round-1 item: a complaint reason and how many complaints it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round1Item {
    pub id: &'static str,
    pub prompt: &'static str,
    pub quantity: u32,
}

impl Round1Item {
    /// The quantity as the select control offers it.
    pub fn answer(&self) -> String {
        self.quantity.to_string()
    }
}

/// A round-2 item: a complaint reason and the action plan taken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round2Item {
    pub id: &'static str,
    pub prompt: &'static str,
    pub action_plan: &'static str,
}

/// Builds the round-1 option list from (already shuffled) items.
///
/// Quantities repeat across items, so the list keeps the first occurrence of
/// each value and drops the rest.
pub fn round1_options(items: &[Round1Item]) -> Vec<String> {
    let mut options: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let value = item.answer();
        if !options.contains(&value) {
            options.push(value);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_options_deduplicated_in_order() {
        let items = [
            Round1Item { id: "a", prompt: "A", quantity: 1 },
            Round1Item { id: "b", prompt: "B", quantity: 3 },
            Round1Item { id: "c", prompt: "C", quantity: 1 },
            Round1Item { id: "d", prompt: "D", quantity: 2 },
        ];
        assert_eq!(round1_options(&items), vec!["1", "3", "2"]);
    }
}
