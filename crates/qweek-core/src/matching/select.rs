//! Round-1 select board: one independent choice per prompt.

use super::Answers;
use crate::error::{QweekError, Result};

#[derive(Debug, Clone)]
pub struct SelectBoard {
    prompt_ids: Vec<String>,
    options: Vec<String>,
    answers: Answers,
}

impl SelectBoard {
    pub fn new<P>(prompt_ids: P, options: Vec<String>) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            prompt_ids: prompt_ids.into_iter().map(Into::into).collect(),
            options,
            answers: Answers::new(),
        }
    }

    pub fn prompt_ids(&self) -> &[String] {
        &self.prompt_ids
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Sets (or replaces) the chosen value for a prompt.
    ///
    /// # Errors
    ///
    /// Returns `QweekError::Validation` if the prompt or the value is not on this board.
    pub fn choose(&mut self, prompt_id: &str, value: &str) -> Result<()> {
        if !self.prompt_ids.iter().any(|id| id == prompt_id) {
            return Err(QweekError::validation(format!(
                "Unknown prompt '{}'",
                prompt_id
            )));
        }
        if !self.options.iter().any(|o| o == value) {
            return Err(QweekError::validation(format!(
                "'{}' is not one of the options",
                value
            )));
        }
        self.answers
            .insert(prompt_id.to_string(), value.to_string());
        Ok(())
    }

    /// Unsets the choice for a prompt.
    pub fn clear(&mut self, prompt_id: &str) {
        self.answers.remove(prompt_id);
    }

    pub fn answer(&self, prompt_id: &str) -> Option<&str> {
        self.answers.get(prompt_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// The chosen values. Unanswered prompts are simply absent.
    pub fn submit(&self) -> Answers {
        self.answers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> SelectBoard {
        SelectBoard::new(["r1-1", "r1-2"], vec!["3".to_string(), "1".to_string()])
    }

    #[test]
    fn test_choose_replaces_previous_value() {
        let mut board = board();
        board.choose("r1-1", "3").unwrap();
        board.choose("r1-1", "1").unwrap();

        assert_eq!(board.answer("r1-1"), Some("1"));
        assert_eq!(board.answered_count(), 1);
    }

    #[test]
    fn test_choose_rejects_unknown_inputs() {
        let mut board = board();
        assert!(board.choose("r1-9", "3").unwrap_err().is_validation());
        assert!(board.choose("r1-1", "7").unwrap_err().is_validation());
        assert_eq!(board.answered_count(), 0);
    }

    #[test]
    fn test_submit_leaves_unanswered_absent() {
        let mut board = board();
        board.choose("r1-2", "1").unwrap();
        board.choose("r1-1", "3").unwrap();
        board.clear("r1-1");

        let answers = board.submit();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("r1-2").map(String::as_str), Some("1"));
        assert!(!answers.contains_key("r1-1"));
    }
}
