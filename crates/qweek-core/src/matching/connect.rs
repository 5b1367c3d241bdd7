//! Round-2 connect board.
//!
//! The user selects a prompt in the left column, then clicks an item in the
//! right column to connect them. Connections form a partial bijection: a
//! prompt has at most one connection and so does an answer. A new connection
//! replaces whatever occupied either of its ends.

use serde::{Deserialize, Serialize};

use super::Answers;
use super::geometry::{AnchorMap, Line, Point};
use crate::error::{QweekError, Result};

/// One user-drawn link between a prompt and an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from_id: String,
    pub to_id: String,
}

/// Interaction state of the round-2 matching widget.
#[derive(Debug, Clone)]
pub struct ConnectBoard {
    prompt_ids: Vec<String>,
    answer_ids: Vec<String>,
    connections: Vec<Connection>,
    selected_prompt: Option<String>,
    preview: Option<Line>,
    anchors: AnchorMap,
}

impl ConnectBoard {
    /// Creates an empty board for the given prompt and answer columns, in
    /// display order.
    pub fn new<P, A>(prompt_ids: P, answer_ids: A) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            prompt_ids: prompt_ids.into_iter().map(Into::into).collect(),
            answer_ids: answer_ids.into_iter().map(Into::into).collect(),
            connections: Vec::new(),
            selected_prompt: None,
            preview: None,
            anchors: AnchorMap::new(),
        }
    }

    pub fn prompt_ids(&self) -> &[String] {
        &self.prompt_ids
    }

    pub fn answer_ids(&self) -> &[String] {
        &self.answer_ids
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn selected_prompt(&self) -> Option<&str> {
        self.selected_prompt.as_deref()
    }

    /// The dashed line following the pointer while a prompt is selected.
    pub fn preview(&self) -> Option<Line> {
        self.preview
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }

    /// Selects a prompt, or deselects it if it is already selected.
    ///
    /// Selecting a different prompt simply replaces the selection; existing
    /// connections are not touched.
    ///
    /// # Errors
    ///
    /// Returns `QweekError::Validation` for an id that is not a prompt on this board.
    pub fn select_prompt(&mut self, prompt_id: &str) -> Result<()> {
        if !self.prompt_ids.iter().any(|id| id == prompt_id) {
            return Err(QweekError::validation(format!(
                "Unknown prompt '{}'",
                prompt_id
            )));
        }

        if self.selected_prompt.as_deref() == Some(prompt_id) {
            self.selected_prompt = None;
        } else {
            self.selected_prompt = Some(prompt_id.to_string());
        }
        self.preview = None;
        Ok(())
    }

    /// Clicks an answer item.
    ///
    /// With a prompt selected, connects it to this answer: any connection
    /// starting at the selected prompt or ending at this answer is removed
    /// first, then the new one is appended and the selection cleared. Without
    /// a selection this is a no-op.
    ///
    /// # Returns
    ///
    /// The connection that was made, or `None` when nothing was selected.
    ///
    /// # Errors
    ///
    /// Returns `QweekError::Validation` for an id that is not an answer on this board.
    pub fn click_answer(&mut self, answer_id: &str) -> Result<Option<Connection>> {
        if !self.answer_ids.iter().any(|id| id == answer_id) {
            return Err(QweekError::validation(format!(
                "Unknown answer '{}'",
                answer_id
            )));
        }

        let Some(prompt_id) = self.selected_prompt.take() else {
            return Ok(None);
        };

        self.connections
            .retain(|c| c.from_id != prompt_id && c.to_id != answer_id);
        let connection = Connection {
            from_id: prompt_id,
            to_id: answer_id.to_string(),
        };
        tracing::debug!(
            "Connected prompt {} to answer {}",
            connection.from_id,
            connection.to_id
        );
        self.connections.push(connection.clone());
        self.preview = None;

        Ok(Some(connection))
    }

    /// Clears the current selection without connecting anything.
    pub fn cancel_selection(&mut self) {
        self.selected_prompt = None;
        self.preview = None;
    }

    /// Updates the preview line to end at the live pointer position.
    ///
    /// Only has an effect while a prompt is selected and laid out.
    pub fn pointer_move(&mut self, pointer: Point) {
        let Some(prompt_id) = self.selected_prompt.as_deref() else {
            return;
        };
        self.preview = self
            .anchors
            .prompt(prompt_id)
            .map(|start| Line::new(start, pointer));
    }

    /// Replaces the cached anchors after a layout change.
    pub fn recompute_anchors(&mut self, anchors: AnchorMap) {
        self.anchors = anchors;
        if self.selected_prompt.is_none() {
            self.preview = None;
        }
    }

    /// Lines for every connection whose ends are both laid out.
    pub fn connection_lines(&self) -> Vec<Line> {
        self.connections
            .iter()
            .filter_map(|c| self.anchors.line_between(&c.from_id, &c.to_id))
            .collect()
    }

    pub fn connection_for_prompt(&self, prompt_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.from_id == prompt_id)
    }

    pub fn is_prompt_connected(&self, prompt_id: &str) -> bool {
        self.connection_for_prompt(prompt_id).is_some()
    }

    pub fn is_answer_connected(&self, answer_id: &str) -> bool {
        self.connections.iter().any(|c| c.to_id == answer_id)
    }

    /// Submit is enabled once every prompt is connected.
    pub fn can_submit(&self) -> bool {
        self.connections.len() == self.prompt_ids.len()
    }

    /// Produces the prompt id to answer id mapping.
    ///
    /// # Errors
    ///
    /// Returns `QweekError::Validation` while some prompt is still unconnected.
    pub fn submit(&self) -> Result<Answers> {
        if !self.can_submit() {
            return Err(QweekError::validation(format!(
                "All prompts must be connected ({}/{})",
                self.connections.len(),
                self.prompt_ids.len()
            )));
        }
        Ok(self
            .connections
            .iter()
            .map(|c| (c.from_id.clone(), c.to_id.clone()))
            .collect())
    }
}
