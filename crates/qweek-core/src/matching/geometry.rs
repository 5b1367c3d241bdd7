//! Layout-derived geometry for the connect board.
//!
//! Coordinates are relative to the board container. Nothing here feeds
//! scoring; anchors are recomputed whenever the layout changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point expressed relative to `origin`.
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// An axis-aligned box in screen (or terminal cell) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Item centres relative to the container, one table per column.
///
/// Prompts and answers are keyed separately since a prompt and its matching
/// answer may share an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorMap {
    prompts: HashMap<String, Point>,
    answers: HashMap<String, Point>,
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes anchors from the current layout.
    ///
    /// Each column yields item ids with their on-screen boxes; an anchor is
    /// the box centre translated into container coordinates.
    pub fn from_layout<P, A, S, T>(container: Rect, prompts: P, answers: A) -> Self
    where
        P: IntoIterator<Item = (S, Rect)>,
        A: IntoIterator<Item = (T, Rect)>,
        S: Into<String>,
        T: Into<String>,
    {
        let origin = container.origin();
        Self {
            prompts: prompts
                .into_iter()
                .map(|(id, rect)| (id.into(), rect.center().relative_to(origin)))
                .collect(),
            answers: answers
                .into_iter()
                .map(|(id, rect)| (id.into(), rect.center().relative_to(origin)))
                .collect(),
        }
    }

    pub fn prompt(&self, id: &str) -> Option<Point> {
        self.prompts.get(id).copied()
    }

    pub fn answer(&self, id: &str) -> Option<Point> {
        self.answers.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.prompts.len() + self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty() && self.answers.is_empty()
    }

    /// Line from a prompt to an answer, if both are laid out.
    pub fn line_between(&self, prompt_id: &str, answer_id: &str) -> Option<Line> {
        Some(Line::new(self.prompt(prompt_id)?, self.answer(answer_id)?))
    }
}
