//! Text rendering of the round-2 connect board.
//!
//! Prompts sit in a left column and action plans in a right column, one item
//! every other line. Each item has a port cell at the inner edge of its
//! column; connections are rasterised between ports in the gap. There is no
//! mouse, so the pending line of a selected prompt ends at the inner edge of
//! the answer column, level with the prompt.

use colored::Colorize;
use qweek_core::matching::{AnchorMap, ConnectBoard, Line, Point, Rect};
use qweek_core::question::Round2Item;

const LEFT_WIDTH: usize = 36;
const GAP_WIDTH: usize = 14;
const RIGHT_WIDTH: usize = 46;
const ROW_SPACING: usize = 2;

/// Letter label of the answer at `index`: A, B, C...
pub fn answer_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Anchors for the current terminal layout, in cell coordinates.
pub fn layout_anchors(board: &ConnectBoard) -> AnchorMap {
    let rows = board.prompt_ids().len().max(board.answer_ids().len());
    let container = Rect::new(
        0.0,
        0.0,
        (LEFT_WIDTH + GAP_WIDTH + RIGHT_WIDTH) as f64,
        canvas_height(rows) as f64,
    );

    let prompts = board
        .prompt_ids()
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), port(LEFT_WIDTH, i)));
    let answers = board
        .answer_ids()
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), port(LEFT_WIDTH + GAP_WIDTH - 1, i)));

    AnchorMap::from_layout(container, prompts, answers)
}

/// Where the pending line ends while a prompt is selected.
pub fn resting_pointer(board: &ConnectBoard) -> Option<Point> {
    let start = board.anchors().prompt(board.selected_prompt()?)?;
    Some(Point::new((LEFT_WIDTH + GAP_WIDTH) as f64 - 0.5, start.y))
}

fn port(column: usize, index: usize) -> Rect {
    Rect::new(column as f64, (index * ROW_SPACING) as f64, 1.0, 1.0)
}

fn canvas_height(rows: usize) -> usize {
    if rows == 0 {
        0
    } else {
        (rows - 1) * ROW_SPACING + 1
    }
}

/// Cells covered by a line, Bresenham style. Coordinates are cell centres.
pub fn rasterize(line: Line) -> Vec<(usize, usize)> {
    let (mut x0, mut y0) = (line.start.x.floor() as i64, line.start.y.floor() as i64);
    let (x1, y1) = (line.end.x.floor() as i64, line.end.y.floor() as i64);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::new();
    loop {
        if x0 >= 0 && y0 >= 0 {
            cells.push((x0 as usize, y0 as usize));
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    cells
}

fn stroke(line: &Line) -> char {
    let rise = line.end.y - line.start.y;
    if rise.abs() < f64::EPSILON {
        '-'
    } else if rise > 0.0 {
        '\\'
    } else {
        '/'
    }
}

/// Fits text into exactly `width` columns, cutting with an ellipsis.
pub fn fit(text: &str, width: usize) -> String {
    let flat = text.replace('\n', " ");
    let count = flat.chars().count();
    if count > width {
        let mut cut: String = flat.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", flat, " ".repeat(width - count))
    }
}

/// One line of the board, split by column so each part can be styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub left: String,
    pub gap: String,
    pub right: String,
    pub prompt_selected: bool,
    pub answer_connected: bool,
}

pub struct BoardView<'a> {
    board: &'a ConnectBoard,
    prompts: &'a [Round2Item],
    choices: &'a [Round2Item],
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a ConnectBoard, prompts: &'a [Round2Item], choices: &'a [Round2Item]) -> Self {
        Self {
            board,
            prompts,
            choices,
        }
    }

    /// Plain rows, uncoloured. Uses the anchors cached on the board.
    pub fn rows(&self) -> Vec<BoardRow> {
        let height = canvas_height(self.prompts.len().max(self.choices.len()));
        let mut gap = vec![vec![' '; GAP_WIDTH]; height];

        let preview = self.board.preview().map(|line| (line, '·'));
        let connections = self
            .board
            .connection_lines()
            .into_iter()
            .map(|line| (line, stroke(&line)));

        // Connections are drawn last so they stay on top of the preview.
        for (line, ch) in preview.into_iter().chain(connections) {
            for (x, y) in rasterize(line) {
                if y < height && (LEFT_WIDTH..LEFT_WIDTH + GAP_WIDTH).contains(&x) {
                    gap[y][x - LEFT_WIDTH] = ch;
                }
            }
        }

        (0..height)
            .map(|y| {
                let item = (y % ROW_SPACING == 0).then_some(y / ROW_SPACING);
                let prompt = item.and_then(|i| self.prompts.get(i));
                let choice = item.and_then(|i| self.choices.get(i).map(|c| (i, c)));

                let prompt_selected =
                    prompt.is_some_and(|p| self.board.selected_prompt() == Some(p.id));
                let left = match (item, prompt) {
                    (Some(i), Some(p)) => {
                        let marker = if prompt_selected { '>' } else { ' ' };
                        let link = self
                            .board
                            .connection_for_prompt(p.id)
                            .and_then(|c| self.choices.iter().position(|ch| ch.id == c.to_id))
                            .map(|pos| format!(" [{}]", answer_label(pos)))
                            .unwrap_or_default();
                        let body = fit(
                            &format!("{}{}. {}", marker, i + 1, p.prompt),
                            LEFT_WIDTH - link.chars().count(),
                        );
                        format!("{}{}", body, link)
                    }
                    _ => " ".repeat(LEFT_WIDTH),
                };

                let right = match choice {
                    Some((i, c)) => fit(&format!("{}) {}", answer_label(i), c.action_plan), RIGHT_WIDTH),
                    None => " ".repeat(RIGHT_WIDTH),
                };

                BoardRow {
                    left,
                    gap: gap[y].iter().collect(),
                    right,
                    prompt_selected,
                    answer_connected: choice.is_some_and(|(_, c)| self.board.is_answer_connected(c.id)),
                }
            })
            .collect()
    }

    /// Coloured lines ready to print.
    pub fn render(&self) -> Vec<String> {
        self.rows()
            .into_iter()
            .map(|row| {
                let left = if row.prompt_selected {
                    row.left.bright_yellow().bold()
                } else {
                    row.left.normal()
                };
                let right = if row.answer_connected {
                    row.right.green()
                } else {
                    row.right.normal()
                };
                format!("{}{}{}", left, row.gap.cyan(), right)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[Round2Item] = &[
        Round2Item { id: "a", prompt: "Prompt A", action_plan: "Plan A" },
        Round2Item { id: "b", prompt: "Prompt B", action_plan: "Plan B\nsecond line" },
        Round2Item { id: "c", prompt: "Prompt C", action_plan: "Plan C" },
    ];

    fn board() -> ConnectBoard {
        let ids = ITEMS.iter().map(|i| i.id);
        let mut board = ConnectBoard::new(ids.clone(), ids);
        board.recompute_anchors(layout_anchors(&board));
        board
    }

    #[test]
    fn test_anchors_sit_on_ports() {
        let board = board();
        let anchors = board.anchors();
        assert_eq!(anchors.len(), 6);
        assert_eq!(anchors.prompt("a"), Some(Point::new(LEFT_WIDTH as f64 + 0.5, 0.5)));
        assert_eq!(
            anchors.answer("c"),
            Some(Point::new((LEFT_WIDTH + GAP_WIDTH) as f64 - 0.5, 4.5))
        );
    }

    #[test]
    fn test_rasterize_endpoints_and_continuity() {
        let cells = rasterize(Line::new(Point::new(2.5, 0.5), Point::new(9.5, 4.5)));
        assert_eq!(cells.first(), Some(&(2, 0)));
        assert_eq!(cells.last(), Some(&(9, 4)));
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1);
        }
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("a\nb", 3), "a b");
    }

    #[test]
    fn test_rows_show_connections() {
        let mut board = board();
        board.select_prompt("a").unwrap();
        board.click_answer("c").unwrap();
        board.select_prompt("b").unwrap();

        let rows = BoardView::new(&board, ITEMS, ITEMS).rows();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.gap.chars().count() == GAP_WIDTH));

        assert!(rows[0].left.trim_end().ends_with("[C]"));
        assert!(rows[0].gap.contains('\\'));
        assert!(rows[4].answer_connected);
        assert!(!rows[0].answer_connected);

        assert!(rows[2].prompt_selected);
        assert!(rows[2].left.starts_with(">2. Prompt B"));
        assert!(rows[2].right.starts_with("B) Plan B second line"));
        assert!(rows[1].left.trim().is_empty());
    }

    #[test]
    fn test_horizontal_connection() {
        let mut board = board();
        board.select_prompt("b").unwrap();
        board.click_answer("b").unwrap();

        let rows = BoardView::new(&board, ITEMS, ITEMS).rows();
        assert_eq!(rows[2].gap, "-".repeat(GAP_WIDTH));
        assert!(rows[0].gap.trim().is_empty());
    }

    #[test]
    fn test_preview_follows_selected_prompt() {
        let mut board = board();
        assert!(resting_pointer(&board).is_none());

        board.select_prompt("c").unwrap();
        let pointer = resting_pointer(&board).unwrap();
        assert_eq!(pointer, Point::new((LEFT_WIDTH + GAP_WIDTH) as f64 - 0.5, 4.5));
        board.pointer_move(pointer);

        let rows = BoardView::new(&board, ITEMS, ITEMS).rows();
        assert_eq!(rows[4].gap, "·".repeat(GAP_WIDTH));
        assert!(rows[0].gap.trim().is_empty());

        board.click_answer("a").unwrap();
        assert!(board.preview().is_none());
        let rows = BoardView::new(&board, ITEMS, ITEMS).rows();
        assert!(!rows[4].gap.contains('·'));
        assert!(rows[4].gap.contains('/'));
    }
}
