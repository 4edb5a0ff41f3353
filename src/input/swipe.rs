use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::game::Direction;

/// Direction of a drag from its dominant axis.
///
/// `d_col` grows to the right and `d_row` grows downwards. Zero-length drags
/// and exact diagonals carry no direction.
pub fn infer_direction(d_col: i32, d_row: i32) -> Option<Direction> {
    if d_col.abs() > d_row.abs() {
        Some(if d_col > 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else if d_row.abs() > d_col.abs() {
        Some(if d_row > 0 {
            Direction::Down
        } else {
            Direction::Up
        })
    } else {
        None
    }
}

/// Turns a press-and-drag with the left mouse button into headings
#[derive(Debug, Default)]
pub struct SwipeTracker {
    anchor: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a direction once the drag has moved off its anchor cell.
    ///
    /// The anchor follows the pointer after each recognised swipe, so one
    /// long drag can steer more than once.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        let here = (event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.anchor = Some(here);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (col, row) = self.anchor?;
                let d_col = i32::from(here.0) - i32::from(col);
                let d_row = i32::from(here.1) - i32::from(row);
                let direction = infer_direction(d_col, d_row)?;
                self.anchor = Some(here);
                Some(direction)
            }
            MouseEventKind::Up(_) => {
                self.anchor = None;
                None
            }
            _ => None,
        }
    }
}
