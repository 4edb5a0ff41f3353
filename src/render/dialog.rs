use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::GameOver;
use crate::input::InputCommand;

/// The player's answer to the game-over dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Replay,
    Exit,
}

/// Modal shown after a game ends. It never touches the engine; the driver
/// acts on the [`DialogChoice`] it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverDialog {
    over: GameOver,
}

impl GameOverDialog {
    pub const WIDTH: u16 = 36;
    pub const HEIGHT: u16 = 9;

    pub fn new(over: GameOver) -> Self {
        Self { over }
    }

    pub fn over(&self) -> GameOver {
        self.over
    }

    /// Map an input to a choice; anything but replay/exit leaves the dialog up
    pub fn resolve(&self, command: InputCommand) -> Option<DialogChoice> {
        match command {
            InputCommand::Replay => Some(DialogChoice::Replay),
            InputCommand::Exit => Some(DialogChoice::Exit),
            InputCommand::Steer(_) | InputCommand::None => None,
        }
    }

    /// Centre the dialog inside `area`
    pub fn area(area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(Self::HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [cell] = Layout::horizontal([Constraint::Length(Self::WIDTH)])
            .flex(Flex::Center)
            .areas(row);
        cell
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text = vec![
            Line::from(vec![Span::styled(
                "Game Over",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(self.over.reason.label(), Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.over.final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" play again   ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" exit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        )
    }
}
