//! Semantic styling for the widget.
//!
//! One flat palette of roles with style builders; embedding applications can
//! swap the colors without touching the view code.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub focus: Color,
    pub text: Color,
    pub text_muted: Color,
    pub tag: Color,
    pub remove_control: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            focus: Color::Cyan,
            text: Color::White,
            text_muted: Color::DarkGray,
            tag: Color::Green,
            remove_control: Color::Red,
        }
    }
}

impl Theme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.text_muted).add_modifier(Modifier::DIM)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    pub fn remove_control_style(&self) -> Style {
        Style::default().fg(self.remove_control).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.focus } else { self.border };
        Style::default().fg(color)
    }
}

/// Build a standard bordered block with an optional bold title.
pub fn block<'a>(theme: &Theme, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused));
    if let Some(title) = title {
        block = block.title(Span::styled(title, theme.label_style()));
    }
    block
}
