//! Rendering for the tag field: input line, placeholder, and tag rows.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{TagFieldLayout, TagFieldState};
use crate::theme::{Theme, block};

/// Maps one committed value to its display row.
///
/// Pure: the row shows the value followed by the removal glyph. The value
/// itself identifies the row, since duplicates cannot exist.
pub fn tag_row<'a>(value: &'a str, glyph: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(value, theme.tag_style()),
        Span::raw(" "),
        Span::styled(glyph, theme.remove_control_style()),
    ])
}

/// Draws the widget and records hit-test areas into the state.
#[derive(Debug, Default)]
pub struct TagFieldView;

impl TagFieldView {
    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &mut TagFieldState, theme: &Theme) {
        let focused = state.is_focused();
        let outer = block(theme, state.config().label(), focused);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        if inner.width == 0 || inner.height == 0 {
            state.set_layout(TagFieldLayout::default());
            return;
        }

        let splits = Layout::vertical([
            Constraint::Length(1), // input line
            Constraint::Min(0),    // tag rows
        ])
        .split(inner);
        let input_area = splits[0];
        let rows_area = splits[1];

        self.render_input_line(frame, input_area, state, theme, focused);
        let remove_areas = self.render_tag_rows(frame, rows_area, state, theme);

        state.set_layout(TagFieldLayout {
            input_area: Some(input_area),
            remove_areas,
        });
    }

    fn render_input_line(&self, frame: &mut Frame, area: Rect, state: &TagFieldState, theme: &Theme, focused: bool) {
        let draft = state.draft();
        let line = if draft.is_empty() {
            let placeholder = state.config().placeholder().unwrap_or_default();
            Line::from(Span::styled(placeholder.to_string(), theme.placeholder_style()))
        } else {
            Line::from(Span::styled(draft.text().to_string(), theme.text_style()))
        };
        frame.render_widget(Paragraph::new(line), area);

        if focused {
            let column = draft.display_column().min(area.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(area.x + column, area.y));
        }
    }

    /// Renders one row per committed value and returns the removal-control
    /// area for each, aligned with the value list. Rows that do not fit the
    /// viewport get an empty area so hit tests on them never match.
    fn render_tag_rows(&self, frame: &mut Frame, area: Rect, state: &TagFieldState, theme: &Theme) -> Vec<Rect> {
        let glyph = state.config().remove_glyph();
        let glyph_width = glyph.width() as u16;
        let mut remove_areas = Vec::with_capacity(state.values().len());
        let mut lines = Vec::new();

        for (index, value) in state.values().iter().enumerate() {
            let row_y = area.y.saturating_add(index as u16);
            if index as u16 >= area.height {
                remove_areas.push(Rect::default());
                continue;
            }
            lines.push(tag_row(value, glyph, theme));

            let glyph_x = area.x.saturating_add(value.width() as u16 + 1);
            let fits = glyph_x.saturating_add(glyph_width) <= area.right();
            if fits {
                remove_areas.push(Rect::new(glyph_x, row_y, glyph_width, 1));
            } else {
                remove_areas.push(Rect::default());
            }
        }

        if !lines.is_empty() {
            frame.render_widget(Paragraph::new(lines), area);
        }
        remove_areas
    }
}
