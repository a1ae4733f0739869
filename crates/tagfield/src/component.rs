//! Event routing between the embedding application and the tag field state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::Focus;
use ratatui::{Frame, layout::Rect};

use crate::state::TagFieldState;
use crate::theme::Theme;
use crate::trigger::CommitTrigger;
use crate::view::TagFieldView;

/// Stateless-per-value event router: commit triggers first, then draft
/// editing keys, plus mouse removal and blur handling.
///
/// The embedding application is expected to call [`sync_focus`] after any
/// focus movement (and once per loop turn is fine); that is where the blur
/// trigger is evaluated.
///
/// [`sync_focus`]: TagFieldComponent::sync_focus
#[derive(Debug, Default)]
pub struct TagFieldComponent {
    view: TagFieldView,
    theme: Theme,
    was_focused: bool,
}

impl TagFieldComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Handles a key event when the field has focus.
    ///
    /// Returns `true` when the event was consumed. Trigger keys are always
    /// consumed, whether or not the commit is accepted, so the surrounding
    /// application does not also act on them.
    pub fn handle_key_event(&mut self, state: &mut TagFieldState, key: KeyEvent) -> bool {
        if !state.is_focused() {
            return false;
        }

        if state.config().triggers().should_commit(&CommitTrigger::Key(key.code)) {
            state.commit_draft();
            return true;
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                state.draft_mut().insert_char(c);
            }
            KeyCode::Backspace => state.draft_mut().backspace(),
            KeyCode::Delete => state.draft_mut().delete(),
            KeyCode::Left => state.draft_mut().move_left(),
            KeyCode::Right => state.draft_mut().move_right(),
            KeyCode::Home => state.draft_mut().move_home(),
            KeyCode::End => state.draft_mut().move_end(),
            _ => return false,
        }
        true
    }

    /// Routes a left click: clicks in the input area focus the field, clicks
    /// on a row's removal control remove that row's value.
    pub fn handle_mouse_event(&mut self, state: &mut TagFieldState, mouse: MouseEvent, focus: &Focus) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        if let Some(area) = state.layout().input_area {
            if rect_contains(area, mouse.column, mouse.row) {
                focus.focus(&state.f_input);
                return true;
            }
        }

        let hit = state
            .layout()
            .remove_areas
            .iter()
            .position(|area| rect_contains(*area, mouse.column, mouse.row));
        if let Some(index) = hit {
            state.remove_at(index);
            return true;
        }

        false
    }

    /// Observes focus transitions; losing focus attempts a commit of the
    /// current draft when the blur trigger is enabled.
    pub fn sync_focus(&mut self, state: &mut TagFieldState) {
        let focused = state.is_focused();
        if self.was_focused && !focused {
            self.blur_commit(state);
        }
        self.was_focused = focused;
    }

    /// Terminal-level focus loss maps to the same blur path as leaving the
    /// field within the application's focus ring.
    pub fn handle_focus_lost(&mut self, state: &mut TagFieldState) {
        if state.is_focused() {
            self.blur_commit(state);
        }
    }

    fn blur_commit(&mut self, state: &mut TagFieldState) {
        if state.config().triggers().should_commit(&CommitTrigger::Blur) {
            state.commit_draft();
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &mut TagFieldState) {
        self.view.render(frame, area, state, &self.theme);
    }
}

fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossterm::event::KeyEventKind;

    use super::*;
    use crate::config::TagFieldConfig;
    use crate::hooks::TagFieldHooks;
    use crate::state::TagFieldLayout;
    use crate::trigger::TriggerSet;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(component: &mut TagFieldComponent, state: &mut TagFieldState, text: &str) {
        for c in text.chars() {
            assert!(component.handle_key_event(state, key(KeyCode::Char(c))));
        }
    }

    fn focused_state(config: TagFieldConfig) -> TagFieldState {
        let state = TagFieldState::new(config);
        state.f_input.set(true);
        state
    }

    #[test]
    fn enter_then_comma_commit_two_tags() {
        let added = Rc::new(RefCell::new(0usize));
        let added_sink = Rc::clone(&added);
        let mut state = focused_state(TagFieldConfig::new("tags"))
            .with_hooks(TagFieldHooks::new().on_tag_added(move |_, _| *added_sink.borrow_mut() += 1));
        let mut component = TagFieldComponent::new();
        component.sync_focus(&mut state);

        type_text(&mut component, &mut state, "abc");
        assert!(component.handle_key_event(&mut state, key(KeyCode::Enter)));
        type_text(&mut component, &mut state, "abc2");
        assert!(component.handle_key_event(&mut state, key(KeyCode::Char(','))));

        assert_eq!(state.values(), ["abc", "abc2"]);
        assert_eq!(*added.borrow(), 2);
    }

    #[test]
    fn enter_does_not_commit_when_not_in_trigger_set() {
        let triggers = TriggerSet::default().with_keys(vec![KeyCode::Char(' ')]);
        let mut state = focused_state(TagFieldConfig::new("tags").with_triggers(triggers));
        let mut component = TagFieldComponent::new();
        component.sync_focus(&mut state);

        type_text(&mut component, &mut state, "abc");
        assert!(!component.handle_key_event(&mut state, key(KeyCode::Enter)));

        assert!(state.values().is_empty());
        assert_eq!(state.draft().text(), "abc");
    }

    #[test]
    fn losing_focus_commits_draft_when_blur_enabled() {
        let calls: Rc<RefCell<Vec<(String, Vec<String>)>>> = Rc::default();
        let sink = Rc::clone(&calls);
        let triggers = TriggerSet::default().with_commit_on_blur(true);
        let mut state = focused_state(TagFieldConfig::new("tags").with_triggers(triggers)).with_hooks(
            TagFieldHooks::new().on_tag_added(move |value, snapshot| {
                sink.borrow_mut().push((value.to_string(), snapshot.to_vec()));
            }),
        );
        let mut component = TagFieldComponent::new();
        component.sync_focus(&mut state);

        type_text(&mut component, &mut state, "test");
        state.f_input.set(false);
        component.sync_focus(&mut state);

        assert_eq!(state.values(), ["test"]);
        assert_eq!(
            calls.borrow().as_slice(),
            [("test".to_string(), vec!["test".to_string()])]
        );
    }

    #[test]
    fn losing_focus_without_blur_trigger_keeps_draft() {
        let mut state = focused_state(TagFieldConfig::new("tags"));
        let mut component = TagFieldComponent::new();
        component.sync_focus(&mut state);

        type_text(&mut component, &mut state, "pending");
        state.f_input.set(false);
        component.sync_focus(&mut state);

        assert!(state.values().is_empty());
        assert_eq!(state.draft().text(), "pending");
    }

    #[test]
    fn trigger_key_is_consumed_even_when_rejected() {
        let mut state = focused_state(TagFieldConfig::new("tags"));
        let mut component = TagFieldComponent::new();

        // Empty draft: the commit is rejected, but Enter must not leak to
        // the surrounding application.
        assert!(component.handle_key_event(&mut state, key(KeyCode::Enter)));
        assert!(state.values().is_empty());
    }

    #[test]
    fn keys_are_ignored_without_focus() {
        let mut state = TagFieldState::new(TagFieldConfig::new("tags"));
        let mut component = TagFieldComponent::new();

        assert!(!component.handle_key_event(&mut state, key(KeyCode::Char('x'))));
        assert!(state.draft().is_empty());
    }

    #[test]
    fn click_on_removal_control_removes_that_row() {
        let removed: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = Rc::clone(&removed);
        let config = TagFieldConfig::new("tags").with_seed_values(vec!["1".into(), "2".into()]);
        let mut state = TagFieldState::new(config)
            .with_hooks(TagFieldHooks::new().on_tag_removed(move |value, _| sink.borrow_mut().push(value.to_string())));
        state.set_layout(TagFieldLayout {
            input_area: Some(Rect::new(0, 0, 10, 1)),
            remove_areas: vec![Rect::new(2, 1, 1, 1), Rect::new(2, 2, 1, 1)],
        });
        let mut component = TagFieldComponent::new();
        let focus = rat_focus::FocusBuilder::build_for(&state);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert!(component.handle_mouse_event(&mut state, click, &focus));

        assert_eq!(state.values(), ["2"]);
        assert_eq!(removed.borrow().as_slice(), ["1"]);
    }

    #[test]
    fn click_in_input_area_focuses_the_field() {
        let mut state = TagFieldState::new(TagFieldConfig::new("tags"));
        state.set_layout(TagFieldLayout {
            input_area: Some(Rect::new(0, 0, 10, 1)),
            remove_areas: Vec::new(),
        });
        let mut component = TagFieldComponent::new();
        let focus = rat_focus::FocusBuilder::build_for(&state);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(component.handle_mouse_event(&mut state, click, &focus));
        assert!(state.is_focused());
    }

    #[test]
    fn release_events_are_still_plain_presses() {
        // KeyEvent::new defaults to Press; the router does not need to
        // distinguish kinds, but the assumption is worth pinning.
        assert_eq!(key(KeyCode::Enter).kind, KeyEventKind::Press);
    }
}
