//! State container for the tag field: committed values, draft, and hooks.
//!
//! Every mutation of the collection goes through [`TagFieldState`]. A commit
//! attempt is total and synchronous: it either appends the candidate and
//! fires the add hook, or silently rejects it. Rejection is policy, not an
//! error, so nothing here returns `Result`.

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::config::TagFieldConfig;
use crate::draft::DraftState;
use crate::hooks::TagFieldHooks;

/// Outcome of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The candidate was appended and the add hook fired.
    Committed,
    /// Empty or duplicate candidate; nothing changed, no hook fired.
    Rejected,
}

/// Hit-test areas recorded by the most recent render.
#[derive(Debug, Clone, Default)]
pub struct TagFieldLayout {
    pub input_area: Option<Rect>,
    /// One area per committed value, aligned with the value list; rows
    /// scrolled out of view carry an empty area.
    pub remove_areas: Vec<Rect>,
}

#[derive(Debug)]
pub struct TagFieldState {
    pub f_input: FocusFlag,

    config: TagFieldConfig,
    hooks: TagFieldHooks,
    values: Vec<String>,
    draft: DraftState,
    layout: TagFieldLayout,
}

impl TagFieldState {
    /// Builds the state from its configuration, copying the seed values.
    pub fn new(config: TagFieldConfig) -> Self {
        Self {
            f_input: FocusFlag::named(config.field_name()),
            values: config.seed_values().to_vec(),
            draft: DraftState::new(),
            hooks: TagFieldHooks::default(),
            layout: TagFieldLayout::default(),
            config,
        }
    }

    pub fn with_hooks(mut self, hooks: TagFieldHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn config(&self) -> &TagFieldConfig {
        &self.config
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Owned copy of the collection, as handed to hooks.
    pub fn snapshot(&self) -> Vec<String> {
        self.values.clone()
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftState {
        &mut self.draft
    }

    /// Replaces the draft text unconditionally; validation happens only at
    /// commit time.
    pub fn set_draft<S: Into<String>>(&mut self, text: S) {
        self.draft.set_text(text);
    }

    pub fn is_focused(&self) -> bool {
        self.f_input.get()
    }

    pub fn layout(&self) -> &TagFieldLayout {
        &self.layout
    }

    pub(crate) fn set_layout(&mut self, layout: TagFieldLayout) {
        self.layout = layout;
    }

    /// Attempts to commit `candidate` as a new tag.
    ///
    /// The draft is cleared on every attempt, accepted or rejected. Empty
    /// and duplicate candidates are rejected without notifying anyone; a
    /// second submission of the same value is therefore a no-op.
    pub fn attempt_commit<S: Into<String>>(&mut self, candidate: S) -> CommitOutcome {
        let candidate = candidate.into();
        self.draft.clear();

        if candidate.is_empty() || self.values.iter().any(|value| *value == candidate) {
            tracing::trace!(candidate = %candidate, "tag commit rejected");
            return CommitOutcome::Rejected;
        }

        self.values.push(candidate.clone());
        tracing::debug!(value = %candidate, total = self.values.len(), "tag committed");
        let snapshot = self.values.clone();
        self.hooks.notify_added(&candidate, &snapshot);
        CommitOutcome::Committed
    }

    /// Drains the draft and attempts to commit it.
    pub fn commit_draft(&mut self) -> CommitOutcome {
        let candidate = self.draft.take();
        self.attempt_commit(candidate)
    }

    /// Removes `value` if present. Absent values are a silent no-op: the
    /// collection is unchanged and the remove hook is not invoked.
    pub fn remove(&mut self, value: &str) -> bool {
        let Some(index) = self.values.iter().position(|v| v == value) else {
            return false;
        };
        self.remove_at(index)
    }

    /// Removes the value at `index`; used by the mouse path where the hit
    /// test already identified the row.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            return false;
        }
        let removed = self.values.remove(index);
        tracing::debug!(value = %removed, total = self.values.len(), "tag removed");
        let snapshot = self.values.clone();
        self.hooks.notify_removed(&removed, &snapshot);
        true
    }
}

impl HasFocus for TagFieldState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(&self.f_input);
    }

    fn focus(&self) -> FocusFlag {
        self.f_input.clone()
    }

    fn area(&self) -> Rect {
        self.layout.input_area.unwrap_or_default()
    }
}
