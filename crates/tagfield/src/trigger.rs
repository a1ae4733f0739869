//! Commit trigger configuration and evaluation.

use crossterm::event::KeyCode;

/// A single input occurrence that may attempt a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    /// A key press with the given code.
    Key(KeyCode),
    /// The input field losing focus.
    Blur,
}

/// The configured set of triggers, fixed for the widget's lifetime.
///
/// Defaults to Enter and `','` with blur disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSet {
    keys: Vec<KeyCode>,
    commit_on_blur: bool,
}

impl Default for TriggerSet {
    fn default() -> Self {
        Self {
            keys: vec![KeyCode::Enter, KeyCode::Char(',')],
            commit_on_blur: false,
        }
    }
}

impl TriggerSet {
    pub fn with_keys(mut self, keys: Vec<KeyCode>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_commit_on_blur(mut self, enabled: bool) -> Self {
        self.commit_on_blur = enabled;
        self
    }

    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    pub fn commit_on_blur(&self) -> bool {
        self.commit_on_blur
    }

    /// Pure predicate: does this input occurrence attempt a commit?
    ///
    /// The caller is responsible for actually committing the draft and for
    /// consuming the originating event when this returns `true`.
    pub fn should_commit(&self, trigger: &CommitTrigger) -> bool {
        match trigger {
            CommitTrigger::Key(code) => self.keys.contains(code),
            CommitTrigger::Blur => self.commit_on_blur,
        }
    }
}
