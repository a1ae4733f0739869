//! Caller-owned hooks, the widget's only output channel besides the view.

use std::fmt;

/// Hook signature: the affected value plus an owned snapshot of the
/// collection after the mutation. Snapshots keep callers from reaching into
/// widget-internal state.
pub type TagHook = Box<dyn FnMut(&str, &[String])>;

/// Optional add/remove notifications, invoked synchronously.
///
/// `on_tag_added` fires exactly once per successful commit, after the value
/// is appended; `on_tag_removed` fires exactly once per successful removal
/// with the post-removal snapshot. Rejected commits and absent-value
/// removals fire nothing.
#[derive(Default)]
pub struct TagFieldHooks {
    on_tag_added: Option<TagHook>,
    on_tag_removed: Option<TagHook>,
}

impl TagFieldHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tag_added<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&str, &[String]) + 'static,
    {
        self.on_tag_added = Some(Box::new(hook));
        self
    }

    pub fn on_tag_removed<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&str, &[String]) + 'static,
    {
        self.on_tag_removed = Some(Box::new(hook));
        self
    }

    pub(crate) fn notify_added(&mut self, value: &str, snapshot: &[String]) {
        if let Some(hook) = self.on_tag_added.as_mut() {
            hook(value, snapshot);
        }
    }

    pub(crate) fn notify_removed(&mut self, value: &str, snapshot: &[String]) {
        if let Some(hook) = self.on_tag_removed.as_mut() {
            hook(value, snapshot);
        }
    }
}

impl fmt::Debug for TagFieldHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagFieldHooks")
            .field("on_tag_added", &self.on_tag_added.is_some())
            .field("on_tag_removed", &self.on_tag_removed.is_some())
            .finish()
    }
}
