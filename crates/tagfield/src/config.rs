//! Construction-time configuration for the tag field.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::trigger::TriggerSet;

/// Immutable per-instance configuration.
///
/// `field_name` is required and identifies the input field (it also names
/// the widget's focus flag). Everything else has a sensible default and can
/// be layered on with the `with_*` setters.
#[derive(Debug, Clone)]
pub struct TagFieldConfig {
    field_name: String,
    seed_values: Vec<String>,
    triggers: TriggerSet,
    placeholder: Option<String>,
    label: Option<String>,
    remove_glyph: Cow<'static, str>,
    field_attributes: IndexMap<String, String>,
}

impl TagFieldConfig {
    pub fn new<S: Into<String>>(field_name: S) -> Self {
        Self {
            field_name: field_name.into(),
            seed_values: Vec::new(),
            triggers: TriggerSet::default(),
            placeholder: None,
            label: None,
            remove_glyph: Cow::Borrowed("×"),
            field_attributes: IndexMap::new(),
        }
    }

    pub fn with_seed_values(mut self, values: Vec<String>) -> Self {
        self.seed_values = values;
        self
    }

    pub fn with_triggers(mut self, triggers: TriggerSet) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_remove_glyph(mut self, glyph: Cow<'static, str>) -> Self {
        self.remove_glyph = glyph;
        self
    }

    /// Attach an opaque attribute forwarded verbatim with the field.
    ///
    /// The widget never interprets these; they exist so embedding code can
    /// hang arbitrary metadata off the input field.
    pub fn with_field_attribute<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.field_attributes.insert(name.into(), value.into());
        self
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn seed_values(&self) -> &[String] {
        &self.seed_values
    }

    pub fn triggers(&self) -> &TriggerSet {
        &self.triggers
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn remove_glyph(&self) -> &str {
        &self.remove_glyph
    }

    pub fn field_attributes(&self) -> &IndexMap<String, String> {
        &self.field_attributes
    }
}
