//! Typed source representation for the YAML message catalogue.
//!
//! These structs mirror the catalogue schema field-for-field. Every field is
//! optional on the wire: a missing key or an explicit `null` both decode to
//! the empty value, and unknown keys are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level structure of a message catalogue file.
///
/// Declaration order is preserved and drives the order of everything the
/// renderer emits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSet {
    /// Message definitions, in the order they were declared.
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<MessageDef>,
}

/// A single diagnostic message as authored in the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Identifier of the generated message value, e.g. `InternalError`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Stable error code, e.g. `IST0001`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Severity label, emitted as a selector on the diag package.
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,
    /// Human-readable explanation, only used in generated comments.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Message format string, passed through verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: String,
    /// Reference link. Accepted but never rendered.
    #[serde(default)]
    pub url: Option<String>,
    /// Extra constructor parameters, in declared order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub args: Vec<Arg>,
}

/// One extra parameter of a generated message constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    /// Parameter identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Go type reference, emitted as written.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub ty: String,
}

impl MessageSet {
    /// Number of message definitions.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalogue declares no messages at all.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate definitions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageDef> {
        self.messages.iter()
    }
}

impl From<Vec<MessageDef>> for MessageSet {
    fn from(messages: Vec<MessageDef>) -> Self {
        Self { messages }
    }
}

impl<'a> IntoIterator for &'a MessageSet {
    type Item = &'a MessageDef;
    type IntoIter = std::slice::Iter<'a, MessageDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl MessageDef {
    /// Name of the generated constructor function (`New<name>`).
    pub fn constructor_name(&self) -> String {
        format!("New{}", self.name)
    }
}

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
