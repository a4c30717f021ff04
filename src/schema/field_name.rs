use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::FormatOptions;

/// The identity of a field: an optional qualifying source plus a local name.
///
/// The qualifier is the alias or relation the field originates from
/// (e.g. `orders` in `orders.id`); unqualified names carry no source at all.
/// Values are immutable: re-qualification goes through [`FieldName::with_source`],
/// which returns a new value and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldName {
    source: Option<String>,
    name: String,
}

impl FieldName {
    pub fn new(source: Option<String>, name: impl Into<String>) -> FieldName {
        FieldName { source, name: name.into() }
    }

    pub fn unqualified(name: impl Into<String>) -> FieldName {
        FieldName::new(None, name)
    }

    pub fn qualified(source: impl Into<String>, name: impl Into<String>) -> FieldName {
        FieldName::new(Some(source.into()), name)
    }

    /// The bare local name, without any qualifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The dotted `source.name` form, or the bare name when unqualified.
    /// Neither part is trimmed or escaped.
    pub fn full_name(&self) -> String {
        match &self.source {
            Some(source) => format!("{}.{}", source, self.name),
            None => self.name.clone(),
        }
    }

    /// A new name with the qualifier replaced by `source`.
    ///
    /// A qualifier can only be set, never cleared back to absent.
    pub fn with_source(&self, source: impl Into<String>) -> FieldName {
        FieldName {
            source: Some(source.into()),
            name: self.name.clone(),
        }
    }

    /// Render under a formatting policy. Source and name are escaped
    /// independently, then joined with `.`.
    pub fn to_display(&self, options: &FormatOptions) -> String {
        match &self.source {
            Some(source) => format!("{}.{}", options.escape(source), options.escape(&self.name)),
            None => options.escape(&self.name).into_owned(),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display(&FormatOptions::none()))
    }
}
