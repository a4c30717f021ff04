use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::format::FormatOptions;
use crate::schema::{FieldName, SqlType};

/// A named, typed field within a schema.
///
/// A field exclusively owns its [`FieldName`] and shares its [`SqlType`]
/// descriptor by `Arc`; re-qualification via [`Field::with_source`] produces
/// a new field over the same descriptor. Two fields naming the same column
/// under different qualifiers are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    name: FieldName,
    ty: Arc<SqlType>,
}

impl Field {
    pub fn new(name: FieldName, ty: Arc<SqlType>) -> Field {
        Field { name, ty }
    }

    /// An unqualified field.
    pub fn of(name: impl Into<String>, ty: SqlType) -> Field {
        Field::new(FieldName::unqualified(name), Arc::new(ty))
    }

    /// A field qualified by its originating source.
    pub fn qualified(source: impl Into<String>, name: impl Into<String>, ty: SqlType) -> Field {
        Field::new(FieldName::qualified(source, name), Arc::new(ty))
    }

    pub fn field_name(&self) -> &FieldName {
        &self.name
    }

    /// The fully qualified field name.
    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    /// The name of the field, without any source qualifier.
    pub fn name(&self) -> &str {
        self.name.name()
    }

    pub fn sql_type(&self) -> &SqlType {
        &self.ty
    }

    /// A new field matching the current one, but qualified by `source`.
    /// The type descriptor is shared with the original, not copied.
    pub fn with_source(&self, source: impl Into<String>) -> Field {
        let source = source.into();
        trace!(field = %self.full_name(), source = %source, "requalifying field");

        Field {
            name: self.name.with_source(source),
            ty: Arc::clone(&self.ty),
        }
    }

    /// Render as `<name> <type>` under a formatting policy.
    pub fn to_display(&self, options: &FormatOptions) -> String {
        format!("{} {}", self.name.to_display(options), self.ty.to_display(options))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display(&FormatOptions::none()))
    }
}
