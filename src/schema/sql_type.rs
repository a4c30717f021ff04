use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::format::FormatOptions;
use crate::schema::{Field, TypeError};

/// Descriptor of a field's value type.
///
/// Descriptors are immutable values; container variants share their element
/// descriptors through `Arc`, so cloning a deeply nested type is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    Boolean,
    Integer,
    BigInt,
    Double,
    String,
    Decimal { precision: u32, scale: u32 },
    Array(Arc<SqlType>),
    /// String-keyed map of the given value type.
    Map(Arc<SqlType>),
    /// Ordered member fields.
    Struct(Vec<Field>),
}

impl SqlType {
    /// Build a DECIMAL descriptor, validating its parameters.
    pub fn decimal(precision: u32, scale: u32) -> Result<SqlType, TypeError> {
        if precision == 0 {
            return TypeError::new("DECIMAL precision must be >= 1").err();
        }
        if scale > precision {
            return TypeError::new(format!(
                "DECIMAL scale {} cannot exceed precision {}",
                scale, precision
            ))
            .err();
        }

        Ok(SqlType::Decimal { precision, scale })
    }

    pub fn array(element: SqlType) -> SqlType {
        SqlType::Array(Arc::new(element))
    }

    pub fn map(value: SqlType) -> SqlType {
        SqlType::Map(Arc::new(value))
    }

    /// Render under a formatting policy. Member field names of STRUCT types
    /// go through the policy; type keywords are emitted as-is.
    pub fn to_display(&self, options: &FormatOptions) -> String {
        match self {
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Double => "DOUBLE".to_string(),
            SqlType::String => "STRING".to_string(),
            SqlType::Decimal { precision, scale } => format!("DECIMAL({}, {})", precision, scale),
            SqlType::Array(element) => format!("ARRAY<{}>", element.to_display(options)),
            SqlType::Map(value) => format!("MAP<STRING, {}>", value.to_display(options)),
            SqlType::Struct(fields) => {
                let members = fields
                    .iter()
                    .map(|field| field.to_display(options))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("STRUCT<{}>", members)
            }
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display(&FormatOptions::none()))
    }
}
