pub mod schema;
pub use schema::{Field, FieldName, SqlType, TypeError};

pub mod format;
pub use format::FormatOptions;
