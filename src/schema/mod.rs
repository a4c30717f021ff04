pub mod field_name;
pub use field_name::*;

pub mod field;
pub use field::*;

pub mod sql_type;
pub use sql_type::*;

pub mod type_error;
pub use type_error::*;
