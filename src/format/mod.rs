pub mod format_options;
pub use format_options::*;

pub mod escaping;
pub use escaping::*;
