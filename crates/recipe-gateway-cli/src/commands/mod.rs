pub mod completions;
pub mod schema;
pub mod serve;
