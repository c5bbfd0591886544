//! Shared text helpers used by list views and the CLI

pub mod date;
pub mod text;

pub use date::{format_date, parse_date_string, time_tag};
pub use text::truncate;
