//! Utility modules.

mod time_message;

pub use time_message::format_time_message;
