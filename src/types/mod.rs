//! Common types used across the Gemini client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;

use time::OffsetDateTime;
use time::macros::format_description;

/// Format Unix seconds as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Out-of-range values are rendered as the raw number.
pub fn format_unix_seconds(seconds: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::from_unix_timestamp(seconds)
        .ok()
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_else(|| seconds.to_string())
}
