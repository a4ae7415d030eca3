use std::io;
use std::path::Path;

use bytes::Bytes;
use chrono::{DateTime, Local};

/// Placeholder replaced with the current time.
pub const TIME_TOKEN: &str = "{time}";

/// ISO-8601 local date-time with nanoseconds, e.g. `2024-05-01T09:30:12.000123456`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9f";

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Replaces every literal occurrence of [`TIME_TOKEN`].
pub fn substitute(template: &str, timestamp: &str) -> String {
    template.replace(TIME_TOKEN, timestamp)
}

/// Reads the template at `location` and stamps it with the current time.
pub async fn render(location: &Path) -> io::Result<Bytes> {
    render_at(location, &Local::now()).await
}

/// Reads the template at `location` and stamps it with `at`.
///
/// The file is re-read on every call and loaded fully into memory.
pub async fn render_at(location: &Path, at: &DateTime<Local>) -> io::Result<Bytes> {
    let template = tokio::fs::read_to_string(location).await?;
    let rendered = substitute(&template, &format_timestamp(at));
    Ok(Bytes::from(rendered))
}
