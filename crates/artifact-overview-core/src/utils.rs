// SPDX-License-Identifier: Apache-2.0

//! Size and timestamp helpers for the overview report.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::OverviewError;

/// Timestamp layout GitHub uses for artifact `created_at`/`expires_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const BYTES_PER_GB: f64 = 1e9;
const BYTES_PER_MB: f64 = 1e6;

/// Formats a byte count as decimal megabytes or gigabytes with two decimals.
///
/// Counts of at least 10^9 bytes are shown in GB, everything else in MB.
/// Units are powers of ten, not powers of two.
///
/// # Examples
///
/// ```
/// use artifact_overview_core::utils::format_size;
///
/// assert_eq!(format_size(1_500_000_000), "1.50 GB");
/// assert_eq!(format_size(2_500_000), "2.50 MB");
/// ```
#[must_use]
pub fn format_size(size_in_bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes = size_in_bytes as f64;
    if bytes >= BYTES_PER_GB {
        format!("{:.2} GB", bytes / BYTES_PER_GB)
    } else {
        format!("{:.2} MB", bytes / BYTES_PER_MB)
    }
}

/// Parses a `YYYY-MM-DDTHH:MM:SSZ` timestamp as a UTC instant.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, OverviewError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| OverviewError::Timestamp {
            value: value.to_string(),
            source,
        })
}

/// Returns true if `now` is strictly after the expiration timestamp.
pub fn is_expired_at(expires_at: &str, now: DateTime<Utc>) -> Result<bool, OverviewError> {
    Ok(now > parse_timestamp(expires_at)?)
}

/// Returns true if the expiration timestamp is in the past.
pub fn is_expired(expires_at: &str) -> Result<bool, OverviewError> {
    is_expired_at(expires_at, Utc::now())
}
