//! Duration literals of the form `3h00m`.
//!
//! Accepts an hour group and a minute group in that order, each optional:
//! `0h50m`, `3h00m`, `45m`, `2h`. Seconds and fractions are not part of
//! the format.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::{DurationIssue, TrackerError, TrackerResult};

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?$").expect("duration regex is valid")
});

/// Parse a duration literal and require it to be positive.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidDuration`] when the literal does not
/// match the grammar, overflows, or adds up to zero.
pub fn parse_duration(raw: &str) -> TrackerResult<Duration> {
    let unparsable = || TrackerError::InvalidDuration(DurationIssue::Unparsable(raw.to_string()));

    if raw.is_empty() {
        return Err(unparsable());
    }
    let caps = DURATION_RE.captures(raw).ok_or_else(unparsable)?;

    let mut total: u64 = 0;
    for (group, unit_secs) in [(1, 3600u64), (2, 60)] {
        let Some(m) = caps.get(group) else {
            continue;
        };
        let value: u64 = m.as_str().parse().map_err(|_| unparsable())?;
        total = value
            .checked_mul(unit_secs)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(unparsable)?;
    }

    if total == 0 {
        return Err(TrackerError::InvalidDuration(DurationIssue::NonPositive));
    }
    Ok(Duration::from_secs(total))
}
