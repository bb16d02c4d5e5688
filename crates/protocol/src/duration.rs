//! Time-remaining calculation for card time tracking.
//!
//! Cards carry two free-form strings, `allotted` and `spent`, that usually
//! look like `"60min"`. They are never validated. This module derives the
//! summary shown in the card header from them:
//!
//! - both present and the difference is a non-zero number: `"Left: 35 min"`
//! - anything else: the `allotted` string verbatim, if any
//!
//! A malformed duration never panics. [`time_left`] reports it as
//! [`ProtocolError::InvalidDuration`] for callers that want to tell it apart,
//! while [`time_summary`] falls back to the verbatim allotted time.
//!
//! # Examples
//!
//! ```
//! use lanecard_protocol::duration::time_summary;
//!
//! assert_eq!(
//!     time_summary(Some("60min"), Some("25min")).as_deref(),
//!     Some("Left: 35 min")
//! );
//! assert_eq!(time_summary(Some("60min"), Some("")).as_deref(), Some("60min"));
//! assert_eq!(time_summary(Some("abcmin"), Some("10min")).as_deref(), Some("abcmin"));
//! ```

use crate::error::{ProtocolError, Result};

/// Unit marker that ends the numeric part of a duration.
pub const MINUTES_MARKER: &str = "min";

/// Extracts the number of minutes from a duration string.
///
/// The numeric part is everything before the first `"min"` (case-sensitive),
/// or the whole string when there is no marker. It is read as a leading
/// base-10 integer: leading whitespace and a sign are accepted and anything
/// after the digits is ignored, so `"1h30"` reads as `1`.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDuration`] if the numeric part has no
/// leading digits or does not fit in an `i64`. Oversized numbers are
/// rejected rather than approximated, so a card showing one falls back to
/// its allotted string instead of an imprecise `"Left: ..."`.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::duration::parse_minutes;
///
/// assert_eq!(parse_minutes("30min").unwrap(), 30);
/// assert_eq!(parse_minutes(" 45 minutes").unwrap(), 45);
/// assert_eq!(parse_minutes("90").unwrap(), 90);
/// assert!(parse_minutes("soon").is_err());
/// ```
pub fn parse_minutes(input: &str) -> Result<i64> {
    let numeric = input
        .find(MINUTES_MARKER)
        .map_or(input, |idx| &input[..idx]);

    parse_leading_int(numeric).ok_or_else(|| ProtocolError::InvalidDuration(input.to_string()))
}

/// Reads an optionally signed integer from the start of `s`.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, unsigned) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Computes the minutes left from `allotted` and `spent`.
///
/// Returns `None` when either value is absent or empty. Otherwise returns
/// the difference, or [`ProtocolError::InvalidDuration`] when either side
/// cannot be read as minutes.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::duration::time_left;
///
/// assert_eq!(time_left(Some("60min"), Some("25min")).unwrap().unwrap(), 35);
/// assert!(time_left(Some("60min"), None).is_none());
/// assert!(time_left(Some("abcmin"), Some("10min")).unwrap().is_err());
/// ```
#[must_use]
pub fn time_left(allotted: Option<&str>, spent: Option<&str>) -> Option<Result<i64>> {
    let allotted = allotted.filter(|s| !s.is_empty())?;
    let spent = spent.filter(|s| !s.is_empty())?;

    let left = parse_minutes(allotted).and_then(|allotted_mins| {
        let spent_mins = parse_minutes(spent)?;
        allotted_mins
            .checked_sub(spent_mins)
            .ok_or_else(|| ProtocolError::InvalidDuration(spent.to_string()))
    });
    Some(left)
}

/// Returns the text shown in the time region of a card.
///
/// A non-zero [`time_left`] is rendered as `"Left: {n} min"`. Zero, an
/// invalid duration, or a missing value fall back to `allotted` verbatim.
#[must_use]
pub fn time_summary(allotted: Option<&str>, spent: Option<&str>) -> Option<String> {
    match time_left(allotted, spent) {
        Some(Ok(left)) if left != 0 => Some(format!("Left: {left} min")),
        _ => allotted.map(str::to_string),
    }
}
