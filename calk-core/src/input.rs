//! Form input sanitization.
//!
//! Calculator forms accept only unsigned decimal numbers. Anything else is
//! normalized to zero here so the formula engines never see it.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::WaterConfig;

static NUMERIC_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("numeric input pattern is valid"));

/// Returns `true` when `s` may be typed into an amount field: digits with at
/// most one decimal point. The empty string is accepted so a field can be
/// cleared.
pub fn is_numeric_input(s: &str) -> bool {
    NUMERIC_INPUT.is_match(s)
}

/// Parses an amount field.
///
/// Empty, malformed and negative input all yield zero. A leading or trailing
/// decimal point is accepted (`".5"`, `"12."`).
pub fn parse_amount(s: &str) -> Decimal {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    if !is_numeric_input(trimmed) {
        warn!(input = %s, "non-numeric amount treated as zero");
        return Decimal::ZERO;
    }

    let without_trailing_point = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let normalized = if without_trailing_point.starts_with('.') {
        format!("0{without_trailing_point}")
    } else {
        without_trailing_point.to_string()
    };
    if normalized.is_empty() {
        return Decimal::ZERO;
    }

    normalized.parse().unwrap_or_else(|e| {
        warn!(input = %s, "invalid amount treated as zero: {}", e);
        Decimal::ZERO
    })
}

/// Clamps a consumption volume to the accepted range.
pub fn clamp_volume(
    volume: Decimal,
    config: &WaterConfig,
) -> Decimal {
    volume.clamp(Decimal::ZERO, config.max_volume)
}
