//! Time window validation.
//!
//! The analytics service accepts `now`, relative offsets such as
//! `now-1d` or `now-12h`, and Unix timestamps in seconds. Expressions are
//! validated here and forwarded unchanged.

use crate::utils::error::InputError;
use chrono::{DateTime, Duration, Months, Utc};

/// Unit of a relative offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl OffsetUnit {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            's' => Self::Seconds,
            'm' => Self::Minutes,
            'h' => Self::Hours,
            'd' => Self::Days,
            'w' => Self::Weeks,
            'M' => Self::Months,
            'y' => Self::Years,
            _ => return None,
        })
    }

    fn seconds(&self) -> Option<i64> {
        match self {
            Self::Seconds => Some(1),
            Self::Minutes => Some(60),
            Self::Hours => Some(3_600),
            Self::Days => Some(86_400),
            Self::Weeks => Some(604_800),
            Self::Months | Self::Years => None,
        }
    }
}

/// A parsed time expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeExpr {
    Now,
    Ago { amount: u32, unit: OffsetUnit },
    Timestamp(i64),
}

impl TimeExpr {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let invalid = || InputError::InvalidTimeExpression(raw.to_string());

        if let Some(rest) = raw.strip_prefix("now") {
            if rest.is_empty() {
                return Ok(Self::Now);
            }

            let offset = rest.strip_prefix('-').ok_or_else(invalid)?;
            let mut chars = offset.chars();
            let unit = chars
                .next_back()
                .and_then(OffsetUnit::from_char)
                .ok_or_else(invalid)?;
            let digits = chars.as_str();
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            let amount = digits.parse::<u32>().map_err(|_| invalid())?;

            return Ok(Self::Ago { amount, unit });
        }

        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            return raw.parse::<i64>().map(Self::Timestamp).map_err(|_| invalid());
        }

        Err(invalid())
    }

    /// Resolve against a fixed "now"
    pub fn resolve(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Now => Some(now),
            Self::Ago { amount, unit } => match unit {
                OffsetUnit::Months => now.checked_sub_months(Months::new(*amount)),
                OffsetUnit::Years => amount
                    .checked_mul(12)
                    .and_then(|months| now.checked_sub_months(Months::new(months))),
                _ => {
                    let secs = unit.seconds()?.checked_mul(i64::from(*amount))?;
                    now.checked_sub_signed(Duration::try_seconds(secs)?)
                }
            },
            Self::Timestamp(secs) => DateTime::from_timestamp(*secs, 0),
        }
    }
}

/// Validated start/end pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    /// Validate both expressions and their ordering against the current time
    pub fn new(start: &str, end: &str) -> Result<Self, InputError> {
        Self::new_at(start, end, Utc::now())
    }

    pub fn new_at(start: &str, end: &str, now: DateTime<Utc>) -> Result<Self, InputError> {
        let start_at = TimeExpr::parse(start)?
            .resolve(now)
            .ok_or_else(|| InputError::InvalidTimeExpression(start.to_string()))?;
        let end_at = TimeExpr::parse(end)?
            .resolve(now)
            .ok_or_else(|| InputError::InvalidTimeExpression(end.to_string()))?;

        if start_at > end_at {
            return Err(InputError::EmptyWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}
