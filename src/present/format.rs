//! Locale-aware display formatting
//!
//! Every formatter here is total: absent or unparsable input degrades to a
//! fixed placeholder instead of failing the render.

use chrono::Datelike;

use crate::consts::{HOURS_UNIT, MINUTES_UNIT, TIME_PLACEHOLDER, TYPING_CHARS_PER_MINUTE};
use crate::error::AppError;
use crate::utils::Timezone;

/// Genitive month names, as used after a day number ("5 марта")
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NumberFormat {
    group_sep: char,
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_sep: ' ',
            decimal_sep: ',',
        }
    }
}

impl NumberFormat {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(NumberFormat::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NumberFormat::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        let format = match base.as_str() {
            "ru" | "fr" => NumberFormat::default(),
            "de" => NumberFormat {
                group_sep: '.',
                decimal_sep: ',',
            },
            "en" | "zh" => NumberFormat {
                group_sep: ',',
                decimal_sep: '.',
            },
            _ => {
                return Err(AppError::UnsupportedLocale {
                    input: trimmed.to_string(),
                });
            }
        };

        Ok(format)
    }

    fn group(self, digits: &str) -> String {
        let mut result = String::new();
        for (i, c) in digits.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push(self.group_sep);
            }
            result.push(c);
        }
        result.chars().rev().collect()
    }
}

/// Minutes needed to type `chars` characters at the assumed typing speed
pub(crate) fn estimate_typing_minutes(chars: u64) -> u64 {
    chars.div_ceil(TYPING_CHARS_PER_MINUTE)
}

/// First `HH:MM` run inside `raw`
fn find_clock(raw: &str) -> Option<&str> {
    raw.as_bytes()
        .windows(5)
        .position(|w| {
            w[0].is_ascii_digit()
                && w[1].is_ascii_digit()
                && w[2] == b':'
                && w[3].is_ascii_digit()
                && w[4].is_ascii_digit()
        })
        .map(|i| &raw[i..i + 5])
}

/// Formatting rules for one render: number separators plus the zone
/// timestamps are shown in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Formatter {
    number: NumberFormat,
    timezone: Timezone,
}

impl Formatter {
    pub(crate) fn new(number: NumberFormat, timezone: Timezone) -> Self {
        Self { number, timezone }
    }

    pub(crate) fn int(&self, n: u64) -> String {
        self.number.group(&n.to_string())
    }

    /// One fractional digit at most; a zero fraction is dropped
    pub(crate) fn float(&self, value: f64) -> String {
        if !value.is_finite() {
            return "0".to_string();
        }
        let tenths = (value.abs() * 10.0).round() as u64;
        let sign = if value < 0.0 && tenths > 0 { "-" } else { "" };
        let whole = self.int(tenths / 10);
        match tenths % 10 {
            0 => format!("{sign}{whole}"),
            frac => format!("{sign}{whole}{}{frac}", self.number.decimal_sep),
        }
    }

    pub(crate) fn time(&self, timestamp: Option<&str>) -> String {
        let Some(raw) = timestamp else {
            return TIME_PLACEHOLDER.to_string();
        };
        if let Some(dt) = self.timezone.wall_clock(raw) {
            return dt.format("%H:%M").to_string();
        }
        find_clock(raw).unwrap_or(raw).to_string()
    }

    pub(crate) fn day_month(&self, timestamp: Option<&str>) -> String {
        let Some(raw) = timestamp else {
            return String::new();
        };
        match self.timezone.wall_clock(raw) {
            Some(dt) => format!("{} {}", dt.day(), MONTHS_GENITIVE[dt.month0() as usize]),
            None => raw.to_string(),
        }
    }

    /// Calendar year of a timestamp in the display zone
    pub(crate) fn year_of(&self, timestamp: &str) -> Option<i32> {
        self.timezone.wall_clock(timestamp).map(|dt| dt.year())
    }

    /// Whole minutes from `from` to `to`, never negative
    pub(crate) fn elapsed_minutes(&self, from: Option<&str>, to: Option<&str>) -> u64 {
        let (Some(from), Some(to)) = (
            from.and_then(|raw| self.timezone.wall_clock(raw)),
            to.and_then(|raw| self.timezone.wall_clock(raw)),
        ) else {
            return 0;
        };
        let millis = (to - from).num_milliseconds().max(0);
        (millis as f64 / 60_000.0).round() as u64
    }

    pub(crate) fn duration(&self, from: Option<&str>, to: Option<&str>) -> String {
        let total = self.elapsed_minutes(from, to);
        let hours = total / 60;
        let minutes = total % 60;
        match (hours, minutes) {
            (0, m) => format!("{m} {MINUTES_UNIT}"),
            (h, 0) => format!("{h} {HOURS_UNIT}"),
            (h, m) => format!("{h} {HOURS_UNIT} {m} {MINUTES_UNIT}"),
        }
    }

    pub(crate) fn minutes(&self, minutes: u64) -> String {
        format!("{} {MINUTES_UNIT}", self.int(minutes))
    }

    pub(crate) fn typing_time(&self, chars: u64) -> String {
        self.minutes(estimate_typing_minutes(chars))
    }
}
