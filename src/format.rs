//! Deterministic locale-aware formatting for numbers and timestamps.
//!
//! No platform locale tables are consulted: every convention lives in the
//! match tables below, so the same value formats to the same bytes on every
//! device. That determinism is what lets snapshot tests pin exact output.
//!
//! Timestamps come in two named configurations. Market time is the exchange
//! clock, fixed at UTC+9 (JST has no daylight saving, so a fixed offset is
//! exact); local time follows the viewer's zone. Data surfaces use market
//! time so every user sees the same quote timestamp.

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::language::Language;

/// The exchange clock offset: UTC+9.
pub fn market_offset() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

/// Currencies the app displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Japanese yen: whole units, no fraction digits.
    Jpy,
    /// US dollar: exactly two fraction digits.
    Usd,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Jpy => "JPY",
            Currency::Usd => "USD",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Currency::Jpy => "¥",
            Currency::Usd => "$",
        }
    }
}

/// The formatting contract applied to a number.
///
/// Exactly one style is chosen per call site; there is no implicit
/// per-surface default that can drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// Grouped digits with up to two fraction digits; trailing zeros are
    /// dropped (`12345.67` -> "12,345.67", `12345.0` -> "12,345").
    Decimal,
    /// Currency symbol before the digits, with the currency's standard
    /// fraction digits (yen whole, dollars two).
    Currency(Currency),
}

/// Digit-grouping scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// Groups of three: `1,234,567`.
    Western,
    /// Rightmost group of three, then twos: `12,34,567`.
    Indian,
}

struct Convention {
    group: &'static str,
    decimal: &'static str,
    grouping: Grouping,
    eastern_arabic_digits: bool,
}

fn convention(language: Language) -> Convention {
    match language {
        Language::Ja | Language::En | Language::Zh | Language::Ko => Convention {
            group: ",",
            decimal: ".",
            grouping: Grouping::Western,
            eastern_arabic_digits: false,
        },
        Language::De | Language::Es | Language::Pt => Convention {
            group: ".",
            decimal: ",",
            grouping: Grouping::Western,
            eastern_arabic_digits: false,
        },
        Language::Fr => Convention {
            // No-break space, the French grouping separator.
            group: "\u{00A0}",
            decimal: ",",
            grouping: Grouping::Western,
            eastern_arabic_digits: false,
        },
        Language::Hi => Convention {
            group: ",",
            decimal: ".",
            grouping: Grouping::Indian,
            eastern_arabic_digits: false,
        },
        Language::Ar => Convention {
            group: "\u{066C}",
            decimal: "\u{066B}",
            grouping: Grouping::Western,
            eastern_arabic_digits: true,
        },
    }
}

/// Locale-aware number formatter.
///
/// A `Copy` value: language plus [`NumberStyle`]. Pure, so instances can be
/// cached and shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    language: Language,
    style: NumberStyle,
}

impl NumberFormat {
    /// Plain decimal formatter for a language.
    pub fn new(language: Language) -> Self {
        NumberFormat {
            language,
            style: NumberStyle::Decimal,
        }
    }

    /// Currency formatter for a language.
    pub fn currency(language: Language, currency: Currency) -> Self {
        NumberFormat {
            language,
            style: NumberStyle::Currency(currency),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn style(&self) -> NumberStyle {
        self.style
    }

    /// Formats a value with this formatter's convention.
    ///
    /// Deterministic: same value, same configuration, same bytes, on every
    /// platform. Non-finite values render as `Display` prints them.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let (min_frac, max_frac) = match self.style {
            NumberStyle::Decimal => (0, 2),
            NumberStyle::Currency(Currency::Jpy) => (0, 0),
            NumberStyle::Currency(Currency::Usd) => (2, 2),
        };

        let rounded = format!("{:.*}", max_frac, value.abs());
        let (int_digits, frac_digits) = match rounded.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (rounded.as_str(), ""),
        };

        // Trim trailing zeros, but never below the style's minimum.
        let mut frac_end = frac_digits.len();
        while frac_end > min_frac && frac_digits.as_bytes()[frac_end - 1] == b'0' {
            frac_end -= 1;
        }
        let frac = &frac_digits[..frac_end];

        let negative = value < 0.0 && rounded.bytes().any(|b| (b'1'..=b'9').contains(&b));
        let conv = convention(self.language);

        let mut out = String::with_capacity(rounded.len() + 8);
        if negative {
            out.push('-');
        }
        if let NumberStyle::Currency(currency) = self.style {
            out.push_str(currency.symbol());
        }
        group_digits(int_digits, conv.group, conv.grouping, &mut out);
        if !frac.is_empty() {
            out.push_str(conv.decimal);
            out.push_str(frac);
        }

        if conv.eastern_arabic_digits {
            to_eastern_arabic(&out)
        } else {
            out
        }
    }
}

/// Appends `int_digits` to `out` with group separators inserted.
fn group_digits(int_digits: &str, separator: &str, grouping: Grouping, out: &mut String) {
    let len = int_digits.len();
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && separator_before(len - i, grouping) {
            out.push_str(separator);
        }
        out.push(ch);
    }
}

/// True if a separator belongs before a digit with `remaining` digits left
/// (the digit itself included).
fn separator_before(remaining: usize, grouping: Grouping) -> bool {
    match grouping {
        Grouping::Western => remaining % 3 == 0,
        Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}

/// Maps ASCII digits to Eastern Arabic digits, leaving everything else
/// (separators, signs) untouched.
fn to_eastern_arabic(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                char::from_u32(0x0660 + (c as u32 - '0' as u32)).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Which clock a [`DateTimeFormat`] renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneSpec {
    /// The exchange clock: fixed UTC+9, independent of the host timezone.
    Market,
    /// The viewer's local clock.
    Local,
}

/// Locale-aware date-time formatter, always on the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFormat {
    language: Language,
    zone: TimeZoneSpec,
}

impl DateTimeFormat {
    /// Formatter pinned to the exchange clock (UTC+9).
    ///
    /// Every data surface uses this one so quote timestamps read the same
    /// for every user.
    pub fn market_time(language: Language) -> Self {
        DateTimeFormat {
            language,
            zone: TimeZoneSpec::Market,
        }
    }

    /// Formatter on the viewer's local clock.
    pub fn local_time(language: Language) -> Self {
        DateTimeFormat {
            language,
            zone: TimeZoneSpec::Local,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn zone(&self) -> TimeZoneSpec {
        self.zone
    }

    /// Renders a full date plus time, minute precision.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        self.render(instant, date_time_pattern(self.language))
    }

    /// Renders the time only (`HH:MM`), for compact badges.
    pub fn format_time(&self, instant: DateTime<Utc>) -> String {
        self.render(instant, "%H:%M")
    }

    fn render(&self, instant: DateTime<Utc>, pattern: &str) -> String {
        let rendered = match self.zone {
            TimeZoneSpec::Market => instant
                .with_timezone(&market_offset())
                .format(pattern)
                .to_string(),
            TimeZoneSpec::Local => instant.with_timezone(&Local).format(pattern).to_string(),
        };
        if convention(self.language).eastern_arabic_digits {
            to_eastern_arabic(&rendered)
        } else {
            rendered
        }
    }
}

/// Numeric date plus 24-hour time, per language.
///
/// Months are numeric everywhere (no localized month-name tables to drift);
/// the CJK patterns carry their date-unit characters.
fn date_time_pattern(language: Language) -> &'static str {
    match language {
        Language::Ja | Language::Zh => "%Y年%-m月%-d日 %H:%M",
        Language::Ko => "%Y년 %-m월 %-d일 %H:%M",
        Language::En => "%-m/%-d/%Y, %H:%M",
        Language::De => "%-d.%-m.%Y, %H:%M",
        Language::Es | Language::Pt | Language::Hi => "%-d/%-m/%Y, %H:%M",
        Language::Fr => "%d/%m/%Y %H:%M",
        Language::Ar => "%-d/%-m/%Y، %H:%M",
    }
}

/// The derived formatter bundle for a language: plain numbers plus the
/// market-time clock. Pure, so pairs can be cached per language and shared.
#[derive(Debug, Clone, Copy)]
pub struct FormatterPair {
    pub number: NumberFormat,
    pub date_time: DateTimeFormat,
}

impl FormatterPair {
    pub fn for_language(language: Language) -> Self {
        FormatterPair {
            number: NumberFormat::new(language),
            date_time: DateTimeFormat::market_time(language),
        }
    }

    pub fn language(&self) -> Language {
        self.number.language()
    }
}
