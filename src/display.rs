//! Shared display strings for market-data surfaces.
//!
//! The screens used to assemble these lines themselves, each slightly
//! differently; the helpers here are the single implementation. All of them
//! are pure compositions of the translator and the formatters, so their
//! output is as deterministic as the formatters themselves.

use chrono::{DateTime, Utc};

use crate::context::I18n;

const TRILLION: f64 = 1.0e12;
const BILLION: f64 = 1.0e9;
const MILLION: f64 = 1.0e6;

/// Market capitalization scaled to the largest fitting unit, with the
/// localized unit word (`1.5 兆`, `3.2 billion`). Below a million the plain
/// grouped number is shown.
pub fn market_cap_text(i18n: &I18n, market_cap: f64) -> String {
    let number = i18n.number_format();
    if market_cap >= TRILLION {
        format!(
            "{} {}",
            number.format(market_cap / TRILLION),
            i18n.t("common.trillion")
        )
    } else if market_cap >= BILLION {
        format!(
            "{} {}",
            number.format(market_cap / BILLION),
            i18n.t("common.billion")
        )
    } else if market_cap >= MILLION {
        format!(
            "{} {}",
            number.format(market_cap / MILLION),
            i18n.t("common.million")
        )
    } else {
        number.format(market_cap)
    }
}

/// Data-delay badge: localized "realtime" at zero minutes, otherwise the
/// localized minute count (`20分`, `20 min`).
pub fn delay_text(i18n: &I18n, delay_minutes: u32) -> String {
    if delay_minutes == 0 {
        i18n.t("common.realtime")
    } else {
        i18n.t_with("common.delay_minutes", &[("minutes", delay_minutes.into())])
    }
}

/// The data-source line under every quote: source, market-clock time, and
/// delay (`TSE | 19:30 JST | 20分遅延`).
///
/// Delayed data goes through the `common.data_source` template, which
/// carries its own per-language delay wording; realtime data swaps the delay
/// segment for the localized "realtime" label.
pub fn data_source_line(
    i18n: &I18n,
    source: &str,
    timestamp: DateTime<Utc>,
    delay_minutes: u32,
) -> String {
    let time = i18n.date_time_format().format_time(timestamp);
    if delay_minutes > 0 {
        let minutes = i18n.t_with("common.delay_minutes", &[("minutes", delay_minutes.into())]);
        i18n.t_with(
            "common.data_source",
            &[
                ("source", source.into()),
                ("time", time.into()),
                ("delay", minutes.into()),
            ],
        )
    } else {
        format!(
            "{} | {} {} | {}",
            source,
            time,
            i18n.t("common.jst"),
            i18n.t("common.realtime")
        )
    }
}

/// Signed price change with percentage: `+1,234.5 (+2.5%)`. Gains carry an
/// explicit plus; losses get their minus from the number formatter.
pub fn change_text(i18n: &I18n, change: f64, change_percent: f64) -> String {
    let number = i18n.number_format();
    let sign = if change >= 0.0 { "+" } else { "" };
    let percent_sign = if change_percent >= 0.0 { "+" } else { "" };
    format!(
        "{sign}{} ({percent_sign}{}%)",
        number.format(change),
        number.format(change_percent)
    )
}

/// A formatted number, or the localized "not available" marker.
pub fn number_or_na(i18n: &I18n, value: Option<f64>) -> String {
    match value {
        Some(value) => i18n.number_format().format(value),
        None => i18n.t("common.na"),
    }
}

/// The premium-gate message for a feature key (`realtime_data`,
/// `advanced_charts`): the feature name is itself translated, then fed into
/// the lock template.
pub fn premium_locked_text(i18n: &I18n, feature_key: &str) -> String {
    let feature = i18n.t(&format!("premium.features.{feature_key}"));
    i18n.t_with("premium.feature_locked", &[("feature", feature.into())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use chrono::TimeZone;

    fn at(language: Language) -> I18n {
        I18n::new(language)
    }

    fn sample_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 27, 10, 30, 0).unwrap()
    }

    // ==================== Market Cap Tests ====================

    #[test]
    fn test_market_cap_trillions() {
        assert_eq!(market_cap_text(&at(Language::En), 1.5e12), "1.5 trillion");
        assert_eq!(market_cap_text(&at(Language::Ja), 1.5e12), "1.5 兆");
    }

    #[test]
    fn test_market_cap_billions() {
        assert_eq!(market_cap_text(&at(Language::En), 3.2e9), "3.2 billion");
        assert_eq!(market_cap_text(&at(Language::Ja), 3.2e9), "3.2 十億");
    }

    #[test]
    fn test_market_cap_millions() {
        assert_eq!(market_cap_text(&at(Language::En), 4.5e6), "4.5 million");
    }

    #[test]
    fn test_market_cap_below_a_million_is_plain() {
        assert_eq!(market_cap_text(&at(Language::En), 999_999.0), "999,999");
    }

    #[test]
    fn test_market_cap_rounds_scaled_value() {
        assert_eq!(market_cap_text(&at(Language::En), 1_234_500_000_000.0), "1.23 trillion");
    }

    // ==================== Delay Badge Tests ====================

    #[test]
    fn test_delay_zero_is_realtime() {
        assert_eq!(delay_text(&at(Language::En), 0), "Realtime");
        assert_eq!(delay_text(&at(Language::Ja), 0), "リアルタイム");
    }

    #[test]
    fn test_delay_minutes_localized() {
        assert_eq!(delay_text(&at(Language::En), 20), "20 min");
        assert_eq!(delay_text(&at(Language::Ja), 20), "20分");
    }

    // ==================== Data Source Line Tests ====================

    #[test]
    fn test_data_source_line_delayed_english() {
        let line = data_source_line(&at(Language::En), "TSE", sample_instant(), 20);
        assert_eq!(line, "TSE | 19:30 JST | 20 min delay");
    }

    #[test]
    fn test_data_source_line_delayed_japanese() {
        let line = data_source_line(&at(Language::Ja), "東証", sample_instant(), 20);
        assert_eq!(line, "東証 | 19:30 JST | 20分遅延");
    }

    #[test]
    fn test_data_source_line_realtime() {
        let line = data_source_line(&at(Language::En), "TSE", sample_instant(), 0);
        assert_eq!(line, "TSE | 19:30 JST | Realtime");
    }

    #[test]
    fn test_data_source_time_is_market_clock() {
        // 16:45 UTC is 01:45 the next day on the exchange clock.
        let instant = Utc.with_ymd_and_hms(2023, 10, 27, 16, 45, 0).unwrap();
        let line = data_source_line(&at(Language::En), "TSE", instant, 0);
        assert!(line.contains("01:45"), "{line}");
    }

    // ==================== Change Text Tests ====================

    #[test]
    fn test_change_text_gain() {
        assert_eq!(change_text(&at(Language::En), 1234.5, 2.5), "+1,234.5 (+2.5%)");
    }

    #[test]
    fn test_change_text_loss() {
        assert_eq!(change_text(&at(Language::En), -50.0, -1.2), "-50 (-1.2%)");
    }

    #[test]
    fn test_change_text_flat_counts_as_gain() {
        assert_eq!(change_text(&at(Language::En), 0.0, 0.0), "+0 (+0%)");
    }

    // ==================== N/A and Premium Tests ====================

    #[test]
    fn test_number_or_na() {
        assert_eq!(number_or_na(&at(Language::En), Some(15.3)), "15.3");
        assert_eq!(number_or_na(&at(Language::En), None), "N/A");
        assert_eq!(number_or_na(&at(Language::Ja), None), "該当なし");
    }

    #[test]
    fn test_premium_locked_composes_feature_name() {
        assert_eq!(
            premium_locked_text(&at(Language::En), "realtime_data"),
            "Realtime Data is a premium feature."
        );
        assert_eq!(
            premium_locked_text(&at(Language::Ja), "realtime_data"),
            "リアルタイムデータはプレミアム機能です。"
        );
    }

    #[test]
    fn test_premium_locked_unknown_feature_shows_key() {
        assert_eq!(
            premium_locked_text(&at(Language::En), "time_travel"),
            "premium.features.time_travel is a premium feature."
        );
    }
}
