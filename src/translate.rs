//! Translation lookup and `{{name}}` placeholder interpolation.
//!
//! Rendering is total: every call returns a string. A key missing from the
//! requested language falls back to the default language's table and finally
//! to the key itself, and a placeholder without a matching argument stays in
//! the output verbatim so broken call sites are visible instead of blank.

use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::catalog::{catalog, Catalog};
use crate::language::{Language, DEFAULT_LANGUAGE};

/// A value substituted into a template placeholder.
///
/// Templates take either text or numbers; numbers render the way `Display`
/// prints them (`12` -> "12", `12.5` -> "12.5").
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(text) => f.write_str(text),
            Arg::Int(value) => write!(f, "{value}"),
            Arg::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(value.into())
    }
}

/// Named arguments for one translation call.
pub type Args<'a> = &'a [(&'a str, Arg)];

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `{{name}}` with optional interior whitespace (`{{ name }}`).
fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap())
}

/// Translates a key against the shipped catalog.
///
/// # Arguments
/// * `language` - the language to render in
/// * `key` - flat dotted catalog key
/// * `args` - named placeholder values; `&[]` for plain strings
///
/// # Returns
/// The rendered string. Falls back to the default language's template and
/// then to the key itself, so the result is never empty for a non-empty key.
pub fn translate(language: Language, key: &str, args: Args<'_>) -> String {
    translate_in(catalog(), language, key, args)
}

/// Translates a key against an explicit catalog.
pub fn translate_in(catalog: &Catalog, language: Language, key: &str, args: Args<'_>) -> String {
    if catalog.get(language, key).is_none() && catalog.get(DEFAULT_LANGUAGE, key).is_none() {
        debug!("No translation for key {:?} in any language", key);
    }
    render(catalog.resolve(language, key), args)
}

/// Substitutes placeholders in a single pass.
///
/// Unmatched placeholders are kept verbatim and substituted values are never
/// rescanned, so argument text that happens to contain `{{...}}` comes
/// through untouched.
fn render(template: &str, args: Args<'_>) -> String {
    if !template.contains("{{") {
        return template.to_string();
    }
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match args.iter().find(|(arg_name, _)| *arg_name == name) {
                Some((_, value)) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalog {
        Catalog::from_entries(&[
            (
                Language::Ja,
                &[
                    ("greet", "こんにちは {{ name }} さん"),
                    ("plain", "そのまま"),
                    ("only_default", "既定のみ"),
                ][..],
            ),
            (Language::En, &[("greet", "Hello {{name}}"), ("plain", "Plain")][..]),
        ])
    }

    // ==================== Interpolation Tests ====================

    #[test]
    fn test_substitutes_named_argument() {
        let out = translate(
            Language::En,
            "premium.feature_locked",
            &[("feature", "Realtime Data".into())],
        );
        assert_eq!(out, "Realtime Data is a premium feature.");
    }

    #[test]
    fn test_whitespace_inside_braces_is_tolerated() {
        let out = translate_in(&fixture(), Language::Ja, "greet", &[("name", "田中".into())]);
        assert_eq!(out, "こんにちは 田中 さん");
    }

    #[test]
    fn test_unmatched_placeholder_stays_verbatim() {
        let out = translate_in(&fixture(), Language::En, "greet", &[]);
        assert_eq!(out, "Hello {{name}}");
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let out = translate_in(
            &fixture(),
            Language::En,
            "plain",
            &[("unused", "x".into()), ("also_unused", 7.into())],
        );
        assert_eq!(out, "Plain");
    }

    #[test]
    fn test_repeated_placeholder_is_replaced_everywhere() {
        let catalog =
            Catalog::from_entries(&[(Language::Ja, &[("twice", "{{x}}と{{x}}")][..])]);
        let out = translate_in(&catalog, Language::Ja, "twice", &[("x", "A".into())]);
        assert_eq!(out, "AとA");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let catalog =
            Catalog::from_entries(&[(Language::Ja, &[("nest", "{{x}} {{y}}")][..])]);
        let out = translate_in(
            &catalog,
            Language::Ja,
            "nest",
            &[("x", "{{y}}".into()), ("y", "Z".into())],
        );
        assert_eq!(out, "{{y}} Z");
    }

    #[test]
    fn test_multiple_placeholders_in_one_template() {
        let out = translate(
            Language::En,
            "common.data_source",
            &[
                ("source", "TSE".into()),
                ("time", "19:30".into()),
                ("delay", "20 min".into()),
            ],
        );
        assert_eq!(out, "TSE | 19:30 JST | 20 min delay");
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_missing_key_falls_back_to_default_language() {
        let out = translate_in(&fixture(), Language::En, "only_default", &[]);
        assert_eq!(out, "既定のみ");
    }

    #[test]
    fn test_missing_key_everywhere_returns_key() {
        let out = translate(Language::En, "no.such.key", &[]);
        assert_eq!(out, "no.such.key");
        let out = translate(Language::Ja, "no.such.key", &[]);
        assert_eq!(out, "no.such.key");
    }

    #[test]
    fn test_shipped_catalog_basic_lookup() {
        assert_eq!(translate(Language::Ja, "common.hello", &[]), "こんにちは");
        assert_eq!(translate(Language::En, "common.hello", &[]), "Hello");
        assert_eq!(translate(Language::Ar, "common.hello", &[]), "مرحبا");
    }

    // ==================== Argument Value Tests ====================

    #[test]
    fn test_integer_arguments_render_plainly() {
        let catalog =
            Catalog::from_entries(&[(Language::Ja, &[("min", "{{minutes}}分")][..])]);
        let out = translate_in(&catalog, Language::Ja, "min", &[("minutes", 20.into())]);
        assert_eq!(out, "20分");
    }

    #[test]
    fn test_float_arguments_drop_trailing_zero() {
        assert_eq!(Arg::from(12.5f64).to_string(), "12.5");
        assert_eq!(Arg::from(12.0f64).to_string(), "12");
    }

    #[test]
    fn test_text_arguments_from_owned_and_borrowed() {
        assert_eq!(Arg::from("abc").to_string(), "abc");
        assert_eq!(Arg::from("abc".to_string()).to_string(), "abc");
    }
}
