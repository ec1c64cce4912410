//! Catalog consistency validation module.
//!
//! This module provides validation for the translation catalog to ensure that
//! every language ships the same keys as the default language and that
//! `{{placeholder}}` sets are preserved across translations. It is meant to
//! run in tests and tooling; the runtime lookup path never validates.

use std::collections::{BTreeSet, HashSet};

use regex::Regex;
use std::sync::OnceLock;

use crate::catalog::{self, Entries};
use crate::language::{Language, DEFAULT_LANGUAGE};

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    /// Critical errors that make lookups or interpolation misbehave
    pub errors: Vec<String>,

    /// Non-critical warnings about suspicious templates
    pub warnings: Vec<String>,
}

impl CatalogReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for CatalogReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog consistency.
pub struct CatalogValidator;

// Regex pattern for extraction (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate a set of translation tables against the default language.
    ///
    /// This function checks that:
    /// - no table contains duplicate keys
    /// - every table carries exactly the keys of the default-language table
    /// - `{{placeholder}}` names match the default-language template
    /// - no template is empty or contains stray braces
    ///
    /// # Arguments
    /// * `tables` - The per-language tables to validate
    ///
    /// # Returns
    /// A `CatalogReport` containing any errors or warnings found.
    pub fn validate_tables(tables: &[(Language, Entries)]) -> CatalogReport {
        let mut report = CatalogReport::new();

        // Per-table checks
        for (language, entries) in tables {
            let mut seen = HashSet::new();
            for (key, template) in *entries {
                if !seen.insert(*key) {
                    report
                        .errors
                        .push(format!("{}: duplicate key {:?}", language.code(), key));
                }
                if template.is_empty() {
                    report
                        .warnings
                        .push(format!("{}: empty template for {:?}", language.code(), key));
                }
                if Self::has_stray_braces(template) {
                    report.warnings.push(format!(
                        "{}: stray brace in template for {:?}",
                        language.code(),
                        key
                    ));
                }
            }
        }

        // Cross-language checks need the reference table
        let default_entries = match tables
            .iter()
            .find(|(language, _)| *language == DEFAULT_LANGUAGE)
        {
            Some((_, entries)) => *entries,
            None => {
                report.errors.push(format!(
                    "no table for default language {}",
                    DEFAULT_LANGUAGE.code()
                ));
                return report;
            }
        };

        let default_keys: BTreeSet<&str> = default_entries.iter().map(|(key, _)| *key).collect();

        for (language, entries) in tables {
            if *language == DEFAULT_LANGUAGE {
                continue;
            }

            let keys: BTreeSet<&str> = entries.iter().map(|(key, _)| *key).collect();

            let missing: Vec<&str> = default_keys.difference(&keys).copied().collect();
            if !missing.is_empty() {
                report.errors.push(format!(
                    "{}: missing keys vs {}: {}",
                    language.code(),
                    DEFAULT_LANGUAGE.code(),
                    missing.join(", ")
                ));
            }

            let extra: Vec<&str> = keys.difference(&default_keys).copied().collect();
            if !extra.is_empty() {
                report.errors.push(format!(
                    "{}: extra keys not in {}: {}",
                    language.code(),
                    DEFAULT_LANGUAGE.code(),
                    extra.join(", ")
                ));
            }

            // Placeholder sets must survive translation
            for (key, template) in *entries {
                let default_template = match default_entries
                    .iter()
                    .find(|(default_key, _)| default_key == key)
                {
                    Some((_, template)) => *template,
                    None => continue,
                };

                let expected = Self::extract_placeholders(default_template);
                let found = Self::extract_placeholders(template);
                if expected != found {
                    report.errors.push(format!(
                        "{}: placeholder mismatch for {:?}: expected {:?}, found {:?}",
                        language.code(),
                        key,
                        expected,
                        found
                    ));
                }
            }
        }

        report
    }

    /// Validate the tables compiled into this crate.
    ///
    /// # Returns
    /// A `CatalogReport`; a release build is expected to be clean.
    pub fn validate_shipped() -> CatalogReport {
        let tables = catalog::all_tables();
        let mut report = Self::validate_tables(tables);

        for language in Language::ALL {
            if !tables.iter().any(|(table_language, _)| *table_language == language) {
                report
                    .errors
                    .push(format!("no table shipped for {}", language.code()));
            }
        }

        report
    }

    /// Extract all `{{placeholder}}` names from a template
    fn extract_placeholders(template: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap());

        regex
            .captures_iter(template)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Check whether a template contains braces outside well-formed placeholders
    fn has_stray_braces(template: &str) -> bool {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap());

        let stripped = regex.replace_all(template, "");
        stripped.contains('{') || stripped.contains('}')
    }
}
