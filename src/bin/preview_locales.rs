//! Locale preview binary - renders every language's strings and formats without booting the app
//!
//! Usage:
//!   cargo run --bin preview                    # Preview all languages
//!   cargo run --bin preview -- --lang fr       # Preview a single language
//!   cargo run --bin preview -- --local-time    # Use the device clock instead of the market clock
//!   cargo run --bin preview -- --persist       # Persist the language choice to the user config dir
//!
//! Optional environment variables:
//! - BRIDGE_LANG (language to activate; unsupported codes warn and fall back)
//! - BRIDGE_SETTINGS_FILE (persist the language choice to this TOML file)

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{info, warn};

use bridge_i18n::{
    change_text, data_source_line, detect_device_locales, market_cap_text, premium_locked_text,
    CatalogValidator, Currency, FileSettings, I18n, Language,
};

/// Minimal config for the preview (everything optional)
struct PreviewConfig {
    language: Option<String>,
    settings_file: Option<String>,
}

impl PreviewConfig {
    fn from_env() -> Self {
        Self {
            language: std::env::var("BRIDGE_LANG").ok(),
            settings_file: std::env::var("BRIDGE_SETTINGS_FILE").ok(),
        }
    }
}

/// Print one language's sample block
fn print_language_sample(i18n: &I18n, now: DateTime<Utc>, local_clock: bool) {
    let language = i18n.language();
    let timestamp = if local_clock {
        i18n.local_date_time_format().format(now)
    } else {
        i18n.date_time_format().format(now)
    };

    println!("--- {} ({}) ---", language.english_name(), language.code());
    println!();
    println!("  Native name:  {}", language.native_name());
    println!(
        "  Direction:    {}",
        if i18n.is_rtl() { "RTL" } else { "LTR" }
    );
    println!("  Tagline:      {}", i18n.t("home.title"));
    println!("  Number:       {}", i18n.number_format().format(12345.67));
    println!(
        "  Currency:     {} / {}",
        i18n.currency_format(Currency::Jpy).format(1234.5678),
        i18n.currency_format(Currency::Usd).format(1234.5678)
    );
    println!("  Timestamp:    {}", timestamp);
    println!("  Market cap:   {}", market_cap_text(i18n, 1.5e12));
    println!("  Change:       {}", change_text(i18n, 1234.5, 2.5));
    println!("  Data source:  {}", data_source_line(i18n, "TSE", now, 20));
    println!("  Premium:      {}", premium_locked_text(i18n, "realtime_data"));
    println!();
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bridge_i18n=info".parse().unwrap()),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let local_clock = args.iter().any(|arg| arg == "--local-time");
    let persist_default = args.iter().any(|arg| arg == "--persist");
    let lang_arg = args
        .iter()
        .position(|arg| arg == "--lang")
        .and_then(|index| args.get(index + 1))
        .cloned();

    let config = PreviewConfig::from_env();

    // Catalog health check before rendering anything
    let report = CatalogValidator::validate_shipped();
    for error in &report.errors {
        warn!("Catalog error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Catalog warning: {}", warning);
    }
    if report.is_clean() {
        info!("Catalog check passed for {} languages", Language::ALL.len());
    }

    // Build the i18n handle, persistent when asked to be
    let device_locales = detect_device_locales();
    let mut persist_path: Option<PathBuf> = None;
    let i18n = if let Some(path) = config.settings_file.as_deref() {
        persist_path = Some(PathBuf::from(path));
        I18n::persistent(FileSettings::new(path), &device_locales)
    } else if persist_default {
        let settings = FileSettings::at_default_path()
            .context("No config directory available for --persist")?;
        persist_path = Some(settings.path().to_path_buf());
        I18n::persistent(settings, &device_locales)
    } else {
        I18n::from_device_locales(&device_locales)
    };

    let _subscription = i18n.subscribe(|state| {
        info!(
            "Language switched to {} (RTL: {})",
            state.language.code(),
            state.is_rtl
        );
    });

    // CLI beats the environment; unsupported codes warn and keep the current language
    if let Some(code) = lang_arg.as_deref().or(config.language.as_deref()) {
        i18n.set_language_code(code);
    }

    let single = lang_arg.is_some() || config.language.is_some();
    let initial = i18n.language();
    let preview_languages: Vec<Language> = if single {
        vec![initial]
    } else {
        Language::ALL.to_vec()
    };

    let clock_label = if local_clock {
        "device local"
    } else {
        "market (UTC+9)"
    };
    let scope_label = if single {
        initial.code().to_string()
    } else {
        format!("all {}", Language::ALL.len())
    };

    println!();
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                      BRIDGE LOCALE PREVIEW                        ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!(
        "║ Active language: {:47} ║",
        format!("{} ({})", initial.code(), initial.english_name())
    );
    println!("║ Clock: {:57} ║", clock_label);
    println!("║ Languages previewed: {:43} ║", scope_label);
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let now = Utc::now();
    for language in preview_languages {
        i18n.set_language(language);
        print_language_sample(&i18n, now, local_clock);
    }

    // Leave the store (and any settings file) on the language we started with
    if !single {
        i18n.set_language(initial);
    }

    println!("--- End of Preview ---");
    println!();
    if let Some(path) = &persist_path {
        println!("💾 Language choice saved to: {}", path.display());
        println!("   (The next run starts in this language)");
        println!();
    }

    Ok(())
}
