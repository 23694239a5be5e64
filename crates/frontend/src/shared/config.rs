use calendar::{DateFormat, PickerConfig, RawDateInput};
use chrono::NaiveDate;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub clinic: ClinicConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClinicConfig {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub hours: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BookingConfig {
    pub label: Option<String>,
    pub placeholder: String,
    pub date_format: DateFormat,
    pub show_clear_button: bool,
    pub popover_height: f64,
    /// `"today"`, a date, or absent for no lower bound.
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        let picker = PickerConfig::default();
        Self {
            label: None,
            placeholder: picker.placeholder,
            date_format: picker.date_format,
            show_clear_button: picker.show_clear_button,
            popover_height: picker.popover_height,
            min_date: None,
            max_date: None,
        }
    }
}

impl BookingConfig {
    pub fn resolve_min_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        resolve_bound(self.min_date.as_deref(), today)
    }

    pub fn resolve_max_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        resolve_bound(self.max_date.as_deref(), today)
    }
}

fn resolve_bound(raw: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    match raw.map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("today") => Some(today),
        Some(s) => RawDateInput::from(s).parse(),
        None => None,
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[clinic]
name = "Lumière Aesthetics"
tagline = "Natural results, expert hands."
address = "123 Beauty Lane, Suite 100\nNew York, NY 10001"
phone = "(555) 123-4567"
phone_href = "tel:+15551234567"
email = "hello@aestheticclinic.com"
hours = "Mon-Fri: 9AM - 7PM\nSat: 10AM - 5PM"

[booking]
placeholder = "Preferred Date"
date_format = "MM/DD/YYYY"
show_clear_button = true
popover_height = 380.0
min_date = "today"
"#;

/// Id of an optional inline `<script>` element carrying a page-level TOML override.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn parse_config(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load the site configuration
///
/// Search order:
/// 1. `<script id="site-config">` in the host page
/// 2. Falls back to the embedded default config
pub fn load_config() -> anyhow::Result<SiteConfig> {
    let inline = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    if let Some(contents) = inline.filter(|c| !c.trim().is_empty()) {
        log::info!("Loading config from #{}", CONFIG_ELEMENT_ID);
        return parse_config(&contents);
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Provides the site configuration to children components.
pub fn provide_site_config() -> SiteConfig {
    let config = load_config()
        .or_else(|e| {
            log::warn!("Invalid site configuration, using embedded default: {e:#}");
            parse_config(DEFAULT_CONFIG)
        })
        .unwrap_or_else(|e| {
            log::error!("Embedded configuration failed to parse: {e:#}");
            SiteConfig::default()
        });
    provide_context(config.clone());
    config
}

/// Hook to use the site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
