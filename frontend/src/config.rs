use log::Level;
use serde::Deserialize;

use crate::contact::validation::Field;
use crate::error::PageError;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "pageConfig";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for every page behavior. Anything missing from the JSON override
/// keeps the value the landing page ships with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Height of the fixed header subtracted from anchor targets.
    pub header_offset: f64,
    /// Distance above the viewport bottom at which revealables appear.
    pub reveal_threshold: f64,
    pub navbar_shadow_after: f64,
    pub back_to_top_after: f64,
    /// Sections count as current this many pixels before their top edge.
    pub section_offset: f64,
    pub success_hide_ms: u32,
    pub ids: ElementIds,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset: 70.0,
            reveal_threshold: 150.0,
            navbar_shadow_after: 50.0,
            back_to_top_after: 300.0,
            section_offset: 100.0,
            success_hide_ms: 5_000,
            ids: ElementIds::default(),
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub hamburger: String,
    pub nav_menu: String,
    pub navbar: String,
    pub back_to_top: String,
    pub contact_form: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub success_message: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            hamburger: "hamburger".to_string(),
            nav_menu: "navMenu".to_string(),
            navbar: "navbar".to_string(),
            back_to_top: "backToTop".to_string(),
            contact_form: "contactForm".to_string(),
            name: "name".to_string(),
            email: "email".to_string(),
            message: "message".to_string(),
            success_message: "successMessage".to_string(),
        }
    }
}

impl ElementIds {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Error containers always sit next to their input as `<inputId>Error`.
    pub fn field_error(&self, field: Field) -> String {
        format!("{}Error", self.field(field))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub nav_link: String,
    pub anchor: String,
    pub revealable: String,
    pub section: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_link: ".nav-link".to_string(),
            anchor: "a[href^=\"#\"]".to_string(),
            revealable: ".section-reveal".to_string(),
            section: "section[id]".to_string(),
        }
    }
}

impl Selectors {
    pub fn nav_link_for(&self, section_id: &str) -> String {
        format!("{}[href=\"#{}\"]", self.nav_link, section_id)
    }
}
