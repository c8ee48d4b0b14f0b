//! Document contract: which elements, classes, and assets the runtime uses.
//!
//! Defaults match the site's markup. A page can override any subset by
//! passing JSON to `start_with_config`; unspecified fields keep their default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inline style applied to the fun toggle in professional mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlStyle {
    pub background: String,
    pub color: String,
    pub border: String,
}

impl ControlStyle {
    /// CSS property names paired with their values, in application order.
    #[must_use]
    pub fn properties(&self) -> [(&'static str, &str); 3] {
        [
            ("background", self.background.as_str()),
            ("color", self.color.as_str()),
            ("border", self.border.as_str()),
        ]
    }
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self {
            background: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)".into(),
            color: "white".into(),
            border: "1px solid rgba(255, 255, 255, 0.2)".into(),
        }
    }
}

/// Element that carries the theme and fun-mode attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootElement {
    /// `<html>`, the document element.
    #[default]
    Html,
    /// `<body>`, for stylesheets keyed on `body[data-theme=...]`.
    Body,
}

/// Element ids, selectors, marker classes, and assets looked up on the page.
///
/// Every element named here is optional on any given page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Element the root attributes are written to.
    pub root: RootElement,
    /// Root element attribute carrying the theme code.
    pub theme_attribute: String,
    /// Root element attribute carrying the fun-mode code.
    pub fun_attribute: String,

    pub theme_toggle_id: String,
    pub fun_toggle_id: String,
    pub language_toggle_id: String,

    /// Selector for the profile image swapped by fun mode.
    pub profile_image_selector: String,
    /// Profile image shown when fun mode is on.
    pub pixel_profile_src: String,
    /// Profile image shown when fun mode is off.
    pub photo_profile_src: String,

    /// Marker class for English-only content.
    pub english_class: String,
    /// Marker class for French-only content.
    pub french_class: String,
    /// Class toggled to hide filtered content. Styling is owned by the site.
    pub hidden_class: String,

    pub nav_selector: String,
    pub nav_links_id: String,
    /// Class marking the mobile menu toggle button.
    pub menu_toggle_class: String,
    /// Class on the nav-links container while the mobile menu is open.
    pub menu_open_class: String,

    pub pro_style: ControlStyle,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            root: RootElement::Html,
            theme_attribute: "data-theme".into(),
            fun_attribute: "data-fun".into(),
            theme_toggle_id: "themeToggle".into(),
            fun_toggle_id: "funToggle".into(),
            language_toggle_id: "langToggle".into(),
            profile_image_selector: ".profile-image img".into(),
            pixel_profile_src: "images/profile-pixel.jpg".into(),
            photo_profile_src: "images/profile.jpg".into(),
            english_class: "lang-en".into(),
            french_class: "lang-fr".into(),
            hidden_class: "hidden".into(),
            nav_selector: "nav".into(),
            nav_links_id: "navLinks".into(),
            menu_toggle_class: "mobile-menu-toggle".into(),
            menu_open_class: "active".into(),
            pro_style: ControlStyle::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Selector that finds the mobile menu toggle.
    #[must_use]
    pub fn menu_toggle_selector(&self) -> String {
        format!(".{}", self.menu_toggle_class)
    }

    /// Profile image source for the given fun mode.
    #[must_use]
    pub fn profile_src(&self, fun: crate::prefs::FunMode) -> &str {
        if fun.is_on() {
            &self.pixel_profile_src
        } else {
            &self.photo_profile_src
        }
    }
}
