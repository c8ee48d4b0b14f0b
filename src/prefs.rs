//! Persisted preference values.
//!
//! Each preference is a closed two-value enum stored as a short lowercase code
//! under its own storage key. [`Preferences`] bundles the three so they can be
//! loaded once and handed to the rendering step together.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// A named, persisted user setting with a two-value domain.
pub trait Preference: Copy + Default + PartialEq {
    /// Key the value is stored under.
    const STORAGE_KEY: &'static str;

    /// Storage code for this value.
    fn code(self) -> &'static str;

    /// Parse a stored code. Unknown values fall back to the default.
    fn from_code(code: &str) -> Self;

    /// The other value.
    #[must_use]
    fn toggle(self) -> Self;
}

/// Color theme, reflected as `data-theme` on the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Label for the theme toggle. Shows the theme a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

impl Preference for Theme {
    const STORAGE_KEY: &'static str = "theme";

    fn code(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    fn from_code(code: &str) -> Self {
        match normalize(code).as_str() {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Fun (pixel art) versus professional presentation, reflected as `data-fun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunMode {
    #[default]
    On,
    Off,
}

impl FunMode {
    /// Label for the fun toggle. Shows the current mode.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "FUN",
            Self::Off => "PRO",
        }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl Preference for FunMode {
    const STORAGE_KEY: &'static str = "fun";

    fn code(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    fn from_code(code: &str) -> Self {
        match normalize(code).as_str() {
            "off" => Self::Off,
            _ => Self::On,
        }
    }

    fn toggle(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

/// Content language. Selects which marker-tagged blocks are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Uppercased code, shown on the language toggle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Fr => "FR",
        }
    }
}

impl Preference for Language {
    const STORAGE_KEY: &'static str = "language";

    fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    fn from_code(code: &str) -> Self {
        match normalize(code).as_str() {
            "fr" => Self::Fr,
            _ => Self::En,
        }
    }

    fn toggle(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// Read one preference from `store`, substituting the default when the key is
/// absent or the store cannot be read.
pub fn load<P: Preference, S: KeyValueStore + ?Sized>(store: &S) -> P {
    match store.get(P::STORAGE_KEY) {
        Ok(Some(raw)) => P::from_code(&raw),
        Ok(None) => P::default(),
        Err(err) => {
            log::warn!("reading preference `{}` failed, using default: {err}", P::STORAGE_KEY);
            P::default()
        }
    }
}

/// Write one preference to `store`. Failures are logged and otherwise ignored;
/// the page keeps working with the in-document value.
pub fn persist<P: Preference, S: KeyValueStore + ?Sized>(store: &mut S, value: P) {
    if let Err(err) = store.set(P::STORAGE_KEY, value.code()) {
        log::warn!("persisting preference `{}` failed: {err}", P::STORAGE_KEY);
    }
}

/// The three preferences, as loaded together on page start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub fun: FunMode,
    pub language: Language,
}

impl Preferences {
    /// Load every preference from `store`, defaulting each independently.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            theme: load(store),
            fun: load(store),
            language: load(store),
        }
    }
}
