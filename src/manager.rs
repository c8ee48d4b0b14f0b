//! Preference manager: load, reflect, and toggle the persisted preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! On page load [`PreferenceManager::initialize`] reads the store and renders
//! every control. Each toggle flips one preference, persists it, and
//! re-renders only what that preference drives.
//!
//! The theme and fun toggles read the current value from the root element,
//! while the language toggle reads it from storage. The two agree whenever
//! only this crate writes them.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use crate::config::PageConfig;
use crate::document::PageDocument;
use crate::prefs::{self, FunMode, Language, Preference, Preferences, Theme};
use crate::storage::KeyValueStore;

/// A clickable control the runtime binds a handler to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Theme,
    Fun,
    Language,
    MobileMenu,
}

/// Owns the store, the document, and the page contract.
pub struct PreferenceManager<S, D> {
    store: S,
    doc: D,
    config: PageConfig,
}

impl<S: KeyValueStore, D: PageDocument> PreferenceManager<S, D> {
    pub fn new(store: S, doc: D, config: PageConfig) -> Self {
        Self { store, doc, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Controls present on the page under the current config, in binding order.
    pub fn controls(&self) -> Vec<(Control, D::Element)> {
        let config = &self.config;
        [
            (Control::Theme, self.doc.element_by_id(&config.theme_toggle_id)),
            (Control::Fun, self.doc.element_by_id(&config.fun_toggle_id)),
            (Control::Language, self.doc.element_by_id(&config.language_toggle_id)),
            (Control::MobileMenu, self.doc.query(&config.menu_toggle_selector())),
        ]
        .into_iter()
        .filter_map(|(control, element)| element.map(|el| (control, el)))
        .collect()
    }

    /// Load all preferences and reflect them into the document.
    ///
    /// Idempotent for unchanged storage.
    pub fn initialize(&mut self) -> Preferences {
        let prefs = Preferences::load(&self.store);
        log::debug!("initializing preferences: {prefs:?}");

        self.doc
            .set_root_attribute(&self.config.theme_attribute, prefs.theme.code());
        self.doc
            .set_root_attribute(&self.config.fun_attribute, prefs.fun.code());
        self.render_controls(&prefs);
        self.apply_language(prefs.language);
        prefs
    }

    /// Reflect `prefs` into every control present on the page. Does not touch
    /// storage.
    pub fn render_controls(&mut self, prefs: &Preferences) {
        self.render_theme_control(prefs.theme);
        self.render_fun_control(prefs.fun);
        self.render_language_control(prefs.language);
        self.render_profile_image(prefs.fun);
    }

    /// Flip the theme, persist it, and update the theme control.
    pub fn toggle_theme(&mut self) -> Theme {
        // Anything other than `dark` on the root counts as light, so a page
        // that was never initialized flips to dark.
        let current = match self.doc.root_attribute(&self.config.theme_attribute) {
            Some(code) if code == Theme::Dark.code() => Theme::Dark,
            _ => Theme::Light,
        };
        let next = current.toggle();

        self.doc
            .set_root_attribute(&self.config.theme_attribute, next.code());
        prefs::persist(&mut self.store, next);
        self.render_theme_control(next);
        log::debug!("theme toggled to {}", next.code());
        next
    }

    /// Flip fun mode, persist it, and update the fun control and profile image.
    pub fn toggle_fun(&mut self) -> FunMode {
        let current = match self.doc.root_attribute(&self.config.fun_attribute) {
            Some(code) if code == FunMode::On.code() => FunMode::On,
            _ => FunMode::Off,
        };
        let next = current.toggle();

        self.doc
            .set_root_attribute(&self.config.fun_attribute, next.code());
        prefs::persist(&mut self.store, next);
        self.render_fun_control(next);
        self.render_profile_image(next);
        log::debug!("fun mode toggled to {}", next.code());
        next
    }

    /// Flip the language, persist it, update its control, and refilter content.
    pub fn toggle_language(&mut self) -> Language {
        let next = prefs::load::<Language, _>(&self.store).toggle();

        prefs::persist(&mut self.store, next);
        self.render_language_control(next);
        self.apply_language(next);
        log::debug!("language toggled to {}", next.code());
        next
    }

    /// Show content tagged for `lang` and hide content tagged for the other
    /// language. An element tagged for both stays visible.
    pub fn apply_language(&mut self, lang: Language) {
        let markers = [
            (self.config.english_class.as_str(), Language::En),
            (self.config.french_class.as_str(), Language::Fr),
        ];
        for (class, _) in markers {
            for el in self.doc.elements_with_class(class) {
                let hidden = markers
                    .iter()
                    .filter(|(marker, _)| self.doc.has_class(&el, marker))
                    .all(|(_, tagged)| *tagged != lang);
                self.doc.set_class(&el, &self.config.hidden_class, hidden);
            }
        }
    }

    fn render_theme_control(&mut self, theme: Theme) {
        if let Some(el) = self.doc.element_by_id(&self.config.theme_toggle_id) {
            self.doc.set_text(&el, theme.toggle_icon());
        }
    }

    fn render_fun_control(&mut self, fun: FunMode) {
        let Some(el) = self.doc.element_by_id(&self.config.fun_toggle_id) else {
            return;
        };
        self.doc.set_text(&el, fun.label());
        for (property, value) in self.config.pro_style.properties() {
            // Clearing restores the stylesheet's look in fun mode.
            let value = if fun.is_on() { "" } else { value };
            self.doc.set_style(&el, property, value);
        }
    }

    fn render_language_control(&mut self, lang: Language) {
        if let Some(el) = self.doc.element_by_id(&self.config.language_toggle_id) {
            self.doc.set_text(&el, lang.label());
        }
    }

    fn render_profile_image(&mut self, fun: FunMode) {
        if let Some(el) = self.doc.query(&self.config.profile_image_selector) {
            self.doc.set_src(&el, self.config.profile_src(fun));
        }
    }
}
