//! Leptos markup for the preference controls and bilingual text.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages rendered with Leptos use these so their markup matches the ids and
//! classes in [`PageConfig`]. Controls render the default-state labels; the
//! WASM runtime re-renders them from storage on load and attaches the click
//! handlers, so the components themselves carry none.

#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::prefs::{FunMode, Language, Theme};

/// Page contract from context, or the default one.
fn page_config() -> PageConfig {
    use_context::<PageConfig>().unwrap_or_default()
}

/// Class attribute for a block of `lang` content. Blocks in the non-default
/// language start hidden so the first paint matches the default preference.
pub fn lang_block_class(config: &PageConfig, lang: Language) -> String {
    match lang {
        Language::En => config.english_class.clone(),
        Language::Fr => format!("{} {}", config.french_class, config.hidden_class),
    }
}

/// Button that flips between dark and light themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let config = page_config();
    view! {
        <button class="control-btn theme-toggle" id=config.theme_toggle_id title="Toggle light/dark mode">
            {Theme::default().toggle_icon()}
        </button>
    }
}

/// Button that flips between fun and professional presentation.
#[component]
pub fn FunToggle() -> impl IntoView {
    let config = page_config();
    view! {
        <button class="control-btn fun-toggle" id=config.fun_toggle_id title="Toggle fun/professional mode">
            {FunMode::default().label()}
        </button>
    }
}

/// Button that flips the content language.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let config = page_config();
    view! {
        <button class="control-btn" id=config.language_toggle_id title="Switch language">
            {Language::default().label()}
        </button>
    }
}

/// Hamburger button that opens the navigation links on narrow screens.
#[component]
pub fn MobileMenuToggle() -> impl IntoView {
    let config = page_config();
    view! {
        <button class=config.menu_toggle_class aria-label="Toggle navigation">
            "☰"
        </button>
    }
}

/// The same text in both languages; only one is visible at a time.
#[component]
pub fn LangText(en: &'static str, fr: &'static str) -> impl IntoView {
    let config = page_config();
    let en_class = lang_block_class(&config, Language::En);
    let fr_class = lang_block_class(&config, Language::Fr);
    view! {
        <span class=en_class>{en}</span>
        <span class=fr_class>{fr}</span>
    }
}
