use super::*;

#[test]
fn english_block_is_visible_by_default() {
    let config = PageConfig::default();
    assert_eq!(lang_block_class(&config, Language::En), "lang-en");
}

#[test]
fn french_block_starts_hidden() {
    let config = PageConfig::default();
    assert_eq!(lang_block_class(&config, Language::Fr), "lang-fr hidden");
}

#[test]
fn block_classes_follow_config() {
    let config = PageConfig {
        french_class: "only-fr".into(),
        hidden_class: "is-hidden".into(),
        ..PageConfig::default()
    };
    assert_eq!(lang_block_class(&config, Language::Fr), "only-fr is-hidden");
}

#[test]
fn menu_toggle_selector_matches_rendered_class() {
    let config = PageConfig {
        menu_toggle_class: "burger".into(),
        ..PageConfig::default()
    };
    assert_eq!(config.menu_toggle_selector(), ".burger");
}

// =============================================================
// Rendered markup
// =============================================================

#[cfg(feature = "ssr")]
mod rendered {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn custom_config() -> PageConfig {
        PageConfig {
            theme_toggle_id: "themeSwitch".into(),
            fun_toggle_id: "modeSwitch".into(),
            language_toggle_id: "langSwitch".into(),
            menu_toggle_class: "burger".into(),
            english_class: "only-en".into(),
            french_class: "only-fr".into(),
            hidden_class: "is-hidden".into(),
            ..PageConfig::default()
        }
    }

    /// Render `view` with `config` provided through context.
    fn render<V: RenderHtml>(config: Option<PageConfig>, view: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| {
            if let Some(config) = config {
                provide_context(config);
            }
            view().to_html()
        })
    }

    #[test]
    fn toggles_use_default_ids_and_labels_without_context() {
        let html = render(None, || {
            view! {
                <ThemeToggle/>
                <FunToggle/>
                <LanguageToggle/>
                <MobileMenuToggle/>
            }
        });
        assert!(html.contains(r#"id="themeToggle""#), "{html}");
        assert!(html.contains(r#"id="funToggle""#), "{html}");
        assert!(html.contains(r#"id="langToggle""#), "{html}");
        assert!(html.contains(r#"class="mobile-menu-toggle""#), "{html}");
        assert!(html.contains("☀️"), "{html}");
        assert!(html.contains("FUN"), "{html}");
        assert!(html.contains("EN"), "{html}");
    }

    #[test]
    fn toggles_use_ids_from_context() {
        let html = render(Some(custom_config()), || {
            view! {
                <ThemeToggle/>
                <FunToggle/>
                <LanguageToggle/>
            }
        });
        assert!(html.contains(r#"id="themeSwitch""#), "{html}");
        assert!(html.contains(r#"id="modeSwitch""#), "{html}");
        assert!(html.contains(r#"id="langSwitch""#), "{html}");
        assert!(!html.contains("themeToggle"), "{html}");
    }

    #[test]
    fn menu_toggle_renders_the_configured_class() {
        let config = custom_config();
        let selector = config.menu_toggle_selector();
        let html = render(Some(config), || view! { <MobileMenuToggle/> });
        assert_eq!(selector, ".burger");
        assert!(html.contains(r#"class="burger""#), "{html}");
        assert!(!html.contains("mobile-menu-toggle"), "{html}");
    }

    #[test]
    fn lang_text_renders_both_blocks_with_french_hidden() {
        let html = render(Some(custom_config()), || {
            view! { <LangText en="Hello" fr="Bonjour"/> }
        });
        assert!(html.contains(r#"class="only-en""#), "{html}");
        assert!(html.contains(r#"class="only-fr is-hidden""#), "{html}");
        assert!(html.contains("Hello"), "{html}");
        assert!(html.contains("Bonjour"), "{html}");
    }
}
