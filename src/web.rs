//! Browser runtime: web-sys backends and page wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the WASM module loads. It builds a
//! [`PreferenceManager`] over `localStorage` and the live document, keeps it
//! in a thread-local for the page's lifetime, initializes it once the DOM is
//! parsed, and attaches click listeners to the controls and the document.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Storage};

use crate::config::{PageConfig, RootElement};
use crate::document::PageDocument;
use crate::manager::{Control, PreferenceManager};
use crate::menu;
use crate::storage::{KeyValueStore, StorageError};

type WebManager = PreferenceManager<LocalStorage, WebDocument>;

thread_local! {
    static MANAGER: RefCell<Option<WebManager>> = const { RefCell::new(None) };
}

/// [`KeyValueStore`] over `window.localStorage`.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Open the origin's `localStorage`. Access may be denied (privacy modes,
    /// sandboxed frames); every call then fails with
    /// [`StorageError::Unavailable`].
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage access denied: {err:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }
}

fn backend_error(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{err:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(backend_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(backend_error)
    }
}

/// [`PageDocument`] over the live `web_sys::Document`.
pub struct WebDocument {
    document: Document,
    root: RootElement,
}

impl WebDocument {
    pub fn new(document: Document, root: RootElement) -> Self {
        Self { document, root }
    }

    /// The window's document, if there is one.
    pub fn current(root: RootElement) -> Option<Self> {
        let document = web_sys::window().and_then(|w| w.document())?;
        Some(Self::new(document, root))
    }

    fn root_element(&self) -> Option<Element> {
        match self.root {
            RootElement::Html => self.document.document_element(),
            RootElement::Body => self.document.body().map(Element::from),
        }
    }
}

fn warn_on_err<T>(op: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{op} failed: {err:?}");
    }
}

impl PageDocument for WebDocument {
    type Element = Element;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_element()?.get_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        if let Some(root) = self.root_element() {
            warn_on_err("set root attribute", root.set_attribute(name, value));
        }
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("invalid selector `{selector}`: {err:?}");
                None
            }
        }
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        // The collection is live; snapshot it before any class changes.
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_style(&mut self, element: &Element, property: &str, value: &str) {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();
        if value.is_empty() {
            warn_on_err("remove style property", style.remove_property(property));
        } else {
            warn_on_err("set style property", style.set_property(property, value));
        }
    }

    fn set_src(&mut self, element: &Element, src: &str) {
        warn_on_err("set src", element.set_attribute("src", src));
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_class(&mut self, element: &Element, class: &str, present: bool) {
        warn_on_err(
            "toggle class",
            element.class_list().toggle_with_force(class, present),
        );
    }

    fn contains(&self, container: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        container.contains(Some(node))
    }
}

fn with_manager<R>(f: impl FnOnce(&mut WebManager) -> R) -> Option<R> {
    MANAGER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    install(PageConfig::default());
}

/// Re-initialize with a JSON override of the page contract. Unspecified
/// fields keep their default.
///
/// # Errors
///
/// Returns the parse error message if `json` is not a valid config.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    install(config);
    Ok(())
}

fn install(config: PageConfig) {
    let Some(doc) = WebDocument::current(config.root) else {
        log::warn!("no document; preferences not applied");
        return;
    };
    let document = doc.document.clone();
    let previous = MANAGER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let previous = slot.as_ref().map(WebManager::controls);
        *slot = Some(PreferenceManager::new(LocalStorage::open(), doc, config));
        previous
    });

    // A config reload may rename controls; the old ones must stop toggling.
    let first_install = previous.is_none();
    for (_, element) in previous.into_iter().flatten() {
        unbind_click(&element);
    }

    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(on_dom_ready);
        warn_on_err(
            "listen for DOMContentLoaded",
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.as_ref().unchecked_ref(),
            ),
        );
        on_ready.forget();
    } else {
        on_dom_ready();
    }

    // Document-level listeners survive a config reload; attach them once.
    if first_install {
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(on_document_click);
        warn_on_err(
            "listen for document clicks",
            document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()),
        );
        on_click.forget();
    }
}

fn on_dom_ready() {
    let controls = with_manager(|manager| {
        manager.initialize();
        manager.controls()
    });
    for (control, element) in controls.into_iter().flatten() {
        let handler: fn() = match control {
            Control::Theme => toggle_theme,
            Control::Fun => toggle_fun,
            Control::Language => toggle_language,
            Control::MobileMenu => toggle_mobile_menu,
        };
        bind_click(&element, handler);
    }
}

fn bind_click(element: &Element, handler: fn()) {
    // Replacing `onclick` keeps a config reload from stacking handlers.
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(handler);
    html.set_onclick(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}

fn unbind_click(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.set_onclick(None);
    }
}

fn on_document_click(event: MouseEvent) {
    let target = match event.target().map(|target| target.dyn_into::<Element>()) {
        Some(Ok(element)) => Some(element),
        Some(Err(_)) | None => None,
    };
    with_manager(|manager| {
        let config = manager.config().clone();
        if menu::handle_document_click(manager.document_mut(), &config, target.as_ref()) {
            log::debug!("mobile menu closed by outside click");
        }
    });
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    with_manager(WebManager::toggle_theme);
}

#[wasm_bindgen(js_name = toggleFun)]
pub fn toggle_fun() {
    with_manager(WebManager::toggle_fun);
}

#[wasm_bindgen(js_name = toggleLanguage)]
pub fn toggle_language() {
    with_manager(WebManager::toggle_language);
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    with_manager(|manager| {
        let config = manager.config().clone();
        menu::toggle_mobile_menu(manager.document_mut(), &config)
    });
}
