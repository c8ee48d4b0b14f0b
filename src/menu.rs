//! Mobile navigation menu.
//!
//! The open/closed state lives only in the document, as the open class on the
//! nav-links container. Nothing is persisted, so navigation resets it.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::PageConfig;
use crate::document::PageDocument;

/// Flip the mobile menu open or closed.
///
/// Returns the new open state, or `None` if the page has no nav-links
/// container.
pub fn toggle_mobile_menu<D: PageDocument>(doc: &mut D, config: &PageConfig) -> Option<bool> {
    let links = doc.element_by_id(&config.nav_links_id)?;
    let open = !doc.has_class(&links, &config.menu_open_class);
    doc.set_class(&links, &config.menu_open_class, open);
    Some(open)
}

/// Document-wide click handler: close the menu when the click landed outside
/// both the navigation container and the menu toggle.
///
/// `target` is `None` when the click target is not an element, which counts
/// as outside. Returns whether this click closed an open menu.
pub fn handle_document_click<D: PageDocument>(
    doc: &mut D,
    config: &PageConfig,
    target: Option<&D::Element>,
) -> bool {
    let (Some(nav), Some(toggle)) = (
        doc.query(&config.nav_selector),
        doc.query(&config.menu_toggle_selector()),
    ) else {
        return false;
    };
    if let Some(target) = target {
        if doc.contains(&nav, target) || doc.contains(&toggle, target) {
            return false;
        }
    }
    let Some(links) = doc.element_by_id(&config.nav_links_id) else {
        return false;
    };
    let was_open = doc.has_class(&links, &config.menu_open_class);
    doc.set_class(&links, &config.menu_open_class, false);
    was_open
}
