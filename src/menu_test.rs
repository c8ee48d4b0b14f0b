use super::*;
use crate::document::{MemoryDocument, NodeId};

struct Page {
    doc: MemoryDocument,
    nav: NodeId,
    link: NodeId,
    toggle: NodeId,
    body: NodeId,
}

fn page() -> Page {
    let mut doc = MemoryDocument::new();
    let nav = doc.append(None, "nav");
    let links = doc.append(Some(nav), "ul#navLinks");
    let link = doc.append(Some(links), "a");
    let toggle = doc.append(None, "button.mobile-menu-toggle");
    let body = doc.append(None, "main");
    Page { doc, nav, link, toggle, body }
}

fn is_open(doc: &MemoryDocument) -> bool {
    let links = doc.element_by_id("navLinks").unwrap();
    doc.has_class(&links, "active")
}

#[test]
fn toggle_opens_then_closes() {
    let mut p = page();
    let config = PageConfig::default();
    assert_eq!(toggle_mobile_menu(&mut p.doc, &config), Some(true));
    assert!(is_open(&p.doc));
    assert_eq!(toggle_mobile_menu(&mut p.doc, &config), Some(false));
    assert!(!is_open(&p.doc));
}

#[test]
fn toggle_without_links_container_is_noop() {
    let mut doc = MemoryDocument::new();
    assert_eq!(toggle_mobile_menu(&mut doc, &PageConfig::default()), None);
}

#[test]
fn click_inside_nav_keeps_menu_open() {
    let mut p = page();
    let config = PageConfig::default();
    toggle_mobile_menu(&mut p.doc, &config);
    assert!(!handle_document_click(&mut p.doc, &config, Some(&p.link)));
    assert!(!handle_document_click(&mut p.doc, &config, Some(&p.nav)));
    assert!(is_open(&p.doc));
}

#[test]
fn click_on_toggle_keeps_menu_open() {
    let mut p = page();
    let config = PageConfig::default();
    toggle_mobile_menu(&mut p.doc, &config);
    assert!(!handle_document_click(&mut p.doc, &config, Some(&p.toggle)));
    assert!(is_open(&p.doc));
}

#[test]
fn click_outside_closes_menu() {
    let mut p = page();
    let config = PageConfig::default();
    toggle_mobile_menu(&mut p.doc, &config);
    assert!(handle_document_click(&mut p.doc, &config, Some(&p.body)));
    assert!(!is_open(&p.doc));
}

#[test]
fn click_outside_closed_menu_reports_nothing_closed() {
    let mut p = page();
    let config = PageConfig::default();
    assert!(!handle_document_click(&mut p.doc, &config, Some(&p.body)));
    assert!(!is_open(&p.doc));
}

#[test]
fn non_element_target_counts_as_outside() {
    let mut p = page();
    let config = PageConfig::default();
    toggle_mobile_menu(&mut p.doc, &config);
    assert!(handle_document_click(&mut p.doc, &config, None));
    assert!(!is_open(&p.doc));
}

#[test]
fn missing_toggle_disables_outside_close() {
    let mut doc = MemoryDocument::new();
    let nav = doc.append(None, "nav");
    doc.append(Some(nav), "ul#navLinks.active");
    let body = doc.append(None, "main");
    assert!(!handle_document_click(&mut doc, &PageConfig::default(), Some(&body)));
    assert!(is_open(&doc));
}

#[test]
fn missing_nav_disables_outside_close() {
    let mut doc = MemoryDocument::new();
    doc.append(None, "div#navLinks.active");
    doc.append(None, "button.mobile-menu-toggle");
    let body = doc.append(None, "main");
    assert!(!handle_document_click(&mut doc, &PageConfig::default(), Some(&body)));
    assert!(is_open(&doc));
}

#[test]
fn outside_click_finds_a_renamed_toggle_class() {
    let config = PageConfig {
        menu_toggle_class: "burger".into(),
        ..PageConfig::default()
    };
    let mut doc = MemoryDocument::new();
    let nav = doc.append(None, "nav");
    doc.append(Some(nav), "ul#navLinks.active");
    let burger = doc.append(None, "button.burger");
    let body = doc.append(None, "main");

    assert!(!handle_document_click(&mut doc, &config, Some(&burger)));
    assert!(is_open(&doc));
    assert!(handle_document_click(&mut doc, &config, Some(&body)));
    assert!(!is_open(&doc));
}
