//! # site-prefs
//!
//! Client-side personalization for a static site, compiled to WebAssembly.
//! Persists a color theme, a fun/professional display mode, and an
//! English/French content toggle in `localStorage`, reflects them into the
//! page, and drives the mobile navigation menu.
//!
//! All logic is written against two small seams, [`storage::KeyValueStore`]
//! and [`document::PageDocument`], so it runs natively under test against the
//! in-memory fakes. The `hydrate` feature adds the browser runtime in `web`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`prefs`] | Preference enums and the [`prefs::Preferences`] settings struct |
//! | [`storage`] | Key/value storage seam and in-memory store |
//! | [`document`] | Document contract and in-memory document |
//! | [`config`] | Element ids, selectors, classes, and assets the runtime looks up |
//! | [`manager`] | Load, render, and toggle preferences |
//! | [`menu`] | Mobile navigation menu controller |
//! | [`components`] | Leptos markup for the controls and bilingual text |

pub mod components;
pub mod config;
pub mod document;
pub mod manager;
pub mod menu;
pub mod prefs;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod web;
