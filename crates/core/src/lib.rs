//! Browser-free core of the pogen page-object generator.
//!
//! The binary crate drives a real browser; everything here is pure data
//! transformation. [`scrape`] holds the in-page extraction script and the
//! shape of what it returns, [`naming`] turns raw labels into unique
//! identifier-safe names, [`emit`] renders accessors and action methods in
//! the selected dialect, and [`page_object`] assembles the final class.

pub mod emit;
pub mod naming;
pub mod page_object;
pub mod scrape;

pub use emit::{Dialect, Emitter, emitter_for};
pub use page_object::{ElementKind, Locator, NamedElement, PageObject, build_page_object};
pub use scrape::{EXTRACT_SCRIPT, ScrapedControl, ScrapedPage};
