//! In-page extraction script and the shape of the data it returns.
//!
//! The script runs inside the browser's document context and has no access
//! to generator state. It is pure data extraction: it reads the DOM and
//! returns four ordered arrays (links, dropdowns, buttons, inputs), in
//! document order within each category. Naming, dedup, and code emission
//! all happen on the Rust side.

use serde::{Deserialize, Serialize};

/// A `<select>` or input-like control scraped from the page.
///
/// `selector` is the derived CSS selector; `label` is the best available
/// human-readable caption for the control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedControl {
	pub selector: String,
	pub label: String,
}

/// Raw scrape result as returned by [`EXTRACT_SCRIPT`].
///
/// Links and buttons carry only their visible text; an accessor for them is
/// generated with a find-by-text query, so no selector is needed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapedPage {
	pub links: Vec<String>,
	pub dropdowns: Vec<ScrapedControl>,
	pub buttons: Vec<String>,
	pub inputs: Vec<ScrapedControl>,
}

impl ScrapedPage {
	/// Number of scraped entries across all categories, before dedup.
	pub fn len(&self) -> usize {
		self.links.len() + self.dropdowns.len() + self.buttons.len() + self.inputs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// JavaScript evaluated in the page to collect interactive elements.
///
/// Selector priority: `#id` > `[name="..."]` > `tag.class1.class2` > bare
/// tag name. Label priority for selects: associated `<label>` > `name` >
/// `id` > first option text; for text inputs: `<label>` > `name` > `id` >
/// `placeholder` > the literal `inputField`.
///
/// Link and button entries with empty text, or text of 80 characters or
/// more, are dropped in-page.
pub const EXTRACT_SCRIPT: &str = r#"
(() => {
    const clean = (text) => (text || '').replace(/\s+/g, ' ').trim();

    const cssSelector = (el) => {
        if (el.id) return '#' + el.id;
        if (el.name) return '[name="' + el.name + '"]';
        const classes = typeof el.className === 'string' ? el.className.trim() : '';
        if (classes) return el.tagName.toLowerCase() + '.' + classes.replace(/\s+/g, '.');
        return el.tagName.toLowerCase();
    };

    const labelText = (el) => clean(el.labels && el.labels[0] ? el.labels[0].innerText : '');

    const links = Array.from(document.querySelectorAll('a'))
        .map((el) => clean(el.innerText))
        .filter((text) => text && text.length < 80);

    const dropdowns = Array.from(document.querySelectorAll('select')).map((el) => {
        const firstOption = clean(el.options && el.options[0] ? el.options[0].text : '') || 'dropdown';
        const label = labelText(el) || el.name || el.id || 'dropdown ' + firstOption;
        return { selector: cssSelector(el), label: label };
    });

    const buttons = Array.from(document.querySelectorAll('button, input[type=submit]'))
        .map((el) => clean(el.innerText || el.value))
        .filter((text) => text && text.length < 80);

    const inputs = Array.from(
        document.querySelectorAll('input[type=text], input[type=email], textarea'),
    ).map((el) => {
        const label = labelText(el) || el.name || el.id || clean(el.placeholder) || 'inputField';
        return { selector: cssSelector(el), label: label };
    });

    return { links: links, dropdowns: dropdowns, buttons: buttons, inputs: inputs };
})()
"#;
