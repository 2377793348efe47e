//! Dialect-specific rendering of accessors and action methods.
//!
//! Exactly one emitter exists per supported dialect, behind the [`Emitter`]
//! trait. The dialect is resolved once via [`emitter_for`]; nothing in the
//! rendering paths branches on it again.

use std::fmt;

use crate::naming::capitalize_first;

/// Target automation dialect for the generated class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
	/// Synchronous chain-returning calls (`cy.get(...)`, `cy.contains(...)`).
	#[default]
	Cypress,
	/// Asynchronous locator calls (`this.page.locator(...)`, awaited actions).
	Playwright,
}

impl Dialect {
	pub fn as_str(&self) -> &'static str {
		match self {
			Dialect::Cypress => "cypress",
			Dialect::Playwright => "playwright",
		}
	}
}

impl fmt::Display for Dialect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Rendering capability implemented once per dialect.
///
/// Accessor methods return a full class-member fragment (doc comment plus
/// getter); action methods return the matching interaction method. Fragments
/// are later joined with blank lines and wrapped in a class declaration.
pub trait Emitter: Send + Sync {
	/// Type named in generated `@returns` doc lines.
	fn chainable_type(&self) -> &'static str;

	/// Getter finding an element by visible text, scoped to `tag`.
	fn text_accessor(&self, name: &str, text: &str, tag: &str) -> String;

	/// Getter finding an element by CSS selector.
	fn selector_accessor(&self, name: &str, kind_doc: &str, selector: &str, hint: &str) -> String;

	/// `click<Name>()` acting on the named accessor.
	fn click_method(&self, accessor: &str) -> String;

	/// `select<Name>(option)` acting on the named accessor.
	fn select_method(&self, accessor: &str) -> String;

	/// `type<Name>(value)` acting on the named accessor.
	fn type_method(&self, accessor: &str) -> String;
}

/// Resolve the emitter for a dialect, once at startup.
pub fn emitter_for(dialect: Dialect) -> &'static dyn Emitter {
	match dialect {
		Dialect::Cypress => &CypressEmitter,
		Dialect::Playwright => &PlaywrightEmitter,
	}
}

/// Escape single and double quotes for embedding in a JS string literal.
pub fn escape_text(text: &str) -> String {
	text.replace('\'', "\\'").replace('"', "\\\"")
}

fn doc_block(lines: &[&str]) -> String {
	let mut out = String::from("  /**\n");
	for line in lines {
		out.push_str("   * ");
		out.push_str(line);
		out.push('\n');
	}
	out.push_str("   */");
	out
}

fn kind_line(kind_doc: &str, hint: &str) -> String {
	if hint.is_empty() {
		kind_doc.to_string()
	} else {
		format!("{kind_doc}: {hint}")
	}
}

fn getter(doc: &str, name: &str, body: &str) -> String {
	format!("{doc}\n  get {name}() {{\n    return {body};\n  }}")
}

fn method(doc: &str, signature: &str, body: &str) -> String {
	format!("{doc}\n  {signature} {{\n    {body}\n  }}")
}

fn action_name(verb: &str, accessor: &str) -> String {
	format!("{verb}{}", capitalize_first(accessor))
}

pub struct CypressEmitter;

impl Emitter for CypressEmitter {
	fn chainable_type(&self) -> &'static str {
		"Cypress.Chainable"
	}

	fn text_accessor(&self, name: &str, text: &str, tag: &str) -> String {
		let doc = doc_block(&[
			&format!("Clickable {tag}: {text}"),
			"Use .click() to trigger",
			&format!("@returns {{{}}}", self.chainable_type()),
		]);
		getter(&doc, name, &format!("cy.contains('{tag}', '{}')", escape_text(text)))
	}

	fn selector_accessor(&self, name: &str, kind_doc: &str, selector: &str, hint: &str) -> String {
		let doc = doc_block(&[
			&kind_line(kind_doc, hint),
			&format!("@returns {{{}}}", self.chainable_type()),
		]);
		getter(&doc, name, &format!("cy.get('{selector}')"))
	}

	fn click_method(&self, accessor: &str) -> String {
		let doc = doc_block(&[&format!("Clicks the {accessor} element")]);
		method(
			&doc,
			&format!("{}()", action_name("click", accessor)),
			&format!("this.{accessor}.click();"),
		)
	}

	fn select_method(&self, accessor: &str) -> String {
		let doc = doc_block(&[
			&format!("Selects an option from {accessor} dropdown"),
			"@param {string} option",
		]);
		method(
			&doc,
			&format!("{}(option)", action_name("select", accessor)),
			&format!("this.{accessor}.select(option);"),
		)
	}

	fn type_method(&self, accessor: &str) -> String {
		let doc = doc_block(&[
			&format!("Types into the {accessor} input field"),
			"@param {string} value",
		]);
		method(
			&doc,
			&format!("{}(value)", action_name("type", accessor)),
			&format!("this.{accessor}.type(value);"),
		)
	}
}

pub struct PlaywrightEmitter;

impl Emitter for PlaywrightEmitter {
	fn chainable_type(&self) -> &'static str {
		"Locator"
	}

	fn text_accessor(&self, name: &str, text: &str, tag: &str) -> String {
		let doc = doc_block(&[
			&format!("Clickable {tag}: {text}"),
			"Use .click() to trigger",
			&format!("@returns {{{}}}", self.chainable_type()),
		]);
		getter(
			&doc,
			name,
			&format!("this.page.locator('{tag}', {{ hasText: '{}' }})", escape_text(text)),
		)
	}

	fn selector_accessor(&self, name: &str, kind_doc: &str, selector: &str, hint: &str) -> String {
		let doc = doc_block(&[
			&kind_line(kind_doc, hint),
			&format!("@returns {{{}}}", self.chainable_type()),
		]);
		getter(&doc, name, &format!("this.page.locator('{selector}')"))
	}

	fn click_method(&self, accessor: &str) -> String {
		let doc = doc_block(&[&format!("Clicks the {accessor} element")]);
		method(
			&doc,
			&format!("async {}()", action_name("click", accessor)),
			&format!("await this.{accessor}.click();"),
		)
	}

	fn select_method(&self, accessor: &str) -> String {
		let doc = doc_block(&[
			&format!("Selects an option from {accessor} dropdown"),
			"@param {string} option",
		]);
		method(
			&doc,
			&format!("async {}(option)", action_name("select", accessor)),
			&format!("await this.{accessor}.selectOption(option);"),
		)
	}

	fn type_method(&self, accessor: &str) -> String {
		let doc = doc_block(&[
			&format!("Types into the {accessor} input field"),
			"@param {string} value",
		]);
		method(
			&doc,
			&format!("async {}(value)", action_name("type", accessor)),
			&format!("await this.{accessor}.fill(value);"),
		)
	}
}
