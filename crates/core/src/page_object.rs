//! Assembly of scraped elements into a rendered page-object class.
//!
//! Processing order is fixed: links, dropdowns, buttons, inputs. Links and
//! buttons whose display text was already seen this run are skipped
//! entirely; all four categories share one name pool, so accessor names
//! never collide across categories.

use crate::emit::{Dialect, Emitter, emitter_for};
use crate::naming::{NamePool, clean_text, sanitize};
use crate::scrape::ScrapedPage;

/// Category of a generated member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
	Link,
	Dropdown,
	Button,
	Input,
}

/// How a generated accessor locates its element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
	/// Find by visible text scoped to a tag (`a`, `button`).
	VisibleText(String),
	/// Find by derived CSS selector.
	Css(String),
}

/// One named member of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedElement {
	pub name: String,
	pub kind: ElementKind,
	pub locator: Locator,
}

/// A fully assembled page object: the members that survived dedup and the
/// rendered class source.
#[derive(Debug, Clone)]
pub struct PageObject {
	pub class_name: String,
	pub members: Vec<NamedElement>,
	pub source: String,
}

impl PageObject {
	/// Number of members of one category.
	pub fn count(&self, kind: ElementKind) -> usize {
		self.members.iter().filter(|m| m.kind == kind).count()
	}
}

/// Assemble scraped data into a rendered class in the chosen dialect.
pub fn build_page_object(page: &ScrapedPage, dialect: Dialect, class_name: &str) -> PageObject {
	let emitter: &dyn Emitter = emitter_for(dialect);
	let mut pool = NamePool::new();
	let mut members = Vec::new();
	let mut accessors = Vec::new();
	let mut actions = Vec::new();

	for raw in &page.links {
		let text = clean_text(raw);
		if !pool.note_text(&text) {
			continue;
		}
		let name = pool.claim(&sanitize(&text));
		accessors.push(emitter.text_accessor(&name, &text, "a"));
		actions.push(emitter.click_method(&name));
		members.push(NamedElement {
			name,
			kind: ElementKind::Link,
			locator: Locator::VisibleText(text),
		});
	}

	for control in &page.dropdowns {
		let label = clean_text(&control.label);
		let name = pool.claim(&sanitize(&label));
		accessors.push(emitter.selector_accessor(&name, "Dropdown", &control.selector, "Use .select('Option')"));
		actions.push(emitter.select_method(&name));
		members.push(NamedElement {
			name,
			kind: ElementKind::Dropdown,
			locator: Locator::Css(control.selector.clone()),
		});
	}

	for raw in &page.buttons {
		let text = clean_text(raw);
		if !pool.note_text(&text) {
			continue;
		}
		let name = pool.claim(&sanitize(&text));
		accessors.push(emitter.text_accessor(&name, &text, "button"));
		actions.push(emitter.click_method(&name));
		members.push(NamedElement {
			name,
			kind: ElementKind::Button,
			locator: Locator::VisibleText(text),
		});
	}

	for control in &page.inputs {
		let label = clean_text(&control.label);
		let name = pool.claim(&sanitize(&label));
		accessors.push(emitter.selector_accessor(&name, "Input field", &control.selector, "Use .type('value')"));
		actions.push(emitter.type_method(&name));
		members.push(NamedElement {
			name,
			kind: ElementKind::Input,
			locator: Locator::Css(control.selector.clone()),
		});
	}

	let source = render_class(class_name, &accessors, &actions);

	PageObject {
		class_name: class_name.to_string(),
		members,
		source,
	}
}

fn render_class(class_name: &str, accessors: &[String], actions: &[String]) -> String {
	format!(
		"class {class_name} {{\n\n{}\n\n  // ===== Interactions =====\n\n{}\n\n}}\n\nexport default {class_name};\n",
		accessors.join("\n\n"),
		actions.join("\n\n"),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scrape::ScrapedControl;

	fn control(selector: &str, label: &str) -> ScrapedControl {
		ScrapedControl {
			selector: selector.to_string(),
			label: label.to_string(),
		}
	}

	fn fixture_page() -> ScrapedPage {
		ScrapedPage {
			links: vec!["Home".to_string()],
			dropdowns: vec![control("#country", "country")],
			buttons: vec!["Submit".to_string()],
			inputs: vec![control("[name=\"email\"]", "Email")],
		}
	}

	#[test]
	fn fixture_page_generates_expected_members() {
		let page_object = build_page_object(&fixture_page(), Dialect::Cypress, "LearningPathsPage");

		let names: Vec<&str> = page_object.members.iter().map(|m| m.name.as_str()).collect();
		assert_eq!(names, vec!["home", "country", "submit", "email"]);

		for method in ["clickHome", "selectCountry", "clickSubmit", "typeEmail"] {
			assert!(page_object.source.contains(method), "missing {method}");
		}
	}

	#[test]
	fn member_names_are_unique_across_categories() {
		let page = ScrapedPage {
			links: vec!["Search".to_string()],
			dropdowns: vec![control("select.search", "Search")],
			buttons: vec!["Go".to_string()],
			inputs: vec![control("#search", "Search")],
		};
		let page_object = build_page_object(&page, Dialect::Cypress, "SearchPage");

		let names: Vec<&str> = page_object.members.iter().map(|m| m.name.as_str()).collect();
		assert_eq!(names, vec!["search", "search2", "go", "search3"]);

		let mut deduped = names.clone();
		deduped.sort_unstable();
		deduped.dedup();
		assert_eq!(deduped.len(), names.len());
	}

	#[test]
	fn repeated_link_and_button_text_collapses_to_one_member() {
		let page = ScrapedPage {
			links: vec!["OK".to_string(), "OK".to_string()],
			dropdowns: vec![],
			buttons: vec!["OK".to_string()],
			inputs: vec![],
		};
		let page_object = build_page_object(&page, Dialect::Cypress, "DialogPage");

		// The second link and the button repeat the same caption; only the
		// first occurrence generates a member.
		assert_eq!(page_object.members.len(), 1);
		assert_eq!(page_object.members[0].kind, ElementKind::Link);
		assert_eq!(page_object.members[0].name, "ok");
	}

	#[test]
	fn dropdowns_and_inputs_are_never_text_deduped() {
		let page = ScrapedPage {
			links: vec![],
			dropdowns: vec![control("#a", "Size"), control("#b", "Size")],
			buttons: vec![],
			inputs: vec![control("#c", "Size")],
		};
		let page_object = build_page_object(&page, Dialect::Cypress, "FilterPage");

		let names: Vec<&str> = page_object.members.iter().map(|m| m.name.as_str()).collect();
		assert_eq!(names, vec!["size", "size2", "size3"]);
	}

	#[test]
	fn accessor_and_action_counts_match_member_count() {
		let page_object = build_page_object(&fixture_page(), Dialect::Cypress, "LearningPathsPage");
		let n = page_object.members.len();

		assert_eq!(page_object.source.matches("\n  get ").count(), n);
		assert_eq!(page_object.source.matches("  /**").count(), 2 * n);
		assert_eq!(page_object.source.matches("// ===== Interactions =====").count(), 1);
	}

	#[test]
	fn rendered_class_has_declaration_and_default_export() {
		let page_object = build_page_object(&fixture_page(), Dialect::Cypress, "CheckoutPage");
		assert!(page_object.source.starts_with("class CheckoutPage {\n"));
		assert!(page_object.source.ends_with("export default CheckoutPage;\n"));
	}

	#[test]
	fn accessors_precede_the_interactions_separator() {
		let page_object = build_page_object(&fixture_page(), Dialect::Cypress, "LearningPathsPage");
		let separator = page_object.source.find("// ===== Interactions =====").unwrap();
		let last_getter = page_object.source.rfind("\n  get ").unwrap();
		let first_action = page_object.source.find("clickHome() {").unwrap();

		assert!(last_getter < separator);
		assert!(separator < first_action);
	}

	#[test]
	fn playwright_dialect_renders_async_members() {
		let page_object = build_page_object(&fixture_page(), Dialect::Playwright, "LearningPathsPage");
		assert!(page_object.source.contains("this.page.locator('#country')"));
		assert!(page_object.source.contains("async clickHome()"));
		assert!(page_object.source.contains("await this.email.fill(value);"));
		assert!(!page_object.source.contains("cy.get("));
	}

	#[test]
	fn kind_counts_cover_all_members() {
		let page_object = build_page_object(&fixture_page(), Dialect::Cypress, "LearningPathsPage");
		assert_eq!(page_object.count(ElementKind::Link), 1);
		assert_eq!(page_object.count(ElementKind::Dropdown), 1);
		assert_eq!(page_object.count(ElementKind::Button), 1);
		assert_eq!(page_object.count(ElementKind::Input), 1);
	}

	#[test]
	fn long_captions_are_truncated_before_naming() {
		let long = format!("Details {}", "very ".repeat(20));
		let page = ScrapedPage {
			links: vec![long],
			..ScrapedPage::default()
		};
		let page_object = build_page_object(&page, Dialect::Cypress, "DetailsPage");

		let Locator::VisibleText(text) = &page_object.members[0].locator else {
			panic!("link member should locate by text");
		};
		assert_eq!(text.chars().count(), 50);
	}
}
