//! Run summary and error reporting.
//!
//! stdout carries the summary (human text by default, a JSON envelope with
//! `-f json` for script/agent consumption); stderr carries errors and logs.

use std::path::Path;

use colored::Colorize;
use pogen_core::{Dialect, ElementKind, PageObject};
use serde::Serialize;

use crate::error::PogenError;

/// Summary format on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
	/// Human-readable text
	#[default]
	Text,
	/// JSON envelope
	Json,
}

/// What one run produced.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
	pub ok: bool,
	pub url: String,
	pub style: String,
	pub class_name: String,
	pub output_path: String,
	pub counts: MemberCounts,
	pub total_members: usize,
}

/// Post-dedup member counts per category.
#[derive(Debug, Serialize)]
pub struct MemberCounts {
	pub links: usize,
	pub dropdowns: usize,
	pub buttons: usize,
	pub inputs: usize,
}

impl GenerationSummary {
	pub fn new(url: &str, dialect: Dialect, out: &Path, page_object: &PageObject) -> Self {
		Self {
			ok: true,
			url: url.to_string(),
			style: dialect.to_string(),
			class_name: page_object.class_name.clone(),
			output_path: out.display().to_string(),
			counts: MemberCounts {
				links: page_object.count(ElementKind::Link),
				dropdowns: page_object.count(ElementKind::Dropdown),
				buttons: page_object.count(ElementKind::Button),
				inputs: page_object.count(ElementKind::Input),
			},
			total_members: page_object.members.len(),
		}
	}
}

/// Prints the run summary to stdout.
pub fn print_summary(summary: &GenerationSummary, format: SummaryFormat) {
	match format {
		SummaryFormat::Json => {
			if let Ok(body) = serde_json::to_string_pretty(summary) {
				println!("{body}");
			}
		}
		SummaryFormat::Text => {
			println!(
				"{} {} ({} members, {} style)",
				"generated".green().bold(),
				summary.class_name,
				summary.total_members,
				summary.style,
			);
			println!(
				"  links: {}  dropdowns: {}  buttons: {}  inputs: {}",
				summary.counts.links, summary.counts.dropdowns, summary.counts.buttons, summary.counts.inputs,
			);
			println!("  written to {}", summary.output_path);
		}
	}
}

/// Prints an error to stderr, with its cause chain.
///
/// With `-f json` a failure envelope also goes to stdout so callers parsing
/// the summary see `ok: false` instead of empty output.
pub fn print_error(err: &PogenError, format: SummaryFormat) {
	eprintln!("Error [{}]: {}", err.code(), err);

	let mut source = std::error::Error::source(err);
	while let Some(cause) = source {
		eprintln!("  caused by: {cause}");
		source = cause.source();
	}

	if format == SummaryFormat::Json {
		let envelope = serde_json::json!({
			"ok": false,
			"error": { "code": err.code(), "message": err.to_string() },
		});
		println!("{envelope}");
	}
}
