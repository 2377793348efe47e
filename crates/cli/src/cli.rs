//! Command-line surface for `pogen`.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use pogen_core::Dialect;

use crate::output::SummaryFormat;

/// Root CLI: one positional target, everything else tweaks the run.
#[derive(Parser, Debug)]
#[command(name = "pogen")]
#[command(about = "Scrapes a live page and generates a page-object class")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Target URL to scrape (for example: http://localhost:3000)
	#[arg(value_name = "URL")]
	pub url: Option<String>,

	/// Dialect for generated accessors and action methods
	#[arg(long, value_enum, default_value = "cypress")]
	pub style: StyleArg,

	/// Output file path (missing parent directories are created)
	#[arg(long, value_name = "PATH", default_value = "LearningPathsPage.js")]
	pub out: PathBuf,

	/// Name of the generated class
	#[arg(long, value_name = "NAME", default_value = "LearningPathsPage")]
	pub class_name: String,

	/// Settle delay after the DOM is ready, for late-rendering content
	#[arg(long, value_name = "MS", default_value = "1000")]
	pub settle_ms: u64,

	/// Timeout waiting for the page body to appear
	#[arg(long, value_name = "MS", default_value = "10000")]
	pub timeout_ms: u64,

	/// Run the browser with a visible window
	#[arg(long)]
	pub headed: bool,

	/// Disable the Chromium sandbox (needed in some containers)
	#[arg(long)]
	pub no_sandbox: bool,

	/// Explicit Chromium executable to launch
	#[arg(long, value_name = "PATH")]
	pub chrome: Option<PathBuf>,

	/// Run summary format on stdout
	#[arg(short = 'f', long, value_enum, default_value = "text")]
	pub format: SummaryFormat,

	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}

/// Dialect selection (CLI wrapper for [`pogen_core::Dialect`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StyleArg {
	/// Synchronous chain-returning calls
	#[default]
	Cypress,
	/// Asynchronous awaited locator calls
	Playwright,
}

impl From<StyleArg> for Dialect {
	fn from(style: StyleArg) -> Self {
		match style {
			StyleArg::Cypress => Dialect::Cypress,
			StyleArg::Playwright => Dialect::Playwright,
		}
	}
}

/// clap Styles matching cargo's help output colors.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
		.valid(AnsiColor::Cyan.on_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bare_invocation_uses_stock_defaults() {
		let cli = Cli::try_parse_from(["pogen", "http://localhost:3000"]).unwrap();
		assert_eq!(cli.url.as_deref(), Some("http://localhost:3000"));
		assert_eq!(cli.style, StyleArg::Cypress);
		assert_eq!(cli.out, PathBuf::from("LearningPathsPage.js"));
		assert_eq!(cli.class_name, "LearningPathsPage");
		assert_eq!(cli.settle_ms, 1000);
		assert_eq!(cli.timeout_ms, 10_000);
		assert!(!cli.headed);
		assert_eq!(cli.format, SummaryFormat::Text);
	}

	#[test]
	fn url_is_optional_at_parse_time() {
		// Missing URL is reported as a usage error by the generate flow,
		// not by clap, so the exit code stays 1.
		let cli = Cli::try_parse_from(["pogen"]).unwrap();
		assert!(cli.url.is_none());
	}

	#[test]
	fn style_values_parse() {
		let cli = Cli::try_parse_from(["pogen", "http://x", "--style", "playwright"]).unwrap();
		assert_eq!(cli.style, StyleArg::Playwright);
		assert_eq!(Dialect::from(cli.style), Dialect::Playwright);

		assert!(Cli::try_parse_from(["pogen", "http://x", "--style", "selenium"]).is_err());
	}

	#[test]
	fn overrides_parse() {
		let cli = Cli::try_parse_from([
			"pogen",
			"http://x",
			"--out",
			"pages/HomePage.js",
			"--class-name",
			"HomePage",
			"--settle-ms",
			"250",
			"--no-sandbox",
			"-f",
			"json",
			"-vv",
		])
		.unwrap();
		assert_eq!(cli.out, PathBuf::from("pages/HomePage.js"));
		assert_eq!(cli.class_name, "HomePage");
		assert_eq!(cli.settle_ms, 250);
		assert!(cli.no_sandbox);
		assert_eq!(cli.format, SummaryFormat::Json);
		assert_eq!(cli.verbose, 2);
	}
}
