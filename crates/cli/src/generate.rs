//! The one-shot generation flow: fetch, scrape, name, emit, write.

use pogen_core::{Dialect, build_page_object};
use tracing::info;

use crate::browser::{BrowserOptions, with_browser};
use crate::cli::Cli;
use crate::error::{PogenError, Result};
use crate::output::{self, GenerationSummary};
use crate::writer;

pub async fn run(cli: Cli) -> Result<()> {
	let Some(raw_url) = cli.url else {
		return Err(PogenError::Usage);
	};
	let url = normalize_url(&raw_url)?;

	let dialect = Dialect::from(cli.style);
	let options = BrowserOptions {
		headed: cli.headed,
		no_sandbox: cli.no_sandbox,
		chrome: cli.chrome,
	};

	info!(
		target = "pogen",
		url = %url,
		style = %dialect,
		out = %cli.out.display(),
		"generating page object"
	);

	let target = url.clone();
	let timeout_ms = cli.timeout_ms;
	let settle_ms = cli.settle_ms;

	let scraped = with_browser(&options, move |session| {
		Box::pin(async move {
			session.open(&target, timeout_ms, settle_ms).await?;
			session.scrape().await
		})
	})
	.await?;

	let page_object = build_page_object(&scraped, dialect, &cli.class_name);
	writer::write_page_object(&cli.out, &page_object.source)?;

	let summary = GenerationSummary::new(&url, dialect, &cli.out, &page_object);
	output::print_summary(&summary, cli.format);

	Ok(())
}

/// Validates the target URL, defaulting bare host[:port] input to http.
///
/// `pogen localhost:3000` is the common local-dev invocation; without the
/// scheme fixup the URL crate would parse `localhost` as a scheme and the
/// browser would refuse to navigate. `data:` URLs pass through untouched.
fn normalize_url(raw: &str) -> Result<String> {
	let candidate = if raw.contains("://") || raw.starts_with("data:") {
		raw.to_string()
	} else {
		format!("http://{raw}")
	};

	url::Url::parse(&candidate)
		.map(String::from)
		.map_err(|source| PogenError::InvalidUrl {
			url: raw.to_string(),
			source,
		})
}
