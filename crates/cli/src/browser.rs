//! Headless-browser session for the scrape step.
//!
//! Wraps chromiumoxide: launch Chromium, open one page, navigate and let the
//! DOM settle, evaluate the extraction script, close. [`with_browser`] is
//! the only entry point command flows use; it closes the browser on both the
//! success and the failure path.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use pogen_core::{EXTRACT_SCRIPT, ScrapedPage};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::{PogenError, Result};

/// Launch options derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct BrowserOptions {
	/// Show a browser window instead of running headless.
	pub headed: bool,
	/// Disable the Chromium sandbox (containers, CI).
	pub no_sandbox: bool,
	/// Explicit Chromium executable; auto-detected when absent.
	pub chrome: Option<PathBuf>,
}

/// A launched browser process with one open page.
pub struct BrowserSession {
	browser: Browser,
	page: Page,
	handler: JoinHandle<()>,
}

impl BrowserSession {
	/// Launches Chromium and opens a blank page.
	pub async fn launch(options: &BrowserOptions) -> Result<Self> {
		let mut builder = BrowserConfig::builder();
		if options.headed {
			builder = builder.with_head();
		}
		if options.no_sandbox {
			builder = builder.no_sandbox();
		}
		if let Some(path) = &options.chrome {
			builder = builder.chrome_executable(path);
		}
		let config = builder.build().map_err(PogenError::BrowserLaunch)?;

		debug!(target = "pogen", headed = options.headed, "launching browser");
		let (browser, mut events) = Browser::launch(config)
			.await
			.map_err(|e| PogenError::BrowserLaunch(e.to_string()))?;

		// The event stream ends when the browser process goes away.
		let handler = tokio::spawn(async move {
			while let Some(event) = events.next().await {
				if event.is_err() {
					break;
				}
			}
		});

		let page = browser
			.new_page("about:blank")
			.await
			.map_err(|e| PogenError::BrowserLaunch(e.to_string()))?;

		Ok(Self { browser, page, handler })
	}

	/// Navigates to `url`, waits for `body`, then lets late content settle.
	pub async fn open(&self, url: &str, timeout_ms: u64, settle_ms: u64) -> Result<()> {
		info!(target = "pogen", url = %url, "navigating");
		self.page.goto(url).await.map_err(|e| PogenError::Navigation {
			url: url.to_string(),
			source: e.into(),
		})?;

		self.wait_for_body(timeout_ms).await?;
		tokio::time::sleep(Duration::from_millis(settle_ms)).await;
		Ok(())
	}

	/// Polls until a `body` element exists or the timeout elapses.
	async fn wait_for_body(&self, timeout_ms: u64) -> Result<()> {
		let deadline = Instant::now() + Duration::from_millis(timeout_ms);
		let poll = Duration::from_millis(100);

		loop {
			if self.page.find_element("body").await.is_ok() {
				return Ok(());
			}
			if Instant::now() >= deadline {
				return Err(PogenError::Timeout {
					ms: timeout_ms,
					condition: "body element".to_string(),
				});
			}
			tokio::time::sleep(poll).await;
		}
	}

	/// Runs the extraction script in the page and decodes its result.
	pub async fn scrape(&self) -> Result<ScrapedPage> {
		let script = format!("JSON.stringify({EXTRACT_SCRIPT})");
		let evaluated = self
			.page
			.evaluate(script)
			.await
			.map_err(|e| PogenError::Scrape(e.to_string()))?;
		let raw: String = evaluated
			.into_value()
			.map_err(|e| PogenError::Scrape(format!("unexpected evaluation result: {e}")))?;

		let scraped: ScrapedPage = serde_json::from_str(&raw)?;
		debug!(
			target = "pogen",
			links = scraped.links.len(),
			dropdowns = scraped.dropdowns.len(),
			buttons = scraped.buttons.len(),
			inputs = scraped.inputs.len(),
			"scrape complete"
		);
		Ok(scraped)
	}

	/// Closes the browser process and stops the event task.
	pub async fn close(mut self) -> Result<()> {
		self.browser
			.close()
			.await
			.map_err(|e| PogenError::BrowserClose(e.to_string()))?;
		self.handler.abort();
		Ok(())
	}
}

/// Runs `f` against a launched session, closing the browser on every path.
///
/// A scrape failure still tears the browser down before the error
/// propagates; the close result is ignored in that case so the original
/// failure is the one reported.
pub async fn with_browser<T>(
	options: &BrowserOptions,
	f: impl for<'s> FnOnce(&'s BrowserSession) -> Pin<Box<dyn Future<Output = Result<T>> + 's>>,
) -> Result<T> {
	let session = BrowserSession::launch(options).await?;

	let res = f(&session).await;

	match res {
		Ok(value) => {
			session.close().await?;
			Ok(value)
		}
		Err(err) => {
			let _ = session.close().await;
			Err(err)
		}
	}
}
