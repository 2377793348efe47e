use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PogenError>;

/// Failure taxonomy for one generation run.
///
/// Every variant is terminal: the tool is a one-shot batch utility and never
/// retries. The process exits 1 on any of these.
#[derive(Debug, Error)]
pub enum PogenError {
	#[error("provide a target URL, for example: pogen http://localhost:3000")]
	Usage,

	#[error("invalid target URL: {url}")]
	InvalidUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},

	#[error("browser launch failed: {0}")]
	BrowserLaunch(String),

	#[error("browser shutdown failed: {0}")]
	BrowserClose(String),

	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error("page scrape failed: {0}")]
	Scrape(String),

	#[error("failed to write page object: {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl PogenError {
	/// Machine-readable code for the JSON error envelope.
	pub fn code(&self) -> &'static str {
		match self {
			PogenError::Usage => "USAGE",
			PogenError::InvalidUrl { .. } => "INVALID_URL",
			PogenError::BrowserLaunch(_) => "BROWSER_LAUNCH_FAILED",
			PogenError::BrowserClose(_) => "BROWSER_CLOSE_FAILED",
			PogenError::Navigation { .. } => "NAVIGATION_FAILED",
			PogenError::Timeout { .. } => "TIMEOUT",
			PogenError::Scrape(_) => "SCRAPE_FAILED",
			PogenError::Write { .. } => "WRITE_FAILED",
			PogenError::Io(_) => "IO_ERROR",
			PogenError::Json(_) => "INTERNAL_ERROR",
		}
	}
}
