//! Retrieving CSVW metadata and CSV documents.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

/// Errors raised while fetching a document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request could not be sent or its body not read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("GET {url} returned status {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// A `file:` URL could not be read.
    #[error("failed to read {}: {source}", path.display())]
    File {
        /// The local path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The URL's scheme is neither `http(s)` nor `file`.
    #[error("unsupported URL scheme in {0}")]
    UnsupportedScheme(String),
}

/// Source of remote documents.
///
/// Implementations return the document body as text.
pub trait Fetcher {
    /// Fetches `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the document cannot be retrieved.
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher that also reads `file:` URLs from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    /// Per-request timeout.
    pub const TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn client() -> Result<Client, FetchError> {
        Ok(Client::builder()
            .timeout(Self::TIMEOUT)
            .user_agent(concat!("semflow/", env!("CARGO_PKG_VERSION")))
            .build()?)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        match url.scheme() {
            "http" | "https" => {
                tracing::debug!(%url, "GET");
                let response = Self::client()?.get(url.clone()).send()?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.text()?)
            }
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| FetchError::UnsupportedScheme(url.to_string()))?;
                tracing::debug!(path = %path.display(), "reading local document");
                std::fs::read_to_string(&path).map_err(|source| FetchError::File { path, source })
            }
            _ => Err(FetchError::UnsupportedScheme(url.to_string())),
        }
    }
}
