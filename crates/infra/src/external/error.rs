use thiserror::Error;

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Which upstream a call went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Square,
    Youtube,
    Scraper,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Square => "Square",
            Service::Youtube => "YouTube",
            Service::Scraper => "Scraper",
        }
    }
}

impl core::fmt::Display for Service {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// A credential or id the call needs is not configured.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("network error: {0}")]
    Network(String),
    /// Upstream answered with a non-2xx status.
    #[error("{service} API error: {body}")]
    Api {
        service: Service,
        status: u16,
        body: String,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
}
