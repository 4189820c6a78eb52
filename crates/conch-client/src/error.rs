use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the REST client.
///
/// There is deliberately no retry machinery behind these: a non-2xx status
/// or a transport failure is reported once and the caller decides whether
/// the run can continue (per-device lookups) or must abort (catalog fetch).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("resource not found: {url}")]
    NotFound { url: String },

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    pub(crate) fn from_ureq(url: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(404, _) => ClientError::NotFound {
                url: url.to_string(),
            },
            ureq::Error::Status(status, _) => ClientError::UnexpectedStatus {
                status,
                url: url.to_string(),
            },
            ureq::Error::Transport(transport) => ClientError::Transport {
                url: url.to_string(),
                source: Box::new(transport),
            },
        }
    }
}
