use std::fmt;

/// Which outbound dependency a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamService {
    Tenor,
    Preview,
    BlobStore,
}

impl UpstreamService {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamService::Tenor => "tenor",
            UpstreamService::Preview => "preview",
            UpstreamService::BlobStore => "blob_store",
        }
    }
}

impl fmt::Display for UpstreamService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum GifError {
    // Upstream answered with a non-2xx status
    UpstreamHttp {
        service: UpstreamService,
        status: u16,
        status_text: String,
    },
    // Could not reach the upstream at all, including timeouts
    Network {
        service: UpstreamService,
        message: String,
        timed_out: bool,
    },
    // Preview body exceeded the byte cap
    PreviewTooLarge { limit: usize },
    Transcode(String),
    MalformedResponse(String),
}

impl GifError {
    /// Request URLs never reach the message: Tenor URLs carry the API key.
    pub fn network(service: UpstreamService, err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let message = if timed_out {
            "request timed out".to_string()
        } else {
            err.without_url().to_string()
        };
        GifError::Network {
            service,
            message,
            timed_out,
        }
    }

    pub fn from_status(service: UpstreamService, status: reqwest::StatusCode) -> Self {
        GifError::UpstreamHttp {
            service,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Upstream status code, when the failure was an HTTP error response.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GifError::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for GifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GifError::UpstreamHttp {
                service: UpstreamService::Tenor,
                status,
                status_text,
            } => write!(f, "Tenor API error: {} {}", status, status_text),
            GifError::UpstreamHttp {
                service,
                status,
                status_text,
            } => write!(f, "{} error: {} {}", service, status, status_text),
            GifError::Network {
                service, message, ..
            } => write!(f, "failed to reach {}: {}", service, message),
            GifError::PreviewTooLarge { limit } => {
                write!(f, "preview image is larger than {} bytes", limit)
            }
            GifError::Transcode(msg) => write!(f, "failed to transcode preview: {}", msg),
            GifError::MalformedResponse(msg) => write!(f, "malformed upstream response: {}", msg),
        }
    }
}

impl std::error::Error for GifError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenor_errors_read_like_the_api() {
        let err = GifError::from_status(UpstreamService::Tenor, reqwest::StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "Tenor API error: 403 Forbidden");
        assert_eq!(err.upstream_status(), Some(403));
    }

    #[test]
    fn non_http_errors_have_no_status() {
        assert_eq!(GifError::Transcode("bad".into()).upstream_status(), None);
        assert_eq!(
            GifError::MalformedResponse("no blob".into()).upstream_status(),
            None
        );
    }
}
