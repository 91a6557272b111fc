//! Feed fetch error types.

/// Errors that can occur while fetching the station status feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status
    #[error("feed returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not a station status document
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "feed returned 503: Service Unavailable");

        let err = FeedError::Json {
            message: "missing field `data`".into(),
            body: Some("{}".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: missing field `data`");
    }
}
