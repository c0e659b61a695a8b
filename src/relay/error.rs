#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("bad response from token endpoint: {0}")]
    Response(String),
    #[error("token endpoint response did not contain an access_token{}", detail(.0))]
    MissingToken(Option<String>),
}

fn detail(provider_error: &Option<String>) -> String {
    match provider_error {
        Some(e) => format!(" ({})", e),
        None => String::new(),
    }
}

impl Error {
    pub fn configuration(description: impl Into<String>) -> Self {
        Self::Configuration(description.into())
    }

    pub fn validation(description: impl Into<String>) -> Self {
        Self::Validation(description.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        // Strip the URL so nothing request-specific ends up in a reply body.
        let e = e.without_url();
        if e.is_timeout() {
            Self::Network(format!("token endpoint timed out: {}", e))
        } else if e.is_decode() {
            Self::Response(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Configuration(format!("invalid provider url: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_mentions_provider_error_when_known() {
        let bare = Error::MissingToken(None).to_string();
        let detailed = Error::MissingToken(Some("invalid_grant".to_string())).to_string();

        assert_eq!(bare, "token endpoint response did not contain an access_token");
        assert!(detailed.ends_with("(invalid_grant)"));
    }
}
