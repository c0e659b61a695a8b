use reqwest::StatusCode;
use tracing::{event, Level};

use crate::core::models::{TokenGrant, TokenResponse};
use crate::relay::Error;

/// Interprets the token endpoint's reply.
///
/// A non-2xx status or a body that is not a JSON object is a
/// [`Error::Response`]; a well-formed object without `access_token` is a
/// [`Error::MissingToken`].
pub fn parse_token_response(status: StatusCode, body: &str) -> Result<TokenGrant, Error> {
    let parsed = serde_json::from_str::<TokenResponse>(body);

    if !status.is_success() {
        let detail = parsed
            .ok()
            .and_then(|r| r.provider_error())
            .unwrap_or_else(|| "no error description".to_string());
        event!(Level::DEBUG, %status, "token endpoint refused the exchange");
        return Err(Error::Response(format!("{} ({})", status, detail)));
    }

    let response = parsed.map_err(|e| Error::Response(format!("malformed JSON: {}", e)))?;

    match response.access_token {
        Some(access_token) => Ok(TokenGrant {
            access_token,
            instance_url: response.instance_url,
        }),
        None => Err(Error::MissingToken(response.provider_error())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_and_instance() {
        let body = r#"{
            "access_token": "00D5g!AQ4AQ",
            "instance_url": "https://acme.my.salesforce.com",
            "id": "https://login.salesforce.com/id/00D5g/0055g",
            "token_type": "Bearer",
            "issued_at": "1700000000000",
            "signature": "abc="
        }"#;

        let grant = parse_token_response(StatusCode::OK, body).unwrap();
        assert_eq!(grant.access_token.as_ref(), "00D5g!AQ4AQ");
        assert_eq!(grant.instance_url.as_deref(), Some("https://acme.my.salesforce.com"));
    }

    #[test]
    fn missing_field_is_distinguished_from_bad_json() {
        let missing = parse_token_response(StatusCode::OK, r#"{"error": "invalid_grant"}"#);
        let garbage = parse_token_response(StatusCode::OK, "<html>oops</html>");
        let not_object = parse_token_response(StatusCode::OK, "[1, 2]");

        match missing {
            Err(Error::MissingToken(Some(e))) => assert_eq!(e, "invalid_grant"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(garbage, Err(Error::Response(_))));
        assert!(matches!(not_object, Err(Error::Response(_))));
    }

    #[test]
    fn non_success_status_carries_provider_error() {
        let body = r#"{"error": "invalid_grant", "error_description": "expired authorization code"}"#;

        match parse_token_response(StatusCode::BAD_REQUEST, body) {
            Err(Error::Response(d)) => {
                assert!(d.contains("400"));
                assert!(d.contains("invalid_grant: expired authorization code"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn non_success_status_wins_over_a_present_token() {
        let result = parse_token_response(StatusCode::BAD_GATEWAY, r#"{"access_token": "x"}"#);
        assert!(matches!(result, Err(Error::Response(_))));
    }
}
