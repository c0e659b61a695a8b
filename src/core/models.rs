use super::types::*;

/// The connected app's credentials, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub redirect_uri: RedirectUri,
}

#[derive(Debug, serde::Serialize)]
pub struct AuthorizationRequest<'a> {
    pub response_type: ResponseType,
    pub client_id: &'a ClientId,
    pub redirect_uri: &'a RedirectUri,
}

impl<'a> From<&'a ClientCredentials> for AuthorizationRequest<'a> {
    fn from(credentials: &'a ClientCredentials) -> Self {
        Self {
            response_type: ResponseType::Code,
            client_id: &credentials.client_id,
            redirect_uri: &credentials.redirect_uri,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct TokenExchangeRequest<'a> {
    pub grant_type: GrantType,
    pub client_id: &'a ClientId,
    pub client_secret: &'a ClientSecret,
    pub redirect_uri: &'a RedirectUri,
    pub code: &'a AuthCode,
}

impl<'a> TokenExchangeRequest<'a> {
    pub fn new(credentials: &'a ClientCredentials, code: &'a AuthCode) -> Self {
        Self {
            grant_type: GrantType::AuthorizationCode,
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            redirect_uri: &credentials.redirect_uri,
            code,
        }
    }
}

/// Body of the token endpoint's reply. Every field is optional so that a
/// reply lacking `access_token` still parses and can be told apart from
/// malformed JSON.
#[derive(Debug, Default, serde::Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<AccessToken>,
    pub instance_url: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub issued_at: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl TokenResponse {
    pub fn provider_error(&self) -> Option<String> {
        match (&self.error, &self.error_description) {
            (Some(e), Some(d)) => Some(format!("{}: {}", e, d)),
            (Some(e), None) => Some(e.clone()),
            (None, Some(d)) => Some(d.clone()),
            (None, None) => None,
        }
    }
}

/// A successfully exchanged token, held only for the current response.
#[derive(Debug, Clone)]
pub struct TokenGrant {
    pub access_token: AccessToken,
    pub instance_url: Option<String>,
}
