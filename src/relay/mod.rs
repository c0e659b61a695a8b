pub mod authorization;
pub mod error;
pub mod token;

pub use error::Error;

use tracing::{event, Level};
use url::Url;

use crate::config::Config;
use crate::core::models::{TokenExchangeRequest, TokenGrant};
use crate::core::types::{AuthCode, Environment};

/// What the provider sent back to the callback URI.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CallbackParams {
    pub code: Option<AuthCode>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug)]
pub struct OAuthRelay {
    config: Config,
    http: reqwest::Client,
}

impl OAuthRelay {
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.token_timeout)
            .build()
            .map_err(|e| Error::configuration(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[tracing::instrument(skip(self))]
    pub fn authorization_url(&self, env: Environment) -> Result<Url, Error> {
        let url = authorization::authorization_url(
            &self.config.endpoints,
            &self.config.credentials,
            env,
        )?;
        event!(Level::DEBUG, host = ?url.host_str(), "Redirecting to authorization endpoint");
        Ok(url)
    }

    /// Trades the authorization code from a callback for an access token.
    ///
    /// Exactly one POST is made, and only once the callback is known to
    /// carry a code.
    #[tracing::instrument(skip_all)]
    pub async fn exchange_code(&self, params: CallbackParams) -> Result<TokenGrant, Error> {
        let code = match params {
            CallbackParams {
                code: Some(code), ..
            } if !code.0.is_empty() => code,
            CallbackParams {
                error: Some(error),
                error_description,
                ..
            } => {
                let description = match error_description {
                    Some(d) => format!("authorization failed: {}: {}", error, d),
                    None => format!("authorization failed: {}", error),
                };
                return Err(Error::validation(description));
            }
            _ => return Err(Error::validation("missing `code` query parameter")),
        };

        let url = Url::parse(&self.config.endpoints.token_url())?;
        let request = TokenExchangeRequest::new(&self.config.credentials, &code);

        event!(Level::DEBUG, "Exchanging authorization code");
        let response = self.http.post(url).form(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let grant = token::parse_token_response(status, &body)?;
        event!(Level::INFO, instance = ?grant.instance_url, "Issued access_token");
        Ok(grant)
    }
}
