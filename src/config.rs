use std::convert::TryFrom;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::core::models::ClientCredentials;
use crate::core::types::{ClientId, ClientSecret, Environment, RedirectUri};
use crate::relay::Error;
use crate::util::cli::Options;

/// How a successful token exchange is shown to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Page,
    Text,
}

impl FromStr for Presentation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Self::Page),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown response format `{}`", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub sandbox_base: String,
    pub production_base: String,
    pub authorize_path: String,
    pub token_path: String,
}

impl ProviderEndpoints {
    pub fn base_url(&self, env: Environment) -> &str {
        match env {
            Environment::Sandbox => &self.sandbox_base,
            Environment::Production => &self.production_base,
        }
    }

    pub fn authorize_url(&self, env: Environment) -> String {
        format!("{}{}", self.base_url(env), self.authorize_path)
    }

    /// Token exchange always goes to the production instance, whichever
    /// environment the login was started against.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.production_base, self.token_path)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: ClientCredentials,
    pub endpoints: ProviderEndpoints,
    pub bind_address: String,
    pub port: u16,
    pub token_timeout: Duration,
    pub presentation: Presentation,
}

impl Config {
    pub fn listen_addr(&self) -> Result<SocketAddr, Error> {
        let ip = IpAddr::from_str(&self.bind_address).map_err(|e| {
            Error::configuration(format!("invalid BIND_ADDRESS `{}`: {}", self.bind_address, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn required(name: &str, value: String) -> Result<String, Error> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(Error::configuration(format!("{} must not be empty", name)))
    } else {
        Ok(value)
    }
}

impl TryFrom<Options> for Config {
    type Error = Error;

    fn try_from(opts: Options) -> Result<Self, Self::Error> {
        let app_url = required("APP_URL", opts.app_url)?;
        let redirect_uri = format!(
            "{}:{}/callback",
            app_url.trim_end_matches('/'),
            opts.app_port
        );

        let credentials = ClientCredentials {
            client_id: ClientId(required("CLIENT_ID", opts.client_id)?),
            client_secret: ClientSecret(required("CLIENT_SECRET", opts.client_secret)?),
            redirect_uri: RedirectUri(redirect_uri),
        };

        let endpoints = ProviderEndpoints {
            sandbox_base: required("BASE_SALESFORCE_SANDBOX_URL", opts.sandbox_url)?,
            production_base: required("BASE_SALESFORCE_PRODUCTION_URL", opts.production_url)?,
            authorize_path: required("AUTHORIZE_URL", opts.authorize_path)?,
            token_path: required("TOKEN_URL", opts.token_path)?,
        };

        Ok(Self {
            credentials,
            endpoints,
            bind_address: opts.bind_address,
            port: opts.app_port,
            token_timeout: Duration::from_secs(opts.token_timeout_secs),
            presentation: opts.response_format,
        })
    }
}
