use clap::Parser;

use crate::config::Presentation;

#[derive(Parser, Debug)]
#[clap(
    name = "sf-oauth-relay",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Options {
    /// Consumer key of the connected app
    #[clap(long, env = "CLIENT_ID")]
    pub client_id: String,
    /// Consumer secret of the connected app
    #[clap(long, env = "CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,
    /// Public base URL of this relay, without the port
    #[clap(long, env = "APP_URL")]
    pub app_url: String,
    /// Port to listen on, also part of the callback URI
    #[clap(long, env = "APP_PORT")]
    pub app_port: u16,
    #[clap(long, env = "BASE_SALESFORCE_SANDBOX_URL")]
    pub sandbox_url: String,
    #[clap(long, env = "BASE_SALESFORCE_PRODUCTION_URL")]
    pub production_url: String,
    /// Path of the authorization endpoint, appended to either base URL
    #[clap(long, env = "AUTHORIZE_URL")]
    pub authorize_path: String,
    /// Path of the token endpoint, appended to the production base URL
    #[clap(long, env = "TOKEN_URL")]
    pub token_path: String,
    #[clap(long, env = "BIND_ADDRESS", default_value = "127.0.0.1")]
    pub bind_address: String,
    #[clap(long, env = "TOKEN_TIMEOUT_SECS", default_value = "30")]
    pub token_timeout_secs: u64,
    /// `page` renders HTML, `text` replies with the bare token
    #[clap(long, env = "RESPONSE_FORMAT", default_value = "page")]
    pub response_format: Presentation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_with_defaults() {
        let opts = Options::try_parse_from(&[
            "sf-oauth-relay",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
            "--app-url",
            "http://localhost",
            "--app-port",
            "5001",
            "--sandbox-url",
            "https://test.salesforce.com",
            "--production-url",
            "https://login.salesforce.com",
            "--authorize-path",
            "/services/oauth2/authorize",
            "--token-path",
            "/services/oauth2/token",
        ])
        .unwrap();

        assert_eq!(opts.app_port, 5001);
        assert_eq!(opts.bind_address, "127.0.0.1");
        assert_eq!(opts.token_timeout_secs, 30);
        assert_eq!(opts.response_format, Presentation::Page);
    }
}
