pub mod error;
pub mod reply;

/// Environment selection as sent by the landing page form or a query string.
#[derive(Debug, Default, serde::Deserialize)]
pub struct LoginForm {
    pub sf_env: Option<String>,
}
