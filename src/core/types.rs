use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    AuthorizationCode,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Code,
}

/// Which Salesforce instance a login is started against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    /// Only the exact literal `Sandbox` selects the sandbox; anything else,
    /// including no selection at all, falls back to production.
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            Some("Sandbox") => Self::Sandbox,
            _ => Self::Production,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

#[derive(Clone, serde::Serialize)]
#[serde(transparent)]
pub struct ClientSecret(pub String);

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClientSecret(..)")
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct RedirectUri(pub String);

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct AuthCode(pub String);

impl FromStr for AuthCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct AccessToken(pub String);

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(..)")
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_sandbox_literal_selects_sandbox() {
        assert_eq!(Environment::from_selection(Some("Sandbox")), Environment::Sandbox);
        assert_eq!(Environment::from_selection(Some("sandbox")), Environment::Production);
        assert_eq!(Environment::from_selection(Some("Production")), Environment::Production);
        assert_eq!(Environment::from_selection(Some("")), Environment::Production);
        assert_eq!(Environment::from_selection(None), Environment::Production);
    }

    #[test]
    fn secrets_are_not_printed_by_debug() {
        let secret = ClientSecret("hunter2".to_string());
        let token = AccessToken("00Dxx!token".to_string());

        assert!(!format!("{:?}", secret).contains("hunter2"));
        assert!(!format!("{:?}", token).contains("00Dxx"));
    }
}
