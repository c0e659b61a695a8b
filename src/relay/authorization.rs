use url::Url;

use crate::config::ProviderEndpoints;
use crate::core::models::{AuthorizationRequest, ClientCredentials};
use crate::core::types::Environment;
use crate::relay::Error;

fn append_params(url: &str, params: impl serde::Serialize) -> Result<Url, Error> {
    let mut url = Url::parse(url)?;
    let qs = serde_urlencoded::to_string(params)
        .map_err(|e| Error::configuration(format!("cannot encode authorization request: {}", e)))?;
    let pairs = form_urlencoded::parse(qs.as_bytes());
    url.query_pairs_mut().extend_pairs(pairs);
    Ok(url)
}

/// Builds `<base(env)><authorize path>?response_type=code&client_id=..&redirect_uri=..`.
pub fn authorization_url(
    endpoints: &ProviderEndpoints,
    credentials: &ClientCredentials,
    env: Environment,
) -> Result<Url, Error> {
    let request = AuthorizationRequest::from(credentials);
    append_params(&endpoints.authorize_url(env), request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ClientId, ClientSecret, RedirectUri};

    fn endpoints() -> ProviderEndpoints {
        ProviderEndpoints {
            sandbox_base: "https://test.salesforce.com".to_string(),
            production_base: "https://login.salesforce.com".to_string(),
            authorize_path: "/services/oauth2/authorize".to_string(),
            token_path: "/services/oauth2/token".to_string(),
        }
    }

    fn credentials() -> ClientCredentials {
        ClientCredentials {
            client_id: ClientId("3MVG9id".to_string()),
            client_secret: ClientSecret("s3cr3t".to_string()),
            redirect_uri: RedirectUri("http://localhost:5001/callback".to_string()),
        }
    }

    #[test]
    fn builds_encoded_query_for_each_environment() {
        for (env, host) in &[
            (Environment::Sandbox, "test.salesforce.com"),
            (Environment::Production, "login.salesforce.com"),
        ] {
            let url = authorization_url(&endpoints(), &credentials(), *env).unwrap();

            assert_eq!(url.host_str(), Some(*host));
            assert_eq!(url.path(), "/services/oauth2/authorize");
            assert_eq!(
                url.query(),
                Some("response_type=code&client_id=3MVG9id&redirect_uri=http%3A%2F%2Flocalhost%3A5001%2Fcallback")
            );
        }
    }

    #[test]
    fn never_leaks_the_secret() {
        let url = authorization_url(&endpoints(), &credentials(), Environment::Production).unwrap();
        assert!(!url.as_str().contains("s3cr3t"));
    }

    #[test]
    fn malformed_base_is_a_configuration_error() {
        let mut endpoints = endpoints();
        endpoints.production_base = "login.salesforce.com".to_string();

        let result = authorization_url(&endpoints, &credentials(), Environment::Production);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
