// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Environment Record
//!
//! Deployment constants for the coffee shop client application: where the
//! API server runs and how the client logs in through Auth0.
//!
//! The values are compiled in. They are never read from the process
//! environment or merged from files; a different deployment ships a
//! different build.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "production": false,
//!   "apiServerUrl": "http://127.0.0.1:5000",
//!   "auth0": {
//!     "url": "dev-1fg43j6s.us.auth0.com",
//!     "audience": "coffee",
//!     "clientId": "cpXEAofZXt8gaeUtHbe235khr9otS6E9",
//!     "callbackURL": "http://localhost:8100"
//!   }
//! }
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

pub mod auth0;
pub mod error;

pub use auth0::Auth0Settings;
pub use error::EnvironmentError;

/// Whether this build targets the production tier.
pub const PRODUCTION: bool = false;

/// Base URL of the running API server.
pub const API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 tenant domain (no scheme).
pub const AUTH0_DOMAIN: &str = "dev-1fg43j6s.us.auth0.com";

/// Audience configured for the Auth0 API.
pub const AUTH0_AUDIENCE: &str = "coffee";

/// Client id generated for the Auth0 application.
pub const AUTH0_CLIENT_ID: &str = "cpXEAofZXt8gaeUtHbe235khr9otS6E9";

/// Base URL of the running client application.
pub const AUTH0_CALLBACK_URL: &str = "http://localhost:8100";

static CURRENT: LazyLock<EnvironmentConfig> = LazyLock::new(EnvironmentConfig::development);

/// Environment record handed to the client application.
///
/// Fields are private; once built the record is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    production: bool,

    #[serde(rename = "apiServerUrl")]
    #[schema(example = "http://127.0.0.1:5000")]
    api_server_url: String,

    auth0: Auth0Settings,
}

impl EnvironmentConfig {
    /// Build the record from the compiled-in development values.
    pub fn development() -> Self {
        Self {
            production: PRODUCTION,
            api_server_url: API_SERVER_URL.to_string(),
            auth0: Auth0Settings {
                domain: AUTH0_DOMAIN.to_string(),
                audience: AUTH0_AUDIENCE.to_string(),
                client_id: AUTH0_CLIENT_ID.to_string(),
                callback_url: AUTH0_CALLBACK_URL.to_string(),
            },
        }
    }

    /// Process-wide record, built on first access.
    pub fn current() -> &'static EnvironmentConfig {
        &CURRENT
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &Auth0Settings {
        &self.auth0
    }

    /// Parsed API server URL.
    pub fn api_server(&self) -> Result<Url, EnvironmentError> {
        parse_http_url("apiServerUrl", &self.api_server_url)
    }

    /// URL of an API route, e.g. `api_endpoint("drinks_detail")`.
    ///
    /// A path component on `apiServerUrl` is kept as a prefix. Absolute URLs
    /// and `.`/`..` segments are rejected so the result never leaves it.
    pub fn api_endpoint(&self, path: &str) -> Result<Url, EnvironmentError> {
        let invalid = || EnvironmentError::InvalidRoute {
            path: path.to_string(),
        };
        if Url::parse(path).is_ok() {
            return Err(invalid());
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(invalid());
        }

        let mut url = self.api_server()?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Check every field against its documented constraint.
    ///
    /// Returns the first violation found, in wire order.
    pub fn validate(&self) -> Result<(), EnvironmentError> {
        self.api_server()?;
        self.auth0.validate()
    }
}

/// Parse `value` as an absolute `http`/`https` URL with a host.
pub(crate) fn parse_http_url(field: &'static str, value: &str) -> Result<Url, EnvironmentError> {
    let url = Url::parse(value).map_err(|source| EnvironmentError::InvalidUrl { field, source })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(EnvironmentError::UnsupportedScheme {
                field,
                scheme: other.to_string(),
            })
        }
    }
    Ok(url)
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), EnvironmentError> {
    if value.trim().is_empty() {
        return Err(EnvironmentError::Empty { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Host;

    #[test]
    fn serializes_exactly_the_wire_keys() {
        let value = serde_json::to_value(EnvironmentConfig::development()).unwrap();

        let top: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(top.len(), 3);
        for key in ["production", "apiServerUrl", "auth0"] {
            assert!(top.contains(&key), "missing {key}");
        }

        let auth0 = value["auth0"].as_object().unwrap();
        assert_eq!(auth0.len(), 4);
        for key in ["url", "audience", "clientId", "callbackURL"] {
            assert!(auth0.contains_key(key), "missing auth0.{key}");
        }
    }

    #[test]
    fn serializes_literal_values() {
        let value = serde_json::to_value(EnvironmentConfig::development()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "production": false,
                "apiServerUrl": "http://127.0.0.1:5000",
                "auth0": {
                    "url": "dev-1fg43j6s.us.auth0.com",
                    "audience": "coffee",
                    "clientId": "cpXEAofZXt8gaeUtHbe235khr9otS6E9",
                    "callbackURL": "http://localhost:8100"
                }
            })
        );
    }

    #[test]
    fn production_is_false() {
        assert!(!EnvironmentConfig::current().production());
    }

    #[test]
    fn api_server_url_is_local_flask_server() {
        let url = EnvironmentConfig::current().api_server().unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host(), Some(Host::Ipv4("127.0.0.1".parse().unwrap())));
        assert_eq!(url.port(), Some(5000));
    }

    #[test]
    fn callback_url_is_local_client() {
        let url = EnvironmentConfig::current().auth0().callback().unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8100));
    }

    #[test]
    fn identifiers_are_non_empty() {
        let auth0 = EnvironmentConfig::current().auth0();
        assert!(!auth0.client_id().is_empty());
        assert!(!auth0.audience().is_empty());
    }

    #[test]
    fn repeated_reads_are_identical() {
        let first = EnvironmentConfig::current();
        let second = EnvironmentConfig::current();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
        assert_eq!(*first, EnvironmentConfig::development());
        assert_eq!(
            serde_json::to_string(first).unwrap(),
            serde_json::to_string(second).unwrap()
        );
    }

    #[test]
    fn literal_record_validates() {
        EnvironmentConfig::development().validate().unwrap();
    }

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{
            "production": true,
            "apiServerUrl": "https://api.example.com",
            "auth0": {
                "url": "example.eu.auth0.com",
                "audience": "coffee",
                "clientId": "abc",
                "callbackURL": "https://app.example.com"
            }
        }"#;
        let config: EnvironmentConfig = serde_json::from_str(json).unwrap();
        assert!(config.production());
        assert_eq!(config.auth0().domain(), "example.eu.auth0.com");
        config.validate().unwrap();
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let json = r#"{
            "production": false,
            "apiServerUrl": "http://127.0.0.1:5000",
            "clientSecret": "nope",
            "auth0": {
                "url": "dev-1fg43j6s.us.auth0.com",
                "audience": "coffee",
                "clientId": "abc",
                "callbackURL": "http://localhost:8100"
            }
        }"#;
        assert!(serde_json::from_str::<EnvironmentConfig>(json).is_err());
    }

    #[test]
    fn api_endpoint_joins_route() {
        let config = EnvironmentConfig::development();
        assert_eq!(
            config.api_endpoint("drinks").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks"
        );
        assert_eq!(
            config.api_endpoint("/drinks_detail").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks_detail"
        );
    }

    #[test]
    fn api_endpoint_keeps_path_prefix() {
        let mut config = EnvironmentConfig::development();
        config.api_server_url = "http://127.0.0.1:5000/api".to_string();
        assert_eq!(
            config.api_endpoint("drinks").unwrap().as_str(),
            "http://127.0.0.1:5000/api/drinks"
        );
    }

    #[test]
    fn api_endpoint_rejects_absolute_url() {
        let config = EnvironmentConfig::development();
        let err = config.api_endpoint("https://evil.example/x").unwrap_err();
        assert!(matches!(err, EnvironmentError::InvalidRoute { ref path } if path == "https://evil.example/x"));
        assert_eq!(err.field(), "apiServerUrl");
    }

    #[test]
    fn api_endpoint_rejects_parent_segments() {
        let mut config = EnvironmentConfig::development();
        config.api_server_url = "http://127.0.0.1:5000/api".to_string();
        assert!(matches!(
            config.api_endpoint("../admin"),
            Err(EnvironmentError::InvalidRoute { .. })
        ));
        assert!(matches!(
            config.api_endpoint("drinks/../../admin"),
            Err(EnvironmentError::InvalidRoute { .. })
        ));
        assert!(config.api_endpoint("./drinks").is_err());
    }

    #[test]
    fn api_endpoint_encodes_reserved_characters() {
        let config = EnvironmentConfig::development();
        let url = config.api_endpoint("edit/1?x=y").unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.path(), "/edit/1%3Fx=y");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn non_http_api_server_is_rejected() {
        let mut config = EnvironmentConfig::development();
        config.api_server_url = "ftp://127.0.0.1:5000".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            EnvironmentError::UnsupportedScheme { field: "apiServerUrl", ref scheme } if scheme == "ftp"
        ));
    }

    #[test]
    fn relative_api_server_is_rejected() {
        let mut config = EnvironmentConfig::development();
        config.api_server_url = "127.0.0.1:5000".to_string();
        assert_eq!(config.validate().unwrap_err().field(), "apiServerUrl");
    }
}
