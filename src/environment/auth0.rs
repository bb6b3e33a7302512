// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Auth0 settings group of the environment record.
//!
//! ## Login Flow
//!
//! 1. The client sends the user to [`Auth0Settings::login_url`]
//! 2. Auth0 authenticates the user for the configured audience
//! 3. Auth0 redirects back to `callbackURL` with the access token in the
//!    URL fragment (`response_type=token`)
//!
//! Nothing here talks to Auth0; these are the values and links the client
//! needs to start that flow.

use serde::{Deserialize, Serialize};
use url::{Host, Url};
use utoipa::ToSchema;

use super::error::EnvironmentError;
use super::{parse_http_url, require_non_empty};

/// Token type requested from the authorize endpoint (implicit flow).
const RESPONSE_TYPE: &str = "token";

/// Auth0 application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Auth0Settings {
    /// Auth0 tenant domain, without scheme.
    #[serde(rename = "url")]
    #[schema(example = "dev-1fg43j6s.us.auth0.com")]
    pub(super) domain: String,

    /// API identifier the access token is issued for.
    #[schema(example = "coffee")]
    pub(super) audience: String,

    /// Public client id of the Auth0 application.
    #[serde(rename = "clientId")]
    pub(super) client_id: String,

    /// Base URL of the running client application.
    #[serde(rename = "callbackURL")]
    #[schema(example = "http://localhost:8100")]
    pub(super) callback_url: String,
}

impl Auth0Settings {
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Parsed callback URL.
    pub fn callback(&self) -> Result<Url, EnvironmentError> {
        parse_http_url("auth0.callbackURL", &self.callback_url)
    }

    /// Token issuer as Auth0 writes it into the `iss` claim.
    ///
    /// Uses the normalized host, the same one [`Self::login_url`] points at.
    pub fn issuer(&self) -> Result<String, EnvironmentError> {
        Ok(self.tenant()?.into())
    }

    /// Authorize link the client opens to start a login.
    ///
    /// `redirect_uri` is the configured callback verbatim, so it matches the
    /// value registered with Auth0 byte for byte.
    pub fn login_url(&self) -> Result<Url, EnvironmentError> {
        let mut url = self.tenant()?.join("authorize").map_err(|source| {
            EnvironmentError::InvalidUrl {
                field: "auth0.url",
                source,
            }
        })?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", RESPONSE_TYPE)
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url);

        Ok(url)
    }

    pub(super) fn validate(&self) -> Result<(), EnvironmentError> {
        self.check_domain()?;
        require_non_empty("auth0.audience", &self.audience)?;
        require_non_empty("auth0.clientId", &self.client_id)?;
        self.callback()?;
        Ok(())
    }

    /// `https://{domain}/` with the host lowercased by the URL parser.
    fn tenant(&self) -> Result<Url, EnvironmentError> {
        self.check_domain()?;
        Url::parse(&format!("https://{}/", self.domain)).map_err(|source| {
            EnvironmentError::InvalidUrl {
                field: "auth0.url",
                source,
            }
        })
    }

    fn check_domain(&self) -> Result<(), EnvironmentError> {
        require_non_empty("auth0.url", &self.domain)?;

        let invalid = || EnvironmentError::InvalidDomain {
            domain: self.domain.clone(),
        };
        if self.domain.contains("://") || self.domain.contains('/') {
            return Err(invalid());
        }
        Host::parse(&self.domain).map_err(|_| invalid())?;
        Ok(())
    }
}
