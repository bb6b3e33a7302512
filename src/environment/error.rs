// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Environment validation errors.

/// Error returned when an environment field does not satisfy its constraint.
///
/// `field` is always the wire key (e.g. `auth0.callbackURL`) so messages
/// point at the value as the client application sees it.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    #[error("{field} is not a valid absolute URL: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{field} uses unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("'{path}' is not a route path relative to apiServerUrl")]
    InvalidRoute { path: String },

    #[error("auth0.url must be a bare hostname without scheme or path, got '{domain}'")]
    InvalidDomain { domain: String },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

impl EnvironmentError {
    /// Wire key of the offending field.
    pub fn field(&self) -> &'static str {
        match *self {
            EnvironmentError::InvalidUrl { field, .. }
            | EnvironmentError::UnsupportedScheme { field, .. }
            | EnvironmentError::Empty { field } => field,
            EnvironmentError::InvalidRoute { .. } => "apiServerUrl",
            EnvironmentError::InvalidDomain { .. } => "auth0.url",
        }
    }
}
