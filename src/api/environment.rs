// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Handlers publishing the environment record to the client application.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    environment::{Auth0Settings, EnvironmentConfig},
    error::ApiError,
    state::AppState,
};

/// Links the client needs to start an Auth0 login.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginLinks {
    /// Authorize URL with audience, client id and redirect filled in.
    pub login_url: String,
    /// Expected `iss` claim of tokens issued for this client.
    pub issuer: String,
}

#[utoipa::path(
    get,
    path = "/v1/environment",
    tag = "Environment",
    responses(
        (status = 200, description = "Environment record", body = EnvironmentConfig)
    )
)]
pub async fn get_environment(State(state): State<AppState>) -> Json<EnvironmentConfig> {
    Json(state.environment.as_ref().clone())
}

#[utoipa::path(
    get,
    path = "/v1/environment/auth0",
    tag = "Environment",
    responses(
        (status = 200, description = "Auth0 settings", body = Auth0Settings)
    )
)]
pub async fn get_auth0(State(state): State<AppState>) -> Json<Auth0Settings> {
    Json(state.environment.auth0().clone())
}

#[utoipa::path(
    get,
    path = "/v1/environment/login-url",
    tag = "Environment",
    responses(
        (status = 200, description = "Login links", body = LoginLinks),
        (status = 500, description = "Auth0 settings are invalid")
    )
)]
pub async fn get_login_url(State(state): State<AppState>) -> Result<Json<LoginLinks>, ApiError> {
    let auth0 = state.environment.auth0();
    let login_url = auth0.login_url()?;

    Ok(Json(LoginLinks {
        login_url: login_url.into(),
        issuer: auth0.issuer()?,
    }))
}
