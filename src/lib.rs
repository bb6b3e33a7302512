// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coffee Shop Environment
//!
//! Deployment constants for the coffee shop client application (API server
//! URL and Auth0 login settings) as a typed, immutable record, plus a small
//! HTTP service that publishes the record to the client at start-up.
//!
//! ## Modules
//!
//! - `environment` - The environment record and its Auth0 settings
//! - `api` - HTTP API handlers (Axum)
//! - `config` - Service process configuration (bind address, log format)
//! - `logging` - Tracing subscriber setup

pub mod api;
pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod state;
