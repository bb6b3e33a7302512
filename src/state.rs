// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentConfig>,
}

impl AppState {
    pub fn new(environment: EnvironmentConfig) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EnvironmentConfig::current().clone())
    }
}
