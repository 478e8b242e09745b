// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use gax::client_builder::Error as BuilderError;
use std::time::Duration;

// The client configuration for [crate::http::ReqwestTransport].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub const DEFAULT_ENDPOINT: &str = "https://api.softlayer.com/rest/v3.1";

pub(crate) const USERNAME_VAR: &str = "SL_USERNAME";
pub(crate) const API_KEY_VAR: &str = "SL_API_KEY";
pub(crate) const ENDPOINT_VAR: &str = "SL_ENDPOINT_URL";
pub(crate) const TIMEOUT_VAR: &str = "SL_TIMEOUT";

/// The username and API key used to authenticate with the SoftLayer API.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new<U: Into<String>, K: Into<String>>(username: U, api_key: K) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"[censored]")
            .finish()
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum ConfigError {
    #[error("no credentials configured, and SL_USERNAME or SL_API_KEY are not set")]
    MissingCredentials,
    #[error("invalid endpoint {0}")]
    InvalidEndpoint(String, #[source] url::ParseError),
    #[error("invalid SL_TIMEOUT value {0:?}, expected a number of seconds")]
    InvalidTimeout(String),
}

/// Returns the configured credentials, or the credentials in the environment.
pub fn credentials(config: &ClientConfig) -> gax::client_builder::Result<Credentials> {
    if let Some(c) = config.cred.clone() {
        return Ok(c);
    }
    match (std::env::var(USERNAME_VAR), std::env::var(API_KEY_VAR)) {
        (Ok(username), Ok(api_key)) if !username.is_empty() => {
            Ok(Credentials::new(username, api_key))
        }
        _ => Err(BuilderError::cred(ConfigError::MissingCredentials)),
    }
}

/// Returns the configured endpoint, the endpoint in the environment, or
/// `default_endpoint`.
pub fn endpoint(
    config: &ClientConfig,
    default_endpoint: &str,
) -> gax::client_builder::Result<String> {
    let endpoint = config
        .endpoint
        .clone()
        .or_else(|| std::env::var(ENDPOINT_VAR).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| default_endpoint.to_string());
    url::Url::parse(&endpoint)
        .map_err(|e| BuilderError::config(ConfigError::InvalidEndpoint(endpoint.clone(), e)))?;
    Ok(endpoint.trim_end_matches('/').to_string())
}

/// Returns the configured timeout, or the timeout in the environment.
pub fn timeout(config: &ClientConfig) -> gax::client_builder::Result<Option<Duration>> {
    if config.timeout.is_some() {
        return Ok(config.timeout);
    }
    let Ok(value) = std::env::var(TIMEOUT_VAR) else {
        return Ok(None);
    };
    let invalid = || BuilderError::config(ConfigError::InvalidTimeout(value.clone()));
    let secs = value.trim().parse::<f64>().map_err(|_| invalid())?;
    if secs == 0.0 {
        return Ok(None);
    }
    Duration::try_from_secs_f64(secs)
        .map(Some)
        .map_err(|_| invalid())
}
