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

//! The contract between the dispatcher and the network.
//!
//! A [Transport] performs exactly one exchange with the service. It receives
//! the serialized call, and returns the raw response. Transports do not
//! interpret the response body, classifying faults is the job of the
//! [Dispatcher][crate::dispatcher::Dispatcher].

use crate::Result;
use crate::options::RequestOptions;
use crate::request::Page;
use serde_json::Value;

/// A method call, ready to send.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct WireRequest {
    /// The service name, e.g. `SoftLayer_Account`.
    pub service: String,
    /// The method name, e.g. `getVirtualGuests`.
    pub method: String,
    /// The id of the object the method is called on.
    pub id: Option<i64>,
    /// The encoded positional arguments.
    pub parameters: Vec<Value>,
    /// The rendered object mask.
    pub mask: Option<String>,
    /// The rendered object filter.
    pub filter: Option<String>,
    pub page: Option<Page>,
    pub options: RequestOptions,
}

impl WireRequest {
    pub fn new<S: Into<String>, M: Into<String>>(service: S, method: M) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            ..Default::default()
        }
    }
}

/// The raw response to a [WireRequest].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct WireResponse {
    pub status: u16,
    pub headers: http::HeaderMap,
    pub body: bytes::Bytes,
}

impl WireResponse {
    pub fn new<B: Into<bytes::Bytes>>(status: u16, body: B) -> Self {
        Self {
            status,
            headers: http::HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn set_headers<V: Into<http::HeaderMap>>(mut self, v: V) -> Self {
        self.headers = v.into();
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single call to the service.
///
/// Implementations must be safe for concurrent use, the dispatcher shares one
/// transport across all the calls made by a client.
///
/// Implementations report failures to reach the service using
/// [Error::connect][crate::error::Error::connect],
/// [Error::timeout][crate::error::Error::timeout], and
/// [Error::io][crate::error::Error::io]. Any response received from the
/// service, including HTTP errors, is returned as a [WireResponse].
#[async_trait::async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    async fn call(&self, request: WireRequest) -> Result<WireResponse>;
}
