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

//! Response types.
//!
//! This module contains types related to SoftLayer API responses. Notably it
//! contains the [Response] type itself. Typically you'll import this type.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use softlayer_gax::Result;
//! # use softlayer_gax::response::Response;
//! // A type representing a SoftLayer API response.
//! #[derive(Debug)]
//! struct Guest {
//!     hostname: Option<String>,
//! }
//!
//! async fn list_guests() -> Result<Response<Vec<Guest>>> {
//!     // ... details omitted ...
//!     # panic!()
//! }
//!
//! async fn inspect() -> Result<()> {
//!     let response = list_guests().await?;
//!     if let Some(total) = response.total_items() {
//!         println!("the account has {total} guests");
//!     }
//!     for guest in response.body() {
//!         println!("{guest:?}");
//!     }
//!     Ok(())
//! }
//! ```

/// The header where the service reports the size of the full result set.
pub const TOTAL_ITEMS_HEADER: &str = "softlayer-total-items";

/// Represents a SoftLayer API response.
///
/// A response from a SoftLayer API may contain both the body and some
/// metadata, notably the headers. Most applications only need the body.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// # Example
    /// ```
    /// # use softlayer_gax::response::Response;
    /// #[derive(Clone, Default)]
    /// pub struct Resource {
    ///   // ...
    /// }
    ///
    /// let body = Resource::default();
    /// let response = Response::from(body);
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use softlayer_gax::response::Response;
    /// # use softlayer_gax::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    /// let response : Response<Vec<i64>> = Response::from_parts(
    ///     Parts::new().set_headers(headers), vec![1, 2, 3]);
    /// assert!(response.headers().get(http::header::CONTENT_TYPE).is_some());
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// The size of the full result set, if the service reported it.
    ///
    /// List methods report the total number of results, independent of any
    /// pagination, in the `SoftLayer-Total-Items` header.
    ///
    /// # Example
    /// ```
    /// # use softlayer_gax::response::{Parts, Response};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("softlayer-total-items", http::HeaderValue::from_static("37"));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert_eq!(response.total_items(), Some(37));
    /// ```
    pub fn total_items(&self) -> Option<u64> {
        self.parts
            .headers
            .get(TOTAL_ITEMS_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, keeping the metadata.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// Component parts of a response.
///
/// The response parts, other than the body, consist of just headers. We
/// expect the set of parts to grow, so we mark the struct as
/// `#[non_exhaustive]`.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.total_items(), None);

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new().set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn total_items() {
        let mut headers = http::HeaderMap::new();
        headers.insert(TOTAL_ITEMS_HEADER, http::HeaderValue::from_static("42"));
        let response = Response::from_parts(Parts::new().set_headers(headers), vec![1, 2]);
        assert_eq!(response.total_items(), Some(42));

        let response = response.map(|v| v.len());
        assert_eq!(response.body(), &2);
        assert_eq!(response.total_items(), Some(42));

        let mut headers = http::HeaderMap::new();
        headers.insert(TOTAL_ITEMS_HEADER, http::HeaderValue::from_static("many"));
        let response = Response::from_parts(Parts::new().set_headers(headers), ());
        assert_eq!(response.total_items(), None);
    }
}
