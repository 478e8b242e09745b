// Copyright 2024 Google LLC
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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the behavior of a single
//! call. Applications sometimes change the timeout for a specific call, or
//! add their own `User-Agent`. The service handles implement the
//! [RequestOptionsBuilder] trait where applications can override some
//! defaults.
//!
//! The client libraries never retry. Timeouts are enforced by the transport.

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    timeout: Option<std::time::Duration>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    ///
    /// The transport enforces the timeout, the dispatcher passes it through
    /// unmodified.
    pub fn set_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// Gets the current timeout, if any.
    pub fn timeout(&self) -> &Option<std::time::Duration> {
        &self.timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The service handles in the SoftLayer client libraries implement this
/// trait, applications can use its methods to change the options of the calls
/// made through the handle.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for the calls made through this builder.
    fn with_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the [RequestOptionsBuilder] trait for any type implementing
/// [internal::RequestBuilder].
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.timeout(), &None);

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_timeout(d);
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.timeout(), &Some(d));
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default();
        assert_eq!(builder.request_options.user_agent(), &None);
        assert_eq!(builder.request_options.timeout(), &None);

        let mut builder = TestBuilder::default().with_user_agent("test-only");
        assert_eq!(
            builder.request_options().user_agent().as_deref(),
            Some("test-only")
        );

        let d = Duration::from_secs(7);
        let mut builder = TestBuilder::default().with_timeout(d);
        assert_eq!(builder.request_options().timeout(), &Some(d));
    }
}
