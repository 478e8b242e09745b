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

//! Describes a single method call.

use crate::Result;
use crate::codec;
use crate::filter::Filter;
use crate::mask::Mask;
use crate::options::RequestOptions;
use serde_json::Value;

/// A window into the results of a list method.
///
/// The service returns at most `limit` results, starting at `offset`. A page
/// with fewer than `limit` results is the last page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Page {
    /// Creates a new page. Both values are sent as given.
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// The page after this one, assuming this page returned `count` results.
    pub fn advance(&self, count: usize) -> Self {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        Self {
            offset: self.offset.saturating_add(count),
            limit: self.limit,
        }
    }
}

/// A method call on a service.
///
/// Requests are built by the caller and consumed by
/// [Dispatcher::invoke][crate::dispatcher::Dispatcher::invoke]. The
/// dispatcher takes ownership of the request, it cannot be changed after it
/// is sent.
///
/// # Example
/// ```
/// # use softlayer_gax::request::{Page, Request};
/// let request = Request::new("SoftLayer_Account", "getVirtualGuests")
///     .set_page(Page::new(0, 50));
/// assert_eq!(request.service(), "SoftLayer_Account");
/// assert_eq!(request.page(), Some(Page::new(0, 50)));
/// ```
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Request {
    service: String,
    method: String,
    id: Option<i64>,
    args: Vec<Value>,
    mask: Option<Mask>,
    filter: Option<Filter>,
    page: Option<Page>,
    options: RequestOptions,
}

impl Request {
    pub fn new<S: Into<String>, M: Into<String>>(service: S, method: M) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            ..Default::default()
        }
    }

    /// Sets the id of the object the method is called on.
    pub fn set_id(mut self, v: i64) -> Self {
        self.id = Some(v);
        self
    }

    pub fn set_or_clear_id(mut self, v: Option<i64>) -> Self {
        self.id = v;
        self
    }

    /// Replaces the positional arguments.
    pub fn set_args<I: IntoIterator<Item = Value>>(mut self, v: I) -> Self {
        self.args = v.into_iter().collect();
        self
    }

    /// Appends a positional argument.
    pub fn add_arg<T: serde::Serialize + ?Sized>(mut self, v: &T) -> Result<Self> {
        self.args.push(codec::to_argument(v)?);
        Ok(self)
    }

    pub fn set_mask(mut self, v: Mask) -> Self {
        self.mask = Some(v);
        self
    }

    pub fn set_or_clear_mask(mut self, v: Option<Mask>) -> Self {
        self.mask = v;
        self
    }

    pub fn set_filter(mut self, v: Filter) -> Self {
        self.filter = Some(v);
        self
    }

    pub fn set_or_clear_filter(mut self, v: Option<Filter>) -> Self {
        self.filter = v;
        self
    }

    pub fn set_page(mut self, v: Page) -> Self {
        self.page = Some(v);
        self
    }

    pub fn set_or_clear_page(mut self, v: Option<Page>) -> Self {
        self.page = v;
        self
    }

    pub fn set_options(mut self, v: RequestOptions) -> Self {
        self.options = v;
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    pub fn page(&self) -> Option<Page> {
        self.page
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub(crate) fn into_parts(self) -> RequestParts {
        RequestParts {
            service: self.service,
            method: self.method,
            id: self.id,
            args: self.args,
            mask: self.mask,
            filter: self.filter,
            page: self.page,
            options: self.options,
        }
    }
}

/// The fields of a [Request], used by the dispatcher once it owns the request.
pub(crate) struct RequestParts {
    pub service: String,
    pub method: String,
    pub id: Option<i64>,
    pub args: Vec<Value>,
    pub mask: Option<Mask>,
    pub filter: Option<Filter>,
    pub page: Option<Page>,
    pub options: RequestOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Path;
    use crate::registry::tests::test_registry;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn page() {
        assert_eq!(Page::new(3, 0), Page { offset: 3, limit: 0 });
        let page = Page::new(0, 50);
        assert_eq!(page.advance(50), Page::new(50, 50));
        assert_eq!(page.advance(0), page);
        assert_eq!(Page::new(u32::MAX - 1, 10).advance(10).offset, u32::MAX);
    }

    #[test]
    fn setters() -> TestResult {
        let registry = test_registry();
        let mask = Mask::build(&registry, "SoftLayer_Virtual_Guest", ["id"])?;
        let filter = Filter::new().with(Path::new("hostname").eq("web1"));
        let request = Request::new("SoftLayer_Virtual_Guest", "setTags")
            .set_id(123)
            .add_arg("tag1,tag2")?
            .add_arg(&42)?
            .set_mask(mask.clone())
            .set_filter(filter.clone())
            .set_page(Page::new(10, 20));
        assert_eq!(request.service(), "SoftLayer_Virtual_Guest");
        assert_eq!(request.method(), "setTags");
        assert_eq!(request.id(), Some(123));
        assert_eq!(request.args(), &[json!("tag1,tag2"), json!(42)]);
        assert_eq!(request.mask(), Some(&mask));
        assert_eq!(request.filter(), Some(&filter));
        assert_eq!(request.page(), Some(Page::new(10, 20)));

        let request = request
            .set_or_clear_id(None)
            .set_or_clear_mask(None)
            .set_or_clear_filter(None)
            .set_or_clear_page(None)
            .set_args([]);
        assert_eq!(request.id(), None);
        assert!(request.args().is_empty());
        assert!(request.mask().is_none());
        assert!(request.filter().is_none());
        assert!(request.page().is_none());
        Ok(())
    }
}
