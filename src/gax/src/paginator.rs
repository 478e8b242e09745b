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

//! Iterates over the results of list methods.
//!
//! List methods accept an `(offset, limit)` window. The [Paginator] requests
//! consecutive windows until the service signals the end of the results:
//!
//! * a page with fewer results than the limit (including an empty page),
//! * the number of results reported by the service has been reached,
//! * or an error.
//!
//! The paginator never requests a page past those conditions.

use crate::request::Page;
use crate::response::Response;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
pub trait PageableResponse {
    type PageItem;

    /// The number of results in this page.
    fn page_len(&self) -> usize;

    /// The size of the full result set, if known.
    fn total_items(&self) -> Option<u64>;

    /// Consumes the page, returning its results.
    fn into_items(self) -> Vec<Self::PageItem>;
}

impl<T> PageableResponse for Response<Vec<T>> {
    type PageItem = T;

    fn page_len(&self) -> usize {
        self.body().len()
    }

    fn total_items(&self) -> Option<u64> {
        Response::total_items(self)
    }

    fn into_items(self) -> Vec<T> {
        self.into_body()
    }
}

impl<T> PageableResponse for Vec<T> {
    type PageItem = T;

    fn page_len(&self) -> usize {
        self.len()
    }

    fn total_items(&self) -> Option<u64> {
        None
    }

    fn into_items(self) -> Vec<T> {
        self
    }
}

/// An adapter that converts offset/limit list methods into a
/// [futures::Stream] of pages.
#[pin_project]
pub struct Paginator<P, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<P, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), Page>;

impl<P, E> Paginator<P, E>
where
    P: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the first page and a function to fetch
    /// each [PageableResponse].
    pub fn new<F, Fut>(first: Page, execute: F) -> Self
    where
        F: Fn(Page) -> Fut + Clone + Send + 'static,
        Fut: Future<Output = Result<P, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(first), move |state| {
            let execute = execute.clone();
            async move {
                let page = match state {
                    ControlFlow::Continue(page) => page,
                    ControlFlow::Break(_) => return None,
                };
                match execute(page).await {
                    Ok(response) => {
                        let next_state = next_page(page, &response);
                        Some((Ok(response), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next mutation of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the stream of pages into a stream of results.
    pub fn items(self) -> ItemPaginator<P::PageItem, E>
    where
        P::PageItem: Send + 'static,
    {
        let stream = self.stream.flat_map(|page| {
            let items: Vec<Result<P::PageItem, E>> = match page {
                Ok(p) => p.into_items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        ItemPaginator {
            stream: Box::pin(stream),
        }
    }
}

fn next_page<P: PageableResponse>(page: Page, response: &P) -> ControlFlow {
    let count = response.page_len();
    if count == 0 || count < page.limit as usize {
        return ControlFlow::Break(());
    }
    let next = page.advance(count);
    match response.total_items() {
        Some(total) if u64::from(next.offset) >= total => ControlFlow::Break(()),
        _ => ControlFlow::Continue(next),
    }
}

impl<P, E> Stream for Paginator<P, E> {
    type Item = Result<P, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A [futures::Stream] over the individual results of a list method.
#[pin_project]
pub struct ItemPaginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E> {
    /// Returns the next mutation of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{Parts, TOTAL_ITEMS_HEADER};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    type TestError = Box<dyn std::error::Error + Send + Sync>;

    // A fake list method over `total` items, optionally reporting the total.
    fn list(total: u32, report_total: bool, calls: Arc<Mutex<Vec<Page>>>) -> impl Fn(Page) -> futures::future::Ready<Result<Response<Vec<u32>>, TestError>> + Clone + Send + 'static {
        move |page: Page| {
            calls.lock().unwrap().push(page);
            let end = page.offset.saturating_add(page.limit).min(total);
            let items: Vec<u32> = (page.offset.min(total)..end).collect();
            let mut headers = http::HeaderMap::new();
            if report_total {
                headers.insert(TOTAL_ITEMS_HEADER, http::HeaderValue::from(total));
            }
            futures::future::ready(Ok(Response::from_parts(
                Parts::new().set_headers(headers),
                items,
            )))
        }
    }

    #[tokio::test]
    async fn short_page_ends() -> anyhow::Result<()> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut paginator = Paginator::new(Page::new(0, 50), list(37, false, calls.clone()));
        let mut items = Vec::new();
        while let Some(page) = paginator.next().await {
            let page = page.map_err(|e| anyhow::anyhow!("{e}"))?;
            items.extend(page.into_items());
        }
        assert_eq!(items.len(), 37);
        assert_eq!(calls.lock().unwrap().as_slice(), &[Page::new(0, 50)]);
        Ok(())
    }

    #[tokio::test]
    async fn multiple_pages() -> anyhow::Result<()> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut paginator = Paginator::new(Page::new(0, 10), list(25, false, calls.clone()));
        let mut sizes = Vec::new();
        while let Some(page) = paginator.next().await {
            let page = page.map_err(|e| anyhow::anyhow!("{e}"))?;
            sizes.push(page.page_len());
        }
        assert_eq!(sizes, vec![10, 10, 5]);
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            &[Page::new(0, 10), Page::new(10, 10), Page::new(20, 10)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn exact_multiple_without_total() -> anyhow::Result<()> {
        // Without a total, a full last page needs one more (empty) request.
        let calls = Arc::new(Mutex::new(Vec::new()));
        let paginator = Paginator::new(Page::new(0, 10), list(20, false, calls.clone()));
        let items: Vec<_> = paginator.items().collect().await;
        assert_eq!(items.len(), 20);
        assert_eq!(calls.lock().unwrap().len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn exact_multiple_with_total() -> anyhow::Result<()> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let paginator = Paginator::new(Page::new(0, 10), list(20, true, calls.clone()));
        let mut items = paginator.items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.map_err(|e| anyhow::anyhow!("{e}"))?);
        }
        assert_eq!(got, (0..20).collect::<Vec<u32>>());
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            &[Page::new(0, 10), Page::new(10, 10)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn starts_at_offset() -> anyhow::Result<()> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let paginator = Paginator::new(Page::new(15, 10), list(25, true, calls.clone()));
        let items: Vec<u32> = paginator
            .items()
            .map(|r| r.expect("fake list never fails"))
            .collect()
            .await;
        assert_eq!(items, (15..25).collect::<Vec<u32>>());
        assert_eq!(calls.lock().unwrap().as_slice(), &[Page::new(15, 10)]);
        Ok(())
    }

    #[tokio::test]
    async fn error_ends_stream() {
        let mut responses: VecDeque<Result<Vec<u32>, TestError>> = VecDeque::new();
        responses.push_back(Ok(vec![1, 2]));
        responses.push_back(Err("err".into()));
        let state = Arc::new(Mutex::new(responses));
        let execute = move |_: Page| {
            let resp = state.lock().unwrap().pop_front().unwrap();
            async move { resp }
        };

        let mut paginator = Paginator::new(Page::new(0, 2), execute);
        let mut count = 0;
        let mut errors = 0;
        while let Some(resp) = paginator.next().await {
            match resp {
                Ok(page) => count += page.len(),
                Err(e) => {
                    assert_eq!(e.to_string(), "err");
                    errors += 1;
                }
            }
        }
        assert_eq!(count, 2);
        assert_eq!(errors, 1);
    }

    #[tokio::test]
    async fn error_in_items() {
        let execute = |_| async { Err::<Vec<u32>, TestError>("err".into()) };
        let items: Vec<_> = Paginator::new(Page::new(0, 10), execute)
            .items()
            .collect()
            .await;
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }
}
