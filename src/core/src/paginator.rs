// Copyright 2025 Nimbus Cloud LLC
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

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a list response that can be iterated over with a [Paginator].
pub trait PageableResponse {
    /// The type of the items in each page.
    type PageItem;

    /// Consumes the page, returning its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The continuation token for the next page.
    ///
    /// An empty token marks the terminal page.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts a list operation into a [futures::Stream] of
/// pages.
///
/// Constructing a paginator performs no network activity: the first fetch
/// happens when the stream is first polled, so an unused paginator can be
/// discarded at no cost. The stream ends after the page with an empty
/// continuation token, or after the first error. A failed paginator is not
/// retried automatically; construct a new one to start over.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>>>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into a flattened sequence of items.
    ///
    /// The item view is derived from the page sequence and follows the same
    /// exhaustion rules.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// An adapter over [Paginator] yielding individual items.
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pages: Paginator<T, E>,
    current: Option<std::vec::IntoIter<T::PageItem>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn new(pages: Paginator<T, E>) -> Self {
        Self {
            pages,
            current: None,
        }
    }

    /// Returns the next item of the underlying page sequence.
    ///
    /// A fetch error ends the sequence after the error is yielded; items
    /// from previously fetched pages remain valid.
    pub async fn next(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(iter) = &mut self.current {
                if let Some(item) = iter.next() {
                    return Some(Ok(item));
                }
            }
            match self.pages.next().await {
                Some(Ok(page)) => {
                    self.current = Some(page.items().into_iter());
                }
                Some(Err(e)) => return Some(Err(e)),
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct TestResponse {
        items: Vec<PageItem>,
        next_page_token: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct PageItem {
        name: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = PageItem;

        fn items(self) -> Vec<PageItem> {
            self.items
        }

        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn test_pages() -> VecDeque<TestResponse> {
        let page = |names: &[&str], token: &str| TestResponse {
            items: names
                .iter()
                .map(|name| PageItem {
                    name: name.to_string(),
                })
                .collect(),
            next_page_token: token.to_string(),
        };
        VecDeque::from([
            page(&["i1", "i2"], "token1"),
            page(&["i3"], "token2"),
            page(&["i4", "i5"], ""),
        ])
    }

    #[tokio::test]
    async fn paginator_yields_all_pages_then_exhausts() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(Mutex::new(test_pages()));
        let execute = {
            let calls = calls.clone();
            move |token: String| {
                calls.lock().unwrap().push(token);
                let page = state.lock().unwrap().pop_front().unwrap();
                async move { Ok::<_, String>(page) }
            }
        };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut names = Vec::new();
        while let Some(page) = paginator.next().await {
            let page = page.unwrap();
            names.extend(page.items().into_iter().map(|i| i.name));
        }
        assert_eq!(names, ["i1", "i2", "i3", "i4", "i5"]);
        // The tokens travel from one page to the next, and no fetch happens
        // after the terminal page.
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            ["", "token1", "token2"].map(str::to_string)
        );

        // Exhausted paginators yield no further items, and no further calls.
        assert!(paginator.next().await.is_none());
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn construction_is_lazy() {
        let calls = Arc::new(Mutex::new(0_u32));
        let execute = {
            let calls = calls.clone();
            move |_: String| {
                *calls.lock().unwrap() += 1;
                async move {
                    Ok::<_, String>(TestResponse {
                        items: Vec::new(),
                        next_page_token: String::new(),
                    })
                }
            }
        };
        let mut paginator = Paginator::new(String::new(), execute);
        assert_eq!(*calls.lock().unwrap(), 0);
        let _ = paginator.next().await;
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn item_paginator_flattens_pages() {
        let state = Arc::new(Mutex::new(test_pages()));
        let execute = move |_: String| {
            let page = state.lock().unwrap().pop_front().unwrap();
            async move { Ok::<_, String>(page) }
        };

        let mut items = Paginator::new(String::new(), execute).items();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            names.push(item.unwrap().name);
        }
        assert_eq!(names, ["i1", "i2", "i3", "i4", "i5"]);
        assert!(items.next().await.is_none());
    }

    #[tokio::test]
    async fn error_ends_the_stream() {
        let counter = Arc::new(Mutex::new(0_u32));
        let execute = {
            let counter = counter.clone();
            move |_: String| {
                let mut count = counter.lock().unwrap();
                *count += 1;
                let result = if *count == 1 {
                    Ok(TestResponse {
                        items: vec![PageItem {
                            name: "i1".to_string(),
                        }],
                        next_page_token: "token1".to_string(),
                    })
                } else {
                    Err("fetch failed".to_string())
                };
                async move { result }
            }
        };

        let mut paginator = Paginator::new(String::new(), execute);
        let first = paginator.next().await.unwrap().unwrap();
        // Pages yielded before the failure remain valid.
        assert_eq!(first.items()[0].name, "i1");

        let second = paginator.next().await.unwrap();
        assert_eq!(second.unwrap_err(), "fetch failed");

        // The error is terminal; it is not resurfaced.
        assert!(paginator.next().await.is_none());
    }
}
