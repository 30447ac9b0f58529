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

//! Blocking adapters over the async clients.
//!
//! Each service crate exposes a `blocking::Client` wrapping its async client.
//! The wrapper owns a current-thread Tokio runtime and drives the async
//! implementation to completion, so both calling conventions share one
//! implementation: validation, diagnostics, retry and dispatch behave
//! identically, only the concurrency primitive differs.

use crate::error::Error;
use crate::paginator::{ItemPaginator, PageableResponse, Paginator};
use std::sync::Arc;

/// Creates the runtime backing a blocking client.
pub fn runtime() -> crate::Result<Arc<tokio::runtime::Runtime>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::io)?;
    Ok(Arc::new(runtime))
}

/// A blocking iterator over the pages of a list operation.
///
/// Obtained from the `list` methods of the blocking clients. Fetches are
/// lazy, one page per [Iterator::next] call.
pub struct Pages<T, E = Error>
where
    T: PageableResponse,
{
    paginator: Paginator<T, E>,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl<T, E> Pages<T, E>
where
    T: PageableResponse,
{
    pub fn new(runtime: Arc<tokio::runtime::Runtime>, paginator: Paginator<T, E>) -> Self {
        Self { paginator, runtime }
    }

    /// Converts the page iterator into a flattened item iterator.
    pub fn items(self) -> Items<T, E> {
        Items {
            paginator: self.paginator.items(),
            runtime: self.runtime,
        }
    }
}

impl<T, E> Iterator for Pages<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.paginator.next())
    }
}

/// A blocking iterator over the items of a list operation.
pub struct Items<T, E = Error>
where
    T: PageableResponse,
{
    paginator: ItemPaginator<T, E>,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl<T, E> Iterator for Items<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.paginator.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn test_paginator() -> Paginator<TestResponse, String> {
        let pages = VecDeque::from([
            TestResponse {
                items: vec!["i1".to_string(), "i2".to_string()],
                next_page_token: "token1".to_string(),
            },
            TestResponse {
                items: vec!["i3".to_string()],
                next_page_token: String::new(),
            },
        ]);
        let state = Arc::new(Mutex::new(pages));
        let execute = move |_: String| {
            let page = state.lock().unwrap().pop_front().unwrap();
            std::future::ready(Ok(page))
        };
        Paginator::new(String::new(), execute)
    }

    #[test]
    fn pages_iterate() -> anyhow::Result<()> {
        let runtime = runtime()?;
        let pages = Pages::new(runtime, test_paginator());
        let counts = pages
            .map(|page| page.map(|p| p.items.len()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(anyhow::Error::msg)?;
        assert_eq!(counts, [2, 1]);
        Ok(())
    }

    #[test]
    fn items_iterate() -> anyhow::Result<()> {
        let runtime = runtime()?;
        let items = Pages::new(runtime, test_paginator()).items();
        let names = items
            .collect::<Result<Vec<_>, _>>()
            .map_err(anyhow::Error::msg)?;
        assert_eq!(names, ["i1", "i2", "i3"]);
        Ok(())
    }
}
