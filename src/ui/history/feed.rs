// SPDX-License-Identifier: MPL-2.0
//! Notification feed paging.
//!
//! The backend only serves the newest `top` items, so the feed requests a
//! growing prefix (`top = (page + 1) * page_size`) and replaces its list
//! wholesale on every response. An append that yields no more items than
//! the previous response marks the feed exhausted.
//!
//! Each load carries a generation number. Responses from an older
//! generation are discarded, so a manual reload can overtake a load that is
//! still in flight.

use crate::application::port::{ApiError, ApiResult};
use crate::domain::notification::{NotificationId, NotificationItem};

/// Why a load is being started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// History opened: start over from the first page with an empty list.
    Open,
    /// Explicit reload: first page again, current items stay visible.
    Reload,
    /// Next page, suppressed while loading or once exhausted.
    Append,
}

/// A load the caller must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub top: u32,
    pub append: bool,
    pub generation: u64,
}

/// What a finished load did to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response belonged to an older generation and was dropped.
    Stale,
    Loaded { count: usize },
    /// 401/404: the feed is empty and exhausted.
    NoSession,
    /// Any other failure: the list is unchanged and an error is shown.
    Failed,
}

#[derive(Debug, Clone)]
pub struct Feed {
    items: Vec<NotificationItem>,
    page: u32,
    page_size: u32,
    exhausted: bool,
    loading: bool,
    error: Option<ApiError>,
    generation: u64,
    /// Number of items in the last successful response, before filtering.
    fetched_count: usize,
}

impl Feed {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            page_size: page_size.max(1),
            exhausted: false,
            loading: false,
            error: None,
            generation: 0,
            fetched_count: 0,
        }
    }

    /// Starts a load, returning the request to perform or `None` when an
    /// append is suppressed.
    pub fn begin_load(&mut self, mode: LoadMode) -> Option<LoadRequest> {
        match mode {
            LoadMode::Open | LoadMode::Reload => {
                if mode == LoadMode::Open {
                    self.items.clear();
                    self.fetched_count = 0;
                }
                self.page = 0;
                self.exhausted = false;
                self.error = None;
            }
            LoadMode::Append => {
                if self.loading || self.exhausted {
                    return None;
                }
                self.page += 1;
            }
        }

        self.loading = true;
        self.generation += 1;
        Some(LoadRequest {
            top: self.top(),
            append: mode == LoadMode::Append,
            generation: self.generation,
        })
    }

    /// Requests the next page.
    pub fn load_more(&mut self) -> Option<LoadRequest> {
        self.begin_load(LoadMode::Append)
    }

    /// Applies the response to `request`.
    ///
    /// Items whose ids are in `pending` stay hidden until their soft delete
    /// is undone or committed.
    pub fn finish(
        &mut self,
        request: LoadRequest,
        result: ApiResult<Vec<NotificationItem>>,
        pending: &[NotificationId],
    ) -> LoadOutcome {
        if request.generation != self.generation {
            return LoadOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(items) => {
                let fetched = items.len();
                if request.append && fetched <= self.fetched_count {
                    self.exhausted = true;
                }
                self.fetched_count = fetched;
                self.items = items
                    .into_iter()
                    .filter(|item| !pending.contains(&item.id))
                    .collect();
                self.error = None;
                LoadOutcome::Loaded { count: fetched }
            }
            Err(error) if error.is_no_session() => {
                self.items.clear();
                self.fetched_count = 0;
                self.exhausted = true;
                self.error = None;
                LoadOutcome::NoSession
            }
            Err(error) => {
                if request.append {
                    self.page = self.page.saturating_sub(1);
                }
                self.error = Some(error);
                LoadOutcome::Failed
            }
        }
    }

    /// Removes an item from the visible list.
    pub fn remove(&mut self, id: NotificationId) -> Option<NotificationItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Puts a restored item back at the head of the list.
    pub fn restore(&mut self, item: NotificationItem) {
        if !self.items.iter().any(|existing| existing.id == item.id) {
            self.items.insert(0, item);
        }
    }

    /// Marks one item read locally. Returns `true` if it was unread.
    pub fn mark_read(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.is_read => {
                item.is_read = true;
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
    }

    /// Empties the list after a bulk delete and stops paging.
    ///
    /// Any load still in flight is invalidated.
    pub fn clear_exhausted(&mut self) {
        self.items.clear();
        self.fetched_count = 0;
        self.exhausted = true;
        self.loading = false;
        self.error = None;
        self.generation += 1;
    }

    /// Invalidates any load in flight, e.g. when the history closes.
    pub fn cancel(&mut self) {
        if self.loading {
            self.loading = false;
            self.generation += 1;
        }
    }

    #[must_use]
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.items.iter().map(|item| item.id).collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.loading && !self.exhausted
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Prefix size requested for the current page.
    #[must_use]
    pub fn top(&self) -> u32 {
        (self.page + 1).saturating_mul(self.page_size)
    }
}
