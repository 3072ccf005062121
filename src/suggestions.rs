//! Paginated suggestion list mirrored from the service.

use crate::config::DEFAULT_PAGE_LIMIT;
use crate::domain::SuggestionPage;
use alloc::string::String;
use alloc::vec::Vec;

/// A page fetch issued by the list. Responses are matched against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    words: Vec<String>,
    count: usize,
    fetched: usize,
    limit: usize,
    generation: u64,
    outstanding: Option<PageRequest>,
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl SuggestionList {
    /// Empty list fetching `limit` words per page (at least one).
    pub fn new(limit: usize) -> Self {
        Self {
            words: Vec::new(),
            count: 0,
            fetched: 0,
            limit: limit.max(1),
            generation: 0,
            outstanding: None,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Total remaining candidates as last reported by the service.
    pub fn count(&self) -> usize {
        self.count
    }

    /// `offset + limit` of the last accepted page.
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_loading(&self) -> bool {
        self.outstanding.is_some()
    }

    /// More candidates exist beyond what has been fetched.
    pub fn has_more(&self) -> bool {
        self.fetched < self.count
    }

    /// Whether a "load more" control should be enabled right now.
    pub fn can_load_more(&self) -> bool {
        self.has_more() && !self.is_loading()
    }

    /// Drop everything, including any outstanding fetch.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.words.clear();
        self.count = 0;
        self.fetched = 0;
        self.outstanding = None;
    }

    /// Start over from offset 0. Supersedes any outstanding fetch.
    pub fn begin_refresh(&mut self) -> PageRequest {
        self.clear();
        let page = PageRequest {
            offset: 0,
            limit: self.limit,
            generation: self.generation,
        };
        self.outstanding = Some(page);
        page
    }

    /// Next page, unless one is in flight or nothing is left.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if !self.can_load_more() {
            return None;
        }
        let page = PageRequest {
            offset: self.fetched,
            limit: self.limit,
            generation: self.generation,
        };
        self.outstanding = Some(page);
        Some(page)
    }

    /// Take a page response. Returns false when the page was not the one awaited.
    pub fn accept(&mut self, page: PageRequest, response: SuggestionPage) -> bool {
        if self.outstanding != Some(page) {
            return false;
        }
        self.outstanding = None;
        self.count = response.count;
        if page.offset == 0 {
            self.words.clear();
        }
        self.words
            .extend(response.suggestions.into_iter().take(page.limit));
        self.words.truncate(self.count);
        self.fetched = page.offset + page.limit;
        true
    }

    /// A fetch failed; re-enable the control.
    pub fn fail(&mut self, page: PageRequest) {
        if self.outstanding == Some(page) {
            self.outstanding = None;
        }
    }
}
