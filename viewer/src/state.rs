use models::{Asset, PageQuery, PageResponse};
use tracing::debug;

use crate::order::merge_by_id;
use crate::page_input::clamp_page;

/// Inputs to the state machine: user intents and fetch outcomes.
#[derive(Clone, Debug)]
pub enum Event {
    /// The hostname filter was edited.
    FilterChanged(String),
    /// Switch between list and grid mode.
    ViewToggled,
    /// Jump to a page; out-of-range values are clamped.
    PageRequested(i64),
    /// Infinite-scroll request for the next page.
    LoadMore,
    PageLoaded { seq: u64, page: PageResponse },
    PageFailed { seq: u64, reason: String },
}

/// Side effects a transition asks the caller to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Fetch(FetchRequest),
}

/// One page request. `seq` is strictly increasing across requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub page_number: u32,
    pub query: PageQuery,
}

/// Everything the viewer renders from.
///
/// Invariants:
/// - `page_number` is within `[1, total_pages]`.
/// - In list mode `data` is the current page; in grid mode it is the union of
///   every page fetched since the last reset, unique by asset ID.
/// - Only the response to the most recently issued request is applied.
#[derive(Clone, Debug)]
pub struct ViewState {
    filter: String,
    page_number: u32,
    total_pages: u32,
    page_size: u32,
    grid: bool,
    loading: bool,
    data: Vec<Asset>,
    /// Page whose response last landed in `data`, `None` since the last reset.
    loaded_page: Option<u32>,
    last_seq: u64,
}

impl ViewState {
    pub fn new(filter: impl Into<String>, page_size: u32, grid: bool) -> Self {
        Self {
            filter: filter.into(),
            page_number: 1,
            total_pages: 1,
            page_size: page_size.max(1),
            grid,
            loading: false,
            data: Vec::new(),
            loaded_page: None,
            last_seq: 0,
        }
    }

    /// The initial fetch for page 1.
    pub fn start(&mut self) -> Option<Command> {
        Some(self.issue_fetch())
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_grid_view(&self) -> bool {
        self.grid
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> &[Asset] {
        &self.data
    }

    /// Sequence number of the most recently issued fetch.
    pub fn latest_seq(&self) -> u64 {
        self.last_seq
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    pub fn set_filter(&mut self, filter: impl Into<String>) -> Option<Command> {
        self.apply(Event::FilterChanged(filter.into()))
    }

    pub fn toggle_view(&mut self) -> Option<Command> {
        self.apply(Event::ViewToggled)
    }

    pub fn set_page_number(&mut self, page: i64) -> Option<Command> {
        self.apply(Event::PageRequested(page))
    }

    pub fn load_more_data(&mut self) -> Option<Command> {
        self.apply(Event::LoadMore)
    }

    pub fn page_loaded(&mut self, seq: u64, page: PageResponse) -> Option<Command> {
        self.apply(Event::PageLoaded { seq, page })
    }

    pub fn page_failed(&mut self, seq: u64, reason: impl Into<String>) -> Option<Command> {
        self.apply(Event::PageFailed { seq, reason: reason.into() })
    }

    /// Apply one event, returning the fetch it triggers, if any.
    pub fn apply(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::FilterChanged(filter) => {
                self.filter = filter;
                self.reset();
                Some(self.issue_fetch())
            }
            Event::ViewToggled => {
                self.grid = !self.grid;
                self.reset();
                Some(self.issue_fetch())
            }
            Event::PageRequested(requested) => {
                let page = clamp_page(requested, self.total_pages);
                if page == self.page_number {
                    return None;
                }
                if self.grid && page < self.page_number {
                    debug!(page, current = self.page_number, "grid view does not shrink; ignoring");
                    return None;
                }
                self.page_number = page;
                Some(self.issue_fetch())
            }
            Event::LoadMore => {
                if self.loading || !self.has_next() {
                    return None;
                }
                self.apply(Event::PageRequested(i64::from(self.page_number) + 1))
            }
            Event::PageLoaded { seq, page } => {
                if !self.is_current(seq) {
                    return None;
                }
                self.loading = false;
                self.total_pages = page.effective_total_pages();
                if self.grid {
                    merge_by_id(&mut self.data, page.assets);
                } else {
                    self.data = page.assets;
                }
                self.loaded_page = Some(self.page_number.min(self.total_pages));

                // The result set shrank under us.
                if self.page_number > self.total_pages {
                    self.page_number = self.total_pages;
                    if !self.grid {
                        return Some(self.issue_fetch());
                    }
                }
                None
            }
            Event::PageFailed { seq, reason } => {
                if !self.is_current(seq) {
                    return None;
                }
                debug!(seq, %reason, "fetch failed; keeping previous data");
                self.loading = false;
                // The page number moved when the request went out. Point it back
                // at what `data` holds so the failed page is requested again.
                if let Some(page) = self.loaded_page {
                    self.page_number = page;
                }
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Private helpers
    // ------------------------------------------------------------------

    fn reset(&mut self) {
        self.page_number = 1;
        self.loaded_page = None;
        self.data.clear();
    }

    fn issue_fetch(&mut self) -> Command {
        self.last_seq += 1;
        self.loading = true;
        Command::Fetch(FetchRequest {
            seq: self.last_seq,
            page_number: self.page_number,
            query: PageQuery::for_page(self.filter.clone(), self.page_number, self.page_size),
        })
    }

    fn is_current(&self, seq: u64) -> bool {
        if seq != self.last_seq {
            debug!(seq, latest = self.last_seq, "discarding stale response");
            return false;
        }
        true
    }
}
