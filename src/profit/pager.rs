use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Rows per page in full history
pub const PAGE_SIZE: usize = 50;

/// Rows shown in the preview, whatever the page
pub const PREVIEW_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Preview,
    FullHistory,
}

/// Which slice of the profit list is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitView {
    #[serde(default)]
    pub mode: ViewMode,
    /// 1-based
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for ProfitView {
    fn default() -> Self {
        Self {
            mode: ViewMode::Preview,
            page: 1,
        }
    }
}

/// ceil(count / PAGE_SIZE); 0 for an empty list
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

impl ProfitView {
    pub fn expand(&mut self) {
        self.mode = ViewMode::FullHistory;
    }

    /// Back to the preview; the page resets so the next expand starts at 1
    pub fn collapse(&mut self) {
        self.mode = ViewMode::Preview;
        self.page = 1;
    }

    pub fn is_full_history(&self) -> bool {
        self.mode == ViewMode::FullHistory
    }

    pub fn go_to(&mut self, page: usize, count: usize) -> Result<()> {
        let pages = total_pages(count).max(1);
        if page == 0 || page > pages {
            return Err(StoreError::PageOutOfRange { page, pages });
        }
        self.page = page;
        Ok(())
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.page < total_pages(count)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns false, leaving the page alone, when already on the last page
    pub fn next_page(&mut self, count: usize) -> bool {
        if !self.has_next(count) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Returns false, leaving the page alone, when already on the first page
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Pull a stored page back into range after the list shrank
    pub fn clamp(&mut self, count: usize) {
        self.page = self.page.clamp(1, total_pages(count).max(1));
    }

    /// The rows visible in the current mode
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.mode {
            ViewMode::Preview => &items[..items.len().min(PREVIEW_SIZE)],
            ViewMode::FullHistory => {
                let start = self.page.saturating_sub(1).saturating_mul(PAGE_SIZE);
                if start >= items.len() {
                    return &[];
                }
                let end = start.saturating_add(PAGE_SIZE).min(items.len());
                &items[start..end]
            }
        }
    }

    /// 0-based offset of the first visible row
    pub fn offset(&self) -> usize {
        match self.mode {
            ViewMode::Preview => 0,
            ViewMode::FullHistory => self.page.saturating_sub(1).saturating_mul(PAGE_SIZE),
        }
    }
}
