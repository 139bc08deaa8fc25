use std::ops::Range;

use crate::config::Breakpoints;

/// Cards visible at `width` CSS pixels with the stock breakpoints:
/// 1 below 768, 2 below 1200, otherwise 3.
#[must_use]
pub fn page_size_for_width(width: f64) -> usize {
    Breakpoints::default().page_size(width)
}

/// A page of `page_size` consecutive items starting at `offset`.
///
/// `offset` always stays within `0..=len.saturating_sub(page_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselWindow {
    len: usize,
    page_size: usize,
    offset: usize,
}

impl CarouselWindow {
    #[must_use]
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            len,
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Offset of the last full page.
    #[must_use]
    pub const fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.page_size)
    }

    /// One indicator per reachable offset.
    #[must_use]
    pub const fn indicator_count(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.max_offset() + 1
        }
    }

    /// Indices of the items on the current page.
    #[must_use]
    pub fn visible(&self) -> Range<usize> {
        let end = (self.offset + self.page_size).min(self.len);
        self.offset..end
    }

    /// Move to `offset`, clamped into the valid range. Returns the stored offset.
    pub fn set_offset(&mut self, offset: i64) -> usize {
        let max = self.max_offset();
        self.offset = usize::try_from(offset.max(0)).map_or(max, |o| o.min(max));
        self.offset
    }

    /// Step forward one item, wrapping from the last page to the first.
    pub fn advance(&mut self) -> usize {
        self.offset = if self.offset >= self.max_offset() {
            0
        } else {
            self.offset + 1
        };
        self.offset
    }

    /// Step back one item, wrapping from the first page to the last.
    pub fn retreat(&mut self) -> usize {
        self.offset = if self.offset == 0 {
            self.max_offset()
        } else {
            self.offset - 1
        };
        self.offset
    }

    /// Change the page size and re-clamp. A window sitting on the last page
    /// stays on the last page. Returns `false` when the size is unchanged.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return false;
        }
        let pinned_to_end = self.max_offset() > 0 && self.offset == self.max_offset();
        self.page_size = page_size;
        self.offset = if pinned_to_end {
            self.max_offset()
        } else {
            self.offset.min(self.max_offset())
        };
        true
    }
}
