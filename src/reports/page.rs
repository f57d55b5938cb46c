/// Fixed page size of the paginated posts-per-author view.
pub const PAGE_SIZE: usize = 20;

/// Slice bounds for one page of an already-fetched table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number.
    pub current: usize,
    /// `ceil(total_rows / PAGE_SIZE)`; zero when the table is empty.
    pub total_pages: usize,
}

impl Page {
    /// Clamps `requested` into `1..=max(1, total_pages)`, the same
    /// bounds the page input advertises.
    pub fn clamped(requested: usize, total_rows: usize) -> Self {
        let total_pages = total_rows.div_ceil(PAGE_SIZE);
        Self {
            current: requested.clamp(1, total_pages.max(1)),
            total_pages,
        }
    }

    /// Upper bound for the page number input.
    pub fn input_max(&self) -> usize {
        self.total_pages.max(1)
    }

    /// The rows belonging to this page. An out-of-range page (possible
    /// when the clamp is bypassed) slices to an empty table, not an
    /// error.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.current - 1) * PAGE_SIZE;
        if start >= rows.len() {
            return &[];
        }

        let end = (start + PAGE_SIZE).min(rows.len());
        &rows[start..end]
    }
}
