/// Reveals a sorted result list in fixed-size increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    pages: usize,
}

impl Paginator {
    /// Reveals `pages` increments of `page_size` results
    pub fn with_pages(page_size: usize, pages: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages: pages.max(1),
        }
    }

    pub fn visible_count(&self, total: usize) -> usize {
        self.page_size.saturating_mul(self.pages).min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible_count(total) < total
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }
}
