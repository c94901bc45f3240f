use serde::Serialize;

use crate::listing::{PageSlice, SearchQuery};

/// Pages always shown at each end of the strip.
const EDGE_PAGES: usize = 2;
/// Pages shown before the current one.
const PAGES_BEFORE: usize = 2;
/// Pages shown after the current one.
const PAGES_AFTER: usize = 4;

/// Page numbers shown in the navigation bar, `None` marking a gap.
///
/// `current_page` must already lie in `1..=total_pages`.
fn page_strip(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let windows = [
        (1, EDGE_PAGES.min(total_pages)),
        (
            current_page.saturating_sub(PAGES_BEFORE).max(1),
            current_page.saturating_add(PAGES_AFTER).min(total_pages),
        ),
        (total_pages.saturating_sub(EDGE_PAGES) + 1, total_pages),
    ];

    let mut strip = Vec::new();
    let mut shown = 0;
    for (start, end) in windows {
        let start = start.max(shown + 1);
        if start > end {
            continue;
        }
        if start > shown + 1 {
            strip.push(None);
        }
        strip.extend((start..=end).map(Some));
        shown = end;
    }
    strip
}

#[derive(Serialize)]
struct NavParams<'a> {
    page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
}

/// Navigation link for `page` that keeps the active search term.
pub fn page_link(page: usize, query: &SearchQuery) -> String {
    let params = NavParams {
        page,
        q: query.as_str(),
    };
    match serde_html_form::to_string(&params) {
        Ok(encoded) => format!("?{encoded}"),
        Err(err) => {
            log::error!("Failed to encode navigation link: {err}");
            format!("?page={page}")
        }
    }
}

/// Everything a list template needs to render one page and its navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageDescriptor<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Compact page strip for the navigation bar.
    pub pages: Vec<Option<usize>>,
}

impl<T> PageDescriptor<T> {
    /// Builds the descriptor, clamping `current_page` into `1..=total_pages`
    /// (`1` when there are no pages).
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.clamp(1, total_pages.max(1));

        let pages = page_strip(total_pages, current_page);

        Self {
            items,
            current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            pages,
        }
    }

    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous.then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        self.has_next.then(|| self.current_page + 1)
    }

    pub fn previous_link(&self, query: &SearchQuery) -> Option<String> {
        self.previous_page().map(|page| page_link(page, query))
    }

    pub fn next_link(&self, query: &SearchQuery) -> Option<String> {
        self.next_page().map(|page| page_link(page, query))
    }

    /// Converts the records on this page, keeping the navigation state.
    pub fn map<U, F>(self, f: F) -> PageDescriptor<U>
    where
        F: FnMut(T) -> U,
    {
        PageDescriptor {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
            pages: self.pages,
        }
    }
}

impl<T: Clone> PageDescriptor<&T> {
    pub fn cloned(self) -> PageDescriptor<T> {
        self.map(T::clone)
    }
}

impl<T: Clone> From<PageSlice<'_, T>> for PageDescriptor<T> {
    fn from(slice: PageSlice<'_, T>) -> Self {
        Self::new(slice.items.to_vec(), slice.current_page, slice.total_pages)
    }
}
