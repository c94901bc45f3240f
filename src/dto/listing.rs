use serde::{Deserialize, Serialize};

use crate::listing::{PageDescriptor, PageRequest, SearchQuery, page_link};

/// Query parameters accepted by every list view.
///
/// Both values are kept as raw strings; normalization happens in
/// [`ListQuery::search`] and [`ListQuery::page_request`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Optional search string entered by the user.
    pub q: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<String>,
}

impl ListQuery {
    pub fn new(q: Option<&str>, page: Option<&str>) -> Self {
        Self {
            q: q.map(str::to_string),
            page: page.map(str::to_string),
        }
    }

    pub fn search(&self) -> SearchQuery {
        SearchQuery::new(self.q.as_deref())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref())
    }
}

/// Data required to render a list template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListPageData<T> {
    /// Records of the requested page plus navigation state.
    pub page: PageDescriptor<T>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}

impl<T> ListPageData<T> {
    pub fn new(page: PageDescriptor<T>, search: &SearchQuery) -> Self {
        Self {
            page,
            search_query: search.as_str().map(str::to_string),
        }
    }

    fn search(&self) -> SearchQuery {
        SearchQuery::new(self.search_query.as_deref())
    }

    pub fn previous_link(&self) -> Option<String> {
        self.page.previous_link(&self.search())
    }

    pub fn next_link(&self) -> Option<String> {
        self.page.next_link(&self.search())
    }

    /// Links for every numbered entry of the page strip, `None` for gaps.
    pub fn page_links(&self) -> Vec<Option<(usize, String)>> {
        let search = self.search();
        self.page
            .pages
            .iter()
            .map(|page| page.map(|number| (number, page_link(number, &search))))
            .collect()
    }
}
