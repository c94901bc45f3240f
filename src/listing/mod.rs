//! Search-filter + pagination pipeline shared by every list view.
//!
//! A listing runs three pure stages over a record collection that the caller
//! has already loaded from the store: [`filter`] keeps the records matching
//! the search query, [`paginate`] cuts the matches into fixed-size pages and
//! picks the requested one, and [`PageDescriptor`] turns that page into the
//! navigation data a template needs. None of the stages fail; malformed input
//! is normalized instead.

use std::marker::PhantomData;
use std::num::NonZeroUsize;

use thiserror::Error;

pub mod descriptor;
pub mod filter;
pub mod paginate;

pub use descriptor::{PageDescriptor, page_link};
pub use filter::filter;
pub use paginate::{PageSlice, paginate};

/// Record kinds that expose named text attributes for substring search.
pub trait Searchable {
    /// Every attribute name [`Searchable::search_field`] understands.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Returns the text value of the named attribute, or `None` when the
    /// attribute is unknown or unset.
    fn search_field(&self, name: &str) -> Option<&str>;
}

/// Errors raised while configuring a [`Listing`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("unknown search field: {0}")]
    UnknownField(String),

    #[error("at least one search field is required")]
    NoSearchFields,
}

/// Normalized free-text search term.
///
/// Every entry point builds queries through [`SearchQuery::new`], so the
/// trimming and case folding rules are applied uniformly: surrounding
/// whitespace is dropped, a blank term means "no filtering", and matching is
/// case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    term: Option<String>,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => Self {
                needle: term.to_lowercase(),
                term: Some(term.to_string()),
            },
            None => Self::default(),
        }
    }

    /// The trimmed term as typed by the user, echoed back into links.
    pub fn as_str(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_none()
    }

    /// Case-insensitive substring test; an empty query matches everything.
    pub fn matches(&self, value: &str) -> bool {
        self.is_empty() || value.to_lowercase().contains(&self.needle)
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(Some(value))
    }
}

/// Requested 1-based page number, already clamped to at least `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageRequest(usize);

impl PageRequest {
    pub const FIRST: Self = Self(1);

    /// Wraps a page number, treating `0` as the first page.
    pub const fn new(page: usize) -> Self {
        if page == 0 { Self::FIRST } else { Self(page) }
    }

    /// Decodes the raw `page` request parameter.
    ///
    /// Absent, blank, negative and non-numeric values select the first page.
    /// Numbers too large for `usize` saturate so they clamp to the last page.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::FIRST;
        };
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::FIRST;
        }
        // Only overflow can fail once every byte is a digit.
        Self::new(digits.parse::<usize>().unwrap_or(usize::MAX))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<Option<usize>> for PageRequest {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::FIRST, Self::new)
    }
}

/// Page size and search attributes configured for one record kind.
#[derive(Debug)]
pub struct Listing<R> {
    page_size: NonZeroUsize,
    fields: Vec<&'static str>,
    _records: PhantomData<fn(&R)>,
}

impl<R> Clone for Listing<R> {
    fn clone(&self) -> Self {
        Self {
            page_size: self.page_size,
            fields: self.fields.clone(),
            _records: PhantomData,
        }
    }
}

impl<R: Searchable> Listing<R> {
    /// Builds a listing searching the given attributes.
    ///
    /// Every field must be one of [`Searchable::SEARCH_FIELDS`]; duplicates
    /// are collapsed.
    pub fn new<S: AsRef<str>>(page_size: usize, fields: &[S]) -> Result<Self, ListingError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(ListingError::ZeroPageSize)?;

        let mut resolved: Vec<&'static str> = Vec::with_capacity(fields.len());
        for field in fields {
            let field = field.as_ref().trim();
            let known = R::SEARCH_FIELDS
                .iter()
                .copied()
                .find(|known| *known == field)
                .ok_or_else(|| ListingError::UnknownField(field.to_string()))?;
            if !resolved.contains(&known) {
                resolved.push(known);
            }
        }

        if resolved.is_empty() {
            return Err(ListingError::NoSearchFields);
        }

        Ok(Self {
            page_size,
            fields: resolved,
            _records: PhantomData,
        })
    }

    /// Builds a listing searching every attribute the record kind exposes.
    pub fn all_fields(page_size: usize) -> Result<Self, ListingError> {
        Self::new(page_size, R::SEARCH_FIELDS)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    /// Runs filter, paginate and describe over `records`.
    pub fn run<'a>(
        &self,
        records: &'a [R],
        query: &SearchQuery,
        page: PageRequest,
    ) -> PageDescriptor<&'a R> {
        let matched = filter(records, query, &self.fields);
        log::debug!(
            "listing matched {} of {} records for {:?}",
            matched.len(),
            records.len(),
            query.as_str()
        );
        PageDescriptor::from(paginate(&matched, self.page_size, page))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Person {
        pub id: usize,
        pub name: String,
        pub nickname: Option<String>,
    }

    impl Searchable for Person {
        const SEARCH_FIELDS: &'static [&'static str] = &["name", "nickname"];

        fn search_field(&self, name: &str) -> Option<&str> {
            match name {
                "name" => Some(&self.name),
                "nickname" => self.nickname.as_deref(),
                _ => None,
            }
        }
    }

    pub(crate) fn person(id: usize, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            nickname: None,
        }
    }

    fn people(count: usize) -> Vec<Person> {
        (1..=count).map(|id| person(id, &format!("Bob {id}"))).collect()
    }

    /// 25 people, 12 of them with "an" in their name, interleaved.
    fn mixed_people() -> Vec<Person> {
        (1..=25)
            .map(|id| {
                if id % 2 == 0 && id <= 24 {
                    person(id, &format!("Dan {id}"))
                } else {
                    person(id, &format!("Bob {id}"))
                }
            })
            .collect()
    }

    fn users() -> Listing<Person> {
        Listing::new(10, &["name"]).unwrap()
    }

    fn ids(page: &PageDescriptor<&Person>) -> Vec<usize> {
        page.items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn first_page_without_query() {
        let records = people(25);
        let page = users().run(&records, &SearchQuery::default(), PageRequest::parse(None));

        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
        assert!(!page.has_previous);
        assert!(page.has_next);
    }

    #[test]
    fn last_page_is_short() {
        let records = people(25);
        let page = users().run(&records, &SearchQuery::default(), PageRequest::new(3));

        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(ids(&page), (21..=25).collect::<Vec<_>>());
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn query_narrows_pages() {
        let records = mixed_people();
        let page = users().run(&records, &"an".into(), PageRequest::new(2));

        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(ids(&page), vec![22, 24]);
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let records: Vec<Person> = Vec::new();
        let page = users().run(&records, &SearchQuery::default(), PageRequest::new(4));

        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_previous);
        assert!(!page.has_next);
        assert!(page.pages.is_empty());
    }

    #[test]
    fn unmatched_query_has_no_pages() {
        let records = people(25);
        let page = users().run(&records, &"zzz".into(), PageRequest::new(1));

        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn non_numeric_page_behaves_like_absent() {
        let records = people(25);
        let listing = users();
        let query = SearchQuery::default();

        let absent = listing.run(&records, &query, PageRequest::parse(None));
        let garbage = listing.run(&records, &query, PageRequest::parse(Some("abc")));

        assert_eq!(absent, garbage);
    }

    #[test]
    fn page_request_parsing() {
        assert_eq!(PageRequest::parse(None).get(), 1);
        assert_eq!(PageRequest::parse(Some("")).get(), 1);
        assert_eq!(PageRequest::parse(Some("0")).get(), 1);
        assert_eq!(PageRequest::parse(Some("-4")).get(), 1);
        assert_eq!(PageRequest::parse(Some("2.5")).get(), 1);
        assert_eq!(PageRequest::parse(Some(" 7 ")).get(), 7);
        assert_eq!(PageRequest::parse(Some("+3")).get(), 3);
        assert_eq!(
            PageRequest::parse(Some("99999999999999999999999999")).get(),
            usize::MAX
        );
        assert_eq!(PageRequest::from(Some(0)).get(), 1);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let records = people(25);
        let listing = users();
        let query = SearchQuery::default();

        for raw in ["0", "-1", "abc"] {
            let page = listing.run(&records, &query, PageRequest::parse(Some(raw)));
            assert_eq!(page.current_page, 1, "page={raw}");
        }

        let page = listing.run(&records, &query, PageRequest::new(3 + 5));
        assert_eq!(page.current_page, 3);

        let page = listing.run(
            &records,
            &query,
            PageRequest::parse(Some("99999999999999999999999999")),
        );
        assert_eq!(page.current_page, 3);
    }

    #[test]
    fn search_query_is_trimmed_and_case_insensitive() {
        assert!(SearchQuery::new(Some("   ")).is_empty());
        assert!(SearchQuery::new(None).is_empty());

        let query = SearchQuery::new(Some("  ÉCOLE "));
        assert_eq!(query.as_str(), Some("ÉCOLE"));
        assert!(query.matches("petite école"));
        assert!(!query.matches("ecole"));
    }

    #[test]
    fn listing_rejects_bad_configuration() {
        assert_eq!(
            Listing::<Person>::new(0, &["name"]).unwrap_err(),
            ListingError::ZeroPageSize
        );
        assert_eq!(
            Listing::<Person>::new(5, &["email"]).unwrap_err(),
            ListingError::UnknownField("email".to_string())
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            Listing::<Person>::new(5, &empty).unwrap_err(),
            ListingError::NoSearchFields
        );
    }

    #[test]
    fn listing_collapses_duplicate_fields() {
        let listing = Listing::<Person>::new(5, &["name", " name ", "nickname"]).unwrap();
        assert_eq!(listing.fields(), &["name", "nickname"]);
        assert_eq!(listing.page_size(), 5);

        let all = Listing::<Person>::all_fields(5).unwrap();
        assert_eq!(all.fields(), Person::SEARCH_FIELDS);
    }

    #[test]
    fn run_leaves_records_untouched() {
        let records = mixed_people();
        let before = records.clone();

        let _ = users().run(&records, &"dan".into(), PageRequest::new(2));

        assert_eq!(records, before);
    }
}
