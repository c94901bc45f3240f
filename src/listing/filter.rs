use crate::listing::{SearchQuery, Searchable};

/// Keeps the records where any of `fields` contains the query.
///
/// Source order is preserved and an empty query keeps every record. Fields
/// the record leaves unset never match.
pub fn filter<'a, R: Searchable>(
    records: &'a [R],
    query: &SearchQuery,
    fields: &[&str],
) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            fields
                .iter()
                .filter_map(|field| record.search_field(field))
                .any(|value| query.matches(value))
        })
        .collect()
}
