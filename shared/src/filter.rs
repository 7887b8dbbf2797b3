/// Records that can be matched by the free-text search box.
pub trait SearchFields {
    /// The two fields a query is matched against; `None` never matches.
    fn search_fields(&self) -> [Option<&str>; 2];
}

/// Case-insensitive substring filter over [`SearchFields`], preserving order.
///
/// The query is trimmed and lowercased; a blank query keeps every record.
pub fn filter_by_query<'a, T: SearchFields>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
