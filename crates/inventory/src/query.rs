//! Query/filter engine: narrow an item collection by request parameters.

use crate::item::Item;

/// Optional listing filters.
///
/// `category` is a case-sensitive exact match; `search` is a case-insensitive
/// substring match over name OR category. Both narrow independently (AND);
/// absent parameters impose no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ItemFilter {
    /// No restriction: `list` with this filter returns everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(category) = &self.category {
            if item.category() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_name = item.name().to_lowercase().contains(&needle);
            let in_category = item
                .category()
                .is_some_and(|c| c.to_lowercase().contains(&needle));
            if !in_name && !in_category {
                return false;
            }
        }

        true
    }
}

/// Keep the matching subsequence, preserving the input order.
pub fn filter_items(items: Vec<Item>, filter: &ItemFilter) -> Vec<Item> {
    if filter.is_unrestricted() {
        return items;
    }
    items.into_iter().filter(|i| filter.matches(i)).collect()
}
