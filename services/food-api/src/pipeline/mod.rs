//! The listing pipeline
//!
//! `parse -> filter -> sort -> paginate -> assemble`, run fresh for every
//! request over a catalog snapshot. Every stage is total.

pub mod assemble;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use assemble::{assemble, AppliedFilters, FoodListResponse};
pub use filter::{FilterChain, Predicate};
pub use paginate::{paginate, total_pages, Page};
pub use sort::Sorter;

use crate::catalog::CatalogItem;
use crate::collation::Collator;
use crate::query::QuerySpec;

/// Run one listing request against a catalog snapshot
pub fn run(catalog: Vec<CatalogItem>, spec: &QuerySpec, collator: &dyn Collator) -> FoodListResponse {
    let filtered = FilterChain::from_spec(spec).apply(catalog);
    let sorted = Sorter::new(collator).sort(filtered, spec.sort_key, spec.sort_order);
    let page = paginate(sorted, spec.page, spec.limit);
    assemble(page, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collation::BaseLetterCollator;
    use crate::query::{SortKey, SortOrder};

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(1).with_name("Tom Yum").with_price(60.0).with_spicy(3).with_vegetarian(false),
            CatalogItem::new(2).with_name("Som Tam").with_price(40.0).with_spicy(4).with_vegetarian(true),
            CatalogItem::new(3).with_name("Khao Soi").with_price(55.0).with_spicy(2).with_vegetarian(false),
        ]
    }

    #[test]
    fn test_default_listing_is_name_ordered() {
        let response = run(catalog(), &QuerySpec::default(), &BaseLetterCollator);
        let ids: Vec<u64> = response.data.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(response.total, 3);
        assert_eq!(response.total_pages, 1);
    }

    #[test]
    fn test_stages_compose() {
        let spec = QuerySpec {
            max_price: Some(58.0),
            sort_key: SortKey::Price,
            sort_order: SortOrder::Desc,
            limit: 1,
            page: 2,
            ..QuerySpec::default()
        };
        let response = run(catalog(), &spec, &BaseLetterCollator);
        assert_eq!(response.total, 2);
        assert_eq!(response.total_pages, 2);
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, 2);
    }
}
