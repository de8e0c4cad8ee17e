//! Catalog filtering
//!
//! Each set field of a [`QuerySpec`] becomes one [`Predicate`]. Items must
//! pass every active predicate; relative order is preserved.

use crate::catalog::CatalogItem;
use crate::query::QuerySpec;

/// A single test over one catalog item
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Lower-cased needle found in the name or the description
    Search(String),
    /// Lower-cased category equal to the item's category
    Category(String),
    /// Spicy level (absent = 0) at most this value; malformed levels fail
    MaxSpicy(f64),
    Vegetarian(bool),
    Available(bool),
    /// Price at least this value; malformed prices fail
    MinPrice(f64),
    /// Price at most this value; malformed prices fail
    MaxPrice(f64),
}

impl Predicate {
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            Self::Search(needle) => {
                item.name_or_empty().to_lowercase().contains(needle.as_str())
                    || item.description_or_empty().to_lowercase().contains(needle.as_str())
            }
            Self::Category(wanted) => item.in_category(wanted),
            Self::MaxSpicy(max) => item.spicy_level() <= *max,
            Self::Vegetarian(wanted) => item.is_vegetarian() == *wanted,
            Self::Available(wanted) => item.is_available() == *wanted,
            Self::MinPrice(min) => item.price_or_nan() >= *min,
            Self::MaxPrice(max) => item.price_or_nan() <= *max,
        }
    }
}

/// Conjunction of the predicates requested by a query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChain {
    predicates: Vec<Predicate>,
}

impl FilterChain {
    /// Chain matching every item
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain with one predicate per set filter field of `spec`
    pub fn from_spec(spec: &QuerySpec) -> Self {
        let predicates = [
            spec.search.clone().map(Predicate::Search),
            spec.category.clone().map(Predicate::Category),
            spec.max_spicy.map(Predicate::MaxSpicy),
            spec.vegetarian.map(Predicate::Vegetarian),
            spec.available.map(Predicate::Available),
            spec.min_price.map(Predicate::MinPrice),
            spec.max_price.map(Predicate::MaxPrice),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self { predicates }
    }

    /// Add another predicate
    #[must_use]
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.predicates.iter().all(|p| p.matches(item))
    }

    /// Keep the items that pass every predicate, in their original order
    pub fn apply(&self, items: Vec<CatalogItem>) -> Vec<CatalogItem> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(1)
                .with_name("Tom Yum")
                .with_description("Hot and sour soup")
                .with_category("Soup")
                .with_price(60.0)
                .with_spicy(3)
                .with_vegetarian(false)
                .with_available(true),
            CatalogItem::new(2)
                .with_name("Som Tam")
                .with_category("Salad")
                .with_price(40.0)
                .with_spicy(4)
                .with_vegetarian(true),
            CatalogItem::new(3)
                .with_name("Khao Soi")
                .with_description("Curry noodle SOUP")
                .with_category("Noodles")
                .with_price(55.0)
                .with_spicy(2),
            CatalogItem::new(4).with_name("Mango Sticky Rice").with_category("dessert"),
        ]
    }

    fn ids(items: &[CatalogItem]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_chain_keeps_everything() {
        let chain = FilterChain::new();
        assert_eq!(ids(&chain.apply(catalog())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let chain = FilterChain::new().with(Predicate::Search("soup".into()));
        assert_eq!(ids(&chain.apply(catalog())), vec![1, 3]);
    }

    #[test]
    fn test_category_is_exact() {
        let chain = FilterChain::new().with(Predicate::Category("soup".into()));
        assert_eq!(ids(&chain.apply(catalog())), vec![1]);

        let partial = FilterChain::new().with(Predicate::Category("sou".into()));
        assert!(partial.apply(catalog()).is_empty());
    }

    #[test]
    fn test_absent_spicy_counts_as_zero() {
        let chain = FilterChain::new().with(Predicate::MaxSpicy(0.0));
        assert_eq!(ids(&chain.apply(catalog())), vec![4]);

        let chain = FilterChain::new().with(Predicate::MaxSpicy(2.5));
        assert_eq!(ids(&chain.apply(catalog())), vec![3, 4]);
    }

    #[test]
    fn test_malformed_or_fractional_spicy_fails_the_bound() {
        let items = vec![
            CatalogItem::new(1).with_spicy("hot"),
            CatalogItem::new(2).with_spicy(2.5),
            CatalogItem::new(3).with_spicy(" 2 "),
            CatalogItem::new(4),
        ];
        let chain = FilterChain::new().with(Predicate::MaxSpicy(2.0));
        assert_eq!(ids(&chain.apply(items)), vec![3, 4]);
    }

    #[test]
    fn test_absent_booleans_count_as_false() {
        let veg = FilterChain::new().with(Predicate::Vegetarian(false));
        assert_eq!(ids(&veg.apply(catalog())), vec![1, 3, 4]);

        let available = FilterChain::new().with(Predicate::Available(true));
        assert_eq!(ids(&available.apply(catalog())), vec![1]);
    }

    #[test]
    fn test_price_bounds_reject_missing_prices() {
        let chain = FilterChain::new()
            .with(Predicate::MinPrice(0.0))
            .with(Predicate::MaxPrice(55.0));
        assert_eq!(ids(&chain.apply(catalog())), vec![2, 3]);

        let nan = vec![CatalogItem::new(9).with_price(f64::NAN)];
        assert!(FilterChain::new().with(Predicate::MaxPrice(1e9)).apply(nan).is_empty());
    }

    #[test]
    fn test_from_spec_builds_only_set_filters() {
        let spec = QuerySpec {
            search: Some("tom".into()),
            vegetarian: Some(false),
            ..QuerySpec::default()
        };
        let chain = FilterChain::from_spec(&spec);
        assert_eq!(
            chain.predicates(),
            &[Predicate::Search("tom".into()), Predicate::Vegetarian(false)]
        );
        assert!(FilterChain::from_spec(&QuerySpec::default()).predicates().is_empty());
    }

    #[test]
    fn test_adding_predicates_only_removes_items() {
        let base = FilterChain::new().with(Predicate::MaxSpicy(3.0));
        let narrower = base.clone().with(Predicate::MinPrice(50.0));

        let wide = ids(&base.apply(catalog()));
        let narrow = ids(&narrower.apply(catalog()));
        assert!(narrow.iter().all(|id| wide.contains(id)));
        assert!(narrow.len() <= wide.len());
    }
}
