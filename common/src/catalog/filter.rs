use crate::model::{CategoryFilter, Product};

/// Returns the products visible under `filter`, in mirror order.
///
/// An empty result is a normal outcome; the view renders its own
/// "no products in this category" state for it.
pub fn filter_products(mirror: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    mirror
        .iter()
        .filter(|product| filter.matches(product.category))
        .collect()
}
