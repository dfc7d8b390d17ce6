//! Benchmark profiles for the Molt data toolkit.
//!
//! Provides pre-built documents and specifications shared by the
//! criterion benches:
//!
//! - [`reference_catalog`]: 1 000 products (the default bench input)
//! - [`stress_catalog`]: 50 000 products
//! - [`pricing_spec`]: an [`EvolveSpec`] touching every product
//! - [`public_view`]: a [`Selection`] that drops internal fields

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use molt_core::Value;
use molt_evolve::EvolveSpec;
use molt_project::Selection;
use molt_test_utils::fixtures;

/// Product count of [`reference_catalog`].
pub const REFERENCE_PRODUCTS: usize = 1_000;

/// Product count of [`stress_catalog`].
pub const STRESS_PRODUCTS: usize = 50_000;

/// A catalog of [`REFERENCE_PRODUCTS`] products.
pub fn reference_catalog() -> Value {
    fixtures::catalog(REFERENCE_PRODUCTS)
}

/// A catalog of [`STRESS_PRODUCTS`] products.
pub fn stress_catalog() -> Value {
    fixtures::catalog(STRESS_PRODUCTS)
}

/// Raise every price by 10% and upper-case every tag.
pub fn pricing_spec() -> EvolveSpec {
    EvolveSpec::new().each(
        "products",
        EvolveSpec::new()
            .apply("price", |v| Value::from(v.as_f64().unwrap_or(0.0) * 1.1))
            .each(
                "tags",
                molt_evolve::RuleDecl::transform(|v| {
                    Value::from(v.as_str().unwrap_or_default().to_uppercase())
                }),
            ),
    )
}

/// Keep `id`, `name`, `price` and the width of every product.
pub fn public_view() -> Selection {
    Selection::new().key("count").nested(
        "products",
        Selection::new()
            .key("id")
            .key("name")
            .key("price")
            .rename("width", ["dims", "w"]),
    )
}

/// Drop the `internal` block of every product.
pub fn internal_fields() -> Selection {
    Selection::new().nested("products", Selection::from(["internal"]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_consistent() {
        let catalog = reference_catalog();
        assert_eq!(
            catalog.get("count"),
            Some(&Value::Int(REFERENCE_PRODUCTS as i64))
        );
        let plan = molt_evolve::prep_evolve(&pricing_spec()).unwrap();
        let evolved = plan.evolved(catalog).unwrap();
        let view = molt_project::project(&public_view(), Some(&evolved)).unwrap();
        let products = view.get("products").and_then(Value::as_seq).unwrap();
        assert_eq!(products.len(), REFERENCE_PRODUCTS);
        assert!(products[0].get("internal").is_none());
        assert!(products[0].get("width").is_some());
    }
}
