//! Hand-written sample documents.
//!
//! - [`user`]: a flat record with one nested record.
//! - [`order`]: a record holding a sequence of line records.
//! - [`inventory`]: a keyed collection of records.
//! - [`catalog`]: `n` generated products, for benchmarks.

use molt_core::{keyed, record, seq, Value};

/// `{ id, name, secret, address: { city, zip } }`.
pub fn user() -> Value {
    record! {
        "id" => 7,
        "name" => "Al",
        "secret" => "x",
        "address" => record! { "city" => "Oslo", "zip" => "0150" },
    }
}

/// An order with three lines, each `{ sku, qty, price }`.
pub fn order() -> Value {
    record! {
        "id" => "ord-1",
        "customer" => user(),
        "lines" => seq![
            record! { "sku" => "apple", "qty" => 2, "price" => 0.5 },
            record! { "sku" => "pear", "qty" => 1, "price" => 0.75 },
            record! { "sku" => "fig", "qty" => 12, "price" => 0.2 },
        ],
        "note" => Value::Null,
    }
}

/// A keyed collection of stock entries, keyed by SKU.
pub fn inventory() -> Value {
    record! {
        "warehouse" => "north",
        "stock" => keyed! {
            "apple" => record! { "count" => 10, "bin" => "A1" },
            "pear" => record! { "count" => 0, "bin" => "A2" },
        },
    }
}

/// `n` products `{ id, name, price, tags: [...], dims: { w, h } }` under `products`.
pub fn catalog(n: usize) -> Value {
    let products: Vec<Value> = (0..n)
        .map(|i| {
            let id = i as i64;
            record! {
                "id" => id,
                "name" => format!("product-{i}"),
                "price" => (id % 97) as f64 * 1.25,
                "tags" => seq!["new", format!("batch-{}", i % 8)],
                "dims" => record! { "w" => id % 13, "h" => id % 7 },
                "internal" => record! { "cost" => id, "supplier" => "acme" },
            }
        })
        .collect();
    record! { "products" => Value::Seq(products), "count" => n as i64 }
}
