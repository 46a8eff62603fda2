//! Caller-defined record types flowing through the cart.
//!
//! Run with `cargo run --example typed`.

use std::sync::Arc;

use carts::store::MemoryStore;
use carts::{CartItem, CartKey, CartStore};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Product {
    id: String,
    name: String,
    unit_price_cents: u32,
    qty: u32,
}

fn main() -> Result<(), carts::Error> {
    // one anonymous cart per run
    let store = CartStore::new(CartKey::random(), Arc::new(MemoryStore::new()));
    println!("cart key: {}", store.key());

    let products = [
        Product {
            id: "SKU-0041".into(),
            name: "espresso beans".into(),
            unit_price_cents: 1450,
            qty: 2,
        },
        Product {
            id: "SKU-0007".into(),
            name: "v60 filters".into(),
            unit_price_cents: 620,
            qty: 1,
        },
    ];

    for product in &products {
        store.add(CartItem::from_record(product)?)?;
    }

    let mut total = 0;
    for item in store.load()? {
        let product: Product = item.to_record()?;
        total += product.unit_price_cents * product.qty;
        println!(
            "{:>3} x {:<16} {:>6}c",
            product.qty, product.name, product.unit_price_cents
        );
    }
    println!("total: {total}c");

    Ok(())
}
