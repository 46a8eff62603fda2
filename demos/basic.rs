//! A checkout flow persisted to disk.
//!
//! Run with `cargo run --example basic`; the cart lands under ./cart-data
//! and survives re-runs until cleared.

use std::sync::Arc;

use carts::store::FileStore;
use carts::{CartItem, CartKey, CartStore};

fn main() -> Result<(), carts::Error> {
    let backend = Arc::new(FileStore::new("./cart-data")?);
    let store = CartStore::new(CartKey::new("demo-checkout")?, backend);

    println!("cart on disk before this run: {} items", store.load()?.len());

    store.add(
        CartItem::new(1)
            .with_field("name", "espresso beans")
            .with_field("qty", 2),
    )?;
    store.add(
        CartItem::new(2)
            .with_field("name", "v60 filters")
            .with_field("qty", 1),
    )?;

    // bump the filter quantity; every entry with id 2 gets the new record
    store.update(
        CartItem::new(2)
            .with_field("name", "v60 filters")
            .with_field("qty", 3),
    )?;

    if let Some(filters) = store.get_by_id(2)? {
        println!("item 2 -> {filters:?}");
    }

    let removed = store.remove(1)?;
    println!("removed -> {removed:?}");

    println!("slot present: {}", store.exists()?);
    store.clear()?;
    println!("slot present after clear: {}", store.exists()?);

    Ok(())
}
