use carts::{CartItem, CartKey, CartStore, ItemId};
use carts::store::MemoryStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TestProduct {
    pub id: u32,
    pub name: String,
    pub qty: u32,
}

pub fn product(id: u32, name: &str, qty: u32) -> TestProduct {
    TestProduct {
        id,
        name: name.to_string(),
        qty,
    }
}

pub fn item(id: impl Into<ItemId>, name: &str, qty: u64) -> CartItem {
    CartItem::new(id)
        .with_field("name", name)
        .with_field("qty", qty)
}

pub fn memory_cart(key: &str) -> (CartStore<MemoryStore>, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::new());
    let store = CartStore::new(CartKey::new(key).unwrap(), Arc::clone(&backend));
    (store, backend)
}
