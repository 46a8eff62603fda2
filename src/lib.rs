//! # Carts: client-side cart persistence for Rust applications
//!
//! `carts` keeps a shopping-cart item list in a single named slot of a
//! key-value store. It is a thin data-access shim: create, read, update,
//! delete, and existence-check a cart, nothing more. No network sync, no
//! cross-client conflict resolution, no schema versioning.
//!
//! # Quick Start
//!
//! Persist a cart to disk with the [`FileStore`](store::FileStore) backend:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use carts::store::FileStore;
//! use carts::{CartItem, CartKey, CartStore};
//!
//! fn main() -> Result<(), carts::Error> {
//!     let backend = Arc::new(FileStore::new("./cart-data")?);
//!     let store = CartStore::new(CartKey::new("session-81f3")?, backend);
//!
//!     store.add(
//!         CartItem::new(1)
//!             .with_field("name", "espresso beans")
//!             .with_field("qty", 2),
//!     )?;
//!     store.add(CartItem::new("SKU-9").with_field("qty", 1))?;
//!
//!     let cart = store.load()?;
//!     assert_eq!(cart.len(), 2);
//!
//!     // first match by id; numeric and string ids never mix
//!     let beans = store.get_by_id(1)?;
//!     assert!(beans.is_some());
//!
//!     store.remove(1)?;
//!     store.clear()?;
//!     Ok(())
//! }
//! ```
//!
//! # Cart items
//!
//! A [`CartItem`] is a permissive record: an `id` (number or string) plus any
//! other fields the caller attaches. The store never looks at anything but
//! `id`, and unknown fields survive every round-trip. Typed records convert
//! in and out:
//!
//! ```rust
//! use carts::CartItem;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     qty: u32,
//! }
//!
//! # fn main() -> Result<(), carts::Error> {
//! let item = CartItem::from_record(&Product {
//!     id: 7,
//!     name: "paper filters".into(),
//!     qty: 3,
//! })?;
//!
//! let product: Product = item.to_record()?;
//! assert_eq!(product.name, "paper filters");
//! # Ok(())
//! # }
//! ```
//!
//! # Stores
//!
//! Backends implement the three-method [`KeyValueStore`](store::KeyValueStore)
//! trait (`set_item` / `get_item` / `remove_item`) and plug in at
//! construction:
//!
//! - [`FileStore`](store::FileStore): one file per slot under a chosen
//!   directory; carts survive process restarts.
//! - [`MemoryStore`](store::MemoryStore): process-lifetime map; the test
//!   backend, and fine for carts that may vanish with the process.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use carts::store::MemoryStore;
//! use carts::{CartItem, CartKey, CartStore};
//!
//! # fn main() -> Result<(), carts::Error> {
//! let store = CartStore::new(CartKey::random(), Arc::new(MemoryStore::new()));
//!
//! store.add(CartItem::new("A1").with_field("qty", 1))?;
//! assert!(store.exists()?);
//!
//! store.clear()?;
//! assert!(!store.exists()?);
//! # Ok(())
//! # }
//! ```
//!
//! When no backend exists at all (think of a context where persistence is
//! simply unavailable), construct the store
//! [`detached`](CartStore::detached): every write is silently skipped and
//! every read yields an empty cart, so calling code stays branch-free.
//!
//! # Serialization
//!
//! Carts are stored as a single human-readable JSON blob (an array of
//! objects) via [`serde_json`]. A slot that was corrupted out-of-band does
//! not parse: the decode error propagates untouched on every load-based
//! operation until the slot is overwritten or cleared. This crate performs
//! no validation or repair of slot contents.
//!
//! # Consistency
//!
//! Every mutating operation is a read-modify-write cycle (load the slot,
//! change the list, write it back) with no atomicity across the steps.
//! Two callers interleaving on the same key can lose updates: the last
//! writer wins. That matches the single-threaded client environments this
//! crate targets and is deliberately not papered over with locking. If you
//! need stronger guarantees, serialize access to each key yourself.

mod cart;
pub use cart::*;

pub mod store;

pub use serde_json;
