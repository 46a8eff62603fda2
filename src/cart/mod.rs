//! Cart persistence over a named key-value slot.

use std::{result, sync::Arc};

use parking_lot::RwLock;
use thiserror::Error;

mod item;
mod key;

pub use item::{CartItem, ItemId};
pub use key::CartKey;

use crate::store;
use crate::store::{FileStore, KeyValueStore};

/// The ordered item list persisted under one [`CartKey`].
///
/// Insertion order is significant and preserved; nothing is ever sorted.
pub type Cart = Vec<CartItem>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] store::Error),

    #[error("cart key must not be empty")]
    EmptyCartKey,

    #[error("record does not serialize to a JSON object")]
    NotAnObject,

    #[error("record has no `id` field")]
    MissingId,

    #[error("`id` must be a number or a string")]
    InvalidId,
}

type Result<T> = result::Result<T, Error>;

/// A cart persisted under a named slot of a [`KeyValueStore`].
///
/// The store keeps a transient cache of the last-loaded cart, but the
/// persisted slot is the single source of truth: every mutating operation
/// re-reads the slot before touching it, then writes the result back.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use carts::store::MemoryStore;
/// use carts::{CartItem, CartKey, CartStore};
///
/// # fn main() -> Result<(), carts::Error> {
/// let store = CartStore::new(CartKey::new("checkout")?, Arc::new(MemoryStore::new()));
///
/// store.add(CartItem::new(1).with_field("qty", 2))?;
/// assert!(store.exists()?);
/// assert_eq!(store.load()?.len(), 1);
///
/// store.clear()?;
/// assert!(!store.exists()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore = FileStore> {
    key: CartKey,
    backend: Option<Arc<S>>,
    cart: RwLock<Cart>,
}

impl<S> CartStore<S>
where
    S: KeyValueStore,
{
    /// Creates a store that persists to `backend` under `key`.
    pub fn new(key: CartKey, backend: Arc<S>) -> Self {
        Self {
            key,
            backend: Some(backend),
            cart: RwLock::new(Cart::new()),
        }
    }

    /// Creates a store with no persistence backend.
    ///
    /// Every operation degrades instead of failing: reads yield an empty
    /// cart, writes are silently skipped, and [`exists`](CartStore::exists)
    /// stays false. This is the explicit stand-in for execution contexts
    /// where no backend is available.
    ///
    /// ```rust
    /// use carts::{CartItem, CartKey, CartStore};
    ///
    /// # fn main() -> Result<(), carts::Error> {
    /// let store: CartStore = CartStore::detached(CartKey::new("checkout")?);
    ///
    /// store.add(CartItem::new(1))?;
    /// assert!(store.load()?.is_empty());
    /// assert!(!store.exists()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn detached(key: CartKey) -> Self {
        Self {
            key,
            backend: None,
            cart: RwLock::new(Cart::new()),
        }
    }

    /// The slot this store reads and writes.
    pub fn key(&self) -> &CartKey {
        &self.key
    }

    /// A copy of the cached, last-loaded cart.
    ///
    /// The cache is not authoritative; call [`load`](CartStore::load) for the
    /// persisted state.
    pub fn items(&self) -> Cart {
        self.cart.read().clone()
    }

    /// Replaces the cached cart without touching the slot.
    ///
    /// Follow up with [`save`](CartStore::save) to persist the new list.
    pub fn set_items(&self, items: Cart) {
        *self.cart.write() = items;
    }

    /// Persists the cached cart to the slot, overwriting any prior value.
    #[tracing::instrument(name = "saving cart to slot", skip(self))]
    pub fn save(&self) -> Result<()> {
        let Some(backend) = &self.backend else {
            tracing::debug!("no backend configured, skipping save");
            return Ok(());
        };

        let payload = store::serialize_value(&*self.cart.read())?;
        backend.set_item(self.key.as_str(), &payload).map_err(|err| {
            tracing::error!(err = %err, "failed to write cart to slot");
            err
        })?;

        Ok(())
    }

    /// Whether the slot currently holds a value.
    ///
    /// A saved empty cart still counts as present; only
    /// [`clear`](CartStore::clear), or never having saved, leaves the slot
    /// absent.
    #[tracing::instrument(name = "checking cart slot presence", skip(self))]
    pub fn exists(&self) -> Result<bool> {
        let Some(backend) = &self.backend else {
            return Ok(false);
        };

        Ok(backend.get_item(self.key.as_str())?.is_some())
    }

    /// Loads the cart from the slot and refreshes the cache with it.
    ///
    /// An absent slot or a detached store yields an empty cart. Malformed
    /// slot contents are not handled here: the decode error propagates on
    /// every load-based operation until the slot is overwritten or cleared.
    #[tracing::instrument(name = "loading cart from slot", skip(self))]
    pub fn load(&self) -> Result<Cart> {
        let items = match &self.backend {
            Some(backend) => match backend.get_item(self.key.as_str())? {
                Some(raw) => store::deserialize_value(&raw).map_err(|err| {
                    tracing::error!(err = %err, "failed to decode cart slot");
                    err
                })?,
                None => Cart::new(),
            },
            None => {
                tracing::debug!("no backend configured, returning empty cart");
                Cart::new()
            }
        };

        *self.cart.write() = items.clone();
        Ok(items)
    }

    /// Appends `item` to the end of the cart and persists.
    ///
    /// The cart is reloaded from the slot first, so the append lands on the
    /// persisted state rather than on any stale in-memory copy. Duplicate ids
    /// are allowed.
    #[tracing::instrument(name = "adding item to cart", skip(self, item))]
    pub fn add(&self, item: CartItem) -> Result<()> {
        let mut items = self.load()?;
        items.push(item);

        self.set_items(items);
        self.save()
    }

    /// Replaces every entry whose id equals `item.id` with `item`.
    ///
    /// All matches are overwritten, not just the first, so entries sharing an
    /// id collapse to the given item. A save happens whether or not anything
    /// matched; a miss is indistinguishable from an update.
    #[tracing::instrument(name = "updating item in cart", skip(self, item))]
    pub fn update(&self, item: CartItem) -> Result<()> {
        let mut items = self.load()?;
        for entry in items.iter_mut().filter(|entry| entry.id == item.id) {
            *entry = item.clone();
        }

        self.set_items(items);
        self.save()
    }

    /// Returns the first entry whose id equals `id`.
    ///
    /// Reads through to the slot and never creates one; `None` on a miss, an
    /// empty cart, or an absent slot.
    #[tracing::instrument(name = "getting item by id", skip(self, id))]
    pub fn get_by_id(&self, id: impl Into<ItemId>) -> Result<Option<CartItem>> {
        let id = id.into();
        let items = self.load()?;

        Ok(items.into_iter().find(|entry| entry.id == id))
    }

    /// Removes the first entry whose id equals `id` and persists.
    ///
    /// Returns the removed entry. On a miss the slot is left untouched (no
    /// save happens) and `None` is returned.
    #[tracing::instrument(name = "removing item from cart", skip(self, id))]
    pub fn remove(&self, id: impl Into<ItemId>) -> Result<Option<CartItem>> {
        let id = id.into();
        let mut items = self.load()?;

        let Some(index) = items.iter().position(|entry| entry.id == id) else {
            return Ok(None);
        };
        let removed = items.remove(index);

        self.set_items(items);
        self.save()?;

        Ok(Some(removed))
    }

    /// Deletes the slot entirely.
    ///
    /// Clearing is distinct from saving an empty cart: afterwards
    /// [`exists`](CartStore::exists) reports false. Clearing an absent slot
    /// is a no-op.
    #[tracing::instrument(name = "clearing cart slot", skip(self))]
    pub fn clear(&self) -> Result<()> {
        let Some(backend) = &self.backend else {
            tracing::debug!("no backend configured, skipping clear");
            return Ok(());
        };

        backend.remove_item(self.key.as_str()).map_err(|err| {
            tracing::error!(err = %err, "failed to delete cart slot");
            err
        })?;

        Ok(())
    }
}
