use std::fmt::{self, Display};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::Error;
use crate::store;

/// The identity of a [`CartItem`].
///
/// Ids are numeric or string-typed, matching whatever the caller's records
/// carry. Equality is strict: a numeric id never equals a string id, so `1`
/// and `"1"` address different items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(Number),
    Text(String),
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(id) => Display::fmt(id, f),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        ItemId::Number(id.into())
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Number(id.into())
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId::Number(id.into())
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId::Number(id.into())
    }
}

impl From<Number> for ItemId {
    fn from(id: Number) -> Self {
        ItemId::Number(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Text(id)
    }
}

impl TryFrom<Value> for ItemId {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Number(id) => Ok(ItemId::Number(id)),
            Value::String(id) => Ok(ItemId::Text(id)),
            _ => Err(Error::InvalidId),
        }
    }
}

/// A single entry of a [`Cart`](crate::Cart).
///
/// Only `id` is ever interpreted by this crate. Every other field rides along
/// in `fields` verbatim, so records round-trip through the store without loss
/// even when this crate has never heard of their shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The item's identity. Uniqueness is not enforced; see
    /// [`CartStore::update`](crate::CartStore::update) for how duplicates
    /// behave.
    pub id: ItemId,

    /// Caller-defined fields, carried untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CartItem {
    /// Creates an item that carries nothing but its id.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Attaches a caller-defined field, builder style.
    ///
    /// # Example
    ///
    /// ```rust
    /// use carts::CartItem;
    ///
    /// let item = CartItem::new(1)
    ///     .with_field("name", "espresso beans")
    ///     .with_field("qty", 2);
    ///
    /// assert_eq!(item.field("qty"), Some(&2.into()));
    /// ```
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Looks up a caller-defined field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Converts any serializable record with an `id` field into an item.
    ///
    /// The record must serialize to a JSON object whose `id` is a number or
    /// a string; the remaining fields are carried as-is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use carts::CartItem;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Product {
    ///     id: u32,
    ///     name: String,
    /// }
    ///
    /// let item = CartItem::from_record(&Product {
    ///     id: 7,
    ///     name: "paper filters".into(),
    /// })?;
    ///
    /// assert_eq!(item.id, 7.into());
    /// # Ok::<(), carts::Error>(())
    /// ```
    pub fn from_record<T>(record: &T) -> Result<Self, Error>
    where
        T: Serialize,
    {
        let value =
            serde_json::to_value(record).map_err(|e| store::Error::Encode(e.to_string()))?;

        let Value::Object(mut fields) = value else {
            return Err(Error::NotAnObject);
        };

        let id = fields.remove("id").ok_or(Error::MissingId)?;

        Ok(Self {
            id: ItemId::try_from(id)?,
            fields,
        })
    }

    /// Deserializes the item back into a typed record.
    pub fn to_record<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let value = serde_json::to_value(self).map_err(|e| store::Error::Encode(e.to_string()))?;
        let record =
            serde_json::from_value(value).map_err(|e| store::Error::Decode(e.to_string()))?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestProduct {
        id: u32,
        name: String,
        qty: u32,
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = r#"{"id":"SKU-9","name":"v60 filters","bundle":{"size":40}}"#;

        let item: CartItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, "SKU-9".into());
        assert_eq!(item.field("bundle"), Some(&json!({"size": 40})));

        let reencoded: CartItem = serde_json::from_str(&serde_json::to_string(&item).unwrap())
            .unwrap();
        assert_eq!(reencoded, item);
    }

    #[test]
    fn test_typed_record_conversion() {
        let product = TestProduct {
            id: 7,
            name: "paper filters".to_string(),
            qty: 3,
        };

        let item = CartItem::from_record(&product).unwrap();
        assert_eq!(item.id, 7.into());
        assert_eq!(item.field("qty"), Some(&json!(3)));

        let recovered: TestProduct = item.to_record().unwrap();
        assert_eq!(recovered, product);
    }

    #[test]
    fn test_from_record_rejects_bad_shapes() {
        assert!(matches!(
            CartItem::from_record(&vec![1, 2, 3]),
            Err(Error::NotAnObject)
        ));

        assert!(matches!(
            CartItem::from_record(&json!({"name": "no id here"})),
            Err(Error::MissingId)
        ));

        assert!(matches!(
            CartItem::from_record(&json!({"id": true})),
            Err(Error::InvalidId)
        ));
    }

    #[test]
    fn test_numeric_and_string_ids_are_distinct() {
        assert_ne!(ItemId::from(1), ItemId::from("1"));
        assert_eq!(ItemId::from(1u64), ItemId::from(1i32));
    }
}
