//! Per-node key/value storage.  The store never inspects the values it
//! holds; a stored [`Value::Null`] is just another value.

use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A dynamically-typed attribute value.
///
/// `Serialize`/`Deserialize` let embedding applications persist attribute
/// values with their own format; the store never serializes anything.
#[rustfmt::skip]
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            Self::Map(entries) => write!(
                f,
                "{{{}}}",
                entries.iter().map(|(k, v)| format!("{k:?}: {v}")).join(", ")
            ),
        }
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident $(as $cast:ty)?),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v $(as $cast)?)
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int,
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    f32 => Float as f64,
    f64 => Float,
    String => Str,
    Vec<Value> => List,
    BTreeMap<String, Value> => Map,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

/// An unordered mapping from attribute name to [`Value`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeStore {
    entries: HashMap<String, Value>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the attribute `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    #[inline]
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Get a copy of the attribute `name`, or `default` if it isn't set.
    pub fn get_or(&self, name: &str, default: impl Into<Value>) -> Value {
        match self.entries.get(name) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Remove the attribute `name`.  Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.entries.remove(name);
        self
    }

    /// Copy out every attribute.
    pub fn to_map(&self) -> HashMap<String, Value> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeStore
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut attrs = AttributeStore::new();
        assert_eq!(attrs.set("x", 1).get("x"), Some(&Value::Int(1)));
        assert_eq!(attrs.get_or("x", "d"), Value::Int(1));
        assert_eq!(attrs.get_or("y", "d"), Value::from("d"));
        assert_eq!(attrs.get("y"), None);
    }

    #[test]
    fn remove_restores_default() {
        let mut attrs = AttributeStore::new();
        attrs.set("x", 1).remove("x");
        assert!(!attrs.has("x"));
        assert_eq!(attrs.get_or("x", ()), Value::Null);
        assert_eq!(attrs.get_or("x", 42), Value::Int(42));
        // Removing again is fine:
        attrs.remove("x");
        assert!(attrs.is_empty());
    }

    #[test]
    fn overwrite_keeps_one_entry() {
        let mut attrs = AttributeStore::new();
        attrs.set("name", "a").set("name", "b");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("name").and_then(Value::as_str), Some("b"));
    }

    #[test]
    fn stored_null_is_present() {
        let mut attrs = AttributeStore::new();
        attrs.set("nothing", Value::Null);
        assert!(attrs.has("nothing"));
        assert_eq!(attrs.get_or("nothing", 5), Value::Null);
        let none: Option<i64> = None;
        attrs.set("maybe", none);
        assert!(attrs.get("maybe").is_some_and(Value::is_null));
    }

    #[test]
    fn to_map_is_a_copy() {
        let mut attrs: AttributeStore = [("a", 1), ("b", 2)].into_iter().collect();
        let mut copy = attrs.to_map();
        copy.insert("c".to_string(), Value::Int(3));
        copy.remove("a");
        assert!(attrs.has("a"));
        assert!(!attrs.has("c"));
        attrs.set("d", true);
        assert!(!copy.contains_key("d"));
    }

    #[test]
    fn values_can_be_embedded() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<Value>();
    }

    #[test]
    fn display() {
        let list = Value::List(vec![1.into(), "two".into(), Value::Null]);
        assert_eq!(list.to_string(), r#"[1, "two", null]"#);
        let map: BTreeMap<String, Value> = [
            ("k".to_string(), Value::Bool(true)),
        ].into_iter().collect();
        assert_eq!(Value::Map(map).to_string(), r#"{"k": true}"#);
    }
}
