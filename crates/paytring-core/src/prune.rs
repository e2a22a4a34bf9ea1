//! Presence rules for outgoing fields.
//!
//! A field is "present" when it carries a non-empty value: empty strings, `false`,
//! numeric zero, empty collections and `null` all count as "not provided" and are
//! never serialized. This means a legitimate zero amount or an explicit `false`
//! inside an optional fragment is dropped just like an unset field.

use crate::types::{AnyJson, Params};

/// Decides whether a value counts as provided.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for bool {
    fn is_present(&self) -> bool {
        *self
    }
}

macro_rules! impl_presence_for_int {
    ($($t:ty),*) => {
        $(
            impl Presence for $t {
                fn is_present(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_presence_for_int!(u8, u16, u32, u64, i32, i64);

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for Params {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for AnyJson {
    fn is_present(&self) -> bool {
        match self {
            AnyJson::Null => false,
            AnyJson::Bool(b) => *b,
            AnyJson::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            AnyJson::String(s) => !s.is_empty(),
            AnyJson::Array(items) => !items.is_empty(),
            AnyJson::Object(map) => !map.is_empty(),
        }
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// Inserts `value` under `key` only if it is present.
///
/// Returns whether the value was inserted.
pub fn include_if_present<V>(container: &mut Params, key: &str, value: V) -> bool
where
    V: Presence + Into<AnyJson>,
{
    if value.is_present() {
        container.insert(key.to_string(), value.into());
        true
    } else {
        false
    }
}

/// Removes every non-present field, recursing into nested objects.
///
/// Nested objects left empty are removed. Object elements of arrays are pruned
/// the same way and dropped when empty; an array left empty is removed.
/// Pruning an already pruned map returns it unchanged.
pub fn prune(params: Params) -> Params {
    params
        .into_iter()
        .filter_map(|(key, value)| prune_value(value).map(|value| (key, value)))
        .collect()
}

fn prune_value(value: AnyJson) -> Option<AnyJson> {
    match value {
        AnyJson::Object(map) => {
            let map = prune(map);
            map.is_present().then_some(AnyJson::Object(map))
        }
        AnyJson::Array(items) => {
            let items: Vec<AnyJson> = items
                .into_iter()
                .filter_map(|item| match item {
                    AnyJson::Object(_) => prune_value(item),
                    other => Some(other),
                })
                .collect();
            items.is_present().then_some(AnyJson::Array(items))
        }
        other => other.is_present().then_some(other),
    }
}
