//! The flat value sequence.
//!
//! A build is flattened into a sequence of [`Value`]s: integers and nested
//! lists of integers. This is the unit the container packs and the schema
//! walks.
//!
//! Deserialization is hand-written so nesting depth is bounded while the
//! container is still being read. A derived impl would recurse on
//! attacker-controlled input until the stack ran out.

use std::fmt;

use serde::de::{self, DeserializeSeed, EnumAccess, SeqAccess, Unexpected, VariantAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Deepest list nesting accepted when unpacking a container.
///
/// Build layouts nest three levels (slot tuple, rune list, rune triple).
pub const MAX_DEPTH: usize = 8;

const VARIANTS: &[&str] = &["Int", "List"];

/// One entry of the flat value sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    List(Vec<Value>),
}

impl Value {
    /// The integer, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::List(_) => None,
        }
    }

    /// The items, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::Int(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// How deeply lists nest inside this value (0 for an integer).
    pub fn depth(&self) -> usize {
        match self {
            Self::Int(_) => 0,
            Self::List(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(value) => serializer.serialize_newtype_variant("Value", 0, "Int", value),
            Self::List(items) => serializer.serialize_newtype_variant("Value", 1, "List", items),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ValueSeed { depth: 0 }.deserialize(deserializer)
    }
}

// ---------------------------------------------------------------------------
// Depth-bounded deserialization
// ---------------------------------------------------------------------------

enum Tag {
    Int,
    List,
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_identifier(TagVisitor)
    }
}

struct TagVisitor;

impl Visitor<'_> for TagVisitor {
    type Value = Tag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a value variant")
    }

    fn visit_u64<E: de::Error>(self, index: u64) -> Result<Tag, E> {
        match index {
            0 => Ok(Tag::Int),
            1 => Ok(Tag::List),
            _ => Err(E::invalid_value(Unexpected::Unsigned(index), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<Tag, E> {
        match name {
            "Int" => Ok(Tag::Int),
            "List" => Ok(Tag::List),
            _ => Err(E::unknown_variant(name, VARIANTS)),
        }
    }
}

/// Deserializes one [`Value`] found `depth` lists deep.
struct ValueSeed {
    depth: usize,
}

impl<'de> DeserializeSeed<'de> for ValueSeed {
    type Value = Value;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_enum("Value", VARIANTS, self)
    }
}

impl<'de> Visitor<'de> for ValueSeed {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a list of values")
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        let (tag, variant) = data.variant::<Tag>()?;
        match tag {
            Tag::Int => variant.newtype_variant::<i64>().map(Value::Int),
            Tag::List => {
                if self.depth >= MAX_DEPTH {
                    return Err(de::Error::custom(format_args!(
                        "values nested deeper than {MAX_DEPTH} levels"
                    )));
                }
                variant
                    .newtype_variant_seed(ListSeed { depth: self.depth + 1 })
                    .map(Value::List)
            }
        }
    }
}

/// Deserializes the items of a list whose items sit `depth` lists deep.
struct ListSeed {
    depth: usize,
}

impl<'de> DeserializeSeed<'de> for ListSeed {
    type Value = Vec<Value>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Vec<Value>, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for ListSeed {
    type Value = Vec<Value>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<Value>, A::Error> {
        // Length prefixes are untrusted; don't let one reserve megabytes.
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(64));
        while let Some(item) = seq.next_element_seed(ValueSeed { depth: self.depth })? {
            items.push(item);
        }
        Ok(items)
    }
}
