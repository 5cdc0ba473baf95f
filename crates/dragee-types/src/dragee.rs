use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// How a dragee reaches one of its dependencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    Constructor,
    Field,
    MethodParam,
    MethodReturn,
}

/// A tracked unit of the analyzed codebase (class, module, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dragee {
    /// Unique within one evaluation run.
    pub name: String,

    /// Classification tag, e.g. `ddd/aggregate`. Older producers emit `kind_of`.
    #[serde(alias = "kind_of")]
    pub profile: String,

    #[serde(default, skip_serializing_if = "DependsOn::is_empty")]
    pub depends_on: DependsOn,
}

impl Dragee {
    pub fn new(name: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile: profile.into(),
            depends_on: DependsOn::new(),
        }
    }

    /// Builder-style helper used by rule authors and tests.
    pub fn depending_on(mut self, name: impl Into<String>, kind: DependencyKind) -> Self {
        self.depends_on.insert(name, kind);
        self
    }
}

/// Dependency names of a dragee, kept in declaration order.
///
/// Serialized as a JSON object. Deserialization also accepts the older
/// array-of-objects shape and `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependsOn(Vec<(String, DependencyKind)>);

impl DependsOn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dependency. A name seen before keeps its position and takes the new kind.
    ///
    /// Lookups scan the list, so building a `DependsOn` of `n` names costs
    /// O(n²). A dragee declares a handful of dependencies.
    pub fn insert(&mut self, name: impl Into<String>, kind: DependencyKind) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = kind,
            None => self.0.push((name, kind)),
        }
    }

    pub fn get(&self, name: &str) -> Option<DependencyKind> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, k)| *k)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DependencyKind)> {
        self.0.iter().map(|(n, k)| (n.as_str(), *k))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, DependencyKind)> for DependsOn {
    fn from_iter<I: IntoIterator<Item = (S, DependencyKind)>>(iter: I) -> Self {
        let mut out = DependsOn::new();
        for (name, kind) in iter {
            out.insert(name, kind);
        }
        out
    }
}

impl Serialize for DependsOn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for DependsOn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DependsOnVisitor)
    }
}

struct DependsOnVisitor;

impl<'de> Visitor<'de> for DependsOnVisitor {
    type Value = DependsOn;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of dependency name to kind, or a list of such maps")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<DependsOn, E> {
        Ok(DependsOn::new())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<DependsOn, E> {
        Ok(DependsOn::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DependsOn, A::Error> {
        let mut out = DependsOn::new();
        while let Some((name, kind)) = map.next_entry::<String, DependencyKind>()? {
            out.insert(name, kind);
        }
        Ok(out)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<DependsOn, A::Error> {
        let mut out = DependsOn::new();
        while let Some(chunk) = seq.next_element::<DependsOn>()? {
            for (name, kind) in chunk.0 {
                out.insert(name, kind);
            }
        }
        Ok(out)
    }
}

impl JsonSchema for DependsOn {
    fn schema_name() -> Cow<'static, str> {
        "DependsOn".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        generator.subschema_for::<BTreeMap<String, DependencyKind>>()
    }
}
