//! The node catalog the generator runs over.
//!
//! A schema is program data, not a file format: it is built once at startup
//! with [`Schema::lox`] (or by hand in tests) and handed to the generator by
//! reference. Construction-time mistakes that only a programmer can make
//! (registering the same kind twice) panic; everything the generator
//! validates per run surfaces as [`crate::error::Error`] instead.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// One alternative of a family's tagged union: a name plus its field specs.
///
/// Each spec is a single `"<type> <name>"` string. It stays unsplit here;
/// splitting and validation happen during generation.
#[derive(Clone, Debug)]
struct Kind {
    name: String,
    fields: Vec<String>,
}

/// An ordered set of node kinds sharing one sum type.
#[derive(Clone, Debug)]
pub struct Family {
    name: String,
    /// Declaration order. Iteration and emission order for the whole unit.
    kinds: Vec<Kind>,
    /// Lookup index into `kinds`.
    by_name: BTreeMap<String, usize>,
}

impl Family {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kinds: Vec::new(),
            by_name: BTreeMap::new(),
        }
    }

    /// Appends a kind in declaration order.
    ///
    /// Panics if `name` is already registered in this family.
    pub fn kind(mut self, name: impl Into<String>, fields: &[&str]) -> Self {
        let name = name.into();
        let index = self.kinds.len();
        if self.by_name.insert(name.clone(), index).is_some() {
            panic!("duplicate kind in family {}: {name}", self.name);
        }
        self.kinds.push(Kind {
            name,
            fields: fields.iter().map(|spec| spec.to_string()).collect(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Kind names in declaration order. Stable across runs.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(|kind| kind.name.as_str())
    }

    /// The field specs of `kind`, in declaration order.
    pub fn fields(&self, kind: &str) -> Result<&[String]> {
        match self.by_name.get(kind) {
            Some(&index) => Ok(&self.kinds[index].fields),
            None => Err(Error::UnknownKind {
                family: self.name.clone(),
                kind: kind.to_string(),
            }),
        }
    }
}

/// The full catalog: node families in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    families: Vec<Family>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a family in declaration order.
    ///
    /// Panics if a family with the same name is already registered.
    pub fn family(mut self, family: Family) -> Self {
        if self.families.iter().any(|f| f.name == family.name) {
            panic!("duplicate family: {}", family.name);
        }
        self.families.push(family);
        self
    }

    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.iter()
    }

    /// The lox node catalog.
    ///
    /// Every self-referential field is held through `copyable<expr*>`, an
    /// owning indirection that deep-copies with its containing record.
    pub fn lox() -> Schema {
        Schema::new()
            .family(
                Family::new("expr")
                    .kind(
                        "binary",
                        &[
                            "copyable<expr*> left",
                            "token oprtor",
                            "copyable<expr*> right",
                        ],
                    )
                    .kind(
                        "ternary",
                        &[
                            "copyable<expr*> first",
                            "copyable<expr*> second",
                            "copyable<expr*> third",
                        ],
                    )
                    .kind("grouping", &["copyable<expr*> expression"])
                    .kind("literal", &["object value"])
                    .kind("unary", &["token oprtor", "copyable<expr*> right"])
                    .kind("variable", &["token name"])
                    .kind("assignment", &["token name", "copyable<expr*> value"]),
            )
            .family(
                Family::new("stmt")
                    .kind("expr_stmt", &["copyable<expr*> expression"])
                    .kind("print_stmt", &["copyable<expr*> expression"])
                    .kind(
                        "var_stmt",
                        &["token name", "copyable<expr*> expression"],
                    ),
            )
    }
}

#[cfg(test)]
mod tests;
