//! Schema → header text.
//!
//! A resolve pass turns the raw catalog into a borrowed structural model,
//! failing the whole run on any schema defect, then four phases emit the
//! unit in strict order: preamble, forward declarations, records, unions.
//! Emission is append-only over a `String`; nothing escapes on failure, so
//! no caller ever sees a partial unit.
//!
//! The output is deliberately unformatted (one declaration per line);
//! `clang-format` owns the visual style of the written file.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::{
    error::{Result, SchemaDefect},
    schema::{Family, Schema},
};

macro_rules! ln {
    ($f:ident, $($tt:tt)*) => (writeln!($f, $($tt)*).unwrap());
    ($f:ident) => (writeln!($f).unwrap());
}

macro_rules! ml {
    ($f:ident, $($tt:tt)*) => (indoc::writedoc!($f, $($tt)*).unwrap());
}

/// Unit-level constants: everything about the emitted header that is not
/// derived from the schema.
#[derive(Clone, Debug)]
pub struct EmitOptions {
    pub banner: String,
    /// Include-once guard token.
    pub guard: String,
    /// The base-definitions unit.
    pub base_include: String,
    /// The lexical-token unit.
    pub token_include: String,
    pub namespace: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            banner: "// Auto generated. DO NOT EDIT!".into(),
            guard: "LOX_EXPR_H".into(),
            base_include: "defs.h".into(),
            token_include: "token.h".into(),
            namespace: "lox".into(),
        }
    }
}

/// Generates the full compilation unit for `schema`.
///
/// Byte-identical output for an unchanged schema; any defect aborts the run
/// before a single output byte exists.
pub fn emit(schema: &Schema, options: &EmitOptions) -> Result<String> {
    let families = resolve(schema)?;

    let mut out = String::new();
    emit_preamble(&mut out, options);
    emit_forward_decls(&mut out, &families);
    emit_records(&mut out, &families);
    emit_unions(&mut out, &families);
    Ok(out)
}

#[derive(Debug)]
struct ResolvedFamily<'a> {
    name: &'a str,
    kinds: Vec<ResolvedKind<'a>>,
}

#[derive(Debug)]
struct ResolvedKind<'a> {
    name: &'a str,
    fields: Vec<Field<'a>>,
}

#[derive(Debug)]
struct Field<'a> {
    ty: &'a str,
    name: &'a str,
}

fn resolve(schema: &Schema) -> Result<Vec<ResolvedFamily<'_>>> {
    let mut families = Vec::new();
    for family in schema.families() {
        families.push(resolve_family(family)?);
    }
    Ok(families)
}

fn resolve_family(family: &Family) -> Result<ResolvedFamily<'_>> {
    if family.is_empty() {
        return Err(SchemaDefect::EmptyFamily {
            family: family.name().to_string(),
        }
        .into());
    }

    let mut kinds = Vec::with_capacity(family.len());
    for name in family.kinds() {
        let specs = family.fields(name)?;
        if specs.is_empty() {
            return Err(SchemaDefect::EmptyKind {
                family: family.name().to_string(),
                kind: name.to_string(),
            }
            .into());
        }

        let mut fields = Vec::with_capacity(specs.len());
        let mut seen = BTreeSet::new();
        for spec in specs {
            let field = split_field(family.name(), name, spec)?;
            if !seen.insert(field.name) {
                return Err(SchemaDefect::DuplicateField {
                    family: family.name().to_string(),
                    kind: name.to_string(),
                    name: field.name.to_string(),
                }
                .into());
            }
            fields.push(field);
        }
        kinds.push(ResolvedKind { name, fields });
    }

    Ok(ResolvedFamily {
        name: family.name(),
        kinds,
    })
}

/// Splits a `"<type> <name>"` spec on its first whitespace boundary.
///
/// The type token is taken whole, so a parametrized wrapper like
/// `copyable<expr*>` is never split further. Anything other than exactly
/// two tokens is a schema defect.
fn split_field<'a>(family: &str, kind: &str, spec: &'a str) -> Result<Field<'a>> {
    let mut tokens = spec.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(ty), Some(name), None) => Ok(Field { ty, name }),
        _ => Err(SchemaDefect::MalformedField {
            family: family.to_string(),
            kind: kind.to_string(),
            spec: spec.to_string(),
        }
        .into()),
    }
}

fn emit_preamble(out: &mut String, options: &EmitOptions) {
    ml!(
        out,
        "
        {banner}
        #ifndef {guard}
        #define {guard}

        #include \"{base}\"
        #include \"{token}\"

        namespace {namespace} {{
        ",
        banner = options.banner,
        guard = options.guard,
        base = options.base_include,
        token = options.token_include,
        namespace = options.namespace,
    );
}

/// Declares each family type that some record field refers to before the
/// family's own definition further down the unit.
fn emit_forward_decls(out: &mut String, families: &[ResolvedFamily<'_>]) {
    let mut any = false;
    for family in families {
        let referenced = families
            .iter()
            .flat_map(|f| f.kinds.iter())
            .flat_map(|kind| kind.fields.iter())
            .any(|field| references(field.ty, family.name));
        if referenced {
            ln!(out, "struct {};", family.name);
            any = true;
        }
    }
    if any {
        ln!(out);
    }
}

/// Iff `ty` mentions `name` as a whole identifier.
///
/// Boundary-aware so that `expr` is found inside `copyable<expr*>` but not
/// inside `expression`.
fn references(ty: &str, name: &str) -> bool {
    ty.split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .any(|ident| ident == name)
}

fn emit_records(out: &mut String, families: &[ResolvedFamily<'_>]) {
    for family in families {
        for kind in &family.kinds {
            ln!(out, "struct {} {{", kind.name);
            for field in &kind.fields {
                ln!(out, "{} {};", field.ty, field.name);
            }
            ln!(out, "}};");
            ln!(out);
        }
    }
}

/// One sum type per family: the empty state first, then every kind in
/// declaration order. Also closes the unit.
fn emit_unions(out: &mut String, families: &[ResolvedFamily<'_>]) {
    for family in families {
        let kinds: Vec<&str> = family.kinds.iter().map(|kind| kind.name).collect();
        ln!(
            out,
            "struct {} : public std::variant<std::monostate, {}> {{",
            family.name,
            Join(&kinds, ", ")
        );
        ln!(out, "using variant::variant;");
        ln!(out, "}};");
        ln!(out);
    }

    ln!(out, "}}");
    ln!(out);
    ln!(out, "#endif");
}

struct Join<'a, T>(&'a [T], &'a str);

impl<T: std::fmt::Display> std::fmt::Display for Join<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(self.1)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
