use super::{Family, Schema};
use crate::error::Error;

#[test]
fn kinds_iterate_in_declaration_order() {
    let family = Family::new("expr")
        .kind("literal", &["object value"])
        .kind("unary", &["token oprtor", "expr right"])
        .kind("binary", &["expr left", "token oprtor", "expr right"]);

    let kinds: Vec<_> = family.kinds().collect();
    assert_eq!(kinds, ["literal", "unary", "binary"]);
}

#[test]
fn fields_preserve_declaration_order() {
    let family = Family::new("expr").kind("unary", &["token oprtor", "copyable<expr*> right"]);

    let fields: Vec<_> = family
        .fields("unary")
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(fields, ["token oprtor", "copyable<expr*> right"]);
}

#[test]
fn unknown_kind_lookup_fails() {
    let family = Family::new("expr").kind("literal", &["object value"]);

    let err = family.fields("call").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownKind {
            family: "expr".into(),
            kind: "call".into(),
        }
    );
}

#[test]
#[should_panic(expected = "duplicate kind")]
fn duplicate_kind_panics() {
    let _ = Family::new("expr")
        .kind("literal", &["object value"])
        .kind("literal", &["object value"]);
}

#[test]
#[should_panic(expected = "duplicate family")]
fn duplicate_family_panics() {
    let _ = Schema::new()
        .family(Family::new("expr").kind("literal", &["object value"]))
        .family(Family::new("expr").kind("unary", &["token oprtor", "expr right"]));
}

#[test]
fn lox_catalog_shape() {
    let schema = Schema::lox();

    let families: Vec<_> = schema.families().map(Family::name).collect();
    assert_eq!(families, ["expr", "stmt"]);

    let expr = schema.families().next().unwrap();
    let kinds: Vec<_> = expr.kinds().collect();
    assert_eq!(
        kinds,
        [
            "binary",
            "ternary",
            "grouping",
            "literal",
            "unary",
            "variable",
            "assignment",
        ]
    );

    let stmt = schema.families().nth(1).unwrap();
    let kinds: Vec<_> = stmt.kinds().collect();
    assert_eq!(kinds, ["expr_stmt", "print_stmt", "var_stmt"]);
    assert!(!stmt.is_empty());
    assert_eq!(stmt.len(), 3);
}

#[test]
fn self_references_use_the_copyable_wrapper() {
    let schema = Schema::lox();
    for family in schema.families() {
        for kind in family.kinds() {
            for spec in family.fields(kind).unwrap() {
                let ty = spec.split_whitespace().next().unwrap();
                if ty.contains("expr") {
                    assert_eq!(ty, "copyable<expr*>", "in {}.{kind}", family.name());
                }
            }
        }
    }
}
