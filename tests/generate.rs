use exprgen::{
    emit::{EmitOptions, emit},
    schema::Schema,
};

#[test]
fn lox_unit() {
    let unit = emit(&Schema::lox(), &EmitOptions::default()).unwrap();
    insta::assert_snapshot!(unit);
}

#[test]
fn regeneration_is_byte_identical() {
    let options = EmitOptions::default();
    let first = emit(&Schema::lox(), &options).unwrap();
    let second = emit(&Schema::lox(), &options).unwrap();
    assert_eq!(first, second);
}
