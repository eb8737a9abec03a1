//! Generates the AST type-definition header consumed by the lox interpreter.

pub mod error;

pub mod schema;

pub mod emit;
