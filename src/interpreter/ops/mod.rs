pub mod assign;
pub mod binary;
pub mod unary;

// No re-exports: every module here only adds `impl Interpreter` blocks
