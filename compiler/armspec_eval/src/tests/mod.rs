//! Evaluator tests that outgrew their modules.

mod operators_tests;
mod unary_operators_tests;
