//! Parser tests.
//!
//! - `parser`: statement and expression forms
//! - `recovery`: diagnostics, resynchronization and the error limit
