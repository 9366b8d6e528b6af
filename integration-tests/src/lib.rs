//! Integration tests for the minwidth workspace.
//!
//! Real formula strings are exercised through the solver and the request
//! layer together; see the `tests/` directory.
