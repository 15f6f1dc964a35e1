//! Deterministic elementary functions for an embedded scripting runtime.
//!
//! [`kernel`] holds the numerical algorithms. [`library`] binds them, along
//! with a few host pass-throughs, into the math library a script calls.
//! [`script`] parses and evaluates call expressions against that library.

pub mod format;
pub mod kernel;
pub mod library;
pub mod opts;
pub mod script;
pub mod utils;
