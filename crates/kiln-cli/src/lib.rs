//! Kiln command-line front end.
//!
//! The binary glues the pieces together in one pass: parse the invocation
//! tokens into [`options::InvocationOptions`], select a [`commands::Command`],
//! and execute it against a [`runner::ToolRunner`]. Everything reusable
//! lives in `kiln-core`; this crate only owns the invocation grammar, the
//! command surface, and the process exit code.

pub mod commands;
pub mod error;
pub mod options;
pub mod parser;
pub mod runner;
