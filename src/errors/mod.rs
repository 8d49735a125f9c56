//! Diagnostics reported while evaluating a line.
//!
//! Every diagnostic is non-fatal: it abandons the current statement and the
//! parser resumes at the next statement boundary. This module defines:
//!
//! - The error structure with the byte position of the offending token
//! - The diagnostic kinds and their fixed messages
//! - Error names and suggestions used for the detailed report

pub mod errors;

#[cfg(test)]
mod tests;
