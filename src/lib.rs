// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

//! This crate provides a parser and chart renderer for LIDRUP incremental
//! proof logs as produced by incremental SAT solvers.
//!
//! ```
//! # fn main() -> lidrupviz::error::Result<()> {
//! let mut model = lidrupviz::Model::default();
//! let input = br#"
//! i 1 2 0
//! q 3 -4 0
//! s SATISFIABLE
//! m 3 -4 0
//! "#;
//! model.process(None, &input[1..])?;
//! assert_eq!(model.queries().len(), 1);
//! assert_eq!(model.queries()[0].asserted_vars, vec![3, -4]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Error management.
pub mod error;
/// Tokenization of LIDRUP logs.
mod lexer;
/// Main analyzer module.
pub mod model;
/// Parsing of LIDRUP logs.
pub mod parser;
/// Derived statistics and chart rendering.
pub mod report;
/// Data structures found in LIDRUP logs.
pub mod syntax;

pub use error::{Error, Result};
pub use model::{Model, ModelConfig};
pub use parser::ParserConfig;
