//! # comment-ast
//!
//! The tree representation of structured documentation comments: typed nodes for text,
//! commands, HTML tags and verbatim blocks, uniform child enumeration, one-shot binding of
//! `\param`/`\tparam` names to declaration positions, and a lazily computed summary of the
//! documented declaration.
//!
//! Parsing comments, the command table and name resolution belong to the embedding front
//! end; this crate only holds and exposes the tree. See the [ast] module for the model.
//!
//! ## Testing
//!
//! Tests assert on trees through the fluent API in [testing] rather than walking nodes by
//! hand.

pub mod ast;
pub mod config;
pub mod testing;
