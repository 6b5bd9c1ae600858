#![deny(unsafe_code)]

//! Swift source generation for strand RPC service definitions.
//!
//! This crate is the backend of the strand binding generator: it consumes a
//! language-agnostic [`CodeGenerationRequest`] (services, methods, module
//! dependencies) built by the upstream IDL parser and produces
//! deterministic Swift source text.
//!
//! # The Pipeline
//!
//! ```text
//! CodeGenerationRequest → validate → translate → SourceFile tree → render → .swift text
//! ```
//!
//! Validation enforces the global naming invariants (services, namespaces
//! and methods all become identifiers in the generated file, so collisions
//! have to be caught up front); translation arranges the header, import
//! block and per-service declarations into a structure tree; rendering
//! serializes that tree into literal text. Every stage is a pure function
//! over immutable data, so the same request always produces byte-identical
//! output — generated files are expected to be diff-stable across runs.
//!
//! # Usage
//!
//! ```
//! use strand_codegen::request::{CodeGenerationRequest, Dependency};
//! use strand_codegen::{AccessLevel, render, translate};
//!
//! let request = CodeGenerationRequest {
//!     header: "Generated by strand. Do not edit.".to_owned(),
//!     dependencies: vec![Dependency::module("Foundation")],
//!     services: vec![],
//! };
//!
//! let file = translate(&request, AccessLevel::Public, true, true).unwrap();
//! let swift = render(&file);
//! assert!(swift.starts_with("/// Generated by strand. Do not edit.\n"));
//! ```
//!
//! [`CodeGenerationRequest`]: request::CodeGenerationRequest

pub mod code_writer;
pub mod error;
pub mod render;
pub mod request;
pub mod structure;
pub mod translate;
pub mod validate;

pub use error::{CodeGenError, ErrorCode};
pub use render::render;
pub use translate::{AccessLevel, NoStubs, StubExpander, translate, translate_with};
pub use validate::validate;
