//! The code structure tree.
//!
//! A [`SourceFile`] is the translator's output: a header plus an ordered
//! list of declarations. The tree is language-agnostic in construction and
//! language-specific only in rendering. Trees are built once and never
//! mutated; the renderer walks them read-only.

use crate::request::DependencyItemKind;

/// One top-level construct in a generated source file.
///
/// The enum is closed on purpose: the renderer matches it exhaustively, so
/// adding a variant without a rendering rule fails to compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    Import(ImportDirective),
    Guarded(ConditionalBlock),
    Attributed(AttributedDeclaration),
    Raw(RawDeclaration),
}

/// `import Module` or `import <kind> Module.Item`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDirective {
    pub module: String,
    pub item: Option<ImportItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportItem {
    pub kind: DependencyItemKind,
    pub name: String,
}

/// An attribute applied to a declaration, e.g. `@preconcurrency` or
/// `@_spi(Secret)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub arguments: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(name: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: vec![argument.into()],
        }
    }
}

/// A declaration with one or more attributes prefixed, in the order given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributedDeclaration {
    pub attributes: Vec<Attribute>,
    pub declaration: Box<Declaration>,
}

/// A conditional-compilation block over two alternative declaration lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionalBlock {
    pub predicate: OsPredicate,
    pub then_branch: Vec<Declaration>,
    pub else_branch: Vec<Declaration>,
}

/// A disjunction of platform tests, rendered `os(a) || os(b) || ...` in the
/// order the platforms were supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OsPredicate {
    pub platforms: Vec<String>,
}

/// Verbatim declaration text, supplied by stub expansion. The renderer
/// emits it unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDeclaration(pub String);

/// The root of the structure tree for one generated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub header: String,
    pub declarations: Vec<Declaration>,
}
