//! The language-agnostic input model for code generation.
//!
//! A [`CodeGenerationRequest`] is produced by an upstream IDL parser and
//! describes services, methods and module dependencies without committing to
//! any target-language spelling. Everything here is plain owned data:
//! constructed once by the parser, then read by the validator and the
//! translator, never mutated.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// An identifier in the three spellings code generation cares about.
///
/// `base` is the author-facing spelling from the IDL. The two generated
/// variants are what actually lands in source: the upper case spelling in
/// type position, the lower case spelling in value and call position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MultiCaseName {
    pub base: String,
    pub generated_upper_case: String,
    pub generated_lower_case: String,
}

impl MultiCaseName {
    pub fn new(
        base: impl Into<String>,
        generated_upper_case: impl Into<String>,
        generated_lower_case: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            generated_upper_case: generated_upper_case.into(),
            generated_lower_case: generated_lower_case.into(),
        }
    }

    /// Derive the generated spellings from `base` using the default
    /// UpperCamelCase / lowerCamelCase conventions.
    pub fn derived(base: &str) -> Self {
        Self {
            base: base.to_owned(),
            generated_upper_case: base.to_upper_camel_case(),
            generated_lower_case: base.to_lower_camel_case(),
        }
    }

    /// The empty name, used as the namespace of top-level services.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
            && self.generated_upper_case.is_empty()
            && self.generated_lower_case.is_empty()
    }
}

/// A service: a named, ordered group of methods inside an optional namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub documentation: String,
    pub name: MultiCaseName,
    /// Empty when the service is declared at the top level.
    pub namespace: MultiCaseName,
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// The namespace-qualified key used for duplicate-descriptor detection.
    pub fn qualified_base(&self) -> String {
        if self.namespace.is_empty() {
            self.name.base.clone()
        } else {
            format!("{}.{}", self.namespace.base, self.name.base)
        }
    }
}

/// One method of a service. Names are scoped to the owning service; the
/// streaming flags and type names are consumed by stub expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub documentation: String,
    pub name: MultiCaseName,
    pub is_input_streaming: bool,
    pub is_output_streaming: bool,
    pub input_type: String,
    pub output_type: String,
}

/// What kind of declaration an itemized import pulls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencyItemKind {
    TypeAlias,
    ValueType,
    ReferenceType,
    Enumeration,
    ProtocolLike,
    ConstantBinding,
    MutableBinding,
    FreeFunction,
}

/// A single declaration imported from a module, rather than the whole module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencyItem {
    pub kind: DependencyItemKind,
    pub name: String,
}

/// Whether an imported module predates strict concurrency checking and needs
/// the pre-concurrency escape hatch, unconditionally or only on certain
/// platforms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConcurrencyMarker {
    Required,
    RequiredOnPlatforms(Vec<String>),
}

/// A module the generated source must import, after the fixed core import.
/// Dependencies render in the order supplied and are never deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dependency {
    pub module: String,
    pub item: Option<DependencyItem>,
    pub concurrency: Option<ConcurrencyMarker>,
    /// Restricted-API group the import is scoped to, if any.
    pub restricted_group: Option<String>,
}

impl Dependency {
    /// A plain whole-module dependency with no attributes.
    pub fn module(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }
}

/// Everything the generator needs to produce one source file: free-form
/// header text, ordered dependencies and ordered services.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeGenerationRequest {
    pub header: String,
    pub dependencies: Vec<Dependency>,
    pub services: Vec<ServiceDescriptor>,
}
