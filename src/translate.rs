//! Translation of a code generation request into the structure tree.
//!
//! The translator validates the request first and fails with the validator's
//! error untouched. On success it arranges the file: header, the fixed core
//! import, one shaped import per dependency in input order, then one
//! declaration group per service. The mechanical expansion of methods into
//! client and server stubs lives behind the [`StubExpander`] seam; this
//! module only threads the access level and emit flags through to it.

use crate::error::CodeGenError;
use crate::request::{CodeGenerationRequest, ConcurrencyMarker, Dependency, ServiceDescriptor};
use crate::structure::{
    Attribute, AttributedDeclaration, ConditionalBlock, Declaration, ImportDirective, ImportItem,
    OsPredicate, SourceFile,
};
use crate::validate::validate;

/// The module every generated file imports, before any dependency.
const CORE_MODULE: &str = "StrandCore";

/// Visibility keyword applied to generated top-level declarations.
/// Interpreted by stub expansion, never by the translator itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    Internal,
    Public,
    Package,
}

/// Produces the declaration group for one service.
///
/// Implementations expand method descriptors into client/server stub
/// declarations; the translator places whatever they return after the
/// import block, unmodified.
pub trait StubExpander {
    fn expand(
        &self,
        service: &ServiceDescriptor,
        access_level: AccessLevel,
        emit_client: bool,
        emit_server: bool,
    ) -> Vec<Declaration>;
}

/// Expander that emits no stub declarations, leaving only the header and
/// the import block.
pub struct NoStubs;

impl StubExpander for NoStubs {
    fn expand(
        &self,
        _service: &ServiceDescriptor,
        _access_level: AccessLevel,
        _emit_client: bool,
        _emit_server: bool,
    ) -> Vec<Declaration> {
        Vec::new()
    }
}

/// Translate a request into a source file tree, without stub expansion.
pub fn translate(
    request: &CodeGenerationRequest,
    access_level: AccessLevel,
    emit_client: bool,
    emit_server: bool,
) -> Result<SourceFile, CodeGenError> {
    translate_with(request, access_level, emit_client, emit_server, &NoStubs)
}

/// Translate a request, expanding per-service declarations through `stubs`.
pub fn translate_with(
    request: &CodeGenerationRequest,
    access_level: AccessLevel,
    emit_client: bool,
    emit_server: bool,
    stubs: &dyn StubExpander,
) -> Result<SourceFile, CodeGenError> {
    validate(request)?;

    tracing::debug!(
        services = request.services.len(),
        dependencies = request.dependencies.len(),
        "translating code generation request"
    );

    let mut declarations = Vec::with_capacity(1 + request.dependencies.len());
    declarations.push(Declaration::Import(ImportDirective {
        module: CORE_MODULE.to_owned(),
        item: None,
    }));
    for dependency in &request.dependencies {
        declarations.push(import_declaration(dependency));
    }
    for service in &request.services {
        declarations.extend(stubs.expand(service, access_level, emit_client, emit_server));
    }

    Ok(SourceFile {
        header: request.header.clone(),
        declarations,
    })
}

/// Shape one dependency into its import declaration.
///
/// Composition order is fixed: the base directive, then the restricted-API
/// attribute, then the pre-concurrency attribute. A platform-conditional
/// concurrency marker turns the line into an `#if os(...)` block whose
/// then-branch carries the attribute and whose else-branch does not; the
/// restricted-API attribute applies identically in both branches.
fn import_declaration(dependency: &Dependency) -> Declaration {
    let directive = ImportDirective {
        module: dependency.module.clone(),
        item: dependency.item.as_ref().map(|item| ImportItem {
            kind: item.kind,
            name: item.name.clone(),
        }),
    };

    match &dependency.concurrency {
        Some(ConcurrencyMarker::RequiredOnPlatforms(platforms)) => {
            Declaration::Guarded(ConditionalBlock {
                predicate: OsPredicate {
                    platforms: platforms.clone(),
                },
                then_branch: vec![attributed(
                    import_attributes(dependency, true),
                    Declaration::Import(directive.clone()),
                )],
                else_branch: vec![attributed(
                    import_attributes(dependency, false),
                    Declaration::Import(directive),
                )],
            })
        }
        Some(ConcurrencyMarker::Required) => attributed(
            import_attributes(dependency, true),
            Declaration::Import(directive),
        ),
        None => attributed(
            import_attributes(dependency, false),
            Declaration::Import(directive),
        ),
    }
}

fn import_attributes(dependency: &Dependency, preconcurrency: bool) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    if let Some(group) = &dependency.restricted_group {
        attributes.push(Attribute::with_argument("_spi", group.clone()));
    }
    if preconcurrency {
        attributes.push(Attribute::new("preconcurrency"));
    }
    attributes
}

fn attributed(attributes: Vec<Attribute>, declaration: Declaration) -> Declaration {
    if attributes.is_empty() {
        declaration
    } else {
        Declaration::Attributed(AttributedDeclaration {
            attributes,
            declaration: Box::new(declaration),
        })
    }
}
