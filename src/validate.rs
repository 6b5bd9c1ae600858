//! Naming-uniqueness validation of a code generation request.
//!
//! Services and namespaces all become named containers in the generated
//! source, so the graph has to be checked for collisions before anything is
//! emitted. Checks run in a fixed order and the first violation aborts the
//! whole translation: no partial output, no recovery.
//!
//! Duplicate detection works on values, never on object identity — the same
//! descriptor appearing twice in the input is caught exactly like two
//! freshly built equal descriptors.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{CodeGenError, ErrorCode};
use crate::request::{CodeGenerationRequest, ServiceDescriptor};

/// Check the naming invariants of a request.
///
/// Returns the first violation found, in this order: duplicate service
/// descriptors, generated upper case collisions within a namespace,
/// top-level services colliding with namespaces, then per-service method
/// collisions (base, upper case, lower case).
pub fn validate(request: &CodeGenerationRequest) -> Result<(), CodeGenError> {
    check_service_descriptors_are_unique(&request.services)?;
    check_generated_upper_names_are_unique(&request.services)?;
    check_top_level_services_against_namespaces(&request.services)?;
    for service in &request.services {
        check_method_names_are_unique(service)?;
    }
    Ok(())
}

/// No two services may be indistinguishable once generated: same qualified
/// key and same generated spellings.
fn check_service_descriptors_are_unique(
    services: &[ServiceDescriptor],
) -> Result<(), CodeGenError> {
    let mut seen: HashMap<String, Vec<&ServiceDescriptor>> = HashMap::new();
    for service in services {
        let qualified = service.qualified_base();
        let earlier = seen.entry(qualified.clone()).or_default();
        if earlier
            .iter()
            .any(|other| other.name == service.name && other.namespace == service.namespace)
        {
            return Err(CodeGenError::new(
                ErrorCode::NonUniqueServiceName,
                format!(
                    "Services must have unique descriptors. \
                     {qualified} is the descriptor of at least two different services."
                ),
            ));
        }
        earlier.push(service);
    }
    Ok(())
}

/// Within one namespace, services with different base names must not share a
/// generated upper case name. Grouping preserves input order so the first
/// collision in input order is the one reported.
fn check_generated_upper_names_are_unique(
    services: &[ServiceDescriptor],
) -> Result<(), CodeGenError> {
    let mut namespaces: IndexMap<&str, IndexMap<&str, &str>> = IndexMap::new();
    for service in services {
        let group = namespaces
            .entry(service.namespace.base.as_str())
            .or_default();
        match group.entry(service.name.generated_upper_case.as_str()) {
            Entry::Occupied(entry) if *entry.get() != service.name.base.as_str() => {
                return Err(CodeGenError::new(
                    ErrorCode::NonUniqueServiceName,
                    format!(
                        "Services within the same namespace must have unique \
                         generated upper case names. \
                         {upper} is used as a generated upper case name for \
                         multiple services in the {namespace} namespace.",
                        upper = service.name.generated_upper_case,
                        namespace = service.namespace.base,
                    ),
                ));
            }
            Entry::Occupied(_) => {}
            Entry::Vacant(entry) => {
                entry.insert(service.name.base.as_str());
            }
        }
    }
    Ok(())
}

/// A top-level service and a namespace both become a named container, so
/// their generated upper case names must not collide.
fn check_top_level_services_against_namespaces(
    services: &[ServiceDescriptor],
) -> Result<(), CodeGenError> {
    let namespace_uppers: HashSet<&str> = services
        .iter()
        .filter(|service| !service.namespace.is_empty())
        .map(|service| service.namespace.generated_upper_case.as_str())
        .collect();

    for service in services.iter().filter(|s| s.namespace.is_empty()) {
        let upper = service.name.generated_upper_case.as_str();
        if namespace_uppers.contains(upper) {
            return Err(CodeGenError::new(
                ErrorCode::NonUniqueServiceName,
                format!(
                    "Services with no namespace must not have the same generated \
                     upper case names as the namespaces. \
                     {upper} is used as a generated upper case name for a service \
                     with no namespace and a namespace."
                ),
            ));
        }
    }
    Ok(())
}

/// Methods are scoped to their service: bases, upper case names and lower
/// case names must each be unique within one method list.
fn check_method_names_are_unique(service: &ServiceDescriptor) -> Result<(), CodeGenError> {
    let service_name = &service.name.base;

    let mut bases = HashSet::new();
    for method in &service.methods {
        if !bases.insert(method.name.base.as_str()) {
            return Err(CodeGenError::new(
                ErrorCode::NonUniqueMethodName,
                format!(
                    "Methods of a service must have unique base names. \
                     {base} is used as a base name for multiple methods \
                     of the {service_name} service.",
                    base = method.name.base,
                ),
            ));
        }
    }

    let mut uppers = HashSet::new();
    for method in &service.methods {
        if !uppers.insert(method.name.generated_upper_case.as_str()) {
            return Err(CodeGenError::new(
                ErrorCode::NonUniqueMethodName,
                format!(
                    "Methods of a service must have unique generated upper case names. \
                     {upper} is used as a generated upper case name for multiple \
                     methods of the {service_name} service.",
                    upper = method.name.generated_upper_case,
                ),
            ));
        }
    }

    // The lower case spelling is the call-site signature, hence the
    // different wording.
    let mut lowers = HashSet::new();
    for method in &service.methods {
        if !lowers.insert(method.name.generated_lower_case.as_str()) {
            return Err(CodeGenError::new(
                ErrorCode::NonUniqueMethodName,
                format!(
                    "Methods of a service must have unique lower case names. \
                     {lower} is used as a signature name for multiple methods \
                     of the {service_name} service.",
                    lower = method.name.generated_lower_case,
                ),
            ));
        }
    }

    Ok(())
}
