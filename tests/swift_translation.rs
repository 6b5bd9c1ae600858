//! End-to-end tests: request → translate → render → Swift text.

use strand_codegen::request::{
    CodeGenerationRequest, ConcurrencyMarker, Dependency, DependencyItem, DependencyItemKind,
    MultiCaseName, ServiceDescriptor,
};
use strand_codegen::structure::{Declaration, RawDeclaration};
use strand_codegen::{AccessLevel, CodeGenError, ErrorCode, StubExpander};
use strand_codegen::{render, translate, translate_with};

fn make_request(
    dependencies: Vec<Dependency>,
    services: Vec<ServiceDescriptor>,
) -> CodeGenerationRequest {
    CodeGenerationRequest {
        header: "Some really exciting license header 2023.".to_owned(),
        dependencies,
        services,
    }
}

fn item(kind: DependencyItemKind, name: &str) -> Option<DependencyItem> {
    Some(DependencyItem {
        kind,
        name: name.to_owned(),
    })
}

fn assert_translation(request: &CodeGenerationRequest, expected: &str) {
    let file = translate(request, AccessLevel::Public, false, false).unwrap();
    assert_eq!(render(&file), expected);
}

#[test]
fn imports_cover_every_item_kind() {
    let dependencies = vec![
        Dependency::module("Foo"),
        Dependency {
            item: item(DependencyItemKind::TypeAlias, "Bar"),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::ValueType, "Baz"),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::ReferenceType, "Bac"),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::Enumeration, "Bap"),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::ProtocolLike, "Bat"),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::ConstantBinding, "Baq"),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::MutableBinding, "Bag"),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::FreeFunction, "Bak"),
            ..Dependency::module("Foo")
        },
    ];

    let expected = "\
/// Some really exciting license header 2023.
import StrandCore
import Foo
import typealias Foo.Bar
import struct Foo.Baz
import class Foo.Bac
import enum Foo.Bap
import protocol Foo.Bat
import let Foo.Baq
import var Foo.Bag
import func Foo.Bak
";
    assert_translation(&make_request(dependencies, vec![]), expected);
}

#[test]
fn preconcurrency_imports() {
    let dependencies = vec![
        Dependency {
            concurrency: Some(ConcurrencyMarker::Required),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::Enumeration, "Bar"),
            concurrency: Some(ConcurrencyMarker::Required),
            ..Dependency::module("Foo")
        },
        Dependency {
            concurrency: Some(ConcurrencyMarker::RequiredOnPlatforms(vec![
                "Deq".to_owned(),
                "Der".to_owned(),
            ])),
            ..Dependency::module("Baz")
        },
    ];

    let expected = "\
/// Some really exciting license header 2023.
import StrandCore
@preconcurrency import Foo
@preconcurrency import enum Foo.Bar
#if os(Deq) || os(Der)
@preconcurrency import Baz
#else
import Baz
#endif
";
    assert_translation(&make_request(dependencies, vec![]), expected);
}

#[test]
fn restricted_api_imports() {
    let dependencies = vec![
        Dependency {
            restricted_group: Some("Secret".to_owned()),
            ..Dependency::module("Foo")
        },
        Dependency {
            item: item(DependencyItemKind::Enumeration, "Bar"),
            restricted_group: Some("Secret".to_owned()),
            ..Dependency::module("Foo")
        },
    ];

    let expected = "\
/// Some really exciting license header 2023.
import StrandCore
@_spi(Secret) import Foo
@_spi(Secret) import enum Foo.Bar
";
    assert_translation(&make_request(dependencies, vec![]), expected);
}

#[test]
fn restricted_api_attribute_precedes_preconcurrency() {
    let dependencies = vec![Dependency {
        concurrency: Some(ConcurrencyMarker::Required),
        restricted_group: Some("Secret".to_owned()),
        ..Dependency::module("Foo")
    }];

    let expected = "\
/// Some really exciting license header 2023.
import StrandCore
@_spi(Secret) @preconcurrency import Foo
";
    assert_translation(&make_request(dependencies, vec![]), expected);
}

#[test]
fn restricted_api_applies_inside_platform_conditional() {
    let dependencies = vec![Dependency {
        concurrency: Some(ConcurrencyMarker::RequiredOnPlatforms(vec![
            "Deq".to_owned(),
            "Der".to_owned(),
        ])),
        restricted_group: Some("Secret".to_owned()),
        ..Dependency::module("Baz")
    }];

    let expected = "\
/// Some really exciting license header 2023.
import StrandCore
#if os(Deq) || os(Der)
@_spi(Secret) @preconcurrency import Baz
#else
@_spi(Secret) import Baz
#endif
";
    assert_translation(&make_request(dependencies, vec![]), expected);
}

#[test]
fn translation_and_rendering_are_deterministic() {
    let request = make_request(
        vec![
            Dependency {
                item: item(DependencyItemKind::ValueType, "Baz"),
                restricted_group: Some("Secret".to_owned()),
                ..Dependency::module("Foo")
            },
            Dependency {
                concurrency: Some(ConcurrencyMarker::RequiredOnPlatforms(vec![
                    "Deq".to_owned(),
                ])),
                ..Dependency::module("Bar")
            },
        ],
        vec![],
    );

    let first = translate(&request, AccessLevel::Public, false, false).unwrap();
    let second = translate(&request, AccessLevel::Public, false, false).unwrap();
    assert_eq!(first, second);
    assert_eq!(render(&first), render(&first));
    assert_eq!(render(&first), render(&second));
}

#[test]
fn validation_failure_aborts_translation() {
    let service = ServiceDescriptor {
        documentation: "Documentation for AService".to_owned(),
        name: MultiCaseName::new("AService", "AService", "aService"),
        namespace: MultiCaseName::empty(),
        methods: vec![],
    };
    let request = make_request(vec![], vec![service.clone(), service]);

    let err = translate(&request, AccessLevel::Public, true, true).unwrap_err();
    assert_eq!(
        err,
        CodeGenError::new(
            ErrorCode::NonUniqueServiceName,
            "Services must have unique descriptors. \
             AService is the descriptor of at least two different services."
        )
    );
}

/// Stands in for stub expansion: one marker declaration per service.
struct MarkerStubs;

impl StubExpander for MarkerStubs {
    fn expand(
        &self,
        service: &ServiceDescriptor,
        access_level: AccessLevel,
        emit_client: bool,
        emit_server: bool,
    ) -> Vec<Declaration> {
        let visibility = match access_level {
            AccessLevel::Internal => "internal",
            AccessLevel::Public => "public",
            AccessLevel::Package => "package",
        };
        vec![Declaration::Raw(RawDeclaration(format!(
            "{} enum {} {{}} // client: {}, server: {}",
            visibility, service.name.generated_upper_case, emit_client, emit_server
        )))]
    }
}

#[test]
fn service_declarations_follow_the_import_block() {
    let service = ServiceDescriptor {
        documentation: String::new(),
        name: MultiCaseName::new("AService", "AService", "aService"),
        namespace: MultiCaseName::empty(),
        methods: vec![],
    };
    let request = make_request(vec![Dependency::module("Foo")], vec![service]);

    let file = translate_with(&request, AccessLevel::Public, true, false, &MarkerStubs).unwrap();
    let expected = "\
/// Some really exciting license header 2023.
import StrandCore
import Foo

public enum AService {} // client: true, server: false
";
    assert_eq!(render(&file), expected);
}
