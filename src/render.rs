//! Rendering of the code structure tree into literal Swift source text.
//!
//! One fixed style, one pass, no reformatting: the same tree always renders
//! to the same text. This is where the tree stops being language-agnostic —
//! item kinds become Swift import keywords and predicates become `#if os`
//! lines.

use std::fmt;

use crate::code_writer::CodeWriter;
use crate::request::DependencyItemKind;
use crate::{cw_write, cw_writeln};
use crate::structure::{
    Attribute, ConditionalBlock, Declaration, ImportDirective, OsPredicate, SourceFile,
};

/// Render a source file into Swift text.
///
/// Pure function of the tree; the output always ends with a single newline.
pub fn render(file: &SourceFile) -> String {
    let mut out = String::new();
    let mut w = CodeWriter::with_indent_spaces(&mut out, 4);
    // Writing into a String cannot fail.
    render_file(&mut w, file).unwrap();
    out
}

fn render_file(w: &mut CodeWriter<&mut String>, file: &SourceFile) -> fmt::Result {
    if !file.header.is_empty() {
        w.doc_comment("///", &file.header)?;
    }
    for declaration in &file.declarations {
        render_declaration(w, declaration)?;
    }
    Ok(())
}

fn render_declaration(w: &mut CodeWriter<&mut String>, declaration: &Declaration) -> fmt::Result {
    match declaration {
        Declaration::Import(import) => render_import(w, import),
        Declaration::Guarded(block) => render_conditional(w, block),
        Declaration::Attributed(attributed) => {
            for attribute in &attributed.attributes {
                render_attribute(w, attribute)?;
                w.write(" ")?;
            }
            render_declaration(w, &attributed.declaration)
        }
        Declaration::Raw(raw) => {
            w.blank_line()?;
            for line in raw.0.lines() {
                w.writeln(line)?;
            }
            Ok(())
        }
    }
}

fn render_import(w: &mut CodeWriter<&mut String>, import: &ImportDirective) -> fmt::Result {
    match &import.item {
        None => cw_writeln!(w, "import {}", import.module),
        Some(item) => cw_writeln!(
            w,
            "import {} {}.{}",
            kind_keyword(item.kind),
            import.module,
            item.name
        ),
    }
}

fn render_attribute(w: &mut CodeWriter<&mut String>, attribute: &Attribute) -> fmt::Result {
    if attribute.arguments.is_empty() {
        cw_write!(w, "@{}", attribute.name)
    } else {
        cw_write!(w, "@{}({})", attribute.name, attribute.arguments.join(", "))
    }
}

fn render_conditional(w: &mut CodeWriter<&mut String>, block: &ConditionalBlock) -> fmt::Result {
    w.write("#if ")?;
    render_predicate(w, &block.predicate)?;
    w.writeln("")?;
    for declaration in &block.then_branch {
        render_declaration(w, declaration)?;
    }
    if !block.else_branch.is_empty() {
        w.writeln("#else")?;
        for declaration in &block.else_branch {
            render_declaration(w, declaration)?;
        }
    }
    w.writeln("#endif")
}

fn render_predicate(w: &mut CodeWriter<&mut String>, predicate: &OsPredicate) -> fmt::Result {
    w.write_separated(&predicate.platforms, " || ", |w, platform| {
        cw_write!(w, "os({})", platform)
    })
}

/// The Swift import keyword for an itemized dependency kind.
fn kind_keyword(kind: DependencyItemKind) -> &'static str {
    match kind {
        DependencyItemKind::TypeAlias => "typealias",
        DependencyItemKind::ValueType => "struct",
        DependencyItemKind::ReferenceType => "class",
        DependencyItemKind::Enumeration => "enum",
        DependencyItemKind::ProtocolLike => "protocol",
        DependencyItemKind::ConstantBinding => "let",
        DependencyItemKind::MutableBinding => "var",
        DependencyItemKind::FreeFunction => "func",
    }
}
