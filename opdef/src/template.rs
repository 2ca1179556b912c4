//! Fragments of the generated module.
//!
//! Every piece of output text comes from one of these functions. `pad` is the
//! run of spaces that brings an identifier up to the longest identifier's length.

use crate::config::EmitConfig;

const INDENT: &str = "    ";
const TABLE: &str = "table";

pub fn spaces(ident: &str, maxlen: usize) -> String {
    " ".repeat(maxlen.saturating_sub(ident.chars().count()))
}

/// Escape a display name for use in a string literal.
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "\\r")
}

/// Source comment as a plain line comment. `//!` is an inner doc comment,
/// which is not allowed after the first item of a module.
pub fn comment(text: &str) -> String {
    match text.strip_prefix("//!") {
        Some(rest) => format!("//{rest}"),
        None => text.to_string(),
    }
}

pub fn module_open(cfg: &EmitConfig) -> String {
    format!("pub mod {} {{", cfg.module)
}

pub fn module_close() -> String {
    "}".to_string()
}

pub fn opcode_const(cfg: &EmitConfig, ident: &str, pad: &str, opcode: usize) -> String {
    format!("{INDENT}pub const {ident}{pad}: {} = {opcode};", cfg.opcode_type)
}

pub fn count_const(cfg: &EmitConfig, count: usize) -> String {
    format!("{INDENT}pub const {}: usize = {count};", cfg.count_name)
}

pub fn table_open(cfg: &EmitConfig, empty: bool) -> String {
    let binding = if empty { "let" } else { "let mut" };
    format!(
        "{INDENT}pub static {table}: [&str; {count}] = {{\n\
         {INDENT}{INDENT}{binding} {TABLE} = [\"\"; {count}];",
        table = cfg.table_name,
        count = cfg.count_name,
    )
}

pub fn name_assign(ident: &str, pad: &str, name: &str) -> String {
    format!(
        "{INDENT}{INDENT}{TABLE}[{ident} as usize]{pad} = \"{}\";",
        escape(name)
    )
}

pub fn table_close() -> String {
    format!("{INDENT}{INDENT}{TABLE}\n{INDENT}}};")
}

pub fn accessor(cfg: &EmitConfig) -> String {
    format!(
        "{INDENT}pub fn {}(opcode: {}) -> &'static str {{\n\
         {INDENT}{INDENT}{}[opcode as usize]\n\
         {INDENT}}}",
        cfg.accessor_name, cfg.opcode_type, cfg.table_name
    )
}
