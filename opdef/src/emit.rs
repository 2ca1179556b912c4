use crate::config::EmitConfig;
use crate::error::Error;
use crate::line::Line;
use crate::parser::Definition;
use crate::template;

/// Render the generated module for a parsed definition.
///
/// Constant declarations follow the order of the source lines, with comments and
/// blank lines reproduced in place. Name assignments follow the same order.
pub fn emit(def: &Definition, cfg: &EmitConfig) -> Result<String, Error> {
    let count = def.count();
    if count > cfg.opcode_type.capacity() {
        return Err(Error::TooManyInstructions(count, cfg.opcode_type));
    }

    let maxlen = def.maxlen();
    let mut decls = vec![];
    let mut names = vec![];
    for (_, line) in def.lines() {
        match line {
            Line::Comment(text) => decls.push(template::comment(text)),
            Line::Blank => decls.push(String::new()),
            Line::Instruction(inst) => {
                let pad = template::spaces(&inst.ident, maxlen);
                decls.push(template::opcode_const(cfg, &inst.ident, &pad, inst.opcode));
                names.push(template::name_assign(&inst.ident, &pad, &inst.name));
            }
        }
    }

    let mut body = vec![template::module_open(cfg)];
    body.extend(decls);
    body.push(String::new());
    body.push(template::count_const(cfg, count));
    body.push(String::new());
    body.push(template::table_open(cfg, names.is_empty()));
    body.extend(names);
    body.push(template::table_close());
    body.push(String::new());
    body.push(template::accessor(cfg));
    body.push(template::module_close());

    Ok(format!("{}{}\n", cfg.header, body.join("\n")))
}
