use color_print::cformat;

use crate::line::Line;
use crate::parser::Definition;

/// Listing of a parsed definition: opcode, source line number, then the line itself.
pub fn dump(path: &str, def: &Definition) -> String {
    let mut out = format!(
        "{}+------[{}]{}\n",
        "-".repeat(11),
        path,
        "-".repeat(45_usize.saturating_sub(path.len()))
    );

    for (idx, line) in def.lines() {
        // line_idx is 0-based, display as 1-based
        let line_num = idx + 1;
        let body = match line {
            Line::Blank => format!("{:11}| {:>4}:", "", line_num),
            Line::Comment(text) => {
                format!("{:11}| {:>4}: {}", "", line_num, cformat!("<dim>{}</>", text))
            }
            Line::Instruction(inst) => {
                let ident = format!("{:<width$}", inst.ident, width = def.maxlen());
                format!(
                    "[{:04X}]     | {:>4}:   {} {}",
                    inst.opcode,
                    line_num,
                    cformat!("<y>{}</>", ident),
                    cformat!("<g>\"{}\"</>", inst.name)
                )
            }
        };
        out.push_str(&body);
        out.push('\n');
    }

    out.push_str(&format!("{}+{}\n", "-".repeat(11), "-".repeat(53)));
    out
}
