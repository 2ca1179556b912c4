use opdef::{emit, Definition, EmitConfig, ParseMode};

struct Generated {
    // (identifier, opcode)
    consts: Vec<(String, usize)>,
    count: usize,
    // (identifier, display name)
    names: Vec<(String, String)>,
    // Declaration section: identifiers, comments and blanks as written
    section: Vec<String>,
}

fn generated(code: &str) -> Generated {
    let lines: Vec<&str> = code.lines().collect();
    let open = lines.iter().position(|l| l.starts_with("pub mod ")).unwrap();
    let count_at = lines
        .iter()
        .position(|l| l.starts_with("    pub const INSTRUCTION_NUMBER: usize = "))
        .unwrap();

    let mut consts = vec![];
    let mut section = vec![];
    for line in &lines[open + 1..count_at - 1] {
        if let Some(decl) = line.strip_prefix("    pub const ") {
            let (ident, rest) = decl.split_once(':').unwrap();
            let opcode = rest.trim_start_matches(" u8 = ").trim_end_matches(';');
            consts.push((ident.trim_end().to_string(), opcode.parse().unwrap()));
            section.push(ident.trim_end().to_string());
        } else {
            section.push(line.to_string());
        }
    }

    let count = lines[count_at]
        .trim_start_matches("    pub const INSTRUCTION_NUMBER: usize = ")
        .trim_end_matches(';')
        .parse()
        .unwrap();

    let names = lines
        .iter()
        .filter_map(|l| l.strip_prefix("        table["))
        .map(|assign| {
            let (ident, rest) = assign.split_once(" as usize]").unwrap();
            let name = rest.trim_start().trim_start_matches("= \"").trim_end_matches("\";");
            (ident.to_string(), name.to_string())
        })
        .collect();

    Generated {
        consts,
        count,
        names,
        section,
    }
}

fn eq_columns<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<usize> {
    let mut cols: Vec<usize> = lines
        .filter_map(|l| l.find(" = ").map(|at| l[..at].chars().count()))
        .collect();
    cols.dedup();
    cols
}

fn assert(text: &str) {
    let def = Definition::parse(text, ParseMode::Strict).unwrap();
    let code = emit(&def, &EmitConfig::default()).unwrap();
    println!("{}", code);

    // Idempotence
    let again = emit(&Definition::parse(text, ParseMode::Strict).unwrap(), &EmitConfig::default()).unwrap();
    assert_eq!(code, again);

    let out = generated(&code);
    let entries: Vec<(&str, &str)> = text
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with("//"))
        .map(|l| l.split_once(' ').unwrap())
        .collect();

    // Count
    assert_eq!(out.count, entries.len());

    // Opcodes are 0..N in file order
    let expect: Vec<(String, usize)> = entries
        .iter()
        .enumerate()
        .map(|(opcode, (ident, _))| (ident.to_string(), opcode))
        .collect();
    assert_eq!(out.consts, expect);

    // table[opcode] == display name
    let expect: Vec<(String, String)> = entries
        .iter()
        .map(|(ident, name)| (ident.to_string(), name.to_string()))
        .collect();
    assert_eq!(out.names, expect);

    // Order of comments, blanks and declarations
    let expect: Vec<String> = text
        .lines()
        .map(|l| match l.split_once(' ') {
            Some((ident, _)) if !l.starts_with("//") => ident.to_string(),
            _ => l.to_string(),
        })
        .collect();
    assert_eq!(out.section, expect);

    // Alignment
    let code_lines: Vec<&str> = code.lines().collect();
    let decls = code_lines.iter().copied().filter(|l| l.starts_with("    pub const ") && l.contains(": u8 = "));
    assert!(eq_columns(decls).len() <= 1);
    let assigns = code_lines.iter().copied().filter(|l| l.starts_with("        table["));
    assert!(eq_columns(assigns).len() <= 1);
}

macro_rules! case {
    ($name:ident, $code:expr) => {
        #[test]
        fn $name() {
            assert($code);
        }
    };
}

case!(empty, "");
case!(single, "OP_HALT halt");
case!(example, "ADD add\n\n// stack ops\nSUB sub");
case!(only_comments, "// nothing here\n\n// yet");
case!(leading_blank, "\n\nOP_NOP nop");
case!(trailing_newline, "OP_NOP nop\nOP_JUMP_IF_FALSE jump_if_false\n");
case!(
    groups,
    "// stack\nOP_POP pop\nOP_DUP dup\n\n// arithmetic\nOP_ADD add\nOP_SUB sub\nOP_MUL mul\n\n// control flow\nOP_JUMP jump\nOP_POP_JUMP_IF_TRUE pop_jump_if_true\nOP_RETURN return"
);
case!(comment_between_every_line, "// a\nA a\n// b\nB b\n// c\nC c");
case!(crlf, "OP_POP pop\r\n\r\n// c\r\nOP_DUP dup\r\n");
case!(non_ascii, "OP_ÄDD add\nOP_SUBB sub");
case!(non_ascii_longest, "OP_ÜBER_LÄNGE über\n// ü\nOP_X x");
