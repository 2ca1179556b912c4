use crate::config::ParseMode;
use crate::error::Error;

pub const COMMENT_MARKER: &str = "//";

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Comment(String),
    Blank,
    Instruction(Instruction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Name of the generated constant
    pub ident: String,
    /// Name stored in the lookup table
    pub name: String,
    pub opcode: usize,
}

impl Line {
    /// Classify one line of a definition file. `opcode` is only used when the
    /// line turns out to be an instruction.
    pub fn classify(raw: &str, opcode: usize, mode: ParseMode) -> Result<Line, Error> {
        if raw.starts_with(COMMENT_MARKER) {
            return Ok(Line::Comment(raw.to_string()));
        }
        if raw.is_empty() {
            return Ok(Line::Blank);
        }

        let fields: Vec<&str> = match mode {
            ParseMode::Strict => raw.split(' ').collect(),
            ParseMode::Lenient => raw.split_whitespace().take(2).collect(),
        };

        match fields[..] {
            [ident, name] if !ident.is_empty() && !name.is_empty() => {
                Ok(Line::Instruction(Instruction {
                    ident: ident.to_string(),
                    name: name.to_string(),
                    opcode,
                }))
            }
            [ident] => Err(Error::MissingName(ident.to_string())),
            _ => Err(Error::Malformed),
        }
    }

    pub fn as_instruction(&self) -> Option<&Instruction> {
        match self {
            Line::Instruction(inst) => Some(inst),
            _ => None,
        }
    }
}
