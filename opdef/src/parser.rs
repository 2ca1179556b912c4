use bimap::BiMap;

use crate::config::ParseMode;
use crate::error::Error;
use crate::line::{Instruction, Line};

/// Parsed instruction definition file.
///
/// Lines are kept in file order together with their 0-based line index. Opcodes
/// are handed out in that order, starting at 0, and only instruction lines take one.
#[derive(Debug, Clone, Default)]
pub struct Definition {
    lines: Vec<(usize, Line)>,
    maxlen: usize,
    idents: BiMap<String, usize>,
}

impl Definition {
    pub fn parse(text: &str, mode: ParseMode) -> Result<Definition, Vec<(usize, Error)>> {
        let (def, errors) = text.lines().enumerate().fold(
            (Definition::default(), Vec::new()),
            |(mut def, mut errors), (idx, raw)| {
                let pushed = Line::classify(raw, def.count(), mode).and_then(|line| def.push(idx, line));
                if let Err(err) = pushed {
                    errors.push((idx, err));
                }
                (def, errors)
            },
        );

        if errors.is_empty() {
            Ok(def)
        } else {
            Err(errors)
        }
    }

    fn push(&mut self, idx: usize, line: Line) -> Result<(), Error> {
        if let Line::Instruction(inst) = &line {
            if let Err((ident, _)) = self.idents.insert_no_overwrite(inst.ident.clone(), inst.opcode) {
                let first = self
                    .idents
                    .get_by_left(&ident)
                    .and_then(|&opcode| self.line_of(opcode))
                    .unwrap_or(idx);
                return Err(Error::Redefined(ident, first));
            }
            self.maxlen = self.maxlen.max(inst.ident.chars().count());
        }
        self.lines.push((idx, line));
        Ok(())
    }

    /// Lines with their 0-based index in the source file
    pub fn lines(&self) -> &[(usize, Line)] {
        &self.lines
    }

    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.lines.iter().filter_map(|(_, line)| line.as_instruction())
    }

    /// Length of the longest identifier
    pub fn maxlen(&self) -> usize {
        self.maxlen
    }

    /// Number of instructions, which is also the next free opcode
    pub fn count(&self) -> usize {
        self.idents.len()
    }

    pub fn opcode(&self, ident: &str) -> Option<usize> {
        self.idents.get_by_left(ident).copied()
    }

    pub fn identifier(&self, opcode: usize) -> Option<&str> {
        self.idents.get_by_right(&opcode).map(|s| s.as_str())
    }

    fn line_of(&self, opcode: usize) -> Option<usize> {
        self.lines
            .iter()
            .find(|(_, line)| line.as_instruction().map(|i| i.opcode) == Some(opcode))
            .map(|(idx, _)| *idx)
    }
}

/// Read a whole definition file.
pub fn read_source(path: &str) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| Error::FileOpen(path.to_string(), e))
}
