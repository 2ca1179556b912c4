use color_print::ceprintln;
use thiserror::Error;

use crate::config::OpcodeType;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed instruction: expected `<identifier> <display name>` separated by a single space")]
    Malformed,

    #[error("Missing display name for `{0}`")]
    MissingName(String),

    #[error("Re-defined identifier: `{0}`")]
    Redefined(String, usize),

    #[error("Too many instructions: {0} opcodes do not fit in `{1}`")]
    TooManyInstructions(usize, OpcodeType),

    #[error("Could not generate `{0}` due to {1} previous error(s)")]
    Aborted(String, usize),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to load config: {0}")]
    Config(String, #[source] serde_yaml::Error),
}

impl Error {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, lines: &[&str], line_idx: usize) {
        ceprintln!("<red,bold>error</>: {}", self);
        print_location(file, lines, line_idx);

        if let Error::Redefined(_, first) = self {
            ceprintln!("<green,bold>note</>: First defined here");
            print_location(file, lines, *first);
        }
    }
}

fn print_location(file: &str, lines: &[&str], line_idx: usize) {
    // line_idx is 0-based, display as 1-based
    let line_num = line_idx + 1;
    let line_content = lines.get(line_idx).copied().unwrap_or("");

    ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
    ceprintln!("      <blue>|</>");
    ceprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
    ceprintln!("      <blue>|</>");
}
