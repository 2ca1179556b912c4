mod config;
mod dump;
mod emit;
mod error;
mod line;
mod parser;
pub mod template;

pub use config::{EmitConfig, OpcodeType, ParseMode};
pub use dump::dump;
pub use emit::emit;
pub use error::Error;
pub use line::{Instruction, Line, COMMENT_MARKER};
pub use parser::{read_source, Definition};
