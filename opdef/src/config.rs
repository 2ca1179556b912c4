use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use strum::{Display, EnumString};

use crate::error::Error;

/// How instruction lines that are not exactly `<identifier> <display name>` are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Reject the line.
    #[default]
    Strict,
    /// Keep the first two whitespace-delimited fields and drop the rest.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OpcodeType {
    #[default]
    U8,
    U16,
}

impl OpcodeType {
    /// Number of distinct opcodes the type can hold.
    pub fn capacity(&self) -> usize {
        match self {
            OpcodeType::U8 => u8::MAX as usize + 1,
            OpcodeType::U16 => u16::MAX as usize + 1,
        }
    }
}

/// Names and fixed fragments of the generated module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    pub header: String,
    pub module: String,
    pub opcode_type: OpcodeType,
    pub count_name: String,
    pub table_name: String,
    pub accessor_name: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            header: "// This file is generated by opgen. Do not edit it by hand.\n\n".to_string(),
            module: "instructions".to_string(),
            opcode_type: OpcodeType::U8,
            count_name: "INSTRUCTION_NUMBER".to_string(),
            table_name: "INSTRUCTION_NAMES".to_string(),
            accessor_name: "get_name".to_string(),
        }
    }
}

impl EmitConfig {
    /// Load a YAML config. Missing keys keep their default value.
    pub fn load(path: &str) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::Config(path.to_string(), e))
    }
}
