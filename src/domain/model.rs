use crate::core::defang::{defang_with_count, refang_with_count};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Defang,
    Refang,
}

impl Mode {
    /// 套用轉換並回傳替換次數
    pub fn apply(&self, address: &str) -> (String, usize) {
        match self {
            Mode::Defang => defang_with_count(address),
            Mode::Refang => refang_with_count(address),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Defang => write!(f, "defang"),
            Mode::Refang => write!(f, "refang"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "defang" => Ok(Mode::Defang),
            "refang" => Ok(Mode::Refang),
            other => Err(format!("unknown mode '{}', expected defang or refang", other)),
        }
    }
}

/// One input line read from an argument or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub source_name: String,
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefangedAddress {
    pub original: String,
    pub transformed: String,
    pub replacements: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefangReport {
    pub mode: Mode,
    pub addresses: Vec<DefangedAddress>,
    pub total_replacements: usize,
}

impl DefangReport {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            addresses: Vec::new(),
            total_replacements: 0,
        }
    }

    pub fn push(&mut self, original: String, transformed: String, replacements: usize) {
        self.total_replacements += replacements;
        self.addresses.push(DefangedAddress {
            original,
            transformed,
            replacements,
        });
    }

    /// 每行一個轉換後的位址
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for address in &self.addresses {
            out.push_str(&address.transformed);
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Written(String),
    Rendered(String),
}
