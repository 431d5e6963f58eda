//! Per-line input supplied by the page renderer.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Well-known keys of the host's context bag.
pub struct ContextKeys;

impl ContextKeys {
    pub const FILE_PATH: &'static str = "FilePath";
    pub const LINE_NUMBER: &'static str = "LineNumber";
}

/// The line being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    /// Absolute or host-relative path of the source file
    pub file_path: PathBuf,
    /// Line number (1-indexed)
    pub line_number: u32,
}

impl LineContext {
    pub fn new(file_path: impl Into<PathBuf>, line_number: u32) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
        }
    }

    /// Build a context from the host's string bag.
    ///
    /// Missing keys and line numbers that are not positive integers are
    /// caller bugs and come back as `ContractViolation`.
    pub fn from_bag(bag: &HashMap<String, String>) -> Result<Self> {
        let file_path = bag.get(ContextKeys::FILE_PATH).ok_or_else(|| {
            AppError::ContractViolation(format!("missing context key {}", ContextKeys::FILE_PATH))
        })?;
        let raw_line = bag.get(ContextKeys::LINE_NUMBER).ok_or_else(|| {
            AppError::ContractViolation(format!("missing context key {}", ContextKeys::LINE_NUMBER))
        })?;
        let line_number = raw_line.trim().parse::<u32>().map_err(|_| {
            AppError::ContractViolation(format!("line number is not an integer: {:?}", raw_line))
        })?;

        let ctx = Self::new(file_path, line_number);
        ctx.zero_based_line()?;
        Ok(ctx)
    }

    pub fn zero_based_line(&self) -> Result<usize> {
        match self.line_number {
            0 => Err(AppError::ContractViolation(
                "line numbers are 1-based, got 0".to_string(),
            )),
            n => Ok(n as usize - 1),
        }
    }
}
