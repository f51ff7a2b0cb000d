//! FontForge Python script assembly

use super::{EngineError, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Quote a string as a Python string literal
pub fn py_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Quote a path as a Python string literal
pub fn py_path(path: &Path) -> Result<String> {
    path.to_str()
        .map(py_str)
        .ok_or_else(|| EngineError::NonUtf8Path(path.to_path_buf()))
}

pub fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Line-oriented script builder
#[derive(Debug, Clone, Default)]
pub struct PyScript {
    lines: Vec<String>,
}

impl PyScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
