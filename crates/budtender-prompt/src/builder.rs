//! Builder-style helper for constructing system-instruction text.
//!
//! Writing long instruction strings inline is tedious and error-prone.
//! `PromptBuilder` offers a fluent API so the composer can focus on the
//! *content* instead of the newline bookkeeping. Every method returns
//! `self`, enabling call-chaining:
//!
//! ```rust
//! use budtender_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .line("You are a helpful consultant.")
//!     .blank()
//!     .field("Priority", "High")
//!     .finalize();
//!
//! assert!(text.starts_with("You are a helpful consultant."));
//! assert!(text.contains("Priority: High"));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing
//! to the internal `String` never fails (which it shouldn't). It also
//! refrains from smart-formatting to stay predictable: newlines and
//! whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce instruction text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a labeled value: `Label: value`.
    pub fn field(mut self, label: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "{label}: {value}").expect("failed to write buffer");
        self
    }

    /// Add a numbered list item: `1. text`.
    pub fn numbered(mut self, index: usize, line: impl Display) -> Self {
        writeln!(self.buffer, "{index}. {line}").expect("failed to write buffer");
        self
    }

    /// Add a dash bullet: `- text`.
    pub fn bullet(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "- {line}").expect("failed to write buffer");
        self
    }

    /// Insert a single blank line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_emitted_verbatim() {
        let text = PromptBuilder::new()
            .line("first")
            .blank()
            .numbered(1, "one")
            .bullet("dash")
            .field("Key", "value")
            .finalize();
        assert_eq!(text, "first\n\n1. one\n- dash\nKey: value\n");
    }
}
