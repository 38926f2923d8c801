//! Code builder utility for generating properly indented Go fragments.

/// One indentation level, as gofmt writes it.
const INDENT: &str = "\t";

/// Fluent API for building code with proper indentation.
///
/// Every line is written as `prefix + indent * level + text + newline`. The
/// prefix and line ending let a fragment match the surrounding source it is
/// spliced into.
///
/// # Example
///
/// ```
/// use confgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::go()
///     .line("if err != nil {")
///     .indent()
///     .line("panic(err)")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "if err != nil {\n\tpanic(err)\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    prefix: String,
    newline: &'static str,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with tab indentation and `\n` line endings.
    pub fn go() -> Self {
        Self {
            indent_level: 0,
            prefix: String::new(),
            newline: "\n",
            buffer: String::new(),
        }
    }

    /// Write `prefix` in front of every line.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// End every line with `newline` instead of `\n`.
    pub fn with_newline(mut self, newline: &'static str) -> Self {
        self.newline = newline;
        self
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push_str(self.newline);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&self.prefix);
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::go().line("x := 1").build();
        assert_eq!(code, "x := 1\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::go()
            .block_with_close("func f() {", "}", |b| b.line("return"))
            .build();

        assert_eq!(code, "func f() {\n\treturn\n}\n");
    }

    #[test]
    fn test_prefix_applies_to_every_line() {
        let code = CodeBuilder::go()
            .with_prefix("\t")
            .block_with_close("if ok {", "}", |b| b.line("a()"))
            .build();

        assert_eq!(code, "\tif ok {\n\t\ta()\n\t}\n");
    }

    #[test]
    fn test_newline() {
        let code = CodeBuilder::go()
            .with_newline("\r\n")
            .block_with_close("if ok {", "}", |b| b.line("a()"))
            .build();

        assert_eq!(code, "if ok {\r\n\ta()\r\n}\r\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::go()
            .each(["A = 1", "B = 2"], |b, stmt| b.line(stmt))
            .build();

        assert_eq!(code, "A = 1\nB = 2\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::go().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }
}
