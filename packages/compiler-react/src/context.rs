use mercury_common::CompilerConfig;

/// Options for React component compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Default for the `color` prop of non-colorful icons
    pub default_color: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::from(&CompilerConfig::default())
    }
}

impl From<&CompilerConfig> for CompileOptions {
    fn from(config: &CompilerConfig) -> Self {
        Self {
            default_color: config.default_color.clone(),
        }
    }
}

/// Output buffer with indentation tracking used during code generation
pub struct CompilerContext {
    buffer: String,
    indent_level: usize,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            options,
        }
    }

    pub fn add_line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append an empty line
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_follow_indent_level() {
        let mut ctx = CompilerContext::new(CompileOptions::default());
        ctx.add_line("export const A = () => {");
        ctx.indent();
        ctx.add_line("return null;");
        ctx.dedent();
        ctx.dedent();
        ctx.add_line("};");
        ctx.blank();

        assert_eq!(
            ctx.into_output(),
            "export const A = () => {\n  return null;\n};\n\n"
        );
    }
}
