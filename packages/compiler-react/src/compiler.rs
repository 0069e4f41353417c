use crate::color::{parameterize, ParameterizedMarkup};
use crate::context::{CompileOptions, CompilerContext};
use crate::svg::{extract_svg, SvgAttributes};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Everything needed to emit one size variant's component module
#[derive(Debug, Clone)]
pub struct ComponentSpec<'a> {
    pub identifier: &'a str,
    pub size: u32,
    pub is_colorful: bool,
    pub attributes: &'a SvgAttributes,
    pub markup: &'a ParameterizedMarkup,
}

/// One emitted component module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    pub identifier: String,
    pub size: u32,
    pub source_text: String,
}

/// Run extraction, color parameterization and synthesis for one SVG source
pub fn compile_variant(
    identifier: &str,
    svg_source: &str,
    size: u32,
    is_colorful: bool,
    options: CompileOptions,
) -> GeneratedComponent {
    let extracted = extract_svg(svg_source);
    let markup = parameterize(&extracted.inner_markup, is_colorful);

    let spec = ComponentSpec {
        identifier,
        size,
        is_colorful,
        attributes: &extracted.attributes,
        markup: &markup,
    };

    GeneratedComponent {
        identifier: identifier.to_string(),
        size,
        source_text: compile_component(&spec, options),
    }
}

/// Compile a single icon variant to a React component module.
///
/// The component renders an `<svg>` with the requested pixel size and the
/// source viewBox, and injects the precompiled markup as raw HTML. It is
/// exported both by name and as the module default.
pub fn compile_component(spec: &ComponentSpec, options: CompileOptions) -> String {
    let mut ctx = CompilerContext::new(options);

    ctx.add_line("import React from 'react';");
    ctx.blank();

    ctx.add_line(&format!("export const {} = ({{", spec.identifier));
    ctx.indent();
    if !spec.is_colorful {
        let default_color = js_string(&ctx.options.default_color);
        ctx.add_line(&format!("color = {},", default_color));
    }
    ctx.add_line("className,");
    ctx.add_line("style");
    ctx.dedent();
    ctx.add_line("}) => {");
    ctx.indent();

    ctx.add_line("return React.createElement('svg', {");
    ctx.indent();
    ctx.add_line(&format!("width: {},", spec.size));
    ctx.add_line(&format!("height: {},", spec.size));
    ctx.add_line(&format!("viewBox: {},", js_string(&spec.attributes.view_box)));
    ctx.add_line(&format!("xmlns: {},", js_string(SVG_NAMESPACE)));
    ctx.add_line("className: className,");
    ctx.add_line("style: style,");
    ctx.add_line(&format!(
        "dangerouslySetInnerHTML: {{ __html: `{}` }}",
        spec.markup.to_template_literal()
    ));
    ctx.dedent();
    ctx.add_line("});");

    ctx.dedent();
    ctx.add_line("};");
    ctx.blank();
    ctx.add_line(&format!("export default {};", spec.identifier));

    ctx.into_output()
}

/// Double-quoted JS string literal
pub(crate) fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
