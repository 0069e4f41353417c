mod color;
mod compiler;
mod context;
mod definitions;
mod svg;

pub use color::{escape_template_literal, parameterize, ParameterizedMarkup, COLOR_PLACEHOLDER};
pub use compiler::{compile_component, compile_variant, ComponentSpec, GeneratedComponent};
pub use context::{CompileOptions, CompilerContext};
pub use definitions::{compile_definitions, compile_index, BASE_PROPS};
pub use svg::{
    extract_svg, ExtractedSvg, SvgAttributes, DEFAULT_HEIGHT, DEFAULT_VIEW_BOX, DEFAULT_WIDTH,
};

#[cfg(test)]
mod tests;
