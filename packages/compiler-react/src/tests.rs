use crate::{compile_variant, extract_svg, CompileOptions};

const ARROW_16: &str = r##"<svg width="16" height="16" viewBox="0 0 16 16"><path fill="#000000" d="M0 0"/></svg>"##;

/// Text between the template literal backticks of `__html`
fn embedded_markup(source: &str) -> &str {
    let start = source.find("__html: `").expect("missing __html") + "__html: `".len();
    let end = source.rfind("` }").expect("missing template end");
    &source[start..end]
}

#[test]
fn test_simple_component() {
    let component = compile_variant("ArrowDown16", ARROW_16, 16, false, CompileOptions::default());

    println!("Generated code:\n{}", component.source_text);

    let expected = r##"import React from 'react';

export const ArrowDown16 = ({
  color = "#FAFBFB",
  className,
  style
}) => {
  return React.createElement('svg', {
    width: 16,
    height: 16,
    viewBox: "0 0 16 16",
    xmlns: "http://www.w3.org/2000/svg",
    className: className,
    style: style,
    dangerouslySetInnerHTML: { __html: `<path fill="${color}" d="M0 0"/>` }
  });
};

export default ArrowDown16;
"##;

    assert_eq!(component.identifier, "ArrowDown16");
    assert_eq!(component.size, 16);
    assert_eq!(component.source_text, expected);
}

#[test]
fn test_requested_size_wins_over_intrinsic_size() {
    let component = compile_variant("ArrowDown24", ARROW_16, 24, false, CompileOptions::default());
    let result = &component.source_text;

    assert!(result.contains("width: 24,"));
    assert!(result.contains("height: 24,"));
    // viewBox still comes from the source
    assert!(result.contains("viewBox: \"0 0 16 16\","));
}

#[test]
fn test_colorful_component_keeps_literal_fills() {
    let source = r##"<svg width="24" height="24" viewBox="0 0 24 24">
  <circle fill="#FF5500" r="10"/>
  <path fill="#0055FF" d="M4 4"/>
</svg>"##;
    let component = compile_variant("ColorfulBadge24", source, 24, true, CompileOptions::default());
    let result = &component.source_text;

    println!("Generated code:\n{}", result);

    assert!(!result.contains("color ="));
    assert!(!result.contains("${color}"));
    assert_eq!(embedded_markup(result), extract_svg(source).inner_markup);
    assert!(result.contains("#FF5500"));
    assert!(result.contains("#0055FF"));
}

#[test]
fn test_every_hex_fill_replaced() {
    let source = r##"<svg><path fill="#000000"/><path fill="#abcdef"/><path fill="none"/></svg>"##;
    let component = compile_variant("Shape24", source, 24, false, CompileOptions::default());
    let markup = embedded_markup(&component.source_text);

    assert_eq!(markup.matches("fill=\"${color}\"").count(), 2);
    assert!(markup.contains("fill=\"none\""));
    assert!(!markup.contains('#'));
}

#[test]
fn test_custom_default_color() {
    let options = CompileOptions {
        default_color: "currentColor".to_string(),
    };
    let component = compile_variant("ArrowDown16", ARROW_16, 16, false, options);
    assert!(component.source_text.contains("color = \"currentColor\","));
}

#[test]
fn test_backticks_and_interpolations_escaped() {
    let source = r#"<svg><text>`${alert(1)}`</text></svg>"#;
    let component = compile_variant("Text24", source, 24, false, CompileOptions::default());

    assert_eq!(
        embedded_markup(&component.source_text),
        r#"<text>\`\${alert(1)}\`</text>"#
    );
}

#[test]
fn test_missing_view_box_uses_default() {
    let source = r##"<svg width="20" height="20"><path fill="#111111"/></svg>"##;
    let component = compile_variant("Dot20", source, 20, false, CompileOptions::default());
    assert!(component.source_text.contains("viewBox: \"0 0 24 24\","));
}

#[test]
fn test_default_export_matches_identifier() {
    let component = compile_variant(
        "ChevronLeft20",
        ARROW_16,
        20,
        false,
        CompileOptions::default(),
    );
    assert!(component
        .source_text
        .contains("export const ChevronLeft20 = ({"));
    assert!(component
        .source_text
        .trim_end()
        .ends_with("export default ChevronLeft20;"));
}
