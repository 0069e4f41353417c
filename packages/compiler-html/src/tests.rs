use crate::{compile_gallery, GalleryOptions};
use mercury_common::{CompilerConfig, ManifestEntry};

fn compile(manifest: &[ManifestEntry]) -> String {
    compile_gallery(manifest, &GalleryOptions::default(), &CompilerConfig::default())
        .expect("Failed to compile gallery")
}

#[test]
fn test_compile_simple_gallery() {
    let manifest = vec![
        ManifestEntry::new("arrow-down", vec![16, 24], false),
        ManifestEntry::new("colorful-badge", vec![24], true),
    ];
    let html = compile(&manifest);

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Mercury Icons</title>"));
    assert!(html.contains("Visual icon library with 2 icons (3 components)"));
    assert!(html.contains("ArrowDown16,"));
    assert!(html.contains("ArrowDown24,"));
    assert!(html.contains("ColorfulBadge24,"));
    assert!(html.contains("} from \"../dist/index.js\";"));
    assert!(html.contains(
        "{ name: \"arrow-down\", identifier: \"ArrowDown\", sizes: [16,24], colorful: false, components: [ArrowDown16, ArrowDown24] },"
    ));
    assert!(html.contains(
        "{ name: \"colorful-badge\", identifier: \"ColorfulBadge\", sizes: [24], colorful: true, components: [ColorfulBadge24] },"
    ));
}

#[test]
fn test_icons_sorted_by_name_and_size() {
    let manifest = vec![
        ManifestEntry::new("zoom", vec![24, 16], false),
        ManifestEntry::new("add", vec![20], false),
    ];
    let html = compile(&manifest);

    let add = html.find("name: \"add\"").unwrap();
    let zoom = html.find("name: \"zoom\"").unwrap();
    assert!(add < zoom);
    assert!(html.contains("sizes: [16,24], colorful: false, components: [Zoom16, Zoom24]"));
}

#[test]
fn test_controls_follow_config() {
    let config = CompilerConfig {
        sizes: vec![12, 32],
        default_color: "#ABCDEF".to_string(),
        ..CompilerConfig::default()
    };
    let html = compile_gallery(&[], &GalleryOptions::default(), &config).unwrap();

    assert!(html.contains("<option value=\"all\">All Sizes</option>"));
    assert!(html.contains("<option value=\"12\">12px</option>"));
    assert!(html.contains("<option value=\"32\">32px</option>"));
    assert!(!html.contains("<option value=\"16\">"));
    assert!(html.contains("id=\"color\" class=\"color-input\" value=\"#abcdef\""));
}

#[test]
fn test_non_hex_default_color_falls_back() {
    let config = CompilerConfig {
        default_color: "currentColor".to_string(),
        ..CompilerConfig::default()
    };
    let html = compile_gallery(&[], &GalleryOptions::default(), &config).unwrap();
    assert!(html.contains("value=\"#000000\""));
}

#[test]
fn test_client_side_logic_embedded() {
    let html = compile(&[ManifestEntry::new("arrow-down", vec![16], false)]);

    assert!(html.contains("import { renderToStaticMarkup } from 'react-dom/server';"));
    assert!(html.contains("icon.name.toLowerCase().includes(searchTerm)"));
    assert!(html.contains("selectedSize === 'all' || String(icon.size) === selectedSize"));
    assert!(html.contains("React.createElement(icon.component, { color })"));
    assert!(html.contains("\"react\": \"https://esm.sh/react@18\""));
}

#[test]
fn test_empty_manifest_has_no_index_import() {
    let html = compile(&[]);

    assert!(!html.contains("import {\n"));
    assert!(html.contains("const iconData = [\n"));
    assert!(html.contains("Visual icon library with 0 icons (0 components)"));
}

#[test]
fn test_untrusted_text_is_escaped() {
    let options = GalleryOptions {
        title: "<b>Icons</b>".to_string(),
        ..GalleryOptions::default()
    };
    let options = GalleryOptions {
        index_import: "./</script>.js".to_string(),
        ..options
    };
    let manifest = vec![ManifestEntry::new("arrow-down", vec![16], false)];
    let html = compile_gallery(&manifest, &options, &CompilerConfig::default()).unwrap();

    assert!(html.contains("<title>&lt;b&gt;Icons&lt;/b&gt;</title>"));
    assert!(html.contains("<h1>&lt;b&gt;Icons&lt;/b&gt;</h1>"));
    assert!(html.contains("} from \"./\\u003c/script>.js\";"));
    assert_eq!(html.matches("</script>").count(), 2);
}

#[test]
fn test_gallery_options_from_json() {
    let options: GalleryOptions =
        serde_json::from_str(r#"{ "outFile": "site/icons.html", "title": "Icons" }"#).unwrap();

    assert_eq!(options.out_file, std::path::PathBuf::from("site/icons.html"));
    assert_eq!(options.title, "Icons");
    assert_eq!(options.index_import, "../dist/index.js");
}
