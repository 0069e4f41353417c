use mercury_common::{CompilerConfig, ManifestEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling the gallery page
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Failed to serialize icon data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Options for the gallery page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryOptions {
    /// Where the page is written
    #[serde(default = "default_out_file")]
    pub out_file: PathBuf,

    #[serde(default = "default_title")]
    pub title: String,

    /// Import specifier of the aggregate index, relative to the page
    #[serde(default = "default_index_import")]
    pub index_import: String,
}

fn default_out_file() -> PathBuf {
    PathBuf::from("demo/index.html")
}

fn default_title() -> String {
    "Mercury Icons".to_string()
}

fn default_index_import() -> String {
    "../dist/index.js".to_string()
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            out_file: default_out_file(),
            title: default_title(),
            index_import: default_index_import(),
        }
    }
}

/// Icon metadata embedded in the page
#[derive(Debug, Clone, PartialEq, Eq)]
struct GalleryIcon {
    name: String,
    identifier: String,
    sizes: Vec<u32>,
    colorful: bool,
    /// Component identifiers, parallel to `sizes`
    components: Vec<String>,
}

struct Context {
    depth: usize,
    buffer: String,
}

impl Context {
    fn new() -> Self {
        Self {
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append a multi-line block, indenting each line at the current depth
    fn add_block(&mut self, block: &str) {
        for line in block.lines() {
            if line.is_empty() {
                self.buffer.push('\n');
            } else {
                self.add_line(line);
            }
        }
    }

    fn blank(&mut self) {
        self.buffer.push('\n');
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile the static gallery page for a manifest.
///
/// The page imports every component from the aggregate index, embeds the
/// icon table as a JSON literal and filters/renders entirely client side.
pub fn compile_gallery(
    manifest: &[ManifestEntry],
    options: &GalleryOptions,
    config: &CompilerConfig,
) -> Result<String, CompileError> {
    let icons = group_icons(manifest);
    let component_total: usize = icons.iter().map(|icon| icon.components.len()).sum();

    let mut ctx = Context::new();
    let title = escape_html(&options.title);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", title));
    ctx.add_line("<script type=\"importmap\">");
    ctx.add_block(IMPORT_MAP);
    ctx.add_line("</script>");
    ctx.add_line("<style>");
    ctx.add_block(STYLES);
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    compile_header(&mut ctx, &title, icons.len(), component_total);
    compile_controls(&mut ctx, config);
    ctx.add_line("<div class=\"stats\"><h3 id=\"stats\"></h3></div>");
    ctx.add_line("<main class=\"container\">");
    ctx.indent();
    ctx.add_line("<div id=\"iconGrid\" class=\"icon-grid\"></div>");
    ctx.add_line(
        "<div id=\"noResults\" class=\"no-results\" hidden>No icons found matching your search criteria.</div>",
    );
    ctx.dedent();
    ctx.add_line("</main>");

    ctx.add_line("<script type=\"module\">");
    ctx.indent();
    compile_script(&mut ctx, &icons, options)?;
    ctx.dedent();
    ctx.add_line("</script>");
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}

/// One group per icon, sorted by name, sizes ascending
fn group_icons(manifest: &[ManifestEntry]) -> Vec<GalleryIcon> {
    let mut icons: Vec<GalleryIcon> = manifest
        .iter()
        .filter(|entry| !entry.sizes.is_empty())
        .map(|entry| {
            let mut components: Vec<(u32, String)> = entry.components().collect();
            components.sort_by_key(|(size, _)| *size);
            GalleryIcon {
                name: entry.name.clone(),
                identifier: entry.identifier.clone(),
                sizes: components.iter().map(|(size, _)| *size).collect(),
                colorful: entry.colorful,
                components: components.into_iter().map(|(_, id)| id).collect(),
            }
        })
        .collect();

    icons.sort_by(|a, b| a.name.cmp(&b.name));
    icons
}

fn compile_header(ctx: &mut Context, title: &str, icon_count: usize, component_count: usize) {
    ctx.add_line("<header class=\"header\">");
    ctx.indent();
    ctx.add_line(&format!("<h1>{}</h1>", title));
    ctx.add_line(&format!(
        "<p>Visual icon library with {} icons ({} components)</p>",
        icon_count, component_count
    ));
    ctx.dedent();
    ctx.add_line("</header>");
}

fn compile_controls(ctx: &mut Context, config: &CompilerConfig) {
    ctx.add_line("<section class=\"controls\">");
    ctx.indent();
    ctx.add_line("<label for=\"search\">Search:</label>");
    ctx.add_line(
        "<input type=\"text\" id=\"search\" class=\"search-box\" placeholder=\"Search icons by name...\">",
    );
    ctx.add_line("<label for=\"size\">Size:</label>");
    ctx.add_line("<select id=\"size\" class=\"size-selector\">");
    ctx.indent();
    ctx.add_line("<option value=\"all\">All Sizes</option>");
    for size in &config.sizes {
        ctx.add_line(&format!("<option value=\"{}\">{}px</option>", size, size));
    }
    ctx.dedent();
    ctx.add_line("</select>");
    ctx.add_line("<label for=\"color\">Color:</label>");
    ctx.add_line(&format!(
        "<input type=\"color\" id=\"color\" class=\"color-input\" value=\"{}\">",
        escape_html(&color_input_value(&config.default_color))
    ));
    ctx.dedent();
    ctx.add_line("</section>");
}

fn compile_script(
    ctx: &mut Context,
    icons: &[GalleryIcon],
    options: &GalleryOptions,
) -> Result<(), CompileError> {
    ctx.add_line("import React from 'react';");
    ctx.add_line("import { renderToStaticMarkup } from 'react-dom/server';");

    let components: Vec<&str> = icons
        .iter()
        .flat_map(|icon| icon.components.iter().map(String::as_str))
        .collect();

    if !components.is_empty() {
        ctx.add_line("import {");
        ctx.indent();
        for component in &components {
            ctx.add_line(&format!("{},", component));
        }
        ctx.dedent();
        ctx.add_line(&format!("}} from {};", script_json(&options.index_import)?));
    }
    ctx.blank();

    ctx.add_line("const iconData = [");
    ctx.indent();
    for icon in icons {
        // Strings go through serde; component references stay bare identifiers
        ctx.add_line(&format!(
            "{{ name: {}, identifier: {}, sizes: {}, colorful: {}, components: [{}] }},",
            script_json(&icon.name)?,
            script_json(&icon.identifier)?,
            script_json(&icon.sizes)?,
            icon.colorful,
            icon.components.join(", ")
        ));
    }
    ctx.dedent();
    ctx.add_line("];");
    ctx.blank();
    ctx.add_block(SCRIPT);

    Ok(())
}

/// JSON that is safe inside a `<script>` element
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CompileError> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `<input type="color">` only accepts `#rrggbb`
fn color_input_value(color: &str) -> String {
    let hex = color.trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        format!("#{}", hex.to_ascii_lowercase())
    } else {
        "#000000".to_string()
    }
}

const IMPORT_MAP: &str = r#"{
  "imports": {
    "react": "https://esm.sh/react@18",
    "react-dom/server": "https://esm.sh/react-dom@18/server"
  }
}"#;

const STYLES: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f8f9fa; color: #333; line-height: 1.6; }
.header { background: white; padding: 2rem; box-shadow: 0 2px 10px rgba(0,0,0,0.1); text-align: center; }
.header h1 { color: #2c3e50; margin-bottom: 0.5rem; }
.header p { color: #7f8c8d; }
.controls, .stats { background: white; padding: 1rem 1.5rem; margin: 1rem; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
.controls { display: flex; gap: 1rem; align-items: center; flex-wrap: wrap; }
.controls label { font-weight: 600; color: #2c3e50; }
.controls input, .controls select { padding: 0.5rem; border: 2px solid #e1e8ed; border-radius: 4px; font-size: 1rem; }
.search-box { flex: 1; min-width: 200px; }
.color-input { width: 60px; height: 40px; cursor: pointer; }
.stats { text-align: center; }
.container { max-width: 1200px; margin: 0 auto; padding: 1rem; }
.icon-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; }
.icon-card { background: white; border-radius: 8px; padding: 1rem; box-shadow: 0 2px 10px rgba(0,0,0,0.1); text-align: center; }
.icon-preview { width: 48px; height: 48px; margin: 0 auto 0.5rem; display: flex; align-items: center; justify-content: center; background: #2c3e50; border-radius: 6px; }
.icon-name { font-size: 0.9rem; font-weight: 600; color: #2c3e50; }
.icon-size { font-size: 0.8rem; color: #7f8c8d; }
.no-results { text-align: center; padding: 3rem; color: #7f8c8d; }"#;

const SCRIPT: &str = r#"const searchInput = document.getElementById('search');
const sizeSelect = document.getElementById('size');
const colorInput = document.getElementById('color');
const iconGrid = document.getElementById('iconGrid');
const noResults = document.getElementById('noResults');
const stats = document.getElementById('stats');

const allIcons = iconData.flatMap(icon => icon.sizes.map((size, index) => ({
  name: icon.name,
  size,
  colorful: icon.colorful,
  component: icon.components[index],
  displayName: `${icon.identifier}${size}`,
})));
let filteredIcons = allIcons;

function filterIcons() {
  const searchTerm = searchInput.value.toLowerCase();
  const selectedSize = sizeSelect.value;
  filteredIcons = allIcons.filter(icon => {
    const matchesSearch = icon.name.toLowerCase().includes(searchTerm);
    const matchesSize = selectedSize === 'all' || String(icon.size) === selectedSize;
    return matchesSearch && matchesSize;
  });
  renderIcons();
}

function renderIcons() {
  stats.textContent = `Showing ${filteredIcons.length} of ${allIcons.length} icons`;
  noResults.hidden = filteredIcons.length > 0;
  iconGrid.hidden = filteredIcons.length === 0;

  const color = colorInput.value;
  iconGrid.innerHTML = filteredIcons.map(icon => {
    const svg = renderToStaticMarkup(React.createElement(icon.component, { color }));
    return `<div class="icon-card">
      <div class="icon-preview">${svg}</div>
      <div class="icon-name">${icon.displayName}</div>
      <div class="icon-size">${icon.size}px${icon.colorful ? ' · colorful' : ''}</div>
    </div>`;
  }).join('');
}

searchInput.addEventListener('input', filterIcons);
sizeSelect.addEventListener('change', filterIcons);
colorInput.addEventListener('input', renderIcons);

renderIcons();"#;
