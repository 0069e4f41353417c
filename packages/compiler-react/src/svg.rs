//! Best-effort attribute extraction from raw SVG sources.
//!
//! Icons are never parsed as XML. The outer `<svg>` opening tag is located
//! with a pattern, `width`/`height`/`viewBox` are read from it, and the
//! wrapper is cut away to leave the inner markup. Anything that cannot be
//! found falls back to the constants below; malformed input degrades
//! instead of failing.

use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_WIDTH: u32 = 24;
pub const DEFAULT_HEIGHT: u32 = 24;
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

const CLOSE_TAG: &str = "</svg>";

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg(?:\s[^>]*)?>").expect("open tag pattern"));

static WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)width\s*=\s*["'](\d+)(?:px)?["']"#).expect("width pattern")
});

static HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)height\s*=\s*["'](\d+)(?:px)?["']"#).expect("height pattern")
});

static VIEW_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)viewBox\s*=\s*(?:"([^"]+)"|'([^']+)')"#).expect("viewBox pattern")
});

/// Intrinsic dimensions of an icon source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgAttributes {
    pub width: u32,
    pub height: u32,
    pub view_box: String,
}

impl Default for SvgAttributes {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            view_box: DEFAULT_VIEW_BOX.to_string(),
        }
    }
}

/// Result of running the extractor over one size variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSvg {
    pub attributes: SvgAttributes,
    /// Source markup without the outer `<svg>` wrapper, trimmed
    pub inner_markup: String,
}

/// Extract attributes and inner markup from an SVG source. Never fails.
pub fn extract_svg(source: &str) -> ExtractedSvg {
    let open_tag = OPEN_TAG.find(source);

    // Attributes belong to the outer element; without one, scan everything
    let scope = open_tag.map(|m| m.as_str()).unwrap_or(source);
    let attributes = extract_attributes(scope);

    let mut inner = match open_tag {
        Some(m) => format!("{}{}", &source[..m.start()], &source[m.end()..]),
        None => source.to_string(),
    };

    if let Some(pos) = inner.rfind(CLOSE_TAG) {
        inner.replace_range(pos..pos + CLOSE_TAG.len(), "");
    }

    ExtractedSvg {
        attributes,
        inner_markup: inner.trim().to_string(),
    }
}

fn extract_attributes(tag: &str) -> SvgAttributes {
    let number = |re: &Regex| {
        re.captures(tag)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
    };

    let view_box = VIEW_BOX
        .captures(tag)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty());

    SvgAttributes {
        width: number(&WIDTH).unwrap_or(DEFAULT_WIDTH),
        height: number(&HEIGHT).unwrap_or(DEFAULT_HEIGHT),
        view_box: view_box.unwrap_or_else(|| DEFAULT_VIEW_BOX.to_string()),
    }
}
