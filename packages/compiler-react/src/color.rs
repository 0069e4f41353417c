use regex::Regex;
use std::sync::LazyLock;

/// Template-literal expression that reads the component's `color` prop
pub const COLOR_PLACEHOLDER: &str = "${color}";

// Only literal hex values; named colors, currentColor and url(#...) are left alone
static HEX_FILL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"fill=(?:"#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})"|'#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})')"##)
        .expect("hex fill pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum MarkupSegment {
    Literal(String),
    /// Slot filled with the caller's color at render time
    Color,
}

/// Inner markup with its fixed fills replaced by color slots.
///
/// Built once at compile time; the only thing left for render time is
/// substituting the color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterizedMarkup {
    segments: Vec<MarkupSegment>,
}

impl ParameterizedMarkup {
    /// Markup with no color slots
    pub fn literal(markup: impl Into<String>) -> Self {
        let markup = markup.into();
        let segments = if markup.is_empty() {
            Vec::new()
        } else {
            vec![MarkupSegment::Literal(markup)]
        };
        Self { segments }
    }

    #[cfg(test)]
    fn segments(&self) -> &[MarkupSegment] {
        &self.segments
    }

    #[cfg(test)]
    fn color_slots(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, MarkupSegment::Color))
            .count()
    }

    /// Substitute `color` into every slot
    #[cfg(test)]
    fn render(&self, color: &str) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                MarkupSegment::Literal(text) => text.as_str(),
                MarkupSegment::Color => color,
            })
            .collect()
    }

    /// Body of a JS template literal: literal text escaped, slots as `${color}`
    pub fn to_template_literal(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                MarkupSegment::Literal(text) => out.push_str(&escape_template_literal(text)),
                MarkupSegment::Color => out.push_str(COLOR_PLACEHOLDER),
            }
        }
        out
    }

    fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(MarkupSegment::Literal(last)) => last.push_str(text),
            _ => self.segments.push(MarkupSegment::Literal(text.to_string())),
        }
    }
}

/// Rewrite hex fills into color slots unless the icon is colorful
pub fn parameterize(inner_markup: &str, is_colorful: bool) -> ParameterizedMarkup {
    if is_colorful {
        return ParameterizedMarkup::literal(inner_markup);
    }

    let mut markup = ParameterizedMarkup::default();
    let mut last = 0;

    for found in HEX_FILL.find_iter(inner_markup) {
        // fill=" or fill='
        let quote = &found.as_str()[5..6];
        markup.push_literal(&inner_markup[last..found.start()]);
        markup.push_literal("fill=");
        markup.push_literal(quote);
        markup.segments.push(MarkupSegment::Color);
        markup.push_literal(quote);
        last = found.end();
    }
    markup.push_literal(&inner_markup[last..]);

    markup
}

/// Escape text for embedding in a JS template literal
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
