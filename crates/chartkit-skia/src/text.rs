// File: crates/chartkit-skia/src/text.rs
// Summary: Label shaping and aligned drawing via Skia textlayout.

use chartkit_core::TextAlign;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that `anchor` is its left/center/right edge horizontally
    /// and its vertical middle.
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        anchor: (f32, f32),
        align: TextAlign,
        size: f32,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color);
        let width = p.longest_line();
        let x = match align {
            TextAlign::Left => anchor.0,
            TextAlign::Center => anchor.0 - width / 2.0,
            TextAlign::Right => anchor.0 - width,
        };
        // Paragraph paints from its top-left corner
        let y = anchor.1 - p.height() / 2.0;
        p.paint(canvas, (x, y));
    }
}
