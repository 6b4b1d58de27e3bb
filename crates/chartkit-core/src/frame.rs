// File: crates/chartkit-core/src/frame.rs
// Summary: Renderer-agnostic display list produced by chart layout.

use crate::path::Path;
use crate::types::{Point, Rgba, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Path {
        path: Path,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
    },
    /// `anchor.y` is the vertical middle of the text line.
    Text {
        text: String,
        anchor: Point,
        align: TextAlign,
        color: Rgba,
        size: f64,
    },
}

/// Everything needed to draw one chart, in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub size: Size,
    pub background: Rgba,
    pub elements: Vec<Element>,
}

impl Frame {
    pub fn new(size: Size, background: Rgba) -> Self {
        Self { size, background, elements: Vec::new() }
    }

    pub fn fill(&mut self, path: Path, color: Rgba) {
        self.elements.push(Element::Path { path, fill: Some(color), stroke: None });
    }

    pub fn stroke(&mut self, path: Path, stroke: Stroke) {
        self.elements.push(Element::Path { path, fill: None, stroke: Some(stroke) });
    }

    pub fn fill_and_stroke(&mut self, path: Path, fill: Rgba, stroke: Stroke) {
        self.elements.push(Element::Path { path, fill: Some(fill), stroke: Some(stroke) });
    }

    pub fn text(&mut self, text: impl Into<String>, anchor: Point, align: TextAlign, color: Rgba, size: f64) {
        self.elements.push(Element::Text { text: text.into(), anchor, align, color, size });
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.elements.iter().filter_map(|e| match e {
            Element::Path { path, .. } => Some(path),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
