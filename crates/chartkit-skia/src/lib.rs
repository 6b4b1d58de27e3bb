// File: crates/chartkit-skia/src/lib.rs
// Summary: Skia renderer; rasterizes chartkit frames to PNG or RGBA buffers on CPU raster surfaces.

pub mod text;

use std::f64::consts::TAU;

use anyhow::{anyhow, Result};
use chartkit_core::{Element, Frame, Path, PathCommand, Point, Rgba};
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;

pub struct RenderOptions {
    /// Text is skipped when false (keeps snapshots independent of installed fonts).
    pub draw_labels: bool,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, anti_alias: true }
    }
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Draw `frame` onto an existing canvas.
    pub fn draw(&self, canvas: &skia::Canvas, frame: &Frame, opts: &RenderOptions) {
        canvas.clear(color(frame.background));

        for element in &frame.elements {
            match element {
                Element::Path { path, fill, stroke } => {
                    let sk_path = to_skia_path(path);
                    if let Some(c) = fill {
                        let mut paint = skia::Paint::default();
                        paint.set_anti_alias(opts.anti_alias);
                        paint.set_style(skia::paint::Style::Fill);
                        paint.set_color(color(*c));
                        canvas.draw_path(&sk_path, &paint);
                    }
                    if let Some(s) = stroke {
                        let mut paint = skia::Paint::default();
                        paint.set_anti_alias(opts.anti_alias);
                        paint.set_style(skia::paint::Style::Stroke);
                        paint.set_stroke_width(s.width as f32);
                        paint.set_color(color(s.color));
                        canvas.draw_path(&sk_path, &paint);
                    }
                }
                Element::Text { text, anchor, align, color: c, size } => {
                    if opts.draw_labels {
                        let at = (anchor.x as f32, anchor.y as f32);
                        self.shaper.draw_aligned(canvas, text, at, *align, *size as f32, color(*c));
                    }
                }
            }
        }
    }

    fn raster_surface(frame: &Frame) -> Result<skia::Surface> {
        let (w, h) = surface_dims(frame)?;
        skia::surfaces::raster_n32_premul((w, h)).ok_or_else(|| anyhow!("failed to create raster surface"))
    }

    /// Render to PNG bytes in memory.
    pub fn render_png_bytes(&self, frame: &Frame, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = Self::raster_surface(frame)?;
        self.draw(surface.canvas(), frame, opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the frame to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        frame: &Frame,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(frame, opts)?;
        let output = output_png_path.as_ref();
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output, bytes)?;
        debug!(path = %output.display(), "wrote png");
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer. Returns (pixels, width, height, stride).
    pub fn render_rgba8(&self, frame: &Frame, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = surface_dims(frame)?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut surface =
            skia::surfaces::raster(&info, stride, None).ok_or_else(|| anyhow!("failed to create RGBA surface"))?;
        self.draw(surface.canvas(), frame, opts);

        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("reading back RGBA pixels failed"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

// ---- helpers ----------------------------------------------------------------

fn surface_dims(frame: &Frame) -> Result<(i32, i32)> {
    let w = frame.size.width.round() as i32;
    let h = frame.size.height.round() as i32;
    if w <= 0 || h <= 0 {
        return Err(anyhow!("surface size must be positive, got {}x{}", w, h));
    }
    Ok((w, h))
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

/// Translate path commands into a Skia path. Full-turn arcs become ovals,
/// wound counter-clockwise when the sweep is negative so ring holes stay open.
pub fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                out.move_to(pt(p));
            }
            PathCommand::LineTo(p) => {
                out.line_to(pt(p));
            }
            PathCommand::CubicTo { control1, control2, to } => {
                out.cubic_to(pt(control1), pt(control2), pt(to));
            }
            PathCommand::Arc { center, radius, start_angle, sweep } => {
                let oval = skia::Rect::from_ltrb(
                    (center.x - radius) as f32,
                    (center.y - radius) as f32,
                    (center.x + radius) as f32,
                    (center.y + radius) as f32,
                );
                if sweep.abs() >= TAU - 1e-9 {
                    let dir = if sweep < 0.0 { skia::PathDirection::CCW } else { skia::PathDirection::CW };
                    out.add_oval(oval, Some((dir, 0)));
                } else {
                    out.arc_to(oval, start_angle.to_degrees() as f32, sweep.to_degrees() as f32, false);
                }
            }
            PathCommand::Close => {
                out.close();
            }
        }
    }
    out
}
