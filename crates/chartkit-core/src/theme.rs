// File: crates/chartkit-core/src/theme.rs
// Summary: Named color themes and the series palette.

use crate::types::Rgba;

pub const PALETTE_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub marker: Rgba,
    pub point_fill: Rgba,
    /// Series/segment colors, cycled when a series has no color of its own.
    pub palette: [Rgba; PALETTE_LEN],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Rgba::from_argb(255, 40, 40, 45),
            axis_line: Rgba::from_argb(255, 180, 180, 190),
            axis_label: Rgba::from_argb(255, 235, 235, 245),
            marker: Rgba::from_argb(255, 255, 230, 70),
            point_fill: Rgba::from_argb(255, 18, 18, 20),
            palette: [
                Rgba::rgb(64, 160, 255),
                Rgba::rgb(40, 200, 120),
                Rgba::rgb(220, 80, 80),
                Rgba::rgb(240, 170, 50),
                Rgba::rgb(170, 110, 230),
                Rgba::rgb(60, 200, 200),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 250, 250, 252),
            grid: Rgba::from_argb(255, 230, 230, 235),
            axis_line: Rgba::from_argb(255, 60, 60, 70),
            axis_label: Rgba::from_argb(255, 20, 20, 30),
            marker: Rgba::from_argb(255, 30, 120, 240),
            point_fill: Rgba::from_argb(255, 255, 255, 255),
            palette: [
                Rgba::rgb(32, 120, 200),
                Rgba::rgb(20, 160, 90),
                Rgba::rgb(200, 60, 60),
                Rgba::rgb(210, 140, 20),
                Rgba::rgb(130, 80, 190),
                Rgba::rgb(20, 150, 150),
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            axis_line: Rgba::rgb(0xff, 0xff, 0xff),
            axis_label: Rgba::rgb(0xff, 0xff, 0xff),
            marker: Rgba::rgb(0xff, 0xff, 0x00),
            point_fill: Rgba::rgb(0x00, 0x00, 0x00),
            palette: [
                Rgba::rgb(0x00, 0xff, 0xff),
                Rgba::rgb(0x00, 0xff, 0x00),
                Rgba::rgb(0xff, 0x00, 0x00),
                Rgba::rgb(0xff, 0xaa, 0x00),
                Rgba::rgb(0xff, 0x00, 0xff),
                Rgba::rgb(0x00, 0xaa, 0xff),
            ],
        }
    }

    /// Palette color for the `index`-th series or segment.
    pub fn series_color(&self, index: usize) -> Rgba {
        self.palette[index % PALETTE_LEN]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
