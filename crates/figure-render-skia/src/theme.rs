// File: crates/figure-render-skia/src/theme.rs
// Summary: Publication color theme and the viridis ramp used by the scatter colormap.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub trend_line: skia::Color,
    pub annotation_box: skia::Color,
    pub annotation_border: skia::Color,
    /// Category palette, in the order bars/lines pick colors.
    pub palette: [skia::Color; 4],
}

impl Theme {
    /// Light theme tuned for figures embedded in a printed document.
    pub fn publication() -> Self {
        Self {
            name: "publication",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(80, 120, 120, 130),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 40, 40, 50),
            tick_label: skia::Color::from_argb(255, 90, 90, 100),
            title: skia::Color::from_argb(255, 20, 20, 30),
            trend_line: skia::Color::from_argb(204, 200, 40, 40),
            annotation_box: skia::Color::from_argb(204, 255, 255, 255),
            annotation_border: skia::Color::from_argb(255, 150, 150, 160),
            palette: [
                skia::Color::from_argb(255, 0x2e, 0x86, 0xab), // blue
                skia::Color::from_argb(255, 0xa2, 0x3b, 0x72), // magenta
                skia::Color::from_argb(255, 0xf1, 0x8f, 0x01), // orange
                skia::Color::from_argb(255, 0xc7, 0x3e, 0x1d), // red
            ],
        }
    }

    /// Palette color for series index `i`, wrapping past the end.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }

    /// Same color with the given alpha.
    pub fn with_alpha(color: skia::Color, alpha: u8) -> skia::Color {
        skia::Color::from_argb(alpha, color.r(), color.g(), color.b())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::publication()
    }
}

// Anchor points of the viridis colormap; intermediate values interpolate
// linearly between neighbors.
const VIRIDIS_ANCHORS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Sample the viridis ramp at `t` in [0, 1]; out-of-range values clamp.
pub fn viridis(t: f64) -> skia::Color {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS_ANCHORS.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS_ANCHORS.len() - 1);
    let frac = scaled - lo as f64;

    let (r0, g0, b0) = VIRIDIS_ANCHORS[lo];
    let (r1, g1, b1) = VIRIDIS_ANCHORS[hi];
    let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * frac).round() as u8 };
    skia::Color::from_argb(255, lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}
