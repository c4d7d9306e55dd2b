// File: crates/figure-render-skia/src/surface.rs
// Summary: Shared CPU raster surface pipeline (raster -> draw -> PNG) and plot-area math.

use anyhow::Result;
use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 32, 48, 64)
    }
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    /// Skip titles/labels when font output must not vary across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::from_argb(255, 250, 250, 252),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Plot rectangle `(left, top, right, bottom)` inside the insets.
    pub fn plot_rect(&self) -> (f32, f32, f32, f32) {
        (
            self.insets.left as f32,
            self.insets.top as f32,
            (self.width - self.insets.right) as f32,
            (self.height - self.insets.bottom) as f32,
        )
    }
}

/// Run `draw` against a fresh raster surface and return the encoded PNG bytes.
pub fn render_png_bytes<F>(opts: &RenderOptions, draw: F) -> Result<Vec<u8>>
where
    F: FnOnce(&skia::Canvas),
{
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.background);
    draw(canvas);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Write PNG bytes to `path`, creating parent directories as needed.
pub fn write_png(path: impl AsRef<std::path::Path>, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Evenly spaced tick positions from `start` to `end` inclusive.
pub fn ticks(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

// ---- paint/text helpers -----------------------------------------------------

pub fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

pub fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

pub fn label_font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size);
    font
}

/// Draw `text` centered horizontally on `cx` with baseline at `y`.
pub fn draw_str_centered(
    canvas: &skia::Canvas,
    text: &str,
    cx: f32,
    y: f32,
    font: &skia::Font,
    paint: &skia::Paint,
) {
    let (w, _) = font.measure_str(text, Some(paint));
    canvas.draw_str(text, (cx - w * 0.5, y), font, paint);
}

/// Draw `text` right-aligned so it ends at `x`, baseline at `y`.
pub fn draw_str_right(
    canvas: &skia::Canvas,
    text: &str,
    x: f32,
    y: f32,
    font: &skia::Font,
    paint: &skia::Paint,
) {
    let (w, _) = font.measure_str(text, Some(paint));
    canvas.draw_str(text, (x - w, y), font, paint);
}
