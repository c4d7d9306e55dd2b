// File: crates/figure-render-skia/src/radar.rs
// Summary: Radar (spider) chart with ring grid, filled per-series polygons, and legend.

use anyhow::Result;
use figure_core::Series;
use skia_safe as skia;

use crate::surface::{
    draw_str_centered, fill_paint, label_font, render_png_bytes, stroke_paint, write_png,
    RenderOptions,
};
use crate::theme::Theme;

/// Radar chart over the spoke categories of its series. Spokes start at the
/// top (12 o'clock) and advance counter-clockwise; each series draws a closed
/// stroked polygon with a translucent fill of the same color.
pub struct RadarChart {
    pub title: String,
    pub max_score: f64,
    pub ring_step: f64,
    pub series: Vec<Series>,
    pub theme: Theme,
}

impl RadarChart {
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        render_png_bytes(opts, |canvas| self.draw(canvas, opts))
    }

    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(path, &bytes)
    }

    /// Spoke categories come from the first series.
    fn categories(&self) -> &[String] {
        self.series.first().map(|s| s.labels()).unwrap_or(&[])
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let categories = self.categories();
        let n = categories.len();
        let (l, t, r, b) = opts.plot_rect();
        let cx = (l + r) * 0.5;
        let cy = (t + b) * 0.5;
        let radius = ((r - l).min(b - t)) * 0.5 - 24.0;
        let max = if self.max_score > 0.0 { self.max_score } else { 1.0 };

        // screen position for spoke `i` at score `v`; y grows downward, so
        // counter-clockwise in data space subtracts the sine
        let pos = |i: usize, v: f64| -> (f32, f32) {
            let angle = std::f64::consts::FRAC_PI_2
                + std::f64::consts::TAU * i as f64 / n.max(1) as f64;
            let rr = radius as f64 * (v / max).clamp(0.0, 1.0);
            (
                cx + (rr * angle.cos()) as f32,
                cy - (rr * angle.sin()) as f32,
            )
        };

        if n == 0 {
            // nothing to span the spokes; draw the outer ring only
            canvas.draw_circle((cx, cy), radius, &stroke_paint(self.theme.grid, 1.0));
            return;
        }

        // ring grid with score labels, then spokes
        let grid = stroke_paint(self.theme.grid, 1.0);
        let ring_font = label_font(11.0);
        let ring_paint = fill_paint(self.theme.tick_label);
        let step = if self.ring_step > 0.0 { self.ring_step } else { max };
        let mut score = step;
        while score <= max + 1e-9 {
            let mut ring = skia::Path::new();
            for i in 0..n {
                let (x, y) = pos(i, score);
                if i == 0 { ring.move_to((x, y)); } else { ring.line_to((x, y)); }
            }
            ring.close();
            canvas.draw_path(&ring, &grid);
            if opts.draw_labels {
                let (x, y) = pos(0, score);
                canvas.draw_str(&format!("{score:.0}"), (x + 4.0, y - 2.0), &ring_font, &ring_paint);
            }
            score += step;
        }
        for i in 0..n {
            let (x, y) = pos(i, max);
            canvas.draw_line((cx, cy), (x, y), &grid);
        }

        // spoke labels just outside the outer ring
        if opts.draw_labels {
            let cat_font = label_font(12.0);
            let cat_paint = fill_paint(self.theme.axis_label);
            for (i, label) in categories.iter().enumerate() {
                let (x, y) = pos(i, max * 1.12);
                draw_str_centered(canvas, label, x, y + 4.0, &cat_font, &cat_paint);
            }
        }

        // one closed polygon per series: translucent fill under a solid stroke
        for (si, series) in self.series.iter().enumerate() {
            if series.is_empty() {
                continue;
            }
            let color = self.theme.series_color(si);
            let mut poly = skia::Path::new();
            for (i, &v) in series.values().iter().enumerate().take(n) {
                let (x, y) = pos(i, v);
                if i == 0 { poly.move_to((x, y)); } else { poly.line_to((x, y)); }
            }
            poly.close();
            canvas.draw_path(&poly, &fill_paint(Theme::with_alpha(color, 64)));
            canvas.draw_path(&poly, &stroke_paint(color, 2.0));
            for (i, &v) in series.values().iter().enumerate().take(n) {
                let (x, y) = pos(i, v);
                canvas.draw_circle((x, y), 3.5, &fill_paint(color));
            }
        }

        if opts.draw_labels {
            let title_font = label_font(17.0);
            let title_paint = fill_paint(self.theme.title);
            draw_str_centered(canvas, &self.title, cx, t - 16.0, &title_font, &title_paint);
            self.draw_legend(canvas, r, t);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, r: f32, t: f32) {
        if self.series.is_empty() {
            return;
        }
        let font = label_font(12.0);
        let text_paint = fill_paint(self.theme.axis_label);
        let max_w = self
            .series
            .iter()
            .map(|s| font.measure_str(s.name(), Some(&text_paint)).0)
            .fold(0.0f32, f32::max);
        let row_h = 18.0;
        let box_w = max_w + 34.0;
        let box_h = row_h * self.series.len() as f32 + 10.0;
        let bx = r - box_w;
        let by = t;

        let rect = skia::Rect::from_xywh(bx, by, box_w, box_h);
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(self.theme.annotation_box));
        canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(self.theme.annotation_border, 1.0));

        for (i, series) in self.series.iter().enumerate() {
            let y = by + 9.0 + row_h * i as f32 + row_h * 0.5;
            let swatch = skia::Rect::from_xywh(bx + 7.0, y - 9.0, 10.0, 10.0);
            canvas.draw_rect(swatch, &fill_paint(self.theme.series_color(i)));
            canvas.draw_str(series.name(), (bx + 24.0, y), &font, &text_paint);
        }
    }
}
