// File: crates/figure-render-skia/src/lines.rs
// Summary: Dual-axis line chart over a shared category axis, with markers and legend.

use anyhow::Result;
use figure_core::Series;
use skia_safe as skia;

use crate::marker::Marker;
use crate::surface::{
    draw_str_centered, draw_str_right, fill_paint, label_font, render_png_bytes, stroke_paint,
    ticks, write_png, RenderOptions,
};
use crate::theme::Theme;

/// Line chart with a left and a right value axis over one category axis.
/// Series on either side share x positions by index; palette colors are
/// assigned in order across left then right series.
pub struct DualAxisLineChart {
    pub title: String,
    pub left_label: String,
    pub right_label: String,
    pub left_range: (f64, f64),
    pub right_range: (f64, f64),
    pub left_series: Vec<(Series, Marker)>,
    pub right_series: Vec<(Series, Marker)>,
    pub theme: Theme,
}

impl DualAxisLineChart {
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

    /// Category labels come from the longest series on either axis.
    fn category_labels(&self) -> &[String] {
        self.left_series
            .iter()
            .chain(self.right_series.iter())
            .map(|(s, _)| s.labels())
            .max_by_key(|l| l.len())
            .unwrap_or(&[])
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let (l, t, r, b) = opts.plot_rect();
        let labels = self.category_labels();
        let n = labels.len();
        let sx = |i: usize| -> f32 {
            if n <= 1 { (l + r) * 0.5 } else { l + (r - l) * i as f32 / (n - 1) as f32 }
        };

        // grid from the left axis, drawn under everything else
        let grid = stroke_paint(self.theme.grid, 1.0);
        let tick_font = label_font(12.0);
        let tick_paint = fill_paint(self.theme.tick_label);
        let (lmin, lmax) = self.left_range;
        let (rmin, rmax) = self.right_range;
        let left_sy = scale_y(lmin, lmax, t, b);
        let right_sy = scale_y(rmin, rmax, t, b);
        for v in ticks(lmin, lmax, 6) {
            let y = left_sy(v);
            canvas.draw_line((l, y), (r, y), &grid);
            if opts.draw_labels {
                draw_str_right(canvas, &format!("{v:.0}"), l - 6.0, y + 4.0, &tick_font, &tick_paint);
            }
        }
        if opts.draw_labels {
            for v in ticks(rmin, rmax, 6) {
                let y = right_sy(v);
                canvas.draw_str(&format!("{v:.0}"), (r + 6.0, y + 4.0), &tick_font, &tick_paint);
            }
        }

        // axis frame: bottom, left, right
        let axis = stroke_paint(self.theme.axis_line, 1.5);
        canvas.draw_line((l, b), (r, b), &axis);
        canvas.draw_line((l, t), (l, b), &axis);
        canvas.draw_line((r, t), (r, b), &axis);

        // category labels
        if opts.draw_labels {
            let cat_font = label_font(12.0);
            let cat_paint = fill_paint(self.theme.axis_label);
            for (i, label) in labels.iter().enumerate() {
                draw_str_centered(canvas, label, sx(i), b + 18.0, &cat_font, &cat_paint);
            }
        }

        // series: left axis first, then right; palette index runs across both
        let mut color_idx = 0usize;
        for (series, marker) in &self.left_series {
            self.draw_series(canvas, series, *marker, self.theme.series_color(color_idx), &sx, &left_sy);
            color_idx += 1;
        }
        for (series, marker) in &self.right_series {
            self.draw_series(canvas, series, *marker, self.theme.series_color(color_idx), &sx, &right_sy);
            color_idx += 1;
        }

        if opts.draw_labels {
            let title_font = label_font(17.0);
            let title_paint = fill_paint(self.theme.title);
            draw_str_centered(canvas, &self.title, (l + r) * 0.5, t - 20.0, &title_font, &title_paint);

            let axis_font = label_font(13.0);
            let axis_paint = fill_paint(self.theme.axis_label);
            canvas.draw_str(&self.left_label, (l, t - 4.0), &axis_font, &axis_paint);
            draw_str_right(canvas, &self.right_label, r, t - 4.0, &axis_font, &axis_paint);

            self.draw_legend(canvas, l, t, r, b);
        }
    }

    fn draw_series(
        &self,
        canvas: &skia::Canvas,
        series: &Series,
        marker: Marker,
        color: skia::Color,
        sx: &dyn Fn(usize) -> f32,
        sy: &dyn Fn(f64) -> f32,
    ) {
        if series.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        for (i, &v) in series.values().iter().enumerate() {
            let (x, y) = (sx(i), sy(v));
            if i == 0 { path.move_to((x, y)); } else { path.line_to((x, y)); }
        }
        canvas.draw_path(&path, &stroke_paint(color, 2.0));
        for (i, &v) in series.values().iter().enumerate() {
            marker.draw(canvas, sx(i), sy(v), 4.0, color);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, l: f32, t: f32, r: f32, b: f32) {
        let entries: Vec<(&str, Marker, skia::Color)> = self
            .left_series
            .iter()
            .chain(self.right_series.iter())
            .enumerate()
            .map(|(i, (s, m))| (s.name(), *m, self.theme.series_color(i)))
            .collect();
        if entries.is_empty() {
            return;
        }

        let font = label_font(12.0);
        let text_paint = fill_paint(self.theme.axis_label);
        let max_w = entries
            .iter()
            .map(|(name, _, _)| font.measure_str(name, Some(&text_paint)).0)
            .fold(0.0f32, f32::max);
        let row_h = 18.0;
        let box_w = max_w + 34.0;
        let box_h = row_h * entries.len() as f32 + 10.0;
        let bx = r - box_w - 12.0;
        let by = (t + b) * 0.5 - box_h * 0.5;

        let rect = skia::Rect::from_xywh(bx, by, box_w, box_h);
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(self.theme.annotation_box));
        canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(self.theme.annotation_border, 1.0));

        for (i, (name, marker, color)) in entries.iter().enumerate() {
            let y = by + 9.0 + row_h * i as f32 + row_h * 0.5;
            marker.draw(canvas, bx + 12.0, y - 4.0, 4.0, *color);
            canvas.draw_str(*name, (bx + 24.0, y), &font, &text_paint);
        }
    }
}

fn scale_y(vmin: f64, vmax: f64, top: f32, bottom: f32) -> impl Fn(f64) -> f32 {
    let span = (vmax - vmin).max(1e-9);
    move |v: f64| -> f32 { bottom - (((v - vmin) / span) as f32) * (bottom - top) }
}
