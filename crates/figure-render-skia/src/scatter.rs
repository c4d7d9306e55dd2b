// File: crates/figure-render-skia/src/scatter.rs
// Summary: Team scatter with viridis-sized/colored points, dashed trend line, and colorbar.

use anyhow::Result;
use figure_core::synth::TEAM_SIZE_RANGE;
use figure_core::{linear_fit, pearson_correlation, Team};
use skia_safe as skia;

use crate::surface::{
    draw_str_centered, draw_str_right, fill_paint, label_font, render_png_bytes, stroke_paint,
    ticks, write_png, RenderOptions,
};
use crate::theme::{viridis, Theme};

/// Scatter of (automation_level, performance_index) points. Marker size and
/// color encode team size; the overlay shows the least-squares trend and the
/// Pearson r annotation. Fewer than two points renders axes only.
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub teams: Vec<Team>,
    pub theme: Theme,
}

impl ScatterChart {
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

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let (l, t, r_full, b) = opts.plot_rect();
        // reserve a strip on the right for the colorbar
        let bar_w = 18.0f32;
        let bar_gap = 52.0f32;
        let r = r_full - bar_w - bar_gap;

        let (xmin, xmax) = self.x_range;
        let (ymin, ymax) = self.y_range;
        let xspan = (xmax - xmin).max(1e-9);
        let yspan = (ymax - ymin).max(1e-9);
        let sx = |x: f64| -> f32 { l + (((x - xmin) / xspan) as f32) * (r - l) };
        let sy = |y: f64| -> f32 { b - (((y - ymin) / yspan) as f32) * (b - t) };

        // grid + ticks
        let grid = stroke_paint(self.theme.grid, 1.0);
        let tick_font = label_font(12.0);
        let tick_paint = fill_paint(self.theme.tick_label);
        for v in ticks(ymin, ymax, 6) {
            let y = sy(v);
            canvas.draw_line((l, y), (r, y), &grid);
            if opts.draw_labels {
                draw_str_right(canvas, &format!("{v:.0}"), l - 6.0, y + 4.0, &tick_font, &tick_paint);
            }
        }
        for v in ticks(xmin, xmax, 6) {
            let x = sx(v);
            canvas.draw_line((x, t), (x, b), &grid);
            if opts.draw_labels {
                draw_str_centered(canvas, &format!("{v:.0}"), x, b + 18.0, &tick_font, &tick_paint);
            }
        }

        let axis = stroke_paint(self.theme.axis_line, 1.5);
        canvas.draw_line((l, b), (r, b), &axis);
        canvas.draw_line((l, t), (l, b), &axis);

        // points: radius and fill encode team size
        let (size_lo, size_hi) = TEAM_SIZE_RANGE;
        let size_span = ((size_hi - 1) - size_lo).max(1) as f64;
        let outline = stroke_paint(skia::Color::from_argb(178, 0, 0, 0), 0.5);
        for team in &self.teams {
            let frac = (team.team_size.saturating_sub(size_lo)) as f64 / size_span;
            let radius = 4.0 + 6.0 * frac as f32;
            let (x, y) = (sx(team.automation_level), sy(team.performance_index));
            let fill = fill_paint(Theme::with_alpha(viridis(frac), 178));
            canvas.draw_circle((x, y), radius, &fill);
            canvas.draw_circle((x, y), radius, &outline);
        }

        // trend line + correlation annotation, skipped for degenerate data
        let points: Vec<(f64, f64)> = self.teams.iter().map(|t| t.point()).collect();
        if let Ok(fit) = linear_fit(&points) {
            let x_lo = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
            let x_hi = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
            let mut trend = stroke_paint(self.theme.trend_line, 2.0);
            trend.set_path_effect(skia::PathEffect::dash(&[8.0, 6.0], 0.0));
            canvas.draw_line(
                (sx(x_lo), sy(fit.at(x_lo))),
                (sx(x_hi), sy(fit.at(x_hi))),
                &trend,
            );
        }
        if opts.draw_labels {
            if let Ok(r_coef) = pearson_correlation(&points) {
                self.draw_annotation(canvas, l, t, &format!("Correlation: r = {r_coef:.3}"));
            }
        }

        self.draw_colorbar(canvas, opts, r_full - bar_w, t, b, bar_w);

        if opts.draw_labels {
            let title_font = label_font(17.0);
            let title_paint = fill_paint(self.theme.title);
            draw_str_centered(canvas, &self.title, (l + r) * 0.5, t - 20.0, &title_font, &title_paint);

            let axis_font = label_font(13.0);
            let axis_paint = fill_paint(self.theme.axis_label);
            draw_str_centered(canvas, &self.x_label, (l + r) * 0.5, b + 40.0, &axis_font, &axis_paint);
            canvas.draw_str(&self.y_label, (l - 56.0, t - 4.0), &axis_font, &axis_paint);
        }
    }

    fn draw_annotation(&self, canvas: &skia::Canvas, l: f32, t: f32, text: &str) {
        let font = label_font(13.0);
        let text_paint = fill_paint(self.theme.axis_label);
        let (w, _) = font.measure_str(text, Some(&text_paint));
        let rect = skia::Rect::from_xywh(l + 10.0, t + 10.0, w + 16.0, 24.0);
        canvas.draw_round_rect(rect, 5.0, 5.0, &fill_paint(self.theme.annotation_box));
        canvas.draw_round_rect(rect, 5.0, 5.0, &stroke_paint(self.theme.annotation_border, 1.0));
        canvas.draw_str(text, (l + 18.0, t + 27.0), &font, &text_paint);
    }

    /// Vertical team-size colorbar drawn as thin viridis slices.
    fn draw_colorbar(
        &self,
        canvas: &skia::Canvas,
        opts: &RenderOptions,
        x: f32,
        t: f32,
        b: f32,
        w: f32,
    ) {
        let steps = 120;
        let h = b - t;
        for i in 0..steps {
            let frac = i as f64 / (steps - 1) as f64;
            // low values at the bottom
            let y0 = b - (i + 1) as f32 / steps as f32 * h;
            let slice = skia::Rect::from_xywh(x, y0, w, h / steps as f32 + 1.0);
            canvas.draw_rect(slice, &fill_paint(viridis(frac)));
        }
        canvas.draw_rect(
            skia::Rect::from_xywh(x, t, w, h),
            &stroke_paint(self.theme.axis_line, 1.0),
        );

        if opts.draw_labels {
            let font = label_font(11.0);
            let paint = fill_paint(self.theme.tick_label);
            let (size_lo, size_hi) = TEAM_SIZE_RANGE;
            let lo = size_lo as f64;
            let hi = (size_hi - 1) as f64;
            for v in ticks(lo, hi, 5) {
                let y = b - (((v - lo) / (hi - lo)) as f32) * h;
                canvas.draw_str(&format!("{v:.0}"), (x + w + 4.0, y + 4.0), &font, &paint);
            }
            let label_paint = fill_paint(self.theme.axis_label);
            canvas.draw_str("Team size", (x - 8.0, t - 8.0), &label_font(12.0), &label_paint);
        }
    }
}
