// File: crates/figure-render-skia/src/bars.rs
// Summary: Side-by-side category bar panels with per-bar value labels.

use anyhow::Result;
use figure_core::Series;
use skia_safe as skia;

use crate::surface::{
    draw_str_centered, draw_str_right, fill_paint, label_font, render_png_bytes, stroke_paint,
    ticks, write_png, RenderOptions,
};
use crate::theme::Theme;

/// One bar panel: a titled category axis with a fixed y limit.
pub struct BarPanel {
    pub title: String,
    pub value_label: String,
    pub series: Series,
    pub y_max: f64,
}

/// A row of bar panels sharing one surface, rendered left to right.
pub struct BarPanels {
    pub panels: Vec<BarPanel>,
    pub theme: Theme,
}

impl BarPanels {
    pub fn new(panels: Vec<BarPanel>) -> Self {
        Self { panels, theme: Theme::default() }
    }

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
        if self.panels.is_empty() {
            return;
        }
        let panel_w = opts.width / self.panels.len() as i32;
        for (i, panel) in self.panels.iter().enumerate() {
            self.draw_panel(canvas, opts, panel, i as i32 * panel_w, panel_w);
        }
    }

    fn draw_panel(
        &self,
        canvas: &skia::Canvas,
        opts: &RenderOptions,
        panel: &BarPanel,
        x_off: i32,
        panel_w: i32,
    ) {
        let l = (x_off + opts.insets.left) as f32;
        let r = (x_off + panel_w - opts.insets.right) as f32;
        let t = opts.insets.top as f32;
        let b = (opts.height - opts.insets.bottom) as f32;
        let y_max = if panel.y_max > 0.0 { panel.y_max } else { 1.0 };
        let sy = |v: f64| -> f32 { b - ((v / y_max) as f32) * (b - t) };

        // horizontal grid + y tick labels
        let grid = stroke_paint(self.theme.grid, 1.0);
        let tick_paint = fill_paint(self.theme.tick_label);
        let tick_font = label_font(12.0);
        for v in ticks(0.0, y_max, 6) {
            let y = sy(v);
            canvas.draw_line((l, y), (r, y), &grid);
            if opts.draw_labels {
                draw_str_right(canvas, &format!("{v:.0}"), l - 6.0, y + 4.0, &tick_font, &tick_paint);
            }
        }

        // axis frame
        let axis = stroke_paint(self.theme.axis_line, 1.5);
        canvas.draw_line((l, b), (r, b), &axis);
        canvas.draw_line((l, t), (l, b), &axis);

        // bars, value labels, category labels
        let n = panel.series.len();
        if n > 0 {
            let slot = (r - l) / n as f32;
            let bar_w = slot * 0.6;
            let value_font = label_font(13.0);
            let cat_font = label_font(12.0);
            let label_paint = fill_paint(self.theme.axis_label);
            for (k, (label, value)) in panel.series.iter().enumerate() {
                let cx = l + slot * (k as f32 + 0.5);
                let top = sy(value.min(y_max));
                let rect = skia::Rect::from_ltrb(cx - bar_w * 0.5, top, cx + bar_w * 0.5, b);
                canvas.draw_rect(rect, &fill_paint(self.theme.series_color(k)));
                if opts.draw_labels {
                    draw_str_centered(canvas, &format!("{value:.1}"), cx, top - 6.0, &value_font, &label_paint);
                    draw_str_centered(canvas, label, cx, b + 18.0, &cat_font, &label_paint);
                }
            }
        }

        if opts.draw_labels {
            let title_font = label_font(16.0);
            let title_paint = fill_paint(self.theme.title);
            draw_str_centered(canvas, &panel.title, (l + r) * 0.5, t - 16.0, &title_font, &title_paint);

            let axis_font = label_font(13.0);
            let axis_paint = fill_paint(self.theme.axis_label);
            canvas.draw_str(&panel.value_label, (l, t - 2.0), &axis_font, &axis_paint);
        }
    }
}
