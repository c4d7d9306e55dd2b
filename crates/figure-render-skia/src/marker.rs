// File: crates/figure-render-skia/src/marker.rs
// Summary: Point marker shapes shared by the line and radar charts.

use skia_safe as skia;

use crate::surface::fill_paint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

impl Marker {
    /// Draw the marker filled with `color`, centered on `(x, y)`.
    /// `size` is the half-extent in pixels.
    pub fn draw(&self, canvas: &skia::Canvas, x: f32, y: f32, size: f32, color: skia::Color) {
        let paint = fill_paint(color);
        match self {
            Marker::Circle => {
                canvas.draw_circle((x, y), size, &paint);
            }
            Marker::Square => {
                let rect = skia::Rect::from_ltrb(x - size, y - size, x + size, y + size);
                canvas.draw_rect(rect, &paint);
            }
            Marker::Triangle => {
                let mut path = skia::Path::new();
                path.move_to((x, y - size));
                path.line_to((x + size, y + size));
                path.line_to((x - size, y + size));
                path.close();
                canvas.draw_path(&path, &paint);
            }
        }
    }
}
