// File: crates/figure-render-skia/src/lib.rs
// Summary: Renderer entry point; exports the four figure kinds and shared surface plumbing.

pub mod bars;
pub mod lines;
pub mod marker;
pub mod radar;
pub mod scatter;
pub mod surface;
pub mod theme;

pub use bars::{BarPanel, BarPanels};
pub use lines::DualAxisLineChart;
pub use marker::Marker;
pub use radar::RadarChart;
pub use scatter::ScatterChart;
pub use surface::{Insets, RenderOptions};
pub use theme::Theme;
