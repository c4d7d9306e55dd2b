// File: crates/figure-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing one PNG per figure kind.

use figure_core::datasets::{dora_metrics, methodology_scores, metric_evolution};
use figure_core::generate_team_population;
use figure_render_skia::{
    BarPanel, BarPanels, DualAxisLineChart, Marker, RadarChart, RenderOptions, ScatterChart, Theme,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

fn out_path(name: &str) -> std::path::PathBuf {
    let out = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&out).expect("create test_out");
    out.join(name)
}

#[test]
fn render_bar_panels() {
    let dora = dora_metrics().expect("dataset");
    let figure = BarPanels::new(vec![
        BarPanel {
            title: "Deployment Frequency by Team".to_string(),
            value_label: "Deployments per week".to_string(),
            series: dora.deployment_frequency,
            y_max: 25.0,
        },
        BarPanel {
            title: "Lead Time by Team".to_string(),
            value_label: "Average days".to_string(),
            series: dora.lead_time,
            y_max: 6.0,
        },
    ]);

    let opts = RenderOptions::default();
    let out = out_path("bars.png");
    figure.render_to_png(&opts, &out).expect("render");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);

    let bytes = figure.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG header");
}

#[test]
fn render_dual_axis_lines() {
    let evo = metric_evolution().expect("dataset");
    let figure = DualAxisLineChart {
        title: "Software Quality Metric Evolution (2024)".to_string(),
        left_label: "Coverage (%) / Velocity (SP)".to_string(),
        right_label: "Production Defects".to_string(),
        left_range: (0.0, 100.0),
        right_range: (0.0, 30.0),
        left_series: vec![
            (evo.test_coverage, Marker::Circle),
            (evo.team_velocity, Marker::Square),
        ],
        right_series: vec![(evo.production_defects, Marker::Triangle)],
        theme: Theme::default(),
    };

    let bytes = figure
        .render_to_png_bytes(&RenderOptions::default())
        .expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn render_scatter_with_trend() {
    let mut rng = StdRng::seed_from_u64(42);
    let teams = generate_team_population(&mut rng, 25).expect("generate");
    let figure = ScatterChart {
        title: "Automation vs. Team Performance".to_string(),
        x_label: "Automation Level (%)".to_string(),
        y_label: "Performance Index".to_string(),
        x_range: (15.0, 100.0),
        y_range: (25.0, 105.0),
        teams,
        theme: Theme::default(),
    };

    let figure_out = out_path("scatter.png");
    figure
        .render_to_png(&RenderOptions::default(), &figure_out)
        .expect("render");
    assert!(std::fs::metadata(&figure_out).expect("output exists").len() > 0);
}

#[test]
fn render_scatter_without_points() {
    // degenerate input: still renders axes, no trend overlay, no panic
    let figure = ScatterChart {
        title: "Empty".to_string(),
        x_label: "X".to_string(),
        y_label: "Y".to_string(),
        x_range: (0.0, 100.0),
        y_range: (0.0, 100.0),
        teams: Vec::new(),
        theme: Theme::default(),
    };
    let bytes = figure
        .render_to_png_bytes(&RenderOptions::default())
        .expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn render_radar() {
    let figure = RadarChart {
        title: "Agile Methodology Comparison".to_string(),
        max_score: 10.0,
        ring_step: 2.0,
        series: methodology_scores().expect("dataset"),
        theme: Theme::default(),
    };

    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.height = 800;
    let bytes = figure.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}
