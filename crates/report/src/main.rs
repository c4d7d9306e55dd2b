// File: crates/report/src/main.rs
// Summary: Renders the four report figures and the LaTeX table into graphics/ and tables/.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

use figure_core::datasets::{dora_metrics, framework_rows, methodology_scores, metric_evolution};
use figure_core::generate_team_population;
use figure_render_skia::{
    BarPanel, BarPanels, DualAxisLineChart, Marker, RadarChart, RenderOptions, ScatterChart, Theme,
};

mod latex;

/// Seed for the scatter population; fixed so re-runs reproduce the figure.
const SCATTER_SEED: u64 = 42;
const SCATTER_TEAMS: usize = 25;

fn main() -> Result<()> {
    let graphics = Path::new("graphics");
    let tables = Path::new("tables");

    render_dora_metrics(&graphics.join("dora_metrics.png"))?;
    render_metric_evolution(&graphics.join("metric_evolution.png"))?;
    render_automation_correlation(&graphics.join("automation_correlation.png"))?;
    render_methodology_comparison(&graphics.join("methodology_comparison.png"))?;

    let table_path = tables.join("framework_comparison.tex");
    latex::write_framework_table(&table_path, &framework_rows())
        .with_context(|| format!("writing {}", table_path.display()))?;
    println!("Wrote {}", table_path.display());

    println!("All figures and tables generated.");
    Ok(())
}

/// Two bar panels: deployment frequency and lead time per team.
fn render_dora_metrics(out: &PathBuf) -> Result<()> {
    let dora = dora_metrics()?;
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

    let mut opts = RenderOptions::default();
    opts.width = 1200;
    opts.height = 500;
    figure
        .render_to_png(&opts, out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Dual-axis line chart: coverage and velocity on the left axis, production
/// defects on the right.
fn render_metric_evolution(out: &PathBuf) -> Result<()> {
    let evo = metric_evolution()?;
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

    let mut opts = RenderOptions::default();
    opts.width = 1200;
    opts.height = 600;
    figure
        .render_to_png(&opts, out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Scatter of the seeded synthetic teams with trend line and r annotation.
fn render_automation_correlation(out: &PathBuf) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(SCATTER_SEED);
    let teams = generate_team_population(&mut rng, SCATTER_TEAMS)?;
    let figure = ScatterChart {
        title: "Automation vs. Team Performance".to_string(),
        x_label: "Automation Level (%)".to_string(),
        y_label: "Performance Index".to_string(),
        x_range: (15.0, 100.0),
        y_range: (25.0, 105.0),
        teams,
        theme: Theme::default(),
    };

    let mut opts = RenderOptions::default();
    opts.width = 1000;
    opts.height = 700;
    figure
        .render_to_png(&opts, out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Radar chart comparing Scrum, Kanban, and XP over six categories.
fn render_methodology_comparison(out: &PathBuf) -> Result<()> {
    let figure = RadarChart {
        title: "Agile Methodology Comparison".to_string(),
        max_score: 10.0,
        ring_step: 2.0,
        series: methodology_scores()?,
        theme: Theme::default(),
    };

    let mut opts = RenderOptions::default();
    opts.width = 900;
    opts.height = 900;
    opts.insets = figure_render_skia::Insets::new(72, 72, 56, 56);
    figure
        .render_to_png(&opts, out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
