// File: crates/figure-core/src/datasets.rs
// Summary: Fixed illustrative datasets used by the report figures and table.

use crate::error::DataError;
use crate::series::Series;

/// The four example teams used in the DORA bar panels.
pub const TEAMS: [&str; 4] = ["Team Alpha", "Team Beta", "Team Gamma", "Team Delta"];

/// Month labels for the 2024 evolution chart.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Radar spoke categories for the methodology comparison.
pub const METHODOLOGY_CATEGORIES: [&str; 6] = [
    "Flexibility",
    "Delivery Speed",
    "Code Quality",
    "Customer Satisfaction",
    "Risk Management",
    "Scalability",
];

/// DORA metrics per team: deployments per week and average lead time in days.
pub struct DoraMetrics {
    pub deployment_frequency: Series,
    pub lead_time: Series,
}

pub fn dora_metrics() -> Result<DoraMetrics, DataError> {
    Ok(DoraMetrics {
        deployment_frequency: Series::from_pairs(
            "Deployment Frequency",
            &TEAMS,
            &[15.2, 8.7, 22.1, 12.4],
        )?,
        lead_time: Series::from_pairs("Lead Time", &TEAMS, &[2.1, 4.8, 1.3, 3.2])?,
    })
}

/// Monthly quality metrics for 2024: coverage and velocity climb while
/// production defects fall.
pub struct MetricEvolution {
    pub test_coverage: Series,
    pub team_velocity: Series,
    pub production_defects: Series,
}

pub fn metric_evolution() -> Result<MetricEvolution, DataError> {
    Ok(MetricEvolution {
        test_coverage: Series::from_pairs(
            "Test Coverage (%)",
            &MONTHS,
            &[68.0, 72.0, 75.0, 78.0, 82.0, 85.0, 87.0, 89.0, 91.0, 93.0, 94.0, 95.0],
        )?,
        team_velocity: Series::from_pairs(
            "Team Velocity (SP)",
            &MONTHS,
            &[32.0, 35.0, 38.0, 42.0, 45.0, 48.0, 52.0, 55.0, 58.0, 61.0, 63.0, 65.0],
        )?,
        production_defects: Series::from_pairs(
            "Production Defects",
            &MONTHS,
            &[28.0, 25.0, 22.0, 19.0, 16.0, 14.0, 12.0, 10.0, 8.0, 6.0, 5.0, 4.0],
        )?,
    })
}

/// Scores (1-10) per methodology over `METHODOLOGY_CATEGORIES`, one series
/// per methodology, labeled by spoke category.
pub fn methodology_scores() -> Result<Vec<Series>, DataError> {
    Ok(vec![
        Series::from_pairs(
            "Scrum",
            &METHODOLOGY_CATEGORIES,
            &[8.0, 9.0, 7.0, 9.0, 6.0, 7.0],
        )?,
        Series::from_pairs(
            "Kanban",
            &METHODOLOGY_CATEGORIES,
            &[9.0, 7.0, 8.0, 8.0, 8.0, 8.0],
        )?,
        Series::from_pairs(
            "XP",
            &METHODOLOGY_CATEGORIES,
            &[7.0, 8.0, 10.0, 7.0, 7.0, 6.0],
        )?,
    ])
}

/// One row of the web-framework comparison table.
#[derive(Clone, Debug)]
pub struct FrameworkRow {
    pub name: &'static str,
    pub language: &'static str,
    pub performance: &'static str,
    pub learning_curve: &'static str,
    pub community: &'static str,
    pub score: f64,
}

/// Rows for the static LaTeX comparison table.
pub fn framework_rows() -> Vec<FrameworkRow> {
    vec![
        FrameworkRow { name: "React", language: "JavaScript", performance: "High", learning_curve: "Medium", community: "Excellent", score: 9.2 },
        FrameworkRow { name: "Angular", language: "TypeScript", performance: "High", learning_curve: "High", community: "Excellent", score: 8.7 },
        FrameworkRow { name: "Vue.js", language: "JavaScript", performance: "High", learning_curve: "Low", community: "Good", score: 8.9 },
        FrameworkRow { name: "Django", language: "Python", performance: "Medium", learning_curve: "Medium", community: "Excellent", score: 8.5 },
        FrameworkRow { name: "Spring Boot", language: "Java", performance: "High", learning_curve: "High", community: "Excellent", score: 8.8 },
        FrameworkRow { name: "Laravel", language: "PHP", performance: "Medium", learning_curve: "Low", community: "Good", score: 8.1 },
        FrameworkRow { name: "Express.js", language: "JavaScript", performance: "High", learning_curve: "Low", community: "Good", score: 8.3 },
    ]
}
