// File: crates/report/src/latex.rs
// Summary: LaTeX (booktabs) table templating for the framework comparison.

use anyhow::Result;
use figure_core::datasets::FrameworkRow;
use std::path::Path;

/// Format the framework comparison as a booktabs `table` environment.
pub fn framework_table(rows: &[FrameworkRow]) -> String {
    let mut out = String::new();
    out.push_str("\\begin{table}[htbp]\n");
    out.push_str("\\centering\n");
    out.push_str("\\caption{Web Development Framework Comparison}\n");
    out.push_str("\\label{tab:frameworks}\n");
    out.push_str("\\begin{tabular}{lccccc}\n");
    out.push_str("\\toprule\n");
    out.push_str(
        "\\textbf{Framework} & \\textbf{Language} & \\textbf{Performance} & \
         \\textbf{Learning Curve} & \\textbf{Community} & \\textbf{Score} \\\\\n",
    );
    out.push_str("\\midrule\n");
    for row in rows {
        out.push_str(&format!(
            "{} & {} & {} & {} & {} & {:.1} \\\\\n",
            row.name, row.language, row.performance, row.learning_curve, row.community, row.score
        ));
    }
    out.push_str("\\bottomrule\n");
    out.push_str("\\end{tabular}\n");
    out.push_str("\\end{table}");
    out
}

/// Write the table to `path`, creating parent directories as needed.
pub fn write_framework_table(path: impl AsRef<Path>, rows: &[FrameworkRow]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, framework_table(rows))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figure_core::datasets::framework_rows;

    #[test]
    fn table_wraps_booktabs_rules() {
        let table = framework_table(&framework_rows());
        assert!(table.starts_with("\\begin{table}"));
        assert!(table.ends_with("\\end{table}"));
        for rule in ["\\toprule", "\\midrule", "\\bottomrule"] {
            assert_eq!(table.matches(rule).count(), 1, "{rule}");
        }
    }

    #[test]
    fn table_lists_every_framework() {
        let rows = framework_rows();
        let table = framework_table(&rows);
        // header row plus one terminated line per framework
        assert_eq!(table.matches("\\\\").count(), rows.len() + 1);
        for row in &rows {
            assert!(table.contains(row.name), "{} missing", row.name);
        }
        assert!(table.contains("React & JavaScript & High & Medium & Excellent & 9.2 \\\\"));
    }

    #[test]
    fn empty_rows_still_form_a_table() {
        let table = framework_table(&[]);
        assert!(table.contains("\\midrule"));
        assert_eq!(table.matches("\\\\").count(), 1);
    }
}
