use crate::engines::{LsatProjection, LsatResult, SatResult, UkError, UkResult};
use colored::{Color, Colorize};
use serde::Serialize;

/// One `Category, Value` line of an exported result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    pub category: String,
    pub value: String,
    #[serde(skip)]
    pub highlight: Option<Color>,
}

impl ReportRow {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
            highlight: None,
        }
    }

    pub fn with_highlight(mut self, color: Color) -> Self {
        self.highlight = Some(color);
        self
    }
}

/// A finished result the presentation layer can render without knowing its shape.
pub trait Reportable {
    fn title(&self) -> String;
    fn rows(&self) -> Vec<ReportRow>;
}

impl Reportable for SatResult {
    fn title(&self) -> String {
        format!("SAT Score ({})", self.test_mode)
    }

    fn rows(&self) -> Vec<ReportRow> {
        let difficulty = if self.auto_resolved {
            format!("{} (auto)", self.difficulty)
        } else {
            self.difficulty.to_string()
        };
        vec![
            ReportRow::new("Test Mode", self.test_mode.to_string()),
            ReportRow::new("Difficulty", difficulty),
            ReportRow::new(
                "Reading & Writing",
                format!("{} (raw {})", self.reading_writing, self.reading_writing_raw),
            ),
            ReportRow::new("Math", format!("{} (raw {})", self.math, self.math_raw)),
            ReportRow::new("Total Score", self.total.to_string()).with_highlight(Color::Green),
            ReportRow::new("Percentile", ordinal(self.percentile)),
            ReportRow::new("ACT Equivalent", self.act_equivalent.to_string()),
        ]
    }
}

impl Reportable for LsatResult {
    fn title(&self) -> String {
        "LSAT Score".to_string()
    }

    fn rows(&self) -> Vec<ReportRow> {
        vec![
            ReportRow::new("Raw Score", self.raw.to_string()),
            ReportRow::new("Scaled Score", self.scaled.to_string()).with_highlight(Color::Green),
            ReportRow::new("Percentile", ordinal(self.percentile)),
            ReportRow::new("Law School Tier", self.tier.label())
                .with_highlight(self.tier.band().color),
        ]
    }
}

impl Reportable for LsatProjection {
    fn title(&self) -> String {
        "LSAT What-If".to_string()
    }

    fn rows(&self) -> Vec<ReportRow> {
        let delta_color = if self.scaled_delta < 0 {
            Color::Red
        } else {
            Color::Green
        };
        let mut rows = self.current.rows();
        rows.extend([
            ReportRow::new("What-If Raw Score", self.projected.raw.to_string()),
            ReportRow::new("What-If Scaled Score", self.projected.scaled.to_string()),
            ReportRow::new("What-If Percentile", ordinal(self.projected.percentile)),
            ReportRow::new("What-If Tier", self.projected.tier.label())
                .with_highlight(self.projected.tier.band().color),
            ReportRow::new("Scaled Change", format!("{:+}", self.scaled_delta))
                .with_highlight(delta_color),
            ReportRow::new("Percentile Change", format!("{:+}", self.percentile_delta)),
        ]);
        rows
    }
}

impl Reportable for UkResult {
    fn title(&self) -> String {
        "UK Degree Classification".to_string()
    }

    fn rows(&self) -> Vec<ReportRow> {
        let mut rows = vec![
            ReportRow::new("Weighted Average", format!("{:.2}%", self.weighted_average))
                .with_highlight(Color::Green),
            ReportRow::new("Classification", self.classification.label())
                .with_highlight(self.classification.band().color),
            ReportRow::new("US GPA Estimate", format!("{:.2}", self.gpa_estimate)),
            ReportRow::new("US GPA Range", self.gpa_range),
            ReportRow::new("Borderline", if self.borderline { "Yes" } else { "No" }),
            ReportRow::new("Total Credits", self.total_credits.to_string()),
            ReportRow::new("Modules Counted", self.module_count.to_string()),
        ];
        for (label, average) in [
            ("Year 1 Average", self.year_averages.year1),
            ("Year 2 Average", self.year_averages.year2),
            ("Year 3 Average", self.year_averages.year3),
        ] {
            rows.push(ReportRow::new(label, format!("{average:.2}%")));
        }
        rows
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a, T: Serialize> {
    pub title: String,
    pub rows: Vec<ReportRow>,
    pub result: &'a T,
}

impl<'a, T: Reportable + Serialize> JsonReport<'a, T> {
    pub fn new(result: &'a T) -> Self {
        Self {
            title: result.title(),
            rows: result.rows(),
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRejection {
    pub title: &'static str,
    pub error: String,
}

impl JsonRejection {
    pub fn new(title: &'static str, error: impl Into<String>) -> Self {
        Self {
            title,
            error: error.into(),
        }
    }
}

/// `1st`, `2nd`, `3rd`, `11th`, `21st`.
fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// CSV export: a quoted `"Category","Value"` header, then one quoted pair per row.
pub fn to_csv(report: &dyn Reportable) -> String {
    let mut out = String::from("\"Category\",\"Value\"\n");
    for row in report.rows() {
        out.push_str(&format!(
            "{},{}\n",
            csv_field(&row.category),
            csv_field(&row.value)
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn print_human(report: &dyn Reportable) {
    println!("{}", report.title().bold());
    println!();

    let rows = report.rows();
    let width = rows
        .iter()
        .map(|row| row.category.len())
        .max()
        .unwrap_or(0);
    for row in rows {
        let value = match row.highlight {
            Some(color) => row.value.color(color).bold().to_string(),
            None => row.value.clone(),
        };
        println!("{:<width$}  {}", row.category, value, width = width);
    }
}

pub fn print_sat_placeholder() {
    println!("{}", "SAT Score".bold());
    println!();
    println!(
        "{}",
        "Enter both Reading & Writing and Math raw scores to see your result.".dimmed()
    );
    println!("-> hint: pass --rw and --math (or --no-calc and --calc)");
}

pub fn print_uk_rejection(err: &UkError) {
    println!("{}", "UK Degree Classification".bold());
    println!();
    println!("{} {}", "REJECTED".red().bold(), err);
    println!(
        "-> hint: add at least one module with a mark above 0, e.g. --module \"Project:65:40:3\""
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{ModuleSheet, compute_lsat_score, project_lsat};
    use pretty_assertions::assert_eq;

    #[test]
    fn csv_has_header_and_quoted_pairs() {
        let result = compute_lsat_score(73);
        let csv = to_csv(&result);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\"Category\",\"Value\"");
        assert_eq!(lines[1], "\"Raw Score\",\"73\"");
        assert_eq!(lines[2], "\"Scaled Score\",\"165\"");
        assert_eq!(lines[4], "\"Law School Tier\",\"T14 Competitive\"");
        assert_eq!(lines.len(), 1 + result.rows().len());
    }

    #[test]
    fn percentiles_use_english_ordinals() {
        assert_eq!(ordinal(0), "0th");
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(50), "50th");
        assert_eq!(ordinal(91), "91st");
        assert_eq!(ordinal(99), "99th");
    }

    #[test]
    fn lsat_percentile_row_uses_ordinal() {
        let result = compute_lsat_score(24);
        assert_eq!(result.scaled, 129);
        let rows = result.rows();
        let percentile = rows
            .iter()
            .find(|row| row.category == "Percentile")
            .expect("percentile row");
        assert_eq!(percentile.value, "1st");
    }

    #[test]
    fn csv_doubles_embedded_quotes() {
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn uk_rows_include_range_and_estimate() {
        let mut sheet = ModuleSheet::new();
        sheet.add_module("Core", 20, 80.0, 2);
        sheet.add_module("Final", 20, 60.0, 3);
        let result = sheet.calculate().expect("result");
        let rows = result.rows();
        let find = |category: &str| {
            rows.iter()
                .find(|row| row.category == category)
                .map(|row| row.value.clone())
        };
        assert_eq!(find("Weighted Average").as_deref(), Some("66.67%"));
        assert_eq!(find("US GPA Range").as_deref(), Some("3.0–3.7"));
        assert_eq!(find("US GPA Estimate").as_deref(), Some("3.35"));
        assert_eq!(find("Borderline").as_deref(), Some("No"));
        assert_eq!(find("Year 1 Average").as_deref(), Some("0.00%"));
    }

    #[test]
    fn projection_rows_show_signed_delta() {
        let rows = project_lsat(73, 54).rows();
        let delta = rows
            .iter()
            .find(|row| row.category == "Scaled Change")
            .expect("delta row");
        assert_eq!(delta.value, "-15");
        assert_eq!(delta.highlight, Some(Color::Red));
    }

    #[test]
    fn json_report_embeds_result() {
        let result = compute_lsat_score(54);
        let value = serde_json::to_value(JsonReport::new(&result)).expect("json");
        assert_eq!(value["title"], "LSAT Score");
        assert_eq!(value["result"]["scaled"], 150);
        assert_eq!(value["result"]["tier"], "regional");
        assert_eq!(value["rows"][0]["category"], "Raw Score");
        assert!(value["rows"][0].get("highlight").is_none());
    }
}
