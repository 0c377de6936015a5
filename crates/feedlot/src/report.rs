//! Rendering of evaluation and sweep results as text, CSV and JSON.

use feedlot_core::analysis::{MarginMap, SensitivityCurve, SweepAxis};
use feedlot_core::model::{InputField, PopulationSummary, ProfitResult, ScenarioInputs};
use serde::Serialize;

use crate::platform::ScenarioListing;
use crate::util::format::{format_number, format_percent};

/// Everything `evaluate` reports
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport<'a> {
    pub inputs: &'a ScenarioInputs,
    pub per_head: &'a ProfitResult,
    pub population: &'a PopulationSummary,
}

impl EvaluationReport<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let r = self.per_head;
        let p = self.population;
        let mut out = String::new();

        section(&mut out, "Inputs");
        for field in InputField::ALL {
            line(&mut out, field.label(), format_number(self.inputs.get(field)));
        }

        section(&mut out, "Per head");
        line(&mut out, "Weight gained (kg)", format_number(r.weight_gained));
        line(&mut out, "Days on feed", format_number(r.days_on_feed));
        line(&mut out, "Feed cost per kg gained", format_number(r.feed_cost_per_kg_gained));
        line(&mut out, "Cost per kg produced", format_number(r.cost_per_kg_produced));
        line(&mut out, "Yard fee per kg", format_number(r.overhead_per_kg));
        line(&mut out, "Purchase cost", format_number(r.purchase_cost));
        line(&mut out, "Feed cost", format_number(r.total_feed_cost));
        line(&mut out, "Yard fees", format_number(r.overhead_cost));
        line(&mut out, "Total investment", format_number(r.total_investment));
        line(&mut out, "Revenue", format_number(r.revenue));
        line(&mut out, "Feed margin", format_number(r.feed_margin));
        line(&mut out, "Net margin", format_number(r.net_margin));

        section(&mut out, "Prices");
        line(&mut out, "Purchase / sale ratio", format_number(r.purchase_to_sale_ratio));
        line(&mut out, "Breakeven purchase price", format_number(r.breakeven_purchase_price));
        line(&mut out, "Breakeven sale price", format_number(r.breakeven_sale_price));
        line(
            &mut out,
            "Sale drop to breakeven",
            format_percent(r.sale_drop_to_breakeven_percent),
        );

        section(&mut out, "Returns");
        line(&mut out, "Return on investment", format_percent(r.return_on_investment_percent));
        if r.has_feeding_period() {
            line(&mut out, "Monthly return", format_percent(r.monthly_return_percent));
            line(&mut out, "Annual return", format_percent(r.annual_return_percent));
        } else {
            line(&mut out, "Monthly return", "- (no feeding period)".to_string());
            line(&mut out, "Annual return", "- (no feeding period)".to_string());
        }

        section(&mut out, "Lot");
        line(&mut out, "Head reaching sale", format_number(p.realized_heads));
        line(&mut out, "Survival rate", format_percent(p.survival_rate * 100.0));
        line(&mut out, "Lot net margin", format_number(p.aggregate_net_margin));
        line(&mut out, "Lot investment", format_number(p.aggregate_investment));

        out
    }
}

/// A sensitivity curve with the slope at the current value of its axis
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveReport<'a> {
    pub curve: &'a SensitivityCurve,
    /// Axis value the elasticity was measured at
    pub current_value: f64,
    pub elasticity: f64,
}

impl CurveReport<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:>24}  {:>14}  {:>10}  {:>12}\n",
            self.curve.axis.label(),
            "Net margin",
            "ROI",
            "Monthly"
        ));
        for (value, result) in self.curve.points() {
            out.push_str(&format!(
                "{:>24}  {:>14}  {:>10}  {:>12}\n",
                format_number(value),
                format_number(result.net_margin),
                format_percent(result.return_on_investment_percent),
                format_percent(result.monthly_return_percent)
            ));
        }
        out.push_str(&format!(
            "\nElasticity dM/d({}) at {}: {:.2}\n",
            self.curve.axis,
            format_number(self.current_value),
            self.elasticity
        ));
        out
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{},net_margin,return_on_investment_percent,monthly_return_percent,breakeven_sale_price\n",
            self.curve.axis
        ));
        for (value, r) in self.curve.points() {
            out.push_str(&format!(
                "{value},{},{},{},{}\n",
                r.net_margin,
                r.return_on_investment_percent,
                r.monthly_return_percent,
                r.breakeven_sale_price
            ));
        }
        out
    }
}

/// A margin map with its breakeven line
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapReport<'a> {
    pub map: &'a MarginMap,
    /// Breakeven sale price for each row
    pub breakeven_locus: &'a [f64],
    pub profitable_share: f64,
}

impl MapReport<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let map = self.map;
        let mut out = String::new();
        out.push_str(&format!(
            "Net margin per head: rows {}, columns {}\n",
            map.row_axis.label(),
            map.col_axis.label()
        ));

        out.push_str(&" ".repeat(10));
        for col in &map.col_values {
            out.push_str(&format!(" {:>9}", format_number(*col)));
        }
        out.push_str(&format!(" | {:>9}\n", "breakeven"));

        for (row, (value, cells)) in map.row_values.iter().zip(map.margins.rows()).enumerate() {
            out.push_str(&format!("{:>10}", format_number(*value)));
            for cell in cells {
                out.push_str(&format!(" {:>9}", format_number(*cell)));
            }
            let locus = self.breakeven_locus.get(row).copied().unwrap_or(f64::NAN);
            out.push_str(&format!(" | {:>9}\n", format_number(locus)));
        }

        if let Some((lo, hi)) = map.margins.min_max() {
            out.push_str(&format!(
                "\nRange {} .. {}, profitable cells {}\n",
                format_number(lo),
                format_number(hi),
                format_percent(self.profitable_share * 100.0)
            ));
        }
        out
    }

    pub fn to_csv(&self) -> String {
        let map = self.map;
        let mut out = String::new();
        out.push_str(&format!("{}\\{}", map.row_axis, map.col_axis));
        for col in &map.col_values {
            out.push_str(&format!(",{col}"));
        }
        out.push_str(&format!(",breakeven_{}\n", SweepAxis::SalePrice));

        for (row, (value, cells)) in map.row_values.iter().zip(map.margins.rows()).enumerate() {
            out.push_str(&value.to_string());
            for cell in cells {
                out.push_str(&format!(",{cell}"));
            }
            let locus = self.breakeven_locus.get(row).copied().unwrap_or(f64::NAN);
            out.push_str(&format!(",{locus}\n"));
        }
        out
    }
}

/// Saved scenarios as a table
pub fn scenarios_text(listings: &[ScenarioListing]) -> String {
    if listings.is_empty() {
        return "No saved scenarios\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!("{:>5}  {:<32}  {}\n", "ID", "Name", "Updated"));
    for l in listings {
        out.push_str(&format!(
            "{:>5}  {:<32}  {}\n",
            l.id,
            l.name,
            l.updated_at.strftime("%Y-%m-%d %H:%M:%S")
        ));
    }
    out
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
}

fn line(out: &mut String, label: &str, value: String) {
    out.push_str(&format!("  {label:<30} {value:>16}\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedlot_core::analysis::{AxisRange, aggregate_population, breakeven_locus, sweep_1d, sweep_2d};
    use feedlot_core::evaluate;

    #[test]
    fn test_evaluation_text_sections() {
        let inputs = ScenarioInputs::default();
        let per_head = evaluate(&inputs.validate());
        let population = aggregate_population(&per_head, 100.0, 1.0);
        let report = EvaluationReport {
            inputs: &inputs,
            per_head: &per_head,
            population: &population,
        };

        let text = report.to_text();
        for title in ["Inputs", "Per head", "Prices", "Returns", "Lot"] {
            assert!(text.contains(title), "missing section {title}");
        }
        assert!(text.contains(&format_number(per_head.net_margin)));
    }

    #[test]
    fn test_no_feeding_period_is_marked() {
        let inputs = ScenarioInputs {
            exit_weight: 200.0,
            ..Default::default()
        };
        let per_head = evaluate(&inputs.validate());
        let population = aggregate_population(&per_head, 100.0, 1.0);
        let text = EvaluationReport {
            inputs: &inputs,
            per_head: &per_head,
            population: &population,
        }
        .to_text();
        assert!(text.contains("no feeding period"));
    }

    #[test]
    fn test_evaluation_json_fields() {
        let inputs = ScenarioInputs::default();
        let per_head = evaluate(&inputs.validate());
        let population = aggregate_population(&per_head, 100.0, 1.0);
        let json = EvaluationReport {
            inputs: &inputs,
            per_head: &per_head,
            population: &population,
        }
        .to_json()
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inputs"]["salePrice"], 3_500.0);
        assert!(value["perHead"]["breakevenSalePrice"].is_number());
        assert!(value["population"]["aggregateNetMargin"].is_number());
    }

    #[test]
    fn test_curve_csv_has_one_line_per_point() {
        let base = ScenarioInputs::default().validate();
        let curve = sweep_1d(
            &base,
            &AxisRange::new(SweepAxis::SalePrice, 3_000.0, 4_000.0, 5),
        )
        .unwrap();
        let report = CurveReport {
            curve: &curve,
            current_value: 3_500.0,
            elasticity: curve.elasticity_at(3_500.0).unwrap(),
        };

        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("sale-price,net_margin"));
        assert!(lines[1].starts_with("3000,"));
        assert!(report.to_text().contains("Elasticity"));
    }

    #[test]
    fn test_map_csv_shape() {
        let base = ScenarioInputs::default().validate();
        let rows = AxisRange::new(SweepAxis::PurchasePrice, 2_500.0, 3_500.0, 3);
        let cols = AxisRange::new(SweepAxis::SalePrice, 3_000.0, 4_000.0, 4);
        let map = sweep_2d(&base, &rows, &cols).unwrap();
        let locus = breakeven_locus(&base, map.row_axis, &map.row_values);
        let report = MapReport {
            map: &map,
            breakeven_locus: &locus,
            profitable_share: map.profitable_share(),
        };

        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].split(',').count(), 1 + 4 + 1);
        assert!(lines[0].starts_with("purchase-price\\sale-price"));
        assert!(lines.iter().skip(1).all(|l| l.split(',').count() == 6));
        assert!(report.to_text().contains("breakeven"));
    }

    #[test]
    fn test_empty_scenario_list() {
        assert_eq!(scenarios_text(&[]), "No saved scenarios\n");
    }

    #[test]
    fn test_scenario_table_rows() {
        let stamp = jiff::Timestamp::from_second(0).unwrap();
        let listings = [ScenarioListing {
            id: crate::platform::ScenarioId(3),
            name: "Winter lot".to_string(),
            created_at: stamp,
            updated_at: stamp,
        }];

        let text = scenarios_text(&listings);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("ID"));
        assert!(lines[1].trim_start().starts_with("3  Winter lot"));
        assert!(lines[1].ends_with("1970-01-01 00:00:00"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_curve_text_layout() {
        let base = ScenarioInputs::default().validate();
        let curve = sweep_1d(
            &base,
            &AxisRange::new(SweepAxis::SalePrice, 3_000.0, 4_000.0, 3),
        )
        .unwrap();
        let text = CurveReport {
            curve: &curve,
            current_value: 3_500.0,
            elasticity: 460.0,
        }
        .to_text();

        // Header, one row per point, a blank line and the elasticity
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 3 + 2);
        assert_eq!(lines[4], "");
        assert!(lines[5].ends_with(": 460.00"));
    }
}
