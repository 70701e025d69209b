//! Plain-text breakdown table.
//!
//! Layout follows the result screen: a one-sentence summary, the chosen
//! options, then one row per visible line item with low/medium/high
//! columns, followed by the totals and cost per square foot.

use std::fmt::Write as _;

use crate::domain::estimate::{CostRange, EstimateResult};
use crate::domain::foundation::Dollars;
use crate::ports::{BreakdownRenderer, RenderError};

const COLUMN_WIDTH: usize = 17;
const COLUMN_HEADERS: [&str; 3] = ["Low estimate", "Medium estimate", "High estimate"];
const TOTAL_LABEL: &str = "Total cost";
const PER_AREA_LABEL: &str = "Cost per square foot";

/// Renders an estimate as an aligned text table.
#[derive(Debug, Clone, Default)]
pub struct TextTableRenderer {
    show_descriptions: bool,
}

impl TextTableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints each line item's explanation beneath its row.
    pub fn with_descriptions(mut self, show: bool) -> Self {
        self.show_descriptions = show;
        self
    }

    fn summary(estimate: &EstimateResult) -> String {
        format!(
            "We estimate that your project will cost {} with a likely range of {} to {}.",
            Dollars::new(estimate.mid_total()),
            Dollars::new(estimate.low_total()),
            Dollars::new(estimate.high_total()),
        )
    }

    fn options(estimate: &EstimateResult) -> String {
        format!(
            "{} ({} sq ft) | Separate water and gas: {} | Hillside: {}",
            estimate.unit_name,
            estimate.area,
            yes_no(estimate.site.include_utilities),
            yes_no(estimate.site.on_hillside),
        )
    }

    fn row(out: &mut String, label: &str, label_width: usize, amounts: CostRange) {
        let _ = writeln!(
            out,
            "{:<label_width$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
            label,
            Dollars::new(amounts.low),
            Dollars::new(amounts.mid),
            Dollars::new(amounts.high),
        );
    }
}

impl BreakdownRenderer for TextTableRenderer {
    fn render(&self, estimate: &EstimateResult) -> Result<String, RenderError> {
        let label_width = estimate
            .visible_items()
            .map(|item| item.label.len())
            .chain([TOTAL_LABEL.len(), PER_AREA_LABEL.len()])
            .max()
            .unwrap_or(0)
            + 2;

        let mut out = String::new();
        let _ = writeln!(out, "{}", Self::summary(estimate));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", Self::options(estimate));
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "{:<label_width$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
            "", COLUMN_HEADERS[0], COLUMN_HEADERS[1], COLUMN_HEADERS[2],
        );

        for item in estimate.visible_items() {
            Self::row(&mut out, &item.label, label_width, item.amounts());
            if self.show_descriptions {
                let _ = writeln!(out, "    {}", item.description());
            }
        }

        let _ = writeln!(out, "{}", "-".repeat(label_width + COLUMN_WIDTH * 3));
        Self::row(&mut out, TOTAL_LABEL, label_width, estimate.totals);
        Self::row(&mut out, PER_AREA_LABEL, label_width, estimate.cost_per_area);

        Ok(out)
    }

    fn format_name(&self) -> &'static str {
        "text"
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
