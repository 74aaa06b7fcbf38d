// Structures for calculation results
use tabled::{builder::Builder, settings::Style};

use crate::stats;


// Currency display, $#,##0.00
pub fn dollars(value: f64) -> String {
    if !value.is_finite() {
        return format!("${:.2}", value);
    }
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}


// Additive engine output. Ratio is a percentage and goes to positive
// infinity on zero investment; payback goes to infinity on zero benefit.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItemResult {
    pub total_benefits: f64,
    pub total_costs: f64,
    pub roi_percent: f64,
    pub payback_months: f64,
}
impl LineItemResult {
    pub fn summary(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Metric", "Value"]);
        builder.push_record(vec!["Total Annualized Benefits".to_string(), dollars(self.total_benefits)]);
        builder.push_record(vec!["Total Investment".to_string(), dollars(self.total_costs)]);
        builder.push_record(vec!["ROI".to_string(), format!("{:.2} %", self.roi_percent)]);
        builder.push_record(vec!["Payback Period".to_string(), format!("{:.1} months", self.payback_months)]);
        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }
}


// Multiplicative engine output. Ratio form, not percent, and defined
// as exactly 0 on zero investment (unlike the additive engine).
#[derive(Clone, Debug, PartialEq)]
pub struct FactorResult {
    pub total_benefits: f64,
    pub total_costs: f64,
    pub roi_ratio: f64,
}
impl FactorResult {
    pub fn summary(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Metric", "Value"]);
        builder.push_record(vec!["Total Forecasted Benefits".to_string(), dollars(self.total_benefits)]);
        builder.push_record(vec!["Total Costs".to_string(), dollars(self.total_costs)]);
        builder.push_record(vec!["Calculated ROI".to_string(), format!("{:.2} %", self.roi_ratio * 100.0)]);
        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }
}


// One ranked driver. Sequences are ordered by descending |amount|,
// ties keeping their listing order.
#[derive(Clone, Debug, PartialEq)]
pub struct SensitivityEntry {
    pub name: String,
    pub amount: f64,
}

pub fn sensitivity_table(entries: &[SensitivityEntry]) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["Driver", "Impact"]);
    for entry in entries {
        builder.push_record(vec![entry.name.clone(), dollars(entry.amount)]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}


#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,     // Left edge of each bin
    pub counts: Vec<usize>,
    pub density: Vec<f64>,   // Density of each bin
    pub width: f64,          // Width of all bins
}
impl Histogram {
    pub fn new(samples: &[f64], bins: usize) -> Self {
        if samples.is_empty() || bins == 0 {
            return Self{edges: vec![], counts: vec![], density: vec![], width: 0.0};
        }
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mut width = (max - min) / bins as f64;
        if width <= 0.0 {
            // All samples equal; everything lands in the first bin
            width = 1.0;
        }
        let edges: Vec<f64> = (0..bins).map(|i| min + i as f64 * width).collect();
        let mut counts: Vec<usize> = vec![0; bins];
        for samp in samples.iter() {
            let idx = (((samp - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        let n = samples.len() as f64;
        let density: Vec<f64> = counts.iter().map(|c| *c as f64 / n / width).collect();
        Self{edges, counts, density, width}
    }
}


// Uncertainty engine output: the full ROI sample, its summary
// statistics, and the binned distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloResult {
    pub samples: Vec<f64>,  // Simulated ROI ratios, non-finite trials clamped to 0
    pub mean: f64,
    pub pct5: f64,
    pub pct95: f64,
    pub std_dev: f64,
    pub hist: Histogram,
}
impl MonteCarloResult {
    pub fn new(samples: Vec<f64>) -> Self {
        let mean = stats::mean(&samples);
        let std_dev = stats::std_dev(&samples);
        let pct5 = stats::percentile(&samples, 5.0);
        let pct95 = stats::percentile(&samples, 95.0);
        let hist = Histogram::new(&samples, 50);
        Self{samples, mean, pct5, pct95, std_dev, hist}
    }
    pub fn summary(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Statistic", "Value"]);
        builder.push_record(vec!["Mean ROI".to_string(), format!("{:.2} %", self.mean * 100.0)]);
        builder.push_record(vec!["5th Percentile ROI".to_string(), format!("{:.2} %", self.pct5 * 100.0)]);
        builder.push_record(vec!["95th Percentile ROI".to_string(), format!("{:.2} %", self.pct95 * 100.0)]);
        builder.push_record(vec!["Std. Deviation".to_string(), format!("{:.2} %", self.std_dev * 100.0)]);
        builder.push_record(vec!["Samples".to_string(), self.samples.len().to_string()]);
        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollar_format() {
        assert_eq!(dollars(0.0), "$0.00");
        assert_eq!(dollars(1234567.891), "$1,234,567.89");
        assert_eq!(dollars(-42.5), "-$42.50");
        assert_eq!(dollars(999.0), "$999.00");
        assert_eq!(dollars(1000.0), "$1,000.00");
    }

    #[test]
    fn histogram_counts_sum_to_n() {
        let samples: Vec<f64> = (0..1000).map(|i| (i as f64).sin()).collect();
        let hist = Histogram::new(&samples, 50);
        assert_eq!(hist.counts.iter().sum::<usize>(), 1000);
        assert_eq!(hist.edges.len(), 50);
        // Density integrates to ~1
        let total: f64 = hist.density.iter().map(|d| d * hist.width).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_constant_samples() {
        let hist = Histogram::new(&vec![0.25; 100], 50);
        assert_eq!(hist.counts[0], 100);
        assert!(hist.counts[1..].iter().all(|c| *c == 0));
    }

    #[test]
    fn histogram_empty() {
        let hist = Histogram::new(&[], 50);
        assert!(hist.counts.is_empty());
    }

    #[test]
    fn monte_carlo_summary_stats() {
        let samples: Vec<f64> = (0..101).map(|i| i as f64 / 100.0).collect();
        let result = MonteCarloResult::new(samples);
        assert!((result.mean - 0.5).abs() < 1e-12);
        assert!((result.pct5 - 0.05).abs() < 1e-12);
        assert!((result.pct95 - 0.95).abs() < 1e-12);
    }
}
