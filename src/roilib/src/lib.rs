// AI ROI Calculator Library Functions
mod stats;
pub mod cfg;
pub mod result;
pub mod sampling;

use crate::cfg::{labels, LineItemModel, FactorModel, RoiModel};
use crate::result::{LineItemResult, FactorResult, SensitivityEntry, MonteCarloResult, sensitivity_table};
use crate::sampling::Sampler;


impl LineItemModel {
    pub fn total_benefits(&self) -> f64 {
        self.labor_savings
            + self.revenue_uplift
            + self.productivity_gains
            + self.error_reduction
            + self.delivery_savings
            + self.strategic_value
    }
    pub fn total_costs(&self) -> f64 {
        self.model_fees
            + self.infra_costs
            + self.dev_integration
            + self.fine_tuning
            + self.personnel_costs
            + self.compliance_costs
            + self.maintenance_costs
            + self.change_mgmt
    }
    pub fn calculate(&self) -> LineItemResult {
        let total_benefits = self.total_benefits();
        let total_costs = self.total_costs();
        // Zero investment reads as an infinite return; zero benefit
        // means payback never occurs.
        let roi_percent = if total_costs > 0.0 {
            (total_benefits - total_costs) / total_costs * 100.0
        } else {
            f64::INFINITY
        };
        let payback_months = if total_benefits > 0.0 {
            total_costs / (total_benefits / 12.0)
        } else {
            f64::INFINITY
        };
        LineItemResult{total_benefits, total_costs, roi_percent, payback_months}
    }
}


impl FactorModel {
    pub fn total_benefits(&self) -> f64 {
        self.b_f * self.a_m * self.u_r * self.s_i * self.e_t
    }
    pub fn total_costs(&self) -> f64 {
        self.c_i + self.c_d + self.c_o + self.c_c + self.c_m + self.c_ch
    }
    pub fn calculate(&self) -> FactorResult {
        let total_benefits = self.total_benefits();
        let total_costs = self.total_costs();
        // Zero cost yields ROI of exactly 0 here, not infinity as in
        // the additive engine. The two conventions differ on purpose.
        let roi_ratio = if total_costs > 0.0 {
            (total_benefits - total_costs) / total_costs
        } else {
            0.0
        };
        FactorResult{total_benefits, total_costs, roi_ratio}
    }

    // Rank the drivers with the most influence at the current
    // operating point. For each quality factor the score is
    // factor * (total_benefits / factor): total benefits restated, or
    // 0 when the factor is 0. The two named costs score their raw
    // value. Kept as-is from the reference formulas.
    pub fn sensitivity(&self) -> Vec<SensitivityEntry> {
        let benefits = self.total_benefits();
        let factors = [
            (labels::ACCURACY, self.a_m),
            (labels::ADOPTION, self.u_r),
            (labels::INTEGRATION, self.s_i),
            (labels::EFFICIENCY, self.e_t),
        ];
        let mut entries: Vec<SensitivityEntry> = factors.iter().map(|(name, value)| {
            let amount = if *value != 0.0 { value * (benefits / value) } else { 0.0 };
            SensitivityEntry{name: name.to_string(), amount}
        }).collect();
        entries.push(SensitivityEntry{name: labels::DEV_COST.to_string(), amount: self.c_d});
        entries.push(SensitivityEntry{name: labels::MAINT_COST.to_string(), amount: self.c_m});
        // Stable sort keeps listing order on ties
        entries.sort_by(|a, b| b.amount.abs().partial_cmp(&a.amount.abs()).unwrap());
        entries
    }

    // Propagate per-driver uncertainty into an ROI distribution.
    // Each driver is sampled around its point estimate with relative
    // spread settings.sigma; benefits multiply per trial and ROI is
    // computed against that trial's cost draw. Trials with non-finite
    // ROI (near-zero cost draws) clamp to 0.
    pub fn monte_carlo(&self) -> MonteCarloResult {
        let n = self.settings.samples;
        let sigma = self.settings.sigma;
        let total_costs = self.total_costs();

        let mut sampler = Sampler::seeded(self.settings.seed);
        let benefits = sampler.normal(self.b_f, self.b_f * sigma, n);
        let accuracy = sampler.normal(self.a_m, self.a_m * sigma, n);
        let adoption = sampler.normal(self.u_r, self.u_r * sigma, n);
        let integration = sampler.normal(self.s_i, self.s_i * sigma, n);
        let efficiency = sampler.normal(self.e_t, self.e_t * sigma, n);
        let costs = sampler.normal(total_costs, total_costs * sigma, n);

        let mut samples: Vec<f64> = Vec::with_capacity(n);
        for i in 0..n {
            let b = benefits[i] * accuracy[i] * adoption[i] * integration[i] * efficiency[i];
            let roi = (b - costs[i]) / costs[i];
            samples.push(if roi.is_finite() { roi } else { 0.0 });
        }
        MonteCarloResult::new(samples)
    }
}


impl RoiModel {
    pub fn load_toml(config: &str) -> Result<RoiModel, Box<dyn std::error::Error>> {
        let model = toml::from_str::<RoiModel>(config)?;
        Ok(model)
    }
    pub fn get_config(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
    pub fn report(&self) -> String {
        match self {
            RoiModel::LineItems(model) => model.calculate().summary(),
            RoiModel::Factors(model) => {
                let mut out = String::from("ROI Summary\n");
                out.push_str(&model.calculate().summary());
                out.push_str("\n\nSensitivity (Top Drivers)\n");
                out.push_str(&sensitivity_table(&model.sensitivity()));
                out.push_str("\n\nMonte Carlo\n");
                out.push_str(&model.monte_carlo().summary());
                out
            },
        }
    }
}
