// TOML configuration, serializable
use serde::{Serialize, Deserialize};

// serde default functions
fn default_0() -> f64 { 0.0 }
fn default_bf() -> f64 { 1_000_000.0 }
fn default_am() -> f64 { 0.85 }
fn default_ur() -> f64 { 0.75 }
fn default_si() -> f64 { 0.80 }
fn default_et() -> f64 { 0.90 }
fn default_ci() -> f64 { 100_000.0 }
fn default_cd() -> f64 { 300_000.0 }
fn default_co() -> f64 { 150_000.0 }
fn default_cc() -> f64 { 100_000.0 }
fn default_cm() -> f64 { 100_000.0 }
fn default_cch() -> f64 { 50_000.0 }
fn default_samples() -> usize { 1000 }
fn default_sigma() -> f64 { 0.10 }
fn default_seed() -> u64 { 42 }


// Input field labels, as shown on the entry form
pub mod labels {
    pub const LABOR: &str = "Labor Cost Savings ($)";
    pub const REVENUE: &str = "Revenue Uplift ($)";
    pub const PRODUCTIVITY: &str = "Productivity Gains ($)";
    pub const ERROR: &str = "Error Reduction Savings ($)";
    pub const DELIVERY: &str = "Time to Delivery Savings ($)";
    pub const STRATEGIC: &str = "Strategic Value ($)";

    pub const MODEL_FEES: &str = "Model/API Fees ($)";
    pub const INFRA: &str = "Infrastructure Costs ($)";
    pub const DEV: &str = "Development & Integration ($)";
    pub const TUNING: &str = "Fine-tuning / Customization ($)";
    pub const PERSONNEL: &str = "Personnel Costs ($)";
    pub const COMPLIANCE: &str = "Security & Compliance ($)";
    pub const MAINTENANCE: &str = "Ongoing Maintenance ($)";
    pub const CHANGE: &str = "Change Management ($)";

    pub const ACCURACY: &str = "Accuracy Multiplier (A_m)";
    pub const ADOPTION: &str = "Adoption Rate (U_r)";
    pub const INTEGRATION: &str = "Integration Score (S_i)";
    pub const EFFICIENCY: &str = "Time Efficiency (E_t)";
    pub const DEV_COST: &str = "Development Cost (C_d)";
    pub const MAINT_COST: &str = "Maintenance Cost (C_m)";
}


// Valid range contract for one input field.
// Enforcement belongs to the input collector; the engines assume
// in-range values and perform no further validation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}
impl Bounds {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}


// Additive scenario: independent annualized dollar line items.
// Every field is non-negative, defaults to 0, and has no upper bound.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineItemModel {
    // Benefits
    #[serde(default = "default_0")]
    pub labor_savings: f64,
    #[serde(default = "default_0")]
    pub revenue_uplift: f64,
    #[serde(default = "default_0")]
    pub productivity_gains: f64,
    #[serde(default = "default_0")]
    pub error_reduction: f64,
    #[serde(default = "default_0")]
    pub delivery_savings: f64,
    #[serde(default = "default_0")]
    pub strategic_value: f64,

    // Costs
    #[serde(default = "default_0")]
    pub model_fees: f64,
    #[serde(default = "default_0")]
    pub infra_costs: f64,
    #[serde(default = "default_0")]
    pub dev_integration: f64,
    #[serde(default = "default_0")]
    pub fine_tuning: f64,
    #[serde(default = "default_0")]
    pub personnel_costs: f64,
    #[serde(default = "default_0")]
    pub compliance_costs: f64,
    #[serde(default = "default_0")]
    pub maintenance_costs: f64,
    #[serde(default = "default_0")]
    pub change_mgmt: f64,
}
impl Default for LineItemModel {
    fn default() -> Self {
        Self{
            labor_savings: 0.0,
            revenue_uplift: 0.0,
            productivity_gains: 0.0,
            error_reduction: 0.0,
            delivery_savings: 0.0,
            strategic_value: 0.0,
            model_fees: 0.0,
            infra_costs: 0.0,
            dev_integration: 0.0,
            fine_tuning: 0.0,
            personnel_costs: 0.0,
            compliance_costs: 0.0,
            maintenance_costs: 0.0,
            change_mgmt: 0.0,
        }
    }
}


// Monte Carlo settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimSettings {
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_sigma")]
    pub sigma: f64,    // Relative standard deviation of each driver
    #[serde(default = "default_seed")]
    pub seed: u64,
}
impl SimSettings {
    fn new() -> SimSettings {
        SimSettings{samples: 1000, sigma: 0.10, seed: 42}
    }
}
impl Default for SimSettings {
    fn default() -> Self {
        SimSettings::new()
    }
}


// Multiplicative scenario: one forecast benefit scaled by quality
// factors in [0,1], plus independent dollar cost items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FactorModel {
    #[serde(default = "default_bf")]
    pub b_f: f64,   // Forecasted benefits
    #[serde(default = "default_am")]
    pub a_m: f64,   // Accuracy multiplier
    #[serde(default = "default_ur")]
    pub u_r: f64,   // User adoption rate
    #[serde(default = "default_si")]
    pub s_i: f64,   // Integration fit score
    #[serde(default = "default_et")]
    pub e_t: f64,   // Time efficiency factor

    #[serde(default = "default_ci")]
    pub c_i: f64,   // Infrastructure
    #[serde(default = "default_cd")]
    pub c_d: f64,   // Development & integration
    #[serde(default = "default_co")]
    pub c_o: f64,   // Ongoing operations
    #[serde(default = "default_cc")]
    pub c_c: f64,   // Compliance & security
    #[serde(default = "default_cm")]
    pub c_m: f64,   // Maintenance & upgrades
    #[serde(default = "default_cch")]
    pub c_ch: f64,  // Change management

    #[serde(default = "SimSettings::new")]
    pub settings: SimSettings,
}
impl Default for FactorModel {
    fn default() -> Self {
        Self{
            b_f: 1_000_000.0,
            a_m: 0.85,
            u_r: 0.75,
            s_i: 0.80,
            e_t: 0.90,
            c_i: 100_000.0,
            c_d: 300_000.0,
            c_o: 150_000.0,
            c_c: 100_000.0,
            c_m: 100_000.0,
            c_ch: 50_000.0,
            settings: SimSettings::new(),
        }
    }
}
impl FactorModel {
    // Slider contract for every input field plus the sample count.
    // Defaults here must match the serde defaults above.
    pub fn bounds() -> Vec<(&'static str, Bounds)> {
        vec![
            ("b_f", Bounds{min: 10_000.0, max: 10_000_000.0, default: 1_000_000.0, step: 10_000.0}),
            ("a_m", Bounds{min: 0.0, max: 1.0, default: 0.85, step: 0.01}),
            ("u_r", Bounds{min: 0.0, max: 1.0, default: 0.75, step: 0.01}),
            ("s_i", Bounds{min: 0.0, max: 1.0, default: 0.80, step: 0.01}),
            ("e_t", Bounds{min: 0.0, max: 1.0, default: 0.90, step: 0.01}),
            ("c_i", Bounds{min: 1_000.0, max: 2_000_000.0, default: 100_000.0, step: 1_000.0}),
            ("c_d", Bounds{min: 1_000.0, max: 5_000_000.0, default: 300_000.0, step: 1_000.0}),
            ("c_o", Bounds{min: 1_000.0, max: 2_000_000.0, default: 150_000.0, step: 1_000.0}),
            ("c_c", Bounds{min: 1_000.0, max: 1_000_000.0, default: 100_000.0, step: 1_000.0}),
            ("c_m", Bounds{min: 1_000.0, max: 1_000_000.0, default: 100_000.0, step: 1_000.0}),
            ("c_ch", Bounds{min: 1_000.0, max: 1_000_000.0, default: 50_000.0, step: 1_000.0}),
            ("n_sim", Bounds{min: 100.0, max: 10_000.0, default: 1_000.0, step: 100.0}),
        ]
    }
}


// Scenario file may hold either calculator variant.
// The two variants are independent formula sets with different
// zero-cost conventions; they are deliberately not unified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum RoiModel {
    LineItems(LineItemModel),
    Factors(FactorModel),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bounds_table() {
        let model = FactorModel::default();
        let bounds = FactorModel::bounds();
        let get = |name: &str| bounds.iter().find(|(n, _)| *n == name).unwrap().1.clone();
        assert_eq!(get("b_f").default, model.b_f);
        assert_eq!(get("a_m").default, model.a_m);
        assert_eq!(get("u_r").default, model.u_r);
        assert_eq!(get("s_i").default, model.s_i);
        assert_eq!(get("e_t").default, model.e_t);
        assert_eq!(get("c_i").default, model.c_i);
        assert_eq!(get("c_d").default, model.c_d);
        assert_eq!(get("c_o").default, model.c_o);
        assert_eq!(get("c_c").default, model.c_c);
        assert_eq!(get("c_m").default, model.c_m);
        assert_eq!(get("c_ch").default, model.c_ch);
        assert_eq!(get("n_sim").default, model.settings.samples as f64);
    }

    #[test]
    fn bounds_clamp() {
        let b = Bounds{min: 1_000.0, max: 2_000_000.0, default: 100_000.0, step: 1_000.0};
        assert_eq!(b.clamp(0.0), 1_000.0);
        assert_eq!(b.clamp(5_000_000.0), 2_000_000.0);
        assert_eq!(b.clamp(250_000.0), 250_000.0);
    }

    #[test]
    fn factor_toml_roundtrip() {
        let model = RoiModel::Factors(FactorModel::default());
        let toml_str = toml::to_string(&model).unwrap();
        let back = toml::from_str::<RoiModel>(&toml_str).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml_str = "[Factors]\nb_f = 2000000.0\nc_d = 500000.0\n";
        let model = toml::from_str::<RoiModel>(toml_str).unwrap();
        match model {
            RoiModel::Factors(m) => {
                assert_eq!(m.b_f, 2_000_000.0);
                assert_eq!(m.c_d, 500_000.0);
                assert_eq!(m.a_m, 0.85);
                assert_eq!(m.settings.samples, 1000);
                assert_eq!(m.settings.seed, 42);
            },
            _ => panic!(),
        }
    }

    #[test]
    fn line_items_default_to_zero() {
        let toml_str = "[LineItems]\nlabor_savings = 50000.0\n";
        let model = toml::from_str::<RoiModel>(toml_str).unwrap();
        match model {
            RoiModel::LineItems(m) => {
                assert_eq!(m.labor_savings, 50_000.0);
                assert_eq!(m.revenue_uplift, 0.0);
                assert_eq!(m.change_mgmt, 0.0);
            },
            _ => panic!(),
        }
    }
}
