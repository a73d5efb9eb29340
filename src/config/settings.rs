pub struct EfficiencyWeights {
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub spg: f64,
    pub bpg: f64,
}

impl Default for EfficiencyWeights {
    fn default() -> Self {
        Self {
            ppg: 1.0,
            rpg: 1.2,
            apg: 1.5,
            spg: 2.0,
            bpg: 2.0,
        }
    }
}

pub struct AppConfig {
    pub rating: EfficiencyWeights,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: EfficiencyWeights::default(),
        }
    }
}
