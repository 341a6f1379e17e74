/// Default scenario: a new wide-body aircraft program.
pub const DEFAULT_NEW_PLANT_COST: f64 = 1.25;
pub const DEFAULT_RD_COST: f64 = 1.5;
pub const DEFAULT_MARKETING_COST: f64 = 0.025;
pub const DEFAULT_UNIT_PRODUCTION_COST: f64 = 65.0;
pub const DEFAULT_PRICE_PER_PLANE: f64 = 105.0;

/// Fixed costs are entered in billions, per-plane figures in millions.
pub const BN_TO_M: f64 = 1000.0;

/// Chart resolution: samples at 0, 0.1x, ..., 2.0x of the break-even volume.
pub const CHART_SAMPLES: usize = 21;
