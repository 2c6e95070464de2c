//! Business Calibration Module
//!
//! Mines revenue, margin, growth and market position from a narrative and uses
//! the resulting business-health score to correct strategic scores that
//! contradict the underlying fundamentals.

pub mod calibrator;
pub mod config;
pub mod context;

pub use calibrator::{apply_business_calibration, BusinessCalibrator, CalibratedResult, NO_CALIBRATION_REASON};
pub use config::CalibrationConfig;
pub use context::{
    business_health_score, mine_business_context, BusinessContext, HealthTier, MarketPosition,
    ProfitabilityTier,
};
