use crate::constants::{
    IV_FLAG_THRESHOLD, PUT_CALL_FLAG_THRESHOLD, SKEW_FLAG_THRESHOLD, VOLUME_OI_FLAG_THRESHOLD,
};
use crate::models::ScoreComponents;

/// Per-component highlight state for the score card grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentFlags {
    pub volume_oi_ratio: bool,
    pub put_call_ratio: bool,
    pub iv_vs_historical: bool,
    pub skew_analysis: bool,
}

/// Compare each component against its fixed display threshold.
///
/// Strictly-greater comparisons. Any numeric input is accepted, zero and
/// negative included; a value sitting exactly on its threshold is not
/// flagged.
pub fn flag_components(components: &ScoreComponents) -> ComponentFlags {
    ComponentFlags {
        volume_oi_ratio: components.volume_oi_ratio > VOLUME_OI_FLAG_THRESHOLD,
        put_call_ratio: components.put_call_ratio > PUT_CALL_FLAG_THRESHOLD,
        iv_vs_historical: components.iv_vs_historical > IV_FLAG_THRESHOLD,
        skew_analysis: components.skew_analysis > SKEW_FLAG_THRESHOLD,
    }
}
