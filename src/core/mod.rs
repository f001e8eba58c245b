pub mod calculator;
pub mod risk;
pub mod validator;

pub use calculator::{calculate, CalcError};
pub use risk::{adjusted_ratio, classify_risk};
pub use validator::{
    validate, validate_params, validate_with_min_distance, ErrorSlot, ValidationErrors,
    MIN_DISTANCE_RATIO,
};
