use crate::utils::error::{MixError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(MixError::Range {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
