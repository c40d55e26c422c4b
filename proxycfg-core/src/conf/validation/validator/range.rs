use crate::conf::error::ValidationError;
use crate::conf::paths;
use crate::conf::validation::ValidationCtx;

#[derive(Debug, Clone)]
pub struct RangeConstraint {
    pub min: i64,
    pub max: i64,
    pub path: &'static str,
}

pub const CONNECTION_LIMIT: RangeConstraint = RangeConstraint {
    min: 0,
    max: u32::MAX as i64,
    path: paths::LISTENER_CONNECTION_LIMIT,
};

pub const FALL_THRESHOLD: RangeConstraint = RangeConstraint {
    min: 0,
    max: u32::MAX as i64,
    path: paths::HEALTH_CHECK_FALL_THRESHOLD,
};

pub const RISE_THRESHOLD: RangeConstraint = RangeConstraint {
    min: 0,
    max: u32::MAX as i64,
    path: paths::HEALTH_CHECK_RISE_THRESHOLD,
};

/// Narrow `value` into `u32`, reporting it against the constraint's path.
///
/// Out-of-range values yield 0 so the caller can keep checking other fields.
pub fn validate_u32(value: i64, constraint: &RangeConstraint, ctx: &mut ValidationCtx) -> u32 {
    if value < constraint.min {
        ctx.invalid(
            constraint.path,
            ValidationError::BelowMinimum {
                value,
                min: constraint.min,
            },
        );
        return 0;
    }
    if value > constraint.max {
        ctx.invalid(
            constraint.path,
            ValidationError::AboveMaximum {
                value,
                max: constraint.max,
            },
        );
        return 0;
    }
    u32::try_from(value).unwrap_or_default()
}
