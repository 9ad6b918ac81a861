//! Validation errors

use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt::Display;

/// All the ways a sprocket arrangement can fail to admit a belt.
///
/// Every variant is detected during one-time construction; a
/// [`ChainDrive`](crate::chain::ChainDrive) that exists is always fully
/// consistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DegenerateConfiguration {
    /// (TooFewSprockets) A belt needs at least two sprockets
    TooFewSprockets(usize),
    /// (NonPositiveRadius) A sprocket radius is zero or negative
    NonPositiveRadius { index: usize, radius: Real },
    /// (CoincidentCenters) Two cyclically adjacent centers coincide
    CoincidentCenters(Point2<Real>),
    /// (TangentInfeasible) An adjacent pair of circles overlaps; `reach`
    /// is their radius sum, which must not exceed `distance` for both
    /// circles to carry the belt
    TangentInfeasible {
        from: usize,
        to: usize,
        distance: Real,
        reach: Real,
    },
}

impl Display for DegenerateConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateConfiguration::TooFewSprockets(count) => write!(
                f,
                "(TooFewSprockets) A belt needs at least two sprockets, got: {}",
                count
            ),
            DegenerateConfiguration::NonPositiveRadius { index, radius } => write!(
                f,
                "(NonPositiveRadius) Sprocket {} has non-positive radius: {}",
                index, radius
            ),
            DegenerateConfiguration::CoincidentCenters(center) => write!(
                f,
                "(CoincidentCenters) Two adjacent sprocket centers coincide at: {}",
                center
            ),
            DegenerateConfiguration::TangentInfeasible {
                from,
                to,
                distance,
                reach,
            } => write!(
                f,
                "(TangentInfeasible) Sprockets {} and {} are {} apart but the tangent needs at least {}",
                from, to, distance, reach
            ),
        }
    }
}
