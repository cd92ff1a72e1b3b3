use std::cmp::Ordering;

/// Absolute tolerance, covers values close to zero where ULPs are meaningless
pub const FPA_EPSILON: f32 = 4.0 * f32::EPSILON;
/// Relative tolerance in units in the last place
pub const FPA_ULPS: i32 = 4;

///Floating point approximation: an `f32` compared with a tolerance through [`float_cmp::approx_eq!()`].
///Ordering is exact except for values within tolerance of each other, which compare as equal.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(
            f32,
            self.0,
            other.0,
            epsilon = FPA_EPSILON,
            ulps = FPA_ULPS
        )
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self == other {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
