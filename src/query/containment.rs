use crate::math::Real;

/// How a shape relates to another shape it is tested against.
///
/// Partial overlap is a first-class outcome distinct from both total cases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainmentType {
    /// The shapes are disjoint.
    Outside,
    /// The tested shape lies entirely inside the other one.
    Inside,
    /// The shapes overlap but neither contains the other entirely.
    Intersects,
}

impl ContainmentType {
    /// Is this `Inside` or `Intersects`?
    #[inline]
    pub fn overlaps(self) -> bool {
        self != ContainmentType::Outside
    }
}

/// On which side of a plane a shape lies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaneSide {
    /// Entirely on the side the plane normal points to.
    Front,
    /// Entirely on the side opposite to the plane normal.
    Back,
    /// Straddling or touching the plane.
    Intersects,
}

impl PlaneSide {
    /// Classifies a single signed distance.
    ///
    /// A signed distance of exactly zero is `Intersects`, not `Front` nor `Back`.
    #[inline]
    pub fn from_signed_distance(dist: Real) -> Self {
        if dist > 0.0 {
            PlaneSide::Front
        } else if dist < 0.0 {
            PlaneSide::Back
        } else {
            PlaneSide::Intersects
        }
    }

    /// Classifies a shape whose signed distances to the plane span `[min, max]`.
    #[inline]
    pub fn from_signed_interval(min: Real, max: Real) -> Self {
        if min > 0.0 {
            PlaneSide::Front
        } else if max < 0.0 {
            PlaneSide::Back
        } else {
            PlaneSide::Intersects
        }
    }
}
