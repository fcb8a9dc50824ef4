//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::corner_fallback::{corner_fallback_contains, corner_fallback_intersects};
pub use self::cov::{center_cov, cov};
pub use self::obb::{obb, principal_axes};
pub use self::scaled_transform::{max_abs_scale, scaled_transform_point};
pub use self::support_point::{point_cloud_project_on_axis, point_cloud_support_point_id};

mod center;
mod corner_fallback;
mod cov;
mod obb;
mod scaled_transform;
mod support_point;
