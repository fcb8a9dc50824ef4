use crate::bounding_volume::BoundingVolume;
use crate::math::{Real, ZERO_TOLERANCE};
use crate::picking::{MeshHit, PickResult, Pickable, PickingOptions};
use crate::query::{ContainmentType, LineIntersection, Ray};
use std::cmp::Ordering;

/// Compares two distances, those closer than [`ZERO_TOLERANCE`] being equal.
///
/// This is not transitive: `a ≈ b` and `b ≈ c` does not imply `a ≈ c`.
#[inline]
fn compare_distances(a: Real, b: Real) -> Ordering {
    if abs_diff_eq!(a, b, epsilon = ZERO_TOLERANCE) {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// The default order of pick results.
///
/// Results are ordered by mesh hit distance when both carry one, by bounding hit
/// distance otherwise. Distances within [`ZERO_TOLERANCE`] compare equal, so this order
/// is not transitive near that threshold.
pub fn default_pick_order<P: ?Sized>(a: &PickResult<P>, b: &PickResult<P>) -> Ordering {
    match (a.mesh_hit(), b.mesh_hit()) {
        (Some(ha), Some(hb)) => compare_distances(ha.distance(), hb.distance()),
        _ => compare_distances(a.bounding_hit().distance, b.bounding_hit().distance),
    }
}

// `slice::sort_by` may panic on orders that are not total. This stable insertion sort
// tolerates them.
fn insertion_sort_by<T>(elts: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    for i in 1..elts.len() {
        let mut j = i;

        while j > 0 && compare(&elts[j - 1], &elts[j]) == Ordering::Greater {
            elts.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// A ray-picking query accumulating the candidates hit by its ray.
///
/// The query is either empty, unsorted after some successful [`PickQuery::add_pick`],
/// or sorted. Sorting is idempotent and only performed again after new results were
/// added. A query is reused by calling [`PickQuery::clear`].
pub struct PickQuery<'a, P: ?Sized> {
    ray: Ray,
    options: PickingOptions,
    max_distance: Real,
    results: Vec<PickResult<'a, P>>,
    sorted: bool,
    mesh_hits: Vec<MeshHit>,
}

impl<'a, P: ?Sized + Pickable> PickQuery<'a, P> {
    /// Creates an empty query along `ray`.
    pub fn new(ray: Ray, options: PickingOptions) -> Self {
        Self {
            ray,
            options,
            max_distance: Real::MAX,
            results: Vec::new(),
            sorted: false,
            mesh_hits: Vec::new(),
        }
    }

    /// The ray of this query.
    #[inline]
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Changes the ray of this query and removes all its results.
    pub fn set_ray(&mut self, ray: Ray) {
        self.ray = ray;
        self.clear();
    }

    /// The options of this query.
    #[inline]
    pub fn options(&self) -> PickingOptions {
        self.options
    }

    /// Changes the options used by the next calls to [`PickQuery::add_pick`].
    #[inline]
    pub fn set_options(&mut self, options: PickingOptions) {
        self.options = options;
    }

    /// The distance along the ray beyond which hits are ignored.
    #[inline]
    pub fn max_distance(&self) -> Real {
        self.max_distance
    }

    /// Ignores the hits farther than `max_distance` in the next calls to
    /// [`PickQuery::add_pick`].
    #[inline]
    pub fn set_max_distance(&mut self, max_distance: Real) {
        self.max_distance = max_distance;
    }

    /// Tests `candidate` against the ray and records it if it is hit.
    ///
    /// The bounding volume of the candidate is tested first. Its mesh is then tested
    /// only if the bounding volume is hit and [`PickingOptions::PRIMITIVE_PICKING`] is
    /// set, in which case the candidate is recorded only if its mesh is hit too.
    pub fn add_pick(&mut self, candidate: &'a P) -> bool {
        let Some(bounding_hit) = self.bounding_hit(candidate) else {
            return false;
        };

        let mesh_hit = if self.options.contains(PickingOptions::PRIMITIVE_PICKING) {
            let Some(hit) = self.mesh_hit(candidate) else {
                log::trace!(
                    "Pick candidate rejected by its mesh after a bounding hit at {}.",
                    bounding_hit.distance
                );
                return false;
            };
            Some(hit)
        } else {
            None
        };

        self.results.push(PickResult {
            object: candidate,
            bounding_hit,
            mesh_hit,
        });
        self.sorted = false;
        true
    }

    fn bounding_hit(&self, candidate: &P) -> Option<LineIntersection> {
        let bounding = candidate.world_bounding();

        let hit = if bounding.contains_point(&self.ray.origin) == ContainmentType::Inside {
            LineIntersection::on_ray(&self.ray, 0.0)
        } else {
            bounding.intersects_ray(&self.ray).closest()?
        };

        (hit.distance <= self.max_distance).then_some(hit)
    }

    fn mesh_hit(&mut self, candidate: &P) -> Option<MeshHit> {
        let ignore_backfaces = self.options.contains(PickingOptions::IGNORE_BACKFACES);
        self.mesh_hits.clear();

        if !candidate.intersect_mesh(&self.ray, ignore_backfaces, &mut self.mesh_hits) {
            return None;
        }

        self.mesh_hits
            .iter()
            .filter(|hit| hit.distance() <= self.max_distance)
            .min_by(|a, b| a.distance().total_cmp(&b.distance()))
            .copied()
    }

    /// Sorts the results with [`default_pick_order`].
    ///
    /// Does nothing if the results are already sorted.
    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }

        log::trace!("Sorting {} pick results.", self.results.len());
        insertion_sort_by(&mut self.results, default_pick_order);
        self.sorted = true;
    }

    /// Sorts the results with a custom order.
    ///
    /// The results are sorted again even if they were already sorted.
    pub fn sort_by(&mut self, compare: impl FnMut(&PickResult<'a, P>, &PickResult<'a, P>) -> Ordering) {
        insertion_sort_by(&mut self.results, compare);
        self.sorted = true;
    }

    /// Are the results sorted?
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// The closest result, after sorting the results if needed.
    pub fn closest_pick(&mut self) -> Option<&PickResult<'a, P>> {
        self.sort();
        self.results.first()
    }

    /// The farthest result, after sorting the results if needed.
    pub fn farthest_pick(&mut self) -> Option<&PickResult<'a, P>> {
        self.sort();
        self.results.last()
    }

    /// Removes all the results.
    pub fn clear(&mut self) {
        self.results.clear();
        self.sorted = false;
    }

    /// The results, in insertion order unless they were sorted.
    #[inline]
    pub fn results(&self) -> &[PickResult<'a, P>] {
        &self.results
    }

    /// The number of results.
    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Is there no result?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates through the results.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &PickResult<'a, P>> {
        self.results.iter()
    }
}
