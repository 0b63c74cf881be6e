//! Axis-aligned bounding boxes.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// An axis-aligned bounding box stored as its min and max corners.
///
/// The layout is six consecutive `f32` values (min xyz, then max xyz), which
/// is also the on-disk layout of a cell box in the serialized cell complex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Aabb {
    /// Minimum corner of the box.
    pub min: Vec3,
    /// Maximum corner of the box.
    pub max: Vec3,
}

impl Aabb {
    /// An inverted box that any call to [`Aabb::extend`] will replace.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    /// Creates a box from its corners.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The unit cube `[0, 1]³`.
    pub const fn unit() -> Self {
        Self::new(Vec3::ZERO, Vec3::ONE)
    }

    /// Returns the tight box around `points`, or `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter().peekable();
        points.peek()?;
        let mut aabb = Self::EMPTY;
        for p in points {
            aabb.extend(p);
        }
        Some(aabb)
    }

    /// Grows the box to contain `p`.
    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Returns true if no point has been added yet.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Edge lengths along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns true if `p` lies inside or on the boundary of the box.
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Maps a point given in the box's normalized `[0, 1]³` frame into the box.
    pub fn lerp(&self, t: Vec3) -> Vec3 {
        self.min + t * self.size()
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layout_is_six_floats() {
        assert_eq!(std::mem::size_of::<Aabb>(), 6 * std::mem::size_of::<f32>());
        let aabb = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&aabb));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_extend() {
        let mut aabb = Aabb::EMPTY;
        assert!(aabb.is_empty());
        aabb.extend(Vec3::new(1.0, -1.0, 0.5));
        aabb.extend(Vec3::new(-2.0, 3.0, 0.5));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, Vec3::new(-2.0, -1.0, 0.5));
        assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 0.5));
        assert_eq!(aabb.size(), Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_from_points() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());

        let aabb = Aabb::from_points([Vec3::ZERO, Vec3::ONE, Vec3::splat(0.5)]).unwrap();
        assert_eq!(aabb, Aabb::unit());
        assert!(aabb.contains(Vec3::splat(0.5)));
        assert!(aabb.contains(Vec3::ONE));
        assert!(!aabb.contains(Vec3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_lerp() {
        let aabb = Aabb::new(Vec3::new(0.0, 0.5, 1.0), Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(aabb.lerp(Vec3::ZERO), aabb.min);
        assert_eq!(aabb.lerp(Vec3::ONE), aabb.max);
        assert_eq!(aabb.lerp(Vec3::splat(0.5)), Vec3::new(0.5, 0.75, 2.0));
    }

    fn arb_point() -> impl Strategy<Value = Vec3> {
        (-1e3f32..1e3, -1e3f32..1e3, -1e3f32..1e3).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn prop_from_points_is_tight(points in prop::collection::vec(arb_point(), 1..32)) {
            let aabb = Aabb::from_points(points.iter().copied()).unwrap();
            prop_assert!(!aabb.is_empty());
            prop_assert!(points.iter().all(|&p| aabb.contains(p)));
            for axis in 0..3 {
                prop_assert!(points.iter().any(|p| p[axis] == aabb.min[axis]));
                prop_assert!(points.iter().any(|p| p[axis] == aabb.max[axis]));
            }
        }

        #[test]
        fn prop_lerp_stays_inside(
            a in arb_point(),
            b in arb_point(),
            t in (0f32..=1.0, 0f32..=1.0, 0f32..=1.0),
        ) {
            let aabb = Aabb::from_points([a, b]).unwrap();
            let p = aabb.lerp(Vec3::new(t.0, t.1, t.2));
            let slack = Vec3::splat(1e-3);
            prop_assert!(p.cmpge(aabb.min - slack).all() && p.cmple(aabb.max + slack).all());
        }
    }
}
