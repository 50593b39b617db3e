use super::vector3::Vector3;

/// Axis-aligned volume of a map zone.
///
/// Horizontally the box spans `center ± half_extent`. Vertically it sits on top of
/// its reference point: `center.z ..= center.z + half_extent.z`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ZoneBox {
    pub center: Vector3<f32>,
    pub half_extent: Vector3<f32>,
}

impl ZoneBox {
    pub const fn new(center: Vector3<f32>, half_extent: Vector3<f32>) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    pub fn min(&self) -> Vector3<f32> {
        Vector3::new(
            self.center.x - self.half_extent.x,
            self.center.y - self.half_extent.y,
            self.center.z,
        )
    }

    pub fn max(&self) -> Vector3<f32> {
        self.center + self.half_extent
    }

    /// Inclusive on every face.
    pub fn contains(&self, point: &Vector3<f32>) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }
}

#[cfg(test)]
mod test {
    use super::ZoneBox;
    use crate::math::vector3::Vector3;

    fn arena_box() -> ZoneBox {
        ZoneBox::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(10.0, 10.0, 5.0))
    }

    #[test]
    fn test_contains_faces_inclusive() {
        let zone = arena_box();
        assert!(zone.contains(&Vector3::new(10.0, -10.0, 0.0)));
        assert!(zone.contains(&Vector3::new(-10.0, 10.0, 5.0)));
        assert!(zone.contains(&Vector3::new(0.0, 0.0, 2.5)));
    }

    #[test]
    fn test_vertical_range_sits_above_center() {
        let zone = arena_box();
        assert!(!zone.contains(&Vector3::new(0.0, 0.0, -0.1)));
        assert!(!zone.contains(&Vector3::new(0.0, 0.0, 5.1)));
    }

    #[test]
    fn test_outside_horizontal() {
        let zone = arena_box();
        assert!(!zone.contains(&Vector3::new(10.5, 0.0, 1.0)));
        assert!(!zone.contains(&Vector3::new(0.0, -10.5, 1.0)));
    }

    #[test]
    fn test_offset_center() {
        let zone = ZoneBox::new(Vector3::new(100.0, -50.0, 20.0), Vector3::new(5.0, 5.0, 10.0));
        assert_eq!(zone.min(), Vector3::new(95.0, -55.0, 20.0));
        assert_eq!(zone.max(), Vector3::new(105.0, -45.0, 30.0));
        assert!(zone.contains(&Vector3::new(97.0, -48.0, 29.0)));
        assert!(!zone.contains(&Vector3::new(97.0, -48.0, 10.0)));
    }
}
