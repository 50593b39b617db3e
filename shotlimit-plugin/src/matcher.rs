use shotlimit_core::math::vector3::Vector3;

use crate::zone::{Zone, ZoneRegistry};

impl ZoneRegistry {
    /// First zone, in registration order, that contains `point` and is triggered
    /// by `flag_kind`.
    ///
    /// The kind is compared as-is against the uppercase value stored at load time,
    /// so hosts must report flag kinds in uppercase.
    pub fn match_zone(&self, point: &Vector3<f32>, flag_kind: &str) -> Option<&Zone> {
        self.zones()
            .iter()
            .find(|zone| zone.trigger_flag == flag_kind && zone.bounds.contains(point))
    }
}

#[cfg(test)]
mod test {
    use shotlimit_core::math::{vector3::Vector3, zone_box::ZoneBox};

    use crate::zone::{Zone, ZoneRegistry};

    fn zone(center: (f32, f32, f32), half: (f32, f32, f32), limit: u32, flag: &str) -> Zone {
        Zone {
            bounds: ZoneBox::new(center.into(), half.into()),
            shot_limit: limit,
            trigger_flag: flag.to_string(),
        }
    }

    #[test]
    fn test_match_inside() {
        let mut registry = ZoneRegistry::new();
        registry.push(zone((0.0, 0.0, 0.0), (10.0, 10.0, 5.0), 3, "GM"));

        let found = registry.match_zone(&Vector3::new(1.0, -2.0, 0.5), "GM");
        assert_eq!(found.map(|zone| zone.shot_limit), Some(3));
    }

    #[test]
    fn test_no_match_outside_or_below() {
        let mut registry = ZoneRegistry::new();
        registry.push(zone((0.0, 0.0, 0.0), (10.0, 10.0, 5.0), 3, "GM"));

        assert!(registry.match_zone(&Vector3::new(11.0, 0.0, 1.0), "GM").is_none());
        assert!(registry.match_zone(&Vector3::new(0.0, 0.0, -1.0), "GM").is_none());
    }

    #[test]
    fn test_flag_kind_compared_exactly() {
        let mut registry = ZoneRegistry::new();
        registry.push(zone((0.0, 0.0, 0.0), (10.0, 10.0, 5.0), 3, "GM"));

        assert!(registry.match_zone(&Vector3::new(0.0, 0.0, 0.0), "gm").is_none());
        assert!(registry.match_zone(&Vector3::new(0.0, 0.0, 0.0), "L").is_none());
    }

    #[test]
    fn test_first_registered_wins() {
        let mut registry = ZoneRegistry::new();
        registry.push(zone((0.0, 0.0, 0.0), (50.0, 50.0, 50.0), 20, "GM"));
        registry.push(zone((0.0, 0.0, 0.0), (1.0, 1.0, 1.0), 2, "GM"));

        let found = registry.match_zone(&Vector3::new(0.5, 0.5, 0.5), "GM");
        assert_eq!(found.map(|zone| zone.shot_limit), Some(20));
    }

    #[test]
    fn test_skips_zone_for_other_flag() {
        let mut registry = ZoneRegistry::new();
        registry.push(zone((0.0, 0.0, 0.0), (50.0, 50.0, 50.0), 20, "L"));
        registry.push(zone((0.0, 0.0, 0.0), (1.0, 1.0, 1.0), 2, "GM"));

        let found = registry.match_zone(&Vector3::new(0.5, 0.5, 0.5), "GM");
        assert_eq!(found.map(|zone| zone.shot_limit), Some(2));
    }

    #[test]
    fn test_negative_extent_never_matches() {
        let mut registry = ZoneRegistry::new();
        registry.push(zone((0.0, 0.0, 0.0), (-10.0, -10.0, -5.0), 3, "GM"));

        assert!(registry.match_zone(&Vector3::new(1.0, 1.0, 1.0), "GM").is_none());
        assert!(registry.match_zone(&Vector3::new(0.0, 0.0, 0.0), "GM").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ZoneRegistry::new();
        assert!(registry.match_zone(&Vector3::new(0.0, 0.0, 0.0), "GM").is_none());
    }
}
