use log::{info, warn};
use shotlimit_core::math::{vector3::Vector3, zone_box::ZoneBox};

/// A map volume that limits the shots of anyone picking up `trigger_flag` inside it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Zone {
    pub bounds: ZoneBox,
    pub shot_limit: u32,
    /// Flag kind, stored uppercase.
    pub trigger_flag: String,
}

/// Zones in the order the map defined them.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one zone block and appends the result.
    ///
    /// Parsing is tolerant: unknown keys are skipped, lines with too few values are
    /// ignored and fields never set stay at zero. Missing fields are only reported
    /// through the log.
    pub fn load<'a, I, V>(&mut self, definitions: I) -> &Zone
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: AsRef<[&'a str]>,
    {
        let mut zone = Zone::default();
        let mut seen = SeenFields::default();

        for (key, values) in definitions {
            let values = values.as_ref();
            match key.to_ascii_lowercase().as_str() {
                "position" | "pos" if values.len() >= 3 => {
                    zone.bounds.center = parse_vector(values);
                    seen.position = true;
                }
                "size" if values.len() >= 3 => {
                    let size = parse_vector(values);
                    if size.x < 0.0 || size.y < 0.0 || size.z < 0.0 {
                        warn!(
                            "shotLimitZone #{} has a negative size [{}, {}, {}] and can never match",
                            self.zones.len(),
                            size.x,
                            size.y,
                            size.z
                        );
                    }
                    zone.bounds.half_extent = size;
                    seen.size = true;
                }
                "shotlimit" if !values.is_empty() => {
                    zone.shot_limit = parse_shot_limit(values[0]);
                    seen.shot_limit = true;
                }
                "flag" if !values.is_empty() => {
                    zone.trigger_flag = values[0].to_ascii_uppercase();
                    seen.flag = true;
                }
                _ => {}
            }
        }

        let missing = seen.missing();
        if !missing.is_empty() {
            warn!(
                "shotLimitZone #{} is missing {}, using defaults",
                self.zones.len(),
                missing.join(", ")
            );
        }
        info!(
            "A shotLimitZone has been found, zone loaded with credentials: Pos: [{}, {}, {}] Size: [{}, {}, {}] Shot Limit: {} Flag: {}",
            zone.bounds.center.x,
            zone.bounds.center.y,
            zone.bounds.center.z,
            zone.bounds.half_extent.x,
            zone.bounds.half_extent.y,
            zone.bounds.half_extent.z,
            zone.shot_limit,
            zone.trigger_flag
        );

        self.zones.push(zone);
        &self.zones[self.zones.len() - 1]
    }

    pub fn push(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }
}

#[derive(Default)]
struct SeenFields {
    position: bool,
    size: bool,
    shot_limit: bool,
    flag: bool,
}

impl SeenFields {
    fn missing(&self) -> Vec<&'static str> {
        [
            (self.position, "position"),
            (self.size, "size"),
            (self.shot_limit, "shotlimit"),
            (self.flag, "flag"),
        ]
        .into_iter()
        .filter_map(|(seen, name)| (!seen).then_some(name))
        .collect()
    }
}

fn parse_float(token: &str) -> f32 {
    token.parse().unwrap_or_else(|_| {
        warn!("shotLimitZone: '{token}' is not a number, using 0");
        0.0
    })
}

fn parse_vector(values: &[&str]) -> Vector3<f32> {
    Vector3::new(
        parse_float(values[0]),
        parse_float(values[1]),
        parse_float(values[2]),
    )
}

// Map files sometimes carry "10.0" style limits; negatives mean no shots at all.
fn parse_shot_limit(token: &str) -> u32 {
    let limit = parse_float(token);
    if limit <= 0.0 {
        0
    } else {
        limit as u32
    }
}
