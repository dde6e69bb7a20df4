use crate::model::event::Event;

const PADDING_DEGREES: f64 = 0.01;
/// Box shown when there is nothing to place: roughly central Europe.
const DEFAULT_BOUNDS: MapBounds = MapBounds {
    min_lat: 45.0,
    max_lat: 55.0,
    min_lon: 5.0,
    max_lon: 20.0,
};

/// Geographic box rendered by the event map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    /// Smallest padded box containing every event with valid coordinates.
    pub fn from_events(events: &[Event]) -> Self {
        let mut points = events
            .iter()
            .filter(|e| e.location.has_valid_coordinates())
            .map(|e| (e.location.latitude, e.location.longitude));

        let Some((lat, lon)) = points.next() else {
            return DEFAULT_BOUNDS;
        };
        let mut bounds = MapBounds {
            min_lat: lat,
            max_lat: lat,
            min_lon: lon,
            max_lon: lon,
        };
        for (lat, lon) in points {
            bounds.min_lat = bounds.min_lat.min(lat);
            bounds.max_lat = bounds.max_lat.max(lat);
            bounds.min_lon = bounds.min_lon.min(lon);
            bounds.max_lon = bounds.max_lon.max(lon);
        }

        MapBounds {
            min_lat: bounds.min_lat - PADDING_DEGREES,
            max_lat: bounds.max_lat + PADDING_DEGREES,
            min_lon: bounds.min_lon - PADDING_DEGREES,
            max_lon: bounds.max_lon + PADDING_DEGREES,
        }
    }

    /// Position of a coordinate as `(left, top)` percentages of the map box.
    ///
    /// North is up, so the top offset grows as latitude decreases.
    pub fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let width = (self.max_lon - self.min_lon).max(f64::EPSILON);
        let height = (self.max_lat - self.min_lat).max(f64::EPSILON);

        let left = (longitude - self.min_lon) / width * 100.0;
        let top = (self.max_lat - latitude) / height * 100.0;

        (left.clamp(0.0, 100.0), top.clamp(0.0, 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::{LifecycleStatus, Location};

    fn at(id: &str, latitude: f64, longitude: f64) -> Event {
        Event {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            starts_at: String::new(),
            duration: String::new(),
            organizer_id: None,
            organizer_name: String::new(),
            status: LifecycleStatus::Upcoming,
            moderation_status: None,
            location: Location {
                latitude,
                longitude,
                address: String::new(),
                image_url: None,
            },
            image_url: None,
            tags: Vec::new(),
        }
    }

    /// Expect the default box when no event can be placed
    #[test]
    fn empty_input_uses_default_bounds() {
        assert_eq!(MapBounds::from_events(&[]), DEFAULT_BOUNDS);
        assert_eq!(MapBounds::from_events(&[at("x", 120.0, 0.0)]), DEFAULT_BOUNDS);
    }

    /// Expect corners of the box to project onto the map corners
    #[test]
    fn projects_corners() {
        let bounds = MapBounds::from_events(&[at("a", 50.0, 10.0), at("b", 52.0, 14.0)]);

        let (left, top) = bounds.project(bounds.max_lat, bounds.min_lon);
        assert!(left.abs() < 1e-9 && top.abs() < 1e-9);

        let (left, top) = bounds.project(bounds.min_lat, bounds.max_lon);
        assert!((left - 100.0).abs() < 1e-9 && (top - 100.0).abs() < 1e-9);
    }

    /// Expect a single event to land in the middle of its padded box
    #[test]
    fn single_event_is_centered() {
        let bounds = MapBounds::from_events(&[at("a", 48.1, 11.5)]);

        let (left, top) = bounds.project(48.1, 11.5);

        assert!((left - 50.0).abs() < 1e-6);
        assert!((top - 50.0).abs() < 1e-6);
    }
}
