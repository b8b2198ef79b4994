//! Geolocation constructs attached to records

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Shape of a geolocation construct.
///
/// A point is a single latitude/longitude pair; a box is a NW and SE pair
/// delimiting an area; a polygon is any number of pairs starting and
/// ending on the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeolocationType {
    #[serde(rename = "Point")]
    Point,
    #[serde(rename = "BOX")]
    Box,
    #[serde(rename = "POLYGON")]
    Polygon,
}

/// A single latitude/longitude pair.
///
/// Latitude is constrained to [-90, 90] and longitude to [-180, 180];
/// construction and decoding both reject values outside those ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Create a point, validating coordinate ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if latitude.abs() > 90.0 {
            return Err(Error::schema("Latitude must be between -90 and 90."));
        }
        if longitude.abs() > 180.0 {
            return Err(Error::schema("Longitude must be between -180 and 180."));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            latitude: f64,
            longitude: f64,
        }

        let wire = Wire::deserialize(deserializer)?;
        Point::new(wire.latitude, wire.longitude).map_err(serde::de::Error::custom)
    }
}

/// A geolocation point or area related to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    /// Shape of this construct
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<GeolocationType>,

    /// Human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The coordinate pairs making up the construct
    pub points: Vec<Point>,
}

impl Geolocation {
    /// Create a geolocation of the given shape
    pub fn new(kind: GeolocationType, points: Vec<Point>) -> Self {
        Self {
            kind: Some(kind),
            label: None,
            points,
        }
    }

    /// Append a point to this construct
    pub fn add(&mut self, point: Point) {
        self.points.push(point);
    }
}
