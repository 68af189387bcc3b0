use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// mean equatorial radius used by the spherical mercator projection, in meters.
const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// coordinate reference system attached to graphs and geometry collections.
/// schedule feeds arrive in geographic coordinates (EPSG:4326); street
/// networks are typically delivered in web mercator (EPSG:3857), where
/// planar distances and buffer radii are expressed in meters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Crs {
    Epsg4326,
    Epsg3857,
}

impl Crs {
    /// projects a point in this CRS into the target CRS using the spherical
    /// mercator forward/inverse transforms. projecting into the same CRS is
    /// the identity.
    pub fn project_point(&self, point: &Point<f64>, target: &Crs) -> Point<f64> {
        match (self, target) {
            (Crs::Epsg4326, Crs::Epsg3857) => {
                let x = EARTH_RADIUS_METERS * point.x().to_radians();
                let y = EARTH_RADIUS_METERS
                    * (std::f64::consts::FRAC_PI_4 + point.y().to_radians() / 2.0)
                        .tan()
                        .ln();
                Point::new(x, y)
            }
            (Crs::Epsg3857, Crs::Epsg4326) => {
                let lon = (point.x() / EARTH_RADIUS_METERS).to_degrees();
                let lat = (2.0 * (point.y() / EARTH_RADIUS_METERS).exp().atan()
                    - std::f64::consts::FRAC_PI_2)
                    .to_degrees();
                Point::new(lon, lat)
            }
            _ => *point,
        }
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crs::Epsg4326 => write!(f, "EPSG:4326"),
            Crs::Epsg3857 => write!(f, "EPSG:3857"),
        }
    }
}
