use geo::{unary_union, Coord, ConvexHull, LineString, MultiPoint, MultiPolygon, Point, Polygon};

/// number of segments used to approximate a circle arc.
const CIRCLE_SEGMENTS: usize = 32;

/// planar buffering of geometry primitives. radii are expressed in the
/// units of the geometry's CRS, so geometries should be in a projected
/// system (e.g. web mercator) before buffering by a distance in meters.
pub trait Buffer {
    /// expands the geometry into the area within `radius` of it. a
    /// non-positive radius yields an empty result.
    fn buffer(&self, radius: f64) -> MultiPolygon<f64>;
}

impl Buffer for Point<f64> {
    fn buffer(&self, radius: f64) -> MultiPolygon<f64> {
        if radius <= 0.0 {
            return MultiPolygon::new(vec![]);
        }
        let ring = circle_coords(self.0, radius);
        MultiPolygon::new(vec![Polygon::new(LineString::new(ring), vec![])])
    }
}

impl Buffer for LineString<f64> {
    fn buffer(&self, radius: f64) -> MultiPolygon<f64> {
        if radius <= 0.0 {
            return MultiPolygon::new(vec![]);
        }
        let capsules = self
            .lines()
            .map(|line| capsule(line.start, line.end, radius))
            .collect::<Vec<_>>();
        match capsules.len() {
            0 => MultiPolygon::new(vec![]),
            1 => MultiPolygon::new(capsules),
            _ => unary_union(capsules.iter()),
        }
    }
}

/// round-capped buffer of a single segment: the convex hull of the two
/// endpoint circles.
fn capsule(start: Coord<f64>, end: Coord<f64>, radius: f64) -> Polygon<f64> {
    let mut coords = circle_coords(start, radius);
    coords.extend(circle_coords(end, radius));
    let points = MultiPoint::new(coords.into_iter().map(Point::from).collect());
    points.convex_hull()
}

fn circle_coords(center: Coord<f64>, radius: f64) -> Vec<Coord<f64>> {
    (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (CIRCLE_SEGMENTS as f64);
            Coord {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        })
        .collect()
}
