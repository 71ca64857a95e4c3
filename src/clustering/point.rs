#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub cluster: Option<usize>, // Index into the centroid sequence, None before the first assignment
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, cluster: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    // Value copy of the point's coordinates. Centroids must never alias a
    // point, otherwise the update phase would drag the point along.
    pub fn from_point(point: &Point) -> Self {
        Centroid {
            x: point.x,
            y: point.y,
        }
    }
}

pub fn euclidean_distance(point: &Point, centroid: &Centroid) -> f64 {
    let dx = point.x - centroid.x;
    let dy = point.y - centroid.y;
    (dx * dx + dy * dy).sqrt()
}
