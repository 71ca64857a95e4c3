use super::point::{euclidean_distance, Centroid, Point};

/// Assignment phase: label every point with the index of its nearest
/// centroid. The scan is left to right with a strict `<` against the running
/// minimum, so on an exact distance tie the lower-index centroid keeps the
/// point.
pub fn assign_clusters(points: &mut [Point], centroids: &[Centroid]) {
    for point in points.iter_mut() {
        let mut min_dist = f64::INFINITY;
        let mut assigned = 0;

        for (index, centroid) in centroids.iter().enumerate() {
            let dist = euclidean_distance(point, centroid);
            if dist < min_dist {
                min_dist = dist;
                assigned = index;
            }
        }

        point.cluster = Some(assigned);
    }
}

/// Update phase: move every centroid to the mean of its assigned points.
/// A cluster that attracted no points keeps its previous coordinates; a
/// stale centroid is a normal outcome here, not an error.
pub fn update_centroids(points: &[Point], centroids: &mut [Centroid]) {
    for (index, centroid) in centroids.iter_mut().enumerate() {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut count: usize = 0;

        for point in points {
            if point.cluster == Some(index) {
                sum_x += point.x;
                sum_y += point.y;
                count += 1;
            }
        }

        if count > 0 {
            centroid.x = sum_x / count as f64;
            centroid.y = sum_y / count as f64;
        }
    }
}

/// One full Lloyd iteration: assignment, then update, exactly once. There is
/// no convergence check; calling this again after the centroids have settled
/// changes nothing.
pub fn iterate(points: &mut [Point], centroids: &mut [Centroid]) {
    assign_clusters(points, centroids);
    update_centroids(points, centroids);
}
