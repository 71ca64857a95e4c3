use rand::seq::SliceRandom;
use rand::Rng;

use super::config::SessionError;
use super::point::{Centroid, Point};

/// Seed one centroid per cluster by sampling k distinct points uniformly
/// without replacement and copying their coordinates. The input points are
/// left untouched.
pub fn initialize_centroids(
    points: &[Point],
    k: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Centroid>, SessionError> {
    if k == 0 || points.len() < k {
        return Err(SessionError::InvalidConfiguration {
            num_points: points.len(),
            num_clusters: k,
        });
    }

    let centroids = points
        .choose_multiple(rng, k)
        .map(Centroid::from_point)
        .collect();

    Ok(centroids)
}
