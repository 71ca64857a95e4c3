use rand::Rng;

use super::config::{SessionConfig, SessionError};
use super::engine;
use super::generator::generate_points;
use super::initializer::initialize_centroids;
use super::point::{Centroid, Point};

/// One visualization session: the point set, the centroids seeded from it,
/// and how many iterations have run. The GUI owns exactly one of these and
/// advances it one `step` per click.
#[derive(Debug, Clone)]
pub struct KmeansSession {
    config: SessionConfig,
    points: Vec<Point>,
    centroids: Vec<Centroid>,
    iterations: usize,
}

impl KmeansSession {
    pub fn new(config: SessionConfig, rng: &mut impl Rng) -> Result<Self, SessionError> {
        config.validate()?;

        let points = generate_points(&config, rng);
        let centroids = initialize_centroids(&points, config.num_clusters, rng)?;

        Ok(KmeansSession {
            config,
            points,
            centroids,
            iterations: 0,
        })
    }

    /// One full Lloyd iteration: assignment then centroid update.
    pub fn step(&mut self) {
        engine::iterate(&mut self.points, &mut self.centroids);
        self.iterations += 1;
    }

    /// Discard all state and regenerate from the same config, back to the
    /// unassigned starting picture.
    pub fn reset(&mut self, rng: &mut impl Rng) -> Result<(), SessionError> {
        self.points = generate_points(&self.config, rng);
        self.centroids = initialize_centroids(&self.points, self.config.num_clusters, rng)?;
        self.iterations = 0;
        Ok(())
    }

    pub fn get_config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn get_points(&self) -> &[Point] {
        &self.points
    }

    pub fn get_centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn get_iterations(&self) -> usize {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_session_starts_unassigned() {
        let mut rng = StdRng::seed_from_u64(3);
        let session = KmeansSession::new(SessionConfig::default(), &mut rng).unwrap();

        assert_eq!(session.get_points().len(), 20);
        assert_eq!(session.get_centroids().len(), 3);
        assert_eq!(session.get_iterations(), 0);
        assert!(session.get_points().iter().all(|p| p.cluster.is_none()));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_any_state_exists() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = SessionConfig {
            num_points: 2,
            num_clusters: 3,
            ..SessionConfig::default()
        };

        assert!(KmeansSession::new(config, &mut rng).is_err());
    }

    #[test]
    fn test_fixed_seed_gives_a_deterministic_trace() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let mut session_a = KmeansSession::new(SessionConfig::default(), &mut rng_a).unwrap();
        let mut session_b = KmeansSession::new(SessionConfig::default(), &mut rng_b).unwrap();

        for _ in 0..10 {
            session_a.step();
            session_b.step();
            assert_eq!(session_a.get_points(), session_b.get_points());
            assert_eq!(session_a.get_centroids(), session_b.get_centroids());
        }
        assert_eq!(session_a.get_iterations(), 10);
    }

    #[test]
    fn test_step_assigns_every_point() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = KmeansSession::new(SessionConfig::default(), &mut rng).unwrap();

        session.step();

        let k = session.get_centroids().len();
        for point in session.get_points() {
            let cluster = point.cluster.expect("Point left unassigned after step");
            assert!(cluster < k);
        }
    }

    #[test]
    fn test_reset_regenerates_points_and_centroids() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut session = KmeansSession::new(SessionConfig::default(), &mut rng).unwrap();

        session.step();
        session.step();
        let old_points = session.get_points().to_vec();

        session.reset(&mut rng).unwrap();

        assert_eq!(session.get_iterations(), 0);
        assert!(session.get_points().iter().all(|p| p.cluster.is_none()));
        assert_ne!(
            session.get_points(),
            &old_points[..],
            "Reset should draw a fresh point set"
        );
    }
}
