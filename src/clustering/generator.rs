use rand::Rng;

use super::config::SessionConfig;
use super::point::Point;

// Produces the session's point set: coordinates drawn independently and
// uniformly from the closed domain interval, no cluster assigned yet.
// The rng is injected so tests can pass a seeded StdRng.
pub fn generate_points(config: &SessionConfig, rng: &mut impl Rng) -> Vec<Point> {
    let mut points = Vec::with_capacity(config.num_points);
    for _ in 0..config.num_points {
        let x = rng.gen_range(config.domain_min..=config.domain_max);
        let y = rng.gen_range(config.domain_min..=config.domain_max);
        points.push(Point::new(x, y));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_requested_count_inside_domain() {
        let config = SessionConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        let points = generate_points(&config, &mut rng);

        assert_eq!(points.len(), config.num_points);
        for point in &points {
            assert!(
                point.x >= config.domain_min && point.x <= config.domain_max,
                "x coordinate {} escaped the domain",
                point.x
            );
            assert!(
                point.y >= config.domain_min && point.y <= config.domain_max,
                "y coordinate {} escaped the domain",
                point.y
            );
            assert_eq!(point.cluster, None, "Fresh points must be unassigned");
        }
    }

    #[test]
    fn test_same_seed_same_points() {
        let config = SessionConfig::default();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let points_a = generate_points(&config, &mut rng_a);
        let points_b = generate_points(&config, &mut rng_b);

        assert_eq!(points_a, points_b);
    }
}
