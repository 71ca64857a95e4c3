use std::fmt;

// Session defaults. The GUI builds its config from these, and tests shrink
// them freely; nothing in the core assumes the default values.
pub const NUM_POINTS_DEFAULT: usize = 20;
pub const NUM_CLUSTERS_DEFAULT: usize = 3;
pub const DOMAIN_MIN_DEFAULT: f64 = -1.0;
pub const DOMAIN_MAX_DEFAULT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub num_points: usize,
    pub num_clusters: usize,
    pub domain_min: f64,
    pub domain_max: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            num_points: NUM_POINTS_DEFAULT,
            num_clusters: NUM_CLUSTERS_DEFAULT,
            domain_min: DOMAIN_MIN_DEFAULT,
            domain_max: DOMAIN_MAX_DEFAULT,
        }
    }
}

impl SessionConfig {
    pub fn new(
        num_points: usize,
        num_clusters: usize,
        domain_min: f64,
        domain_max: f64,
    ) -> Result<Self, SessionError> {
        let config = Self {
            num_points,
            num_clusters,
            domain_min,
            domain_max,
        };
        config.validate()?;
        Ok(config)
    }

    // Centroid seeding samples points without replacement, so a session
    // needs at least as many points as clusters before anything runs.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.num_points == 0 || self.num_clusters == 0 || self.num_points < self.num_clusters {
            return Err(SessionError::InvalidConfiguration {
                num_points: self.num_points,
                num_clusters: self.num_clusters,
            });
        }
        if self.domain_min >= self.domain_max {
            return Err(SessionError::InvalidDomain {
                min: self.domain_min,
                max: self.domain_max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    InvalidConfiguration { num_points: usize, num_clusters: usize },
    InvalidDomain { min: f64, max: f64 },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidConfiguration {
                num_points,
                num_clusters,
            } => write!(
                f,
                "Invalid configuration: {} points cannot seed {} clusters",
                num_points, num_clusters
            ),
            SessionError::InvalidDomain { min, max } => {
                write!(f, "Invalid domain: [{}, {}] is empty", min, max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_points, NUM_POINTS_DEFAULT);
        assert_eq!(config.num_clusters, NUM_CLUSTERS_DEFAULT);
    }

    #[test]
    fn test_fewer_points_than_clusters_is_rejected() {
        let result = SessionConfig::new(2, 3, -1.0, 1.0);
        assert_eq!(
            result,
            Err(SessionError::InvalidConfiguration {
                num_points: 2,
                num_clusters: 3
            })
        );
    }

    #[test]
    fn test_zero_counts_are_rejected() {
        assert!(SessionConfig::new(0, 3, -1.0, 1.0).is_err());
        assert!(SessionConfig::new(20, 0, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_inverted_domain_is_rejected() {
        let result = SessionConfig::new(20, 3, 1.0, -1.0);
        assert_eq!(
            result,
            Err(SessionError::InvalidDomain {
                min: 1.0,
                max: -1.0
            })
        );
    }
}
