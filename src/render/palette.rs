// One distinguishable color per cluster, indexed by cluster/centroid index,
// plus a neutral gray for points that have not been assigned yet.
pub const CLUSTER_COLORS: [(u8, u8, u8); 3] = [
    (228, 26, 28),  // red
    (55, 126, 184), // blue
    (77, 175, 74),  // green
];

pub const UNASSIGNED_COLOR: (u8, u8, u8) = (136, 136, 136);

pub fn cluster_color(index: usize) -> (u8, u8, u8) {
    CLUSTER_COLORS[index % CLUSTER_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_colors_are_distinct() {
        for i in 0..CLUSTER_COLORS.len() {
            for j in (i + 1)..CLUSTER_COLORS.len() {
                assert_ne!(CLUSTER_COLORS[i], CLUSTER_COLORS[j]);
            }
        }
    }

    #[test]
    fn test_lookup_wraps_instead_of_panicking() {
        assert_eq!(cluster_color(0), CLUSTER_COLORS[0]);
        assert_eq!(cluster_color(CLUSTER_COLORS.len()), CLUSTER_COLORS[0]);
    }
}
