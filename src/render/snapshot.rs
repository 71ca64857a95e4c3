use plotters::prelude::*;

use crate::clustering::session::KmeansSession;

use super::frame::FrameMap;
use super::palette::{cluster_color, UNASSIGNED_COLOR};

pub const SNAPSHOT_WIDTH: u32 = 800;
pub const SNAPSHOT_HEIGHT: u32 = 800;
pub const POINT_MARKER_RADIUS: i32 = 5;
pub const CENTROID_MARKER_RADIUS: i32 = 10;

/// Write the current session state to a PNG: small filled circles for
/// points (gray while unassigned), larger outlined circles for centroids.
pub fn export_snapshot(
    session: &KmeansSession,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root_area =
        BitMapBackend::new(path, (SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let config = session.get_config();
    let frame = FrameMap::new(
        SNAPSHOT_WIDTH,
        SNAPSHOT_HEIGHT,
        config.domain_min,
        config.domain_max,
    );

    for point in session.get_points() {
        let (cx, cy) = frame.to_pixel(point.x, point.y);
        let (r, g, b) = match point.cluster {
            Some(index) => cluster_color(index),
            None => UNASSIGNED_COLOR,
        };
        root_area.draw(&Circle::new(
            (cx, cy),
            POINT_MARKER_RADIUS,
            RGBColor(r, g, b).filled(),
        ))?;
    }

    // Centroids go on top of the points, with a black outline like the
    // interactive view.
    for (index, centroid) in session.get_centroids().iter().enumerate() {
        let (cx, cy) = frame.to_pixel(centroid.x, centroid.y);
        let (r, g, b) = cluster_color(index);
        root_area.draw(&Circle::new(
            (cx, cy),
            CENTROID_MARKER_RADIUS,
            RGBColor(r, g, b).filled(),
        ))?;
        root_area.draw(&Circle::new(
            (cx, cy),
            CENTROID_MARKER_RADIUS,
            BLACK.stroke_width(2),
        ))?;
    }

    root_area.present()?;

    Ok(())
}
