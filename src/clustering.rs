/********** k-means clustering core **********
* Lloyd's algorithm over 2D points, split into its two phases so the
* interface can advance the algorithm one full iteration at a time:
*
* 1. Assign every point to its nearest centroid (Euclidean distance).
* 2. Move every centroid to the mean of the points assigned to it.
*
* The session module ties both phases to a point/centroid state object
* that the GUI owns and steps on demand.
**********/

pub mod config;
pub mod engine;
pub mod generator;
pub mod initializer;
pub mod point;
pub mod session;

pub use config::{SessionConfig, SessionError};
pub use point::{Centroid, Point};
pub use session::KmeansSession;
