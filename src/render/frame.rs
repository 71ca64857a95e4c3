/// Linear map from model coordinates to a pixel surface. The y-axis is
/// flipped: the model's top of the domain lands on pixel row 0.
#[derive(Debug, Clone, Copy)]
pub struct FrameMap {
    width: u32,
    height: u32,
    domain_min: f64,
    domain_max: f64,
}

impl FrameMap {
    pub fn new(width: u32, height: u32, domain_min: f64, domain_max: f64) -> Self {
        FrameMap {
            width,
            height,
            domain_min,
            domain_max,
        }
    }

    pub fn to_pixel_x(&self, x: f64) -> i32 {
        let span = self.domain_max - self.domain_min;
        ((x - self.domain_min) / span * self.width as f64).round() as i32
    }

    pub fn to_pixel_y(&self, y: f64) -> i32 {
        let span = self.domain_max - self.domain_min;
        ((1.0 - (y - self.domain_min) / span) * self.height as f64).round() as i32
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> (i32, i32) {
        (self.to_pixel_x(x), self.to_pixel_y(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_of_the_unit_domain() {
        let frame = FrameMap::new(800, 600, -1.0, 1.0);

        assert_eq!(frame.to_pixel(-1.0, 1.0), (0, 0), "Top-left corner");
        assert_eq!(frame.to_pixel(1.0, -1.0), (800, 600), "Bottom-right corner");
        assert_eq!(frame.to_pixel(0.0, 0.0), (400, 300), "Center");
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let frame = FrameMap::new(100, 100, -1.0, 1.0);

        // Larger model y means a smaller pixel row.
        assert!(frame.to_pixel_y(0.5) < frame.to_pixel_y(-0.5));
    }
}
