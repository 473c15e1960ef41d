/// ScreenGeometry — screen size and the values derived from it.

/// Screen size in pixels, with half extents and aspect ratio.
///
/// Dimensions are clamped to at least one pixel so the aspect ratio and
/// every later division by the height stay finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    width: i32,
    height: i32,
    half_width: f32,
    half_height: f32,
    aspect_ratio: f32,
}

impl ScreenGeometry {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            half_width: width as f32 * 0.5,
            half_height: height as f32 * 0.5,
            aspect_ratio: width as f32 / height as f32,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }
}

impl Default for ScreenGeometry {
    /// Placeholder 1x1 screen used until the first `set_screen_size`.
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
#[path = "screen_geometry_tests.rs"]
mod tests;
