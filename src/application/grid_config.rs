/// Smallest accepted grid density (divisions per axis)
pub const MIN_DENSITY: u32 = 20;
/// Largest accepted grid density
pub const MAX_DENSITY: u32 = 80;
/// Smallest viewport edge, keeps cell size non-zero
const MIN_EXTENT: f32 = 1.0;

/// GridConfig holds grid density and viewport size.
/// Cell size is derived on demand so it can never go stale after a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    density: u32,
    width: f32,
    height: f32,
}

impl GridConfig {
    pub fn new(density: u32, width: f32, height: f32) -> Self {
        let mut config = Self { density: MIN_DENSITY, width: MIN_EXTENT, height: MIN_EXTENT };
        let applied = config.set_density(density);
        if applied != density {
            log::warn!("Configured density {density} out of range, using {applied}");
        }
        config.resize(width, height);
        config
    }

    pub const fn density(&self) -> u32 {
        self.density
    }

    pub const fn width(&self) -> f32 {
        self.width
    }

    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Side length of one grid square in viewport units
    pub fn cell_size(&self) -> f32 {
        self.width / self.density as f32
    }

    /// Set density, clamped to `[MIN_DENSITY, MAX_DENSITY]`. Returns the applied value.
    pub fn set_density(&mut self, density: u32) -> u32 {
        self.density = density.clamp(MIN_DENSITY, MAX_DENSITY);
        self.density
    }

    /// Update viewport size. Stored cell coordinates are untouched;
    /// only their rendered size and position follow.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = if width.is_finite() { width.max(MIN_EXTENT) } else { MIN_EXTENT };
        self.height = if height.is_finite() { height.max(MIN_EXTENT) } else { MIN_EXTENT };
    }
}
