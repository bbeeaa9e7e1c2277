//! Volume control
//!
//! Volume range is 0-100%, handed to the sink as a linear gain in 0.0-1.0
//! (the range an HTML media element accepts).

/// Volume level with its sink gain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,
}

impl Volume {
    /// Create new volume controller, clamping to 100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Linear gain for the sink
    pub fn gain(&self) -> f64 {
        f64::from(self.level) / 100.0
    }

    /// Display label, e.g. "75%"
    pub fn label(&self) -> String {
        format!("{}%", self.level)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(100)
    }
}
