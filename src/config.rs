//! Sidenav configuration.

/// Inline text direction of the surrounding UI.
///
/// Under right-to-left text the horizontal arrow keys swap meaning: `Left`
/// expands and `Right` collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Configuration for a [`Sidenav`](crate::sidenav::Sidenav).
#[derive(Debug, Clone, Default)]
pub struct SidenavConfig {
    /// Whether double-clicking a row toggles its expansion.
    pub doubleclick_expands: bool,
    /// Text direction used to resolve horizontal arrow keys.
    pub direction: TextDirection,
}

impl SidenavConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable double-click-to-expand (builder).
    pub fn with_doubleclick_expands(mut self, enabled: bool) -> Self {
        self.doubleclick_expands = enabled;
        self
    }

    /// Set the text direction (builder).
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SidenavConfig::new();
        assert!(!config.doubleclick_expands);
        assert_eq!(config.direction, TextDirection::Ltr);
    }

    #[test]
    fn builder() {
        let config = SidenavConfig::new()
            .with_doubleclick_expands(true)
            .with_direction(TextDirection::Rtl);
        assert!(config.doubleclick_expands);
        assert_eq!(config.direction, TextDirection::Rtl);
    }
}
