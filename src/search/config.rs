//! Search agent configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the minimax agent.
///
/// Depth is a fixed lookup by board side, not derived from how many empty
/// cells remain. Deeper settings on 6x6 and 9x9 grow the search
/// exponentially; re-derive acceptable bounds before raising them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth for boards up to 3x3 (enough for a full-game search).
    pub small_depth: u32,

    /// Depth for boards up to 6x6.
    pub medium_depth: u32,

    /// Depth for anything larger.
    pub large_depth: u32,

    /// A decision's uniform draw above this picks the second-ranked move.
    /// `1.0` disables the noise; a negative value forces it.
    pub noise_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            small_depth: 10,
            medium_depth: 5,
            large_depth: 4,
            noise_threshold: 0.95,
        }
    }
}

impl SearchConfig {
    /// Use the same depth for every board size.
    #[must_use]
    pub fn with_fixed_depth(mut self, depth: u32) -> Self {
        self.small_depth = depth;
        self.medium_depth = depth;
        self.large_depth = depth;
        self
    }

    /// Set the noise threshold.
    #[must_use]
    pub fn with_noise_threshold(mut self, threshold: f64) -> Self {
        self.noise_threshold = threshold;
        self
    }

    /// Never play the second-ranked move.
    #[must_use]
    pub fn without_noise(self) -> Self {
        self.with_noise_threshold(1.0)
    }

    /// Search depth for a board of side `size`. Always at least 1.
    #[must_use]
    pub fn depth_for(&self, size: usize) -> u32 {
        let depth = if size <= 3 {
            self.small_depth
        } else if size <= 6 {
            self.medium_depth
        } else {
            self.large_depth
        };
        depth.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth_policy() {
        let config = SearchConfig::default();
        assert_eq!(config.depth_for(3), 10);
        assert_eq!(config.depth_for(6), 5);
        assert_eq!(config.depth_for(9), 4);
        assert_eq!(config.noise_threshold, 0.95);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_fixed_depth(2).without_noise();
        assert_eq!(config.depth_for(3), 2);
        assert_eq!(config.depth_for(9), 2);
        assert_eq!(config.noise_threshold, 1.0);
    }

    #[test]
    fn test_depth_never_zero() {
        let config = SearchConfig::default().with_fixed_depth(0);
        assert_eq!(config.depth_for(3), 1);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_fixed_depth(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let partial: SearchConfig = serde_json::from_str(r#"{"large_depth": 2}"#).unwrap();
        assert_eq!(partial.large_depth, 2);
        assert_eq!(partial.small_depth, 10);
    }
}
