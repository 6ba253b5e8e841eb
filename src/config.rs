//! Tunables of the [`BvhBuilder`](crate::bvh::BvhBuilder).

use crate::error::BuildError;
use crate::Real;

/// Every threshold and cost constant the builder consults.
///
/// # Examples
/// ```
/// use shape_bvh::config::BuildConfig;
///
/// let config = BuildConfig::default()
///     .with_max_leaf_size(8)
///     .with_auto_fallback(false);
/// assert!(config.validate().is_ok());
///
/// let broken = BuildConfig::default().with_bins(1, 32);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildConfig {
    /// Ranges of at most this many primitives always become leaves.
    pub max_leaf_size: usize,

    /// A split leaving fewer primitives on one side of a large node is rebalanced
    /// with a median split.
    pub min_leaf_size: usize,

    /// Ranges at this depth become leaves regardless of their size.
    pub max_depth: usize,

    /// Ranges above this size split even when the SAH prefers a leaf.
    pub forced_split_threshold: usize,

    /// Bin count used for small ranges.
    pub min_bins: usize,

    /// Upper bound for the adaptive bin count.
    pub max_bins: usize,

    /// Cost of visiting an interior node, relative to one primitive test.
    pub traversal_cost: Real,

    /// Relative improvement a split must reach over the leaf cost of its range.
    pub split_margin: Real,

    /// Allow skipping construction when a linear scan is competitive.
    pub auto_fallback: bool,

    /// Scenes with fewer primitives than this fall back to a linear scan.
    pub small_scene_threshold: usize,

    /// Minimum relative root improvement over the linear scan cost.
    pub min_root_improvement: Real,
}

impl Default for BuildConfig {
    fn default() -> BuildConfig {
        BuildConfig {
            max_leaf_size: 4,
            min_leaf_size: 2,
            max_depth: 60,
            forced_split_threshold: 32,
            min_bins: 12,
            max_bins: 32,
            traversal_cost: 1.0,
            split_margin: 0.02,
            auto_fallback: true,
            small_scene_threshold: 24,
            min_root_improvement: 0.02,
        }
    }
}

impl BuildConfig {
    /// Sets [`BuildConfig::max_leaf_size`].
    pub fn with_max_leaf_size(mut self, max_leaf_size: usize) -> Self {
        self.max_leaf_size = max_leaf_size;
        self
    }

    /// Sets [`BuildConfig::min_leaf_size`].
    pub fn with_min_leaf_size(mut self, min_leaf_size: usize) -> Self {
        self.min_leaf_size = min_leaf_size;
        self
    }

    /// Sets [`BuildConfig::max_depth`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets [`BuildConfig::forced_split_threshold`].
    pub fn with_forced_split_threshold(mut self, threshold: usize) -> Self {
        self.forced_split_threshold = threshold;
        self
    }

    /// Sets the adaptive bin range.
    pub fn with_bins(mut self, min_bins: usize, max_bins: usize) -> Self {
        self.min_bins = min_bins;
        self.max_bins = max_bins;
        self
    }

    /// Sets [`BuildConfig::split_margin`].
    pub fn with_split_margin(mut self, margin: Real) -> Self {
        self.split_margin = margin;
        self
    }

    /// Sets [`BuildConfig::auto_fallback`].
    pub fn with_auto_fallback(mut self, enabled: bool) -> Self {
        self.auto_fallback = enabled;
        self
    }

    /// Sets [`BuildConfig::small_scene_threshold`].
    pub fn with_small_scene_threshold(mut self, threshold: usize) -> Self {
        self.small_scene_threshold = threshold;
        self
    }

    /// Sets [`BuildConfig::min_root_improvement`].
    pub fn with_min_root_improvement(mut self, ratio: Real) -> Self {
        self.min_root_improvement = ratio;
        self
    }

    /// Number of bins for a range of `count` primitives, growing with the range size.
    pub fn bin_count(&self, count: usize) -> usize {
        (count / 8).clamp(self.min_bins, self.max_bins)
    }

    /// Checks that the tunables describe a terminating build.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_leaf_size == 0 {
            return Err(BuildError::ZeroMaxLeafSize);
        }
        if self.max_depth == 0 {
            return Err(BuildError::ZeroMaxDepth);
        }
        if self.min_bins < 2 || self.min_bins > self.max_bins {
            return Err(BuildError::InvalidBinRange {
                min: self.min_bins,
                max: self.max_bins,
            });
        }
        if self.forced_split_threshold < self.max_leaf_size {
            return Err(BuildError::ForcedSplitBelowLeafSize {
                forced: self.forced_split_threshold,
                max_leaf: self.max_leaf_size,
            });
        }
        if !self.traversal_cost.is_finite() || self.traversal_cost < 0.0 {
            return Err(BuildError::OutOfRange {
                name: "traversal_cost",
                value: self.traversal_cost,
            });
        }
        for (name, value) in [
            ("split_margin", self.split_margin),
            ("min_root_improvement", self.min_root_improvement),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(BuildError::OutOfRange { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::BuildConfig;
    use crate::error::BuildError;
    use crate::Real;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(BuildConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_bin_count_is_adaptive() {
        let config = BuildConfig::default();
        assert_eq!(config.bin_count(5), 12);
        assert_eq!(config.bin_count(160), 20);
        assert_eq!(config.bin_count(100_000), 32);
    }

    #[test]
    fn test_rejects_broken_tunables() {
        assert_eq!(
            BuildConfig::default().with_max_leaf_size(0).validate(),
            Err(BuildError::ZeroMaxLeafSize)
        );
        assert_eq!(
            BuildConfig::default().with_max_depth(0).validate(),
            Err(BuildError::ZeroMaxDepth)
        );
        assert_eq!(
            BuildConfig::default().with_bins(16, 8).validate(),
            Err(BuildError::InvalidBinRange { min: 16, max: 8 })
        );
        assert_eq!(
            BuildConfig::default()
                .with_max_leaf_size(8)
                .with_forced_split_threshold(4)
                .validate(),
            Err(BuildError::ForcedSplitBelowLeafSize {
                forced: 4,
                max_leaf: 8
            })
        );
        assert!(matches!(
            BuildConfig::default().with_split_margin(1.5).validate(),
            Err(BuildError::OutOfRange {
                name: "split_margin",
                ..
            })
        ));
        assert!(matches!(
            BuildConfig::default()
                .with_min_root_improvement(Real::NAN)
                .validate(),
            Err(BuildError::OutOfRange { .. })
        ));
    }
}
