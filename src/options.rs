//! Tree configuration.

use serde::{Deserialize, Serialize};

use crate::error::{BTreeError, Result};

/// Order used by [`BTreeOptions::default`].
pub const DEFAULT_ORDER: usize = 32;

/// Smallest order accepted by the tree.
pub const MIN_ORDER: usize = 2;

/// Options used when constructing a [`BTree`](crate::BTree).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BTreeOptions {
    /// Maximum number of children per node; nodes hold at most `order - 1` keys.
    pub order: usize,
    /// Whether split/merge/search counters are recorded.
    pub track_stats: bool,
}

impl Default for BTreeOptions {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            track_stats: true,
        }
    }
}

impl BTreeOptions {
    /// Returns default options with the given order.
    pub fn with_order(order: usize) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Checks that the options describe a usable tree.
    pub fn validate(&self) -> Result<()> {
        if self.order < MIN_ORDER {
            return Err(BTreeError::InvalidOrder(self.order));
        }
        Ok(())
    }

    /// Parses options from a TOML fragment such as `order = 8`.
    ///
    /// Missing fields take their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: Self =
            toml::from_str(text).map_err(|err| BTreeError::InvalidOptions(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Largest number of keys a node may hold.
    pub(crate) fn max_keys(&self) -> usize {
        self.order - 1
    }

    /// Smallest number of keys a non-root node may hold: `ceil(order / 2) - 1`.
    pub(crate) fn min_keys(&self) -> usize {
        self.order.div_ceil(2) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_bounds_follow_order() {
        let bounds: Vec<_> = (2..=7)
            .map(|order| {
                let opts = BTreeOptions::with_order(order);
                (opts.min_keys(), opts.max_keys())
            })
            .collect();
        assert_eq!(bounds, vec![(0, 1), (1, 2), (1, 3), (2, 4), (2, 5), (3, 6)]);
    }

    #[test]
    fn rejects_small_orders() {
        assert_eq!(
            BTreeOptions::with_order(1).validate(),
            Err(BTreeError::InvalidOrder(1))
        );
        assert_eq!(
            BTreeOptions::with_order(0).validate(),
            Err(BTreeError::InvalidOrder(0))
        );
        assert!(BTreeOptions::with_order(2).validate().is_ok());
    }

    #[test]
    fn parses_toml() {
        let opts = BTreeOptions::from_toml_str("order = 8\ntrack_stats = false\n").unwrap();
        assert_eq!(opts.order, 8);
        assert!(!opts.track_stats);

        let defaults = BTreeOptions::from_toml_str("").unwrap();
        assert_eq!(defaults, BTreeOptions::default());
    }

    #[test]
    fn toml_errors_are_reported() {
        assert!(matches!(
            BTreeOptions::from_toml_str("order = \"wide\""),
            Err(BTreeError::InvalidOptions(_))
        ));
        assert_eq!(
            BTreeOptions::from_toml_str("order = 1"),
            Err(BTreeError::InvalidOrder(1))
        );
    }
}
