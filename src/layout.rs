//! Drawing-surface size estimation from tree height.
//!
//! Only the shape of the tree matters here: the bottom level of a tree of
//! height `h` has room for `2^(h-1)` nodes, and every level gets the same
//! vertical spacing.

use crate::error::{Error, Result};
use crate::tree::TreeOps;

/// Minimum size of a surface able to show a tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    baseline_width: f64,
    baseline_height: f64,
    per_node_width: f64,
    level_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            baseline_width: 800.0,
            baseline_height: 600.0,
            per_node_width: 60.0,
            level_spacing: 120.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(
        baseline_width: f64,
        baseline_height: f64,
        per_node_width: f64,
        level_spacing: f64,
    ) -> Result<Self> {
        let fields = [
            ("baseline_width", baseline_width),
            ("baseline_height", baseline_height),
            ("per_node_width", per_node_width),
            ("level_spacing", level_spacing),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidLayout { field, value });
            }
        }
        Ok(Self {
            baseline_width,
            baseline_height,
            per_node_width,
            level_spacing,
        })
    }

    pub fn estimate(&self, height: usize) -> Layout {
        let width = match height {
            0 => self.baseline_width,
            h => {
                // saturates to infinity for absurd heights instead of wrapping
                let exponent = i32::try_from(h - 1).unwrap_or(i32::MAX);
                self.baseline_width
                    .max(2f64.powi(exponent) * self.per_node_width)
            }
        };
        Layout {
            width,
            height: self.baseline_height.max(height as f64 * self.level_spacing),
        }
    }

    pub fn for_tree<T>(&self, tree: &impl TreeOps<T>) -> Layout {
        self.estimate(tree.height())
    }
}
