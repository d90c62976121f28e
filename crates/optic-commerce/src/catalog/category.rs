//! Product categories carried by the distributor.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Optical frames.
    Frames,
    /// Sunglasses.
    Sunglasses,
    /// Prescription and coated lenses.
    Lenses,
    /// Cases, cloths, cleaning and repair supplies.
    Accessories,
}

impl Category {
    /// Every category, in storefront order.
    pub const ALL: [Category; 4] = [
        Category::Frames,
        Category::Sunglasses,
        Category::Lenses,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frames => "frames",
            Category::Sunglasses => "sunglasses",
            Category::Lenses => "lenses",
            Category::Accessories => "accessories",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Frames => "Frames",
            Category::Sunglasses => "Sunglasses",
            Category::Lenses => "Lenses",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frames" | "frame" => Ok(Category::Frames),
            "sunglasses" => Ok(Category::Sunglasses),
            "lenses" | "lens" => Ok(Category::Lenses),
            "accessories" | "accessory" => Ok(Category::Accessories),
            _ => Err(CommerceError::UnknownCategory(s.to_string())),
        }
    }
}
