//! Canonically ordered pair of distinct assets.

use super::AssetId;
use crate::error::AmmError;

/// An unordered pair of distinct assets, stored in canonical order.
///
/// The canonical ordering guarantees `first() < second()` under the
/// lexicographic byte order of [`AssetId`], so a pair of assets always
/// maps to exactly one `AssetPair` value regardless of argument order.
/// This is what keys a pool's identity for the (external) registry.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// // Order is enforced automatically:
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both identifiers are equal.
    pub fn new(asset1: AssetId, asset2: AssetId) -> Result<Self, AmmError> {
        if asset1 == asset2 {
            return Err(AmmError::InvalidAsset);
        }
        let (asset_a, asset_b) = if asset1 < asset2 {
            (asset1, asset2)
        } else {
            (asset2, asset1)
        };
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset (lower identifier).
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset (higher identifier).
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `asset` is not in the pair.
    pub fn other(&self, asset: &AssetId) -> Result<AssetId, AmmError> {
        if *asset == self.asset_a {
            Ok(self.asset_b)
        } else if *asset == self.asset_b {
            Ok(self.asset_a)
        } else {
            Err(AmmError::InvalidAsset)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    #[test]
    fn preserves_sorted_input() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), asset(1));
        assert_eq!(pair.second(), asset(2));
    }

    #[test]
    fn sorts_reversed_input() {
        let Ok(pair) = AssetPair::new(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), asset(1));
        assert_eq!(pair.second(), asset(2));
    }

    #[test]
    fn rejects_identical_assets() {
        assert_eq!(
            AssetPair::new(asset(1), asset(1)),
            Err(AmmError::InvalidAsset)
        );
    }

    #[test]
    fn contains_both_members_only() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&asset(1)));
        assert!(pair.contains(&asset(2)));
        assert!(!pair.contains(&asset(3)));
    }

    #[test]
    fn other_returns_counterpart() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.other(&asset(1)), Ok(asset(2)));
        assert_eq!(pair.other(&asset(2)), Ok(asset(1)));
        assert_eq!(pair.other(&asset(3)), Err(AmmError::InvalidAsset));
    }

    #[test]
    fn argument_order_is_irrelevant_to_equality() {
        let (Ok(p1), Ok(p2)) = (
            AssetPair::new(asset(1), asset(2)),
            AssetPair::new(asset(2), asset(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(p1, p2);
    }
}
