//! Validated request quantity.

use std::fmt;

use serde::Serialize;

use super::InventoryError;

/// Strictly positive number of units requested by a mutation.
///
/// Only [`Quantity::try_from_raw`] and [`Quantity::new`] construct values, so
/// holding a `Quantity` proves the amount has been validated.
///
/// # Examples
/// ```
/// use sweetshop::domain::Quantity;
///
/// assert_eq!(Quantity::try_from_raw(Some(5)).unwrap().get(), 5);
/// assert!(Quantity::try_from_raw(Some(0)).is_err());
/// assert!(Quantity::try_from_raw(Some(-3)).is_err());
/// assert!(Quantity::try_from_raw(None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Wrap a non-zero unit count.
    pub fn new(value: u32) -> Result<Self, InventoryError> {
        if value == 0 {
            return Err(InventoryError::InvalidQuantity);
        }
        Ok(Self(value))
    }

    /// Validate a raw, possibly missing, request value.
    ///
    /// Accepts `1..=u32::MAX`. A missing, zero or negative value is rejected
    /// with [`InventoryError::InvalidQuantity`], and so is anything above
    /// `u32::MAX`: such an amount is not a unit count at all, so it is refused
    /// before stock is consulted. A purchase of exactly `u32::MAX` is a valid
    /// request and reports insufficient stock in the usual way.
    pub fn try_from_raw(raw: Option<i64>) -> Result<Self, InventoryError> {
        let value = raw.ok_or(InventoryError::InvalidQuantity)?;
        let value = u32::try_from(value).map_err(|_| InventoryError::InvalidQuantity)?;
        Self::new(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
