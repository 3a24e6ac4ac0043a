// The fixed-point layout follows the cosmwasm-std `Decimal` type, which is licensed under
// the Apache License 2.0 - https://github.com/CosmWasm/cosmwasm.

#![no_std]

/// A non-negative fixed-point number stored as `atomics / 10^decimal_places`.
///
/// Oracles publish prices with their own precision, so unlike a classic
/// 18-decimal type the number of decimal places travels with the value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Decimal {
    atomics: i128,
    decimal_places: u32,
}

impl Decimal {
    /// `10^38` is the largest power of ten representable in an `i128`.
    pub const MAX_DECIMAL_PLACES: u32 = 38;

    /// Returns `None` for negative atomics or an unrepresentable precision.
    pub fn new(atomics: i128, decimal_places: u32) -> Option<Self> {
        if atomics < 0 || decimal_places > Self::MAX_DECIMAL_PLACES {
            return None;
        }
        Some(Decimal {
            atomics,
            decimal_places,
        })
    }

    /// Create a 1.0 Decimal
    #[inline]
    pub const fn one() -> Self {
        Decimal {
            atomics: 1,
            decimal_places: 0,
        }
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.atomics == 0
    }

    #[inline]
    fn denominator(&self) -> i128 {
        // bounded by MAX_DECIMAL_PLACES in every constructor
        10i128.pow(self.decimal_places)
    }

    /// Multiplies an integer amount by this decimal, truncating toward zero.
    ///
    /// The amount is split into whole multiples of the denominator and a
    /// remainder, so large amounts do not overflow through the intermediate
    /// `amount * atomics` product. Only the sub-unit remainder is lost.
    /// Returns `None` on overflow.
    ///
    /// ## Examples
    ///
    /// ```
    /// use staking_decimal::Decimal;
    /// let rate = Decimal::new(25, 1).unwrap(); // 2.5
    /// assert_eq!(rate.checked_mul_int(7), Some(17));
    /// ```
    pub fn checked_mul_int(&self, amount: i128) -> Option<i128> {
        if amount == 0 || self.is_zero() {
            return Some(0);
        }
        let denominator = self.denominator();
        let whole = (amount / denominator).checked_mul(self.atomics)?;
        let fraction = (amount % denominator).checked_mul(self.atomics)? / denominator;
        whole.checked_add(fraction)
    }
}

#[cfg(test)]
impl Decimal {
    /// Convert x% into Decimal
    const fn percent(x: u32) -> Self {
        Decimal {
            atomics: x as i128,
            decimal_places: 2,
        }
    }
}
