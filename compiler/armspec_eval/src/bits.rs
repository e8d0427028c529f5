//! Fixed-width bit vectors with don't-care positions.
//!
//! A [`Bits`] holds up to 32 bits. Each position is `0`, `1`, or
//! don't-care (`x`). Don't-care positions always carry a `0` payload bit,
//! so two vectors with the same digits are structurally equal.

use std::fmt;

use crate::errors::{width_mismatch, width_out_of_range, EvalError};

/// Bit vector of width `0..=32`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    width: u32,
    value: u32,
    dont_care: u32,
}

/// Mask covering the low `width` bits.
#[inline]
const fn low_mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

impl Bits {
    /// Widest supported vector.
    pub const MAX_WIDTH: u32 = 32;

    /// Concrete vector; payload bits above `width` are dropped.
    pub fn new(width: u32, value: u32) -> Result<Self, EvalError> {
        Self::with_dont_care(width, value, 0)
    }

    /// Vector with explicit don't-care positions.
    pub fn with_dont_care(width: u32, value: u32, dont_care: u32) -> Result<Self, EvalError> {
        if width > Self::MAX_WIDTH {
            return Err(width_out_of_range(i64::from(width)));
        }
        let mask = low_mask(width);
        let dont_care = dont_care & mask;
        Ok(Bits {
            width,
            value: value & mask & !dont_care,
            dont_care,
        })
    }

    /// All-zero vector, as returned by `Zeros(n)`.
    pub fn zeros(width: u32) -> Result<Self, EvalError> {
        Self::new(width, 0)
    }

    /// Vector whose every position is don't-care, as produced by
    /// `bits(n) UNKNOWN`.
    pub fn unknown(width: u32) -> Result<Self, EvalError> {
        Self::with_dont_care(width, 0, u32::MAX)
    }

    /// Build from literal digits over `0`, `1` and `x`, most significant
    /// first. Other characters are ignored.
    pub fn from_literal(digits: &str) -> Result<Self, EvalError> {
        let mut width = 0u32;
        let mut value = 0u32;
        let mut dont_care = 0u32;
        for digit in digits.chars() {
            let (bit, wild) = match digit {
                '0' => (0, 0),
                '1' => (1, 0),
                'x' => (0, 1),
                _ => continue,
            };
            width += 1;
            if width > Self::MAX_WIDTH {
                return Err(width_out_of_range(i64::from(width)));
            }
            value = (value << 1) | bit;
            dont_care = (dont_care << 1) | wild;
        }
        Self::with_dont_care(width, value, dont_care)
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Payload bits; don't-care positions read as `0`.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub const fn dont_care(&self) -> u32 {
        self.dont_care
    }

    /// Whether no position is don't-care.
    pub const fn is_concrete(&self) -> bool {
        self.dont_care == 0
    }

    /// Equality with wildcard matching: positions that are don't-care in
    /// `comparand` match anything. The receiver's own don't-care bits get
    /// no special treatment.
    pub fn matches(&self, comparand: &Bits) -> Result<bool, EvalError> {
        if self.width != comparand.width {
            return Err(width_mismatch("==", self.width, comparand.width));
        }
        Ok(self.value & !comparand.dont_care == comparand.value)
    }

    /// `self : low`, with `self` in the high positions.
    pub fn concat(&self, low: &Bits) -> Result<Bits, EvalError> {
        let width = self.width + low.width;
        if width > Self::MAX_WIDTH {
            return Err(width_out_of_range(i64::from(width)));
        }
        // A 32-bit low half leaves no room above it; the high half is empty then.
        let shift = |v: u32| v.checked_shl(low.width).unwrap_or(0);
        Ok(Bits {
            width,
            value: shift(self.value) | low.value,
            dont_care: shift(self.dont_care) | low.dont_care,
        })
    }

    /// Inclusive slice `hi:lo` as a new vector of width `hi - lo + 1`.
    /// Callers check `lo <= hi < width`.
    pub fn slice(&self, hi: u32, lo: u32) -> Bits {
        let width = hi - lo + 1;
        let mask = low_mask(width);
        Bits {
            width,
            value: (self.value >> lo) & mask,
            dont_care: (self.dont_care >> lo) & mask,
        }
    }

    /// Same payload under a new total width, as `ZeroExtend` does. Callers
    /// check `self.width <= width <= 32`.
    pub fn relabel(&self, width: u32) -> Bits {
        Bits { width, ..*self }
    }

    /// Number of set payload bits; don't-care positions are not counted.
    pub fn count_ones(&self) -> u32 {
        self.value.count_ones()
    }

    /// Unsigned interpretation.
    pub fn to_unsigned(&self) -> i64 {
        i64::from(self.value)
    }

    /// Two's-complement interpretation at this width.
    pub fn to_signed(&self) -> i64 {
        if self.width == 0 {
            return 0;
        }
        let unused = 64 - self.width;
        (i64::from(self.value) << unused) >> unused
    }

    /// Bitwise combination of equal-width vectors. Don't-care positions of
    /// either operand stay don't-care.
    pub fn bitwise(
        &self,
        other: &Bits,
        op: &'static str,
        f: impl Fn(u32, u32) -> u32,
    ) -> Result<Bits, EvalError> {
        if self.width != other.width {
            return Err(width_mismatch(op, self.width, other.width));
        }
        Bits::with_dont_care(
            self.width,
            f(self.value, other.value),
            self.dont_care | other.dont_care,
        )
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for i in (0..self.width).rev() {
            let digit = if (self.dont_care >> i) & 1 != 0 {
                'x'
            } else if (self.value >> i) & 1 != 0 {
                '1'
            } else {
                '0'
            };
            write!(f, "{digit}")?;
        }
        f.write_str("'")
    }
}
