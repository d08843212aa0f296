//! Bit orders and the eligibility of coefficients to carry a message bit.
//!
//! A coefficient carries its bit at position `order` of `floor(|value|)`. It is
//! eligible when some bit above `order` is set, so that rewriting the bit can
//! never zero the magnitude, and when setting the bit keeps the magnitude at or
//! below [`MAX_MAGNITUDE`]. Brighter DC terms would cut off high bits once the
//! block is converted back to 8 bit RGB.

use std::fmt;
use std::str::FromStr;

use crate::DcStegError;

/// Highest quantized magnitude that may carry information.
pub const MAX_MAGNITUDE: u32 = 20;

/// Position of the bit that carries message data inside a coefficient's integer magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitOrder(u8);

impl BitOrder {
    /// Highest order that can be represented, bits above it do not fit the magnitude.
    pub const MAX: u8 = 30;

    /// Orders that can yield eligible coefficients at all given [`MAX_MAGNITUDE`].
    pub const USABLE: [BitOrder; 3] = [BitOrder(0), BitOrder(1), BitOrder(2)];

    pub fn new(order: u8) -> crate::Result<Self> {
        if order > Self::MAX {
            return Err(DcStegError::InvalidBitOrder(order.to_string()));
        }
        Ok(Self(order))
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    #[inline]
    fn mask(&self) -> u32 {
        1 << self.0
    }

    /// true if `value` can carry a bit at this order
    pub fn is_eligible(&self, value: f64) -> bool {
        let magnitude = value.abs().floor();
        magnitude >= (1u64 << (self.0 + 1)) as f64
            && ((magnitude as u32) | self.mask()) <= MAX_MAGNITUDE
    }

    /// Reads the bit at this order of `floor(|value|)`.
    pub fn read(&self, value: f64) -> bool {
        (value.abs().floor() as u32) & self.mask() != 0
    }

    /// Rewrites the bit at this order, keeping sign and fraction.
    ///
    /// Returns the new value and whether the bit actually flipped.
    pub fn write(&self, value: f64, bit: bool) -> (f64, bool) {
        let sign = if value >= 0.0 { 1.0 } else { -1.0 };
        let magnitude = value.abs();
        let integer = magnitude.floor() as u32;
        let fraction = magnitude - integer as f64;

        let changed = (integer & self.mask() != 0) != bit;
        let integer = if bit {
            integer | self.mask()
        } else {
            integer & !self.mask()
        };

        (sign * (integer as f64 + fraction), changed)
    }
}

impl fmt::Display for BitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for BitOrder {
    type Error = DcStegError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl FromStr for BitOrder {
    type Err = DcStegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| DcStegError::InvalidBitOrder(s.to_owned()))
            .and_then(Self::new)
    }
}
