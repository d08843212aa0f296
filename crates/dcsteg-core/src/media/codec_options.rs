use super::order::BitOrder;

/// Codec configuration for hiding and unveiling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// The imprint strength, decides which bit of a DC coefficient carries the message.
    /// Higher orders are more visible, run an analysis to find out which orders have space.
    ///
    /// Note the same order must be used for hiding and unveiling.
    pub bit_order: BitOrder,
}

impl CodecOptions {
    pub fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }
}

impl From<BitOrder> for CodecOptions {
    fn from(bit_order: BitOrder) -> Self {
        Self { bit_order }
    }
}
