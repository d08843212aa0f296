//! How many bits, and hence message bytes, an image offers per bit order.

use std::fmt;

use crate::codec::capacity_bytes;
use crate::media::{BitOrder, MediumReader, YCbCrImage};

/// Carrier bits available per usable bit order. Orders above 2 never yield any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapacityReport {
    bits: [usize; BitOrder::USABLE.len()],
}

/// One line of a [`CapacityReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderCapacity {
    pub order: BitOrder,
    pub bits: usize,
    pub bytes: i64,
}

impl CapacityReport {
    /// Counts the eligible DC coefficients of a transformed image for orders 0 to 2.
    ///
    /// The count walks the same positions as hiding does, so it matches the
    /// space that is really there.
    pub fn analyze(image: &YCbCrImage) -> Self {
        let mut report = Self::default();
        for (slot, order) in report.bits.iter_mut().zip(BitOrder::USABLE) {
            *slot = MediumReader::new(image, order).count();
        }
        report
    }

    pub fn bits(&self, order: BitOrder) -> usize {
        self.bits
            .get(order.value() as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Message bytes that fit at `order`, may be negative.
    pub fn bytes(&self, order: BitOrder) -> i64 {
        capacity_bytes(self.bits(order) as i64)
    }

    /// Usable orders up to, not including, the first one without any space.
    /// If an order yields nothing all higher orders do not either.
    pub fn iter(&self) -> impl Iterator<Item = OrderCapacity> + '_ {
        BitOrder::USABLE
            .into_iter()
            .map(move |order| OrderCapacity {
                order,
                bits: self.bits(order),
                bytes: self.bytes(order),
            })
            .take_while(|c| c.bits > 0)
    }
}

impl fmt::Display for OrderCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} bits, after encoding {} bytes available for the message",
            self.order, self.bits, self.bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::imprint;
    use crate::media::RgbImage;
    use crate::test_utils::{prepare_block_image, ELIGIBLE_GRAY};

    fn transformed(img: &RgbImage) -> YCbCrImage {
        let mut ymg = YCbCrImage::from(img);
        ymg.forward_transform();
        ymg
    }

    fn order(o: u8) -> BitOrder {
        BitOrder::new(o).unwrap()
    }

    #[test]
    fn should_count_eligible_blocks_per_order() {
        // DC of gray g is (g - 128) / 2: 99 -> -14.5, 113 -> -7.5, 121 -> -3.5, 128 -> 0
        let grays = [ELIGIBLE_GRAY, 113, 121, 128];
        let ymg = transformed(&prepare_block_image(32, 16, |bx, _| grays[bx]));
        let report = CapacityReport::analyze(&ymg);

        assert_eq!(report.bits(order(0)), 6);
        assert_eq!(report.bits(order(1)), 4);
        assert_eq!(report.bits(order(2)), 2);
        assert_eq!(report.bits(order(3)), 0);
        assert_eq!(report.bytes(order(0)), -4);
    }

    #[test]
    fn should_ignore_partial_blocks() {
        let ymg = transformed(&prepare_block_image(15, 15, |_, _| ELIGIBLE_GRAY));
        assert_eq!(CapacityReport::analyze(&ymg).bits(order(0)), 1);
    }

    #[test]
    fn should_stop_listing_at_the_first_empty_order() {
        let ymg = transformed(&prepare_block_image(16, 8, |_, _| 121));
        let lines: Vec<_> = CapacityReport::analyze(&ymg).iter().collect();

        assert_eq!(
            lines,
            vec![OrderCapacity {
                order: order(0),
                bits: 2,
                bytes: -4
            }]
        );
        assert_eq!(
            lines[0].to_string(),
            "0: 2 bits, after encoding -4 bytes available for the message"
        );
    }

    #[test]
    fn should_match_the_space_used_by_imprinting() {
        let mut ymg = transformed(&prepare_block_image(112, 72, |_, _| ELIGIBLE_GRAY));
        let report = CapacityReport::analyze(&ymg);
        let fitting = vec![b'x'; report.bytes(order(0)) as usize];

        assert!(imprint(&mut ymg.clone(), &fitting, order(0)).is_ok());
        let mut too_long = fitting.clone();
        too_long.push(b'x');
        assert!(imprint(&mut ymg, &too_long, order(0))
            .unwrap_err()
            .is_end_of_medium());
    }
}
