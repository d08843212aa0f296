//! Access to the bits that the transformed luma plane can carry.
//!
//! Blocks are visited in row-major block order, left to right and top to
//! bottom, blocks smaller than 8×8 are skipped. Inside a block the cursor walks
//! all 64 positions row by row but admits only the DC coefficient at (0,0),
//! it is far more stable than any AC coefficient. An admitted coefficient is
//! used when [`BitOrder::is_eligible`] holds for it.
//!
//! [`MediumReader`] and [`MediumWriter`] share one cursor type, so hiding,
//! unveiling and capacity analysis enumerate identical positions.

use crate::media::block::N;
use crate::media::order::BitOrder;
use crate::media::ycbcr::YCbCrImage;
use crate::{DcStegError, Result};

/// only DC coefficients carry data
#[inline]
fn is_admissible(x: usize, y: usize) -> bool {
    x == 0 && y == 0
}

/// Forward-only cursor over the full blocks of a plane.
#[derive(Debug, Clone)]
pub(crate) struct MediumCursor {
    order: BitOrder,
    width: usize,
    /// `width * height` of the image the cursor was built for
    plane_len: usize,
    blocks_wide: usize,
    block_count: usize,
    /// index of the current block, `by * blocks_wide + bx`
    block: usize,
    /// next intra-block position, `y * 8 + x`
    position: usize,
    consumed: usize,
}

impl MediumCursor {
    pub fn new(image: &YCbCrImage, order: BitOrder) -> Self {
        Self {
            order,
            width: image.width(),
            plane_len: image.width() * image.height(),
            blocks_wide: image.blocks_wide(),
            block_count: image.blocks_wide() * image.blocks_tall(),
            block: 0,
            position: 0,
            consumed: 0,
        }
    }

    pub fn order(&self) -> BitOrder {
        self.order
    }

    /// Moves to the next eligible coefficient and returns its index in `plane`.
    ///
    /// A plane of another size than the cursor's image has no positions.
    pub(crate) fn advance(&mut self, plane: &[f64]) -> Result<usize> {
        if plane.len() != self.plane_len {
            return Err(self.end_of_medium());
        }

        while self.block < self.block_count {
            let bx = (self.block % self.blocks_wide) * N;
            let by = (self.block / self.blocks_wide) * N;

            while self.position < N * N {
                let (x, y) = (self.position % N, self.position / N);
                self.position += 1;

                if !is_admissible(x, y) {
                    continue;
                }
                let index = (by + y) * self.width + bx + x;
                if self.order.is_eligible(plane[index]) {
                    self.consumed += 1;
                    return Ok(index);
                }
            }

            self.block += 1;
            self.position = 0;
        }

        Err(self.end_of_medium())
    }

    fn end_of_medium(&self) -> DcStegError {
        DcStegError::EndOfMedium {
            consumed: self.consumed,
        }
    }
}

/// Reads message bits out of a transformed image.
pub struct MediumReader<'i> {
    plane: &'i [f64],
    cursor: MediumCursor,
}

impl<'i> MediumReader<'i> {
    pub fn new(image: &'i YCbCrImage, order: BitOrder) -> Self {
        Self {
            plane: image.y(),
            cursor: MediumCursor::new(image, order),
        }
    }

    /// Reads the next bit, fails with `EndOfMedium` when no eligible coefficient is left.
    pub fn read_bit(&mut self) -> Result<bool> {
        let index = self.cursor.advance(self.plane)?;
        Ok(self.cursor.order().read(self.plane[index]))
    }
}

/// yields bits until the medium is exhausted
impl Iterator for MediumReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_bit().ok()
    }
}

/// Counts of the bits written by a [`MediumWriter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImprintStats {
    pub encountered: usize,
    pub changed: usize,
}

impl ImprintStats {
    /// Ratio of changed to written bits, a distortion metric. `0.0` if nothing was written.
    pub fn ratio(&self) -> f64 {
        if self.encountered == 0 {
            0.0
        } else {
            self.changed as f64 / self.encountered as f64
        }
    }
}

/// Writes message bits into a transformed image.
pub struct MediumWriter<'i> {
    plane: &'i mut [f64],
    cursor: MediumCursor,
    stats: ImprintStats,
}

impl<'i> MediumWriter<'i> {
    pub fn new(image: &'i mut YCbCrImage, order: BitOrder) -> Self {
        let cursor = MediumCursor::new(image, order);
        Self {
            plane: image.y_mut(),
            cursor,
            stats: ImprintStats::default(),
        }
    }

    /// Writes the next bit, fails with `EndOfMedium` when no eligible coefficient is left.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        let index = self.cursor.advance(self.plane)?;
        let (value, changed) = self.cursor.order().write(self.plane[index], bit);
        self.plane[index] = value;

        self.stats.encountered += 1;
        if changed {
            self.stats.changed += 1;
        }
        Ok(())
    }

    pub fn stats(&self) -> ImprintStats {
        self.stats
    }

    /// Ratio of changed to written bits, see [`ImprintStats::ratio`].
    pub fn statistics(&self) -> f64 {
        self.stats.ratio()
    }
}
