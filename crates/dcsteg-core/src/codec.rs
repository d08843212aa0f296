//! Message framing on top of the medium and the Hamming code.
//!
//! A message travels as its bytes followed by [`TERMINATOR`], Hamming encoded
//! low nibble first. There is no header, the first zero byte ends the message
//! on the way out.

use log::debug;

use crate::bit_sequence::CountedBitSequence;
use crate::hamming::{self, BITS_PER_BYTE};
use crate::media::{BitOrder, ImprintStats, MediumReader, MediumWriter, YCbCrImage};
use crate::Result;

/// Four NULL bytes mark the end of a message. One would do, the redundancy
/// guards against a corrupted terminator.
pub const TERMINATOR: [u8; 4] = [0; 4];

/// Number of message bytes that fit into `available_bits` carrier bits.
///
/// Negative when not even the terminator fits, callers must not imprint then.
pub fn capacity_bytes(available_bits: i64) -> i64 {
    available_bits / BITS_PER_BYTE as i64 - TERMINATOR.len() as i64
}

/// Number of carrier bits a message of `message_len` bytes occupies, terminator included.
pub fn required_bits(message_len: usize) -> usize {
    (message_len + TERMINATOR.len()) * BITS_PER_BYTE
}

/// Imprints `message` into the transformed image.
///
/// The message should not contain NULL bytes, it would be cut off there when
/// extracted. Fails with `EndOfMedium` when the image has not enough space.
pub fn imprint(image: &mut YCbCrImage, message: &[u8], order: BitOrder) -> Result<ImprintStats> {
    let mut framed = Vec::with_capacity(message.len() + TERMINATOR.len());
    framed.extend_from_slice(message);
    framed.extend_from_slice(&TERMINATOR);

    let code = hamming::encode_message(&framed)?;
    debug!(
        "imprinting {} bytes as {} bits at order {order}",
        message.len(),
        code.len()
    );

    let mut writer = MediumWriter::new(image, order);
    for bit in code.iter() {
        writer.write_bit(bit)?;
    }

    let stats = writer.stats();
    debug!(
        "changed {} of {} bits, ratio {:.3}",
        stats.changed,
        stats.encountered,
        stats.ratio()
    );
    Ok(stats)
}

/// Extracts a message from the transformed image.
///
/// Reading stops at the end of the medium, that is not an error here. Without
/// any zero byte the whole decoded, probably garbled, data is returned.
pub fn extract(image: &YCbCrImage, order: BitOrder) -> Result<Vec<u8>> {
    let code: CountedBitSequence = MediumReader::new(image, order).collect();
    debug!("extracted {} bits at order {order}", code.len());

    let mut message = hamming::decode_message(&code)?;
    if let Some(end) = message.iter().position(|b| *b == 0) {
        message.truncate(end);
    }

    Ok(message)
}
