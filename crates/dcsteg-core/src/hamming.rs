//! Codec for the Hamming(7,4) self-correcting code.
//!
//! Every nibble (4 data bits) becomes a 7 bit codeword, bit `i` of the codeword
//! being position `i` of the row vector `nibble · G`. The code is systematic,
//! positions 0..4 carry the data bits unchanged.
//!
//! One flipped bit per codeword is corrected. Two or more flips decode to a
//! wrong nibble without any error being reported, the syndrome of such a word
//! always matches some column of `H`. Callers cannot detect that case.

use bitstream_io::{BitRead, BitReader, BitWrite, BitWriter, LittleEndian};

use crate::bit_sequence::CountedBitSequence;
use crate::{DcStegError, Result};

/// Bits per codeword.
pub const CODEWORD_BITS: usize = 7;

/// Bits needed to carry one message byte, a codeword for each nibble.
pub const BITS_PER_BYTE: usize = 2 * CODEWORD_BITS;

/// Generator matrix `G`, one 7 bit row mask per data bit.
///
/// ```text
/// 1 0 0 0 0 1 1
/// 0 1 0 0 1 0 1
/// 0 0 1 0 1 1 0
/// 0 0 0 1 1 1 1
/// ```
const G: [u8; 4] = [0b110_0001, 0b101_0010, 0b011_0100, 0b111_1000];

/// Parity check matrix `H`, its kernel is spanned by the rows of `G`.
///
/// ```text
/// 1 0 1 0 1 0 1
/// 0 1 1 0 0 1 1
/// 0 0 0 1 1 1 1
/// ```
const H: [u8; 3] = [0b101_0101, 0b110_0110, 0b111_1000];

const DATA_MASK: u8 = 0b1111;

/// parity of the set bits, i.e. a sum in GF(2)
#[inline]
fn parity(v: u8) -> u8 {
    (v.count_ones() & 1) as u8
}

/// Encodes the low nibble of `nibble` into its codeword, `nibble · G`.
pub fn encode_nibble(nibble: u8) -> u8 {
    G.iter()
        .enumerate()
        .filter(|(j, _)| nibble & (1 << j) != 0)
        .fold(0, |word, (_, row)| word ^ row)
}

/// The syndrome `H · word` packed as bit `i` = row `i`.
pub fn syndrome(word: u8) -> u8 {
    H.iter()
        .enumerate()
        .fold(0, |s, (i, row)| s | (parity(row & word) << i))
}

/// Column `col` of `H` packed like a syndrome.
fn column(col: usize) -> u8 {
    H.iter()
        .enumerate()
        .fold(0, |c, (i, row)| c | (((row >> col) & 1) << i))
}

/// Decodes a codeword back into its nibble, correcting at most one flipped bit.
pub fn decode_nibble(word: u8) -> Result<u8> {
    let s = syndrome(word);
    if s == 0 {
        return Ok(word & DATA_MASK);
    }

    (0..CODEWORD_BITS)
        .find(|&col| column(col) == s)
        .map(|col| (word ^ (1 << col)) & DATA_MASK)
        .ok_or(DcStegError::UncorrectableCodeword(word))
}

/// Encodes every byte as two codewords, low nibble first.
pub fn encode_message(bytes: &[u8]) -> Result<CountedBitSequence> {
    let mut nibbles = BitReader::endian(bytes, LittleEndian);
    let mut code = CountedBitSequence::new();

    for _ in 0..bytes.len() * 2 {
        let word = encode_nibble(nibbles.read::<u8>(4)?);
        for i in 0..CODEWORD_BITS {
            code.append(word & (1 << i) != 0);
        }
    }

    Ok(code)
}

/// Decodes whole 14 bit windows back into bytes, a trailing partial window is ignored.
pub fn decode_message(code: &CountedBitSequence) -> Result<Vec<u8>> {
    let bytes = code.len() / BITS_PER_BYTE;
    let mut out = BitWriter::endian(Vec::with_capacity(bytes), LittleEndian);

    for i in 0..bytes * 2 {
        let start = i * CODEWORD_BITS;
        let word = (0..CODEWORD_BITS)
            .filter(|&b| code.get(start + b))
            .fold(0u8, |w, b| w | (1 << b));
        out.write(4, decode_nibble(word)?)?;
    }

    Ok(out.into_writer())
}
