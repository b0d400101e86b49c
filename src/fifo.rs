//! FIFO sample decoding and pointer arithmetic
//!
//! The MAX30102 buffers samples in a 16-slot on-chip FIFO. Each slot holds
//! one 6-byte entry: three bytes per channel, IR first, with the 18
//! significant bits left-justified into the low two bits of the first byte.
//! The read and write pointers are 4-bit counters that wrap at 16; samples
//! lost while the FIFO is full are tallied in a separate overflow counter.

/// Number of sample slots in the on-chip FIFO
pub const FIFO_DEPTH: u8 = 16;

/// Size of one FIFO entry in bytes (3 bytes IR + 3 bytes red)
pub const SAMPLE_BYTES: usize = 6;

/// One decoded FIFO entry: raw 18-bit light intensity per channel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Infrared channel intensity (18 significant bits)
    pub ir: u32,
    /// Red channel intensity (18 significant bits)
    pub red: u32,
}

impl Sample {
    /// Decode a raw 6-byte FIFO entry
    ///
    /// Each channel is `(b0 & 0x03) << 16 | b1 << 8 | b2`: two bits from the
    /// first byte, eight from each of the next two. The upper six bits of
    /// the leading byte are undefined on the wire and masked off.
    pub const fn from_bytes(bytes: &[u8; SAMPLE_BYTES]) -> Self {
        Self {
            ir: decode_channel(bytes[0], bytes[1], bytes[2]),
            red: decode_channel(bytes[3], bytes[4], bytes[5]),
        }
    }
}

const fn decode_channel(b0: u8, b1: u8, b2: u8) -> u32 {
    (((b0 & 0x03) as u32) << 16) | ((b1 as u32) << 8) | b2 as u32
}

/// Number of unread FIFO slots given the raw write and read pointers
///
/// Computed as `|16 + wr - rd| mod 16`: absolute value first, then the
/// modulo. Pointers outside 0-15 are not rejected here; the register layer
/// already masks them to four bits.
pub fn available_samples(wr_ptr: u8, rd_ptr: u8) -> u8 {
    let diff = 16 + i16::from(wr_ptr) - i16::from(rd_ptr);
    (diff.unsigned_abs() % u16::from(FIFO_DEPTH)) as u8
}
