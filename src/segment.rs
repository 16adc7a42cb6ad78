//! Seven-segment digit decoding.
//!
//! Patterns use bit 0 for segment `a` through bit 6 for segment `g`:
//!
//! ```txt
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd
//! ```

/// Bitfield of lit segments, `a` in bit 0 through `g` in bit 6.
pub type SegmentPattern = u8;

/// All segments off.
pub const BLANK: SegmentPattern = 0x00;

/// Patterns for the digits 0 through 9.
pub const DIGIT_PATTERNS: [SegmentPattern; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x67, // 9
];

/// Decodes a decimal digit into its segment pattern.
///
/// Values of 10 and above return [`BLANK`].
#[inline]
pub const fn decode(digit: u8) -> SegmentPattern {
    if digit < 10 {
        DIGIT_PATTERNS[digit as usize]
    } else {
        BLANK
    }
}
