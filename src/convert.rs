//! Radix conversion: bases 2 through 36 in the `0-9a-z` alphabet, and
//! base 256 as a raw big-endian byte encoding.
//!
//! Power-of-two bases never divide: formatting streams the value as
//! half-digits and peels characters off with shifts, parsing shifts and ORs
//! the character values in. Everything else goes through single-digit
//! multiplication and division.

use alloc::string::String;
use alloc::vec::Vec;

use crate::arithmetic::add::add_assign_digit;
use crate::arithmetic::divide::div_rem_assign_digit;
use crate::arithmetic::multiply::mul_assign_digit;
use crate::digit::{Digit, DIGIT_BITS, DIGIT_OCTETS, HALF_DIGIT_BITS};
use crate::error::{Error, Result};
use crate::Unsigned;

/// The digit alphabet. Values 0..=35 format through it.
const CHR: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Character values for parsing; 0xff marks everything outside the
/// alphabet. Upper- and lowercase letters carry the same values.
const ORD: [u8; 256] = {
    let mut table = [0xff_u8; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 26 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

/// log2 of the base for the shift-only paths, 0 for non-powers-of-two.
fn base_bits(base: u32) -> usize {
    if base.is_power_of_two() {
        base.trailing_zeros() as usize
    } else {
        0
    }
}

impl Unsigned {
    /// Parse from `bytes` in the given base.
    ///
    /// Bases 2..=36 read characters of the `0-9a-z` alphabet (either case);
    /// base 256 reads a raw big-endian byte sequence. Empty input parses to
    /// zero.
    pub fn from_radix_bytes(bytes: &[u8], base: u32) -> Result<Self> {
        match base {
            2..=36 => {
                let bits = base_bits(base);
                let mut result = Self::zero();
                if bits > 0 {
                    result.reserve(bytes.len() * bits / DIGIT_BITS + 1);
                    for &chr in bytes {
                        let d = ORD[chr as usize];
                        if d as u32 >= base {
                            return Err(Error::InvalidDigit { chr: chr as char, base });
                        }
                        result <<= bits;
                        if d != 0 {
                            // the freshly shifted low bits are zero
                            if result.is_zero() {
                                result.append_digit(d as Digit);
                            } else {
                                result.digits_mut()[0] |= d as Digit;
                            }
                        }
                    }
                } else {
                    for &chr in bytes {
                        let d = ORD[chr as usize];
                        if d as u32 >= base {
                            return Err(Error::InvalidDigit { chr: chr as char, base });
                        }
                        mul_assign_digit(&mut result, base as Digit);
                        if d != 0 {
                            add_assign_digit(&mut result, d as Digit);
                        }
                    }
                }
                Ok(result)
            }
            256 => {
                let mut result = Self::zero();
                result.reserve(bytes.len() / DIGIT_OCTETS + 1);
                // rchunks pads the high-order chunk implicitly: the first
                // yielded chunks are the full low-order digits.
                for chunk in bytes.rchunks(DIGIT_OCTETS) {
                    let mut digit: Digit = 0;
                    for &octet in chunk {
                        digit = (digit << 8) | octet as Digit;
                    }
                    result.append_digit(digit);
                }
                result.trim();
                Ok(result)
            }
            _ => Err(Error::InvalidBase { base }),
        }
    }

    /// [`from_radix_bytes`](Self::from_radix_bytes) over `str` input.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self> {
        Self::from_radix_bytes(s.as_bytes(), base)
    }

    /// Format in the given base.
    ///
    /// Bases 2..=36 yield ASCII characters of the `0-9a-z` alphabet, base
    /// 256 the raw big-endian bytes. Zero formats as `"0"` (one zero byte
    /// for base 256).
    pub fn to_radix_bytes(&self, base: u32) -> Result<Vec<u8>> {
        match base {
            2..=36 => Ok(self.format_radix(base)),
            256 => Ok(self.raw()),
            _ => Err(Error::InvalidBase { base }),
        }
    }

    /// Format in the given base, left-padded with `'0'` characters up to
    /// `min_width`.
    pub fn str_radix(&self, base: u32, min_width: usize) -> Result<String> {
        match base {
            2..=36 => {
                let digits = self.format_radix(base);
                let pad = min_width.saturating_sub(digits.len());
                let mut s = String::with_capacity(pad + digits.len());
                for _ in 0..pad {
                    s.push('0');
                }
                s.extend(digits.into_iter().map(char::from));
                Ok(s)
            }
            _ => Err(Error::InvalidBase { base }),
        }
    }

    /// The base-2 representation.
    pub fn bin(&self) -> String {
        self.radix_string(2)
    }

    /// The base-8 representation.
    pub fn oct(&self) -> String {
        self.radix_string(8)
    }

    /// The base-16 representation.
    pub fn hex(&self) -> String {
        self.radix_string(16)
    }

    /// The raw big-endian bytes, without leading zero octets; zero is the
    /// single zero byte.
    pub fn raw(&self) -> Vec<u8> {
        if self.is_zero() {
            return alloc::vec![0];
        }
        let digits = self.digits();
        let mut out = Vec::with_capacity(digits.len() * DIGIT_OCTETS);
        for &digit in digits {
            let mut digit = digit;
            for _ in 0..DIGIT_OCTETS {
                out.push(digit as u8);
                digit >>= 8;
            }
        }
        while out.last() == Some(&0) {
            out.pop();
        }
        out.reverse();
        out
    }

    fn radix_string(&self, base: u32) -> String {
        self.format_radix(base).into_iter().map(char::from).collect()
    }

    /// Characters for bases 2..=36, most significant first.
    pub(crate) fn format_radix(&self, base: u32) -> Vec<u8> {
        debug_assert!((2..=36).contains(&base));
        if self.is_zero() {
            return alloc::vec![b'0'];
        }
        let bits = base_bits(base);
        let mut out = if bits > 0 {
            self.format_pow2(bits)
        } else {
            self.format_general(base)
        };
        out.reverse();
        out
    }

    /// Division-free path for power-of-two bases.
    ///
    /// The value is read as a stream of half-digits, least significant
    /// first; `num` always holds the current half and the one above it, so
    /// a character chunk straddling the boundary comes out with one shift.
    /// Characters are produced least significant first; the caller
    /// reverses.
    fn format_pow2(&self, base_bits: usize) -> Vec<u8> {
        let digits = self.digits();
        let mask = ((1 as Digit) << base_bits) - 1;
        let half_mask = ((1 as Digit) << HALF_DIGIT_BITS) - 1;
        let half = |i: usize| -> Digit {
            let digit = digits[i / 2];
            if i % 2 == 0 {
                digit & half_mask
            } else {
                digit >> HALF_DIGIT_BITS
            }
        };

        let total_halves = digits.len() * 2;
        let mut out = Vec::with_capacity(digits.len() * (DIGIT_BITS / base_bits + 1));

        let mut num: Digit = half(0) << HALF_DIGIT_BITS;
        let mut ptr = 1;
        let mut shift = 0;
        for _ in 1..total_halves {
            num >>= HALF_DIGIT_BITS;
            num |= half(ptr) << HALF_DIGIT_BITS;
            ptr += 1;
            loop {
                out.push(CHR[((num >> shift) & mask) as usize]);
                shift += base_bits;
                if shift > HALF_DIGIT_BITS {
                    break;
                }
            }
            shift -= HALF_DIGIT_BITS;
        }
        num >>= shift + HALF_DIGIT_BITS;
        while num != 0 {
            out.push(CHR[(num & mask) as usize]);
            num >>= base_bits;
        }

        // the chunking overshoots: drop high zero characters
        while out.last() == Some(&b'0') {
            out.pop();
        }
        out
    }

    /// Repeated division by the base, remainders out least significant
    /// first; the caller reverses.
    fn format_general(&self, base: u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * DIGIT_BITS / base.ilog2() as usize + 1);
        let mut quotient = self.clone();
        while !quotient.is_zero() {
            let digit = div_rem_assign_digit(&mut quotient, base as Digit);
            out.push(CHR[digit as usize]);
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    // Known representations of 2216002924 across the small bases.
    const STR_TESTS: &[(u32, &str)] = &[
        (2, "10000100000101011000010101101100"),
        (3, "12201102210121112101"),
        (4, "2010011120111230"),
        (5, "14014244043144"),
        (6, "1003520344444"),
        (7, "105625466632"),
        (8, "20405302554"),
        (9, "5642717471"),
        (10, "2216002924"),
        (11, "a3796a883"),
        (12, "51a175124"),
        (13, "294145645"),
        (14, "170445352"),
        (15, "ce82d6d4"),
        (16, "8415856c"),
    ];

    #[test]
    fn known_representations() {
        let original = Unsigned::from(2216002924u32);
        for &(base, expected) in STR_TESTS {
            assert_eq!(original.str_radix(base, 0).unwrap(), expected, "base {}", base);
            assert_eq!(
                Unsigned::from_str_radix(expected, base).unwrap(),
                original,
                "base {}",
                base
            );
        }
    }

    #[test]
    fn known_representations_wide() {
        let value = Unsigned::from(0xfedc_ba98_7654_3210u64);
        assert_eq!(value.oct(), "1773345651416625031020");
        assert_eq!(value.str_radix(10, 0).unwrap(), "18364758544493064720");
        assert_eq!(value.hex(), "fedcba9876543210");
        assert_eq!(value.bin().len(), 64);
    }

    #[test]
    fn zero_in_every_base() {
        let zero = Unsigned::zero();
        for base in 2..=36 {
            assert_eq!(zero.str_radix(base, 0).unwrap(), "0");
        }
        assert_eq!(zero.raw(), &[0]);
    }

    #[test]
    fn round_trips_across_bases() {
        let value = Unsigned::from_str_radix("123456789abcdef0fedcba9876543210", 16).unwrap();
        for base in 2..=36 {
            let s = value.str_radix(base, 0).unwrap();
            assert_eq!(
                Unsigned::from_str_radix(&s, base).unwrap(),
                value,
                "base {}",
                base
            );
        }
        let bytes = value.to_radix_bytes(256).unwrap();
        assert_eq!(Unsigned::from_radix_bytes(&bytes, 256).unwrap(), value);
    }

    #[test]
    fn parsing_accepts_both_cases() {
        let lower = Unsigned::from_str_radix("deadbeef", 16).unwrap();
        let upper = Unsigned::from_str_radix("DEADBEEF", 16).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, Unsigned::from(0xdead_beefu32));
    }

    #[test]
    fn raw_bytes_are_big_endian() {
        let value = Unsigned::from_radix_bytes(&hex!("0102030405060708090a"), 256).unwrap();
        assert_eq!(value.raw(), hex!("0102030405060708090a"));
        assert_eq!(value.to_u128(), 0x0102_0304_0506_0708_090a);

        // leading zero octets do not survive the round trip
        let padded = Unsigned::from_radix_bytes(&hex!("0000ff10"), 256).unwrap();
        assert_eq!(padded.raw(), hex!("ff10"));
    }

    #[test]
    fn invalid_digits_are_reported() {
        assert_eq!(
            Unsigned::from_str_radix("12x4", 10),
            Err(Error::InvalidDigit { chr: 'x', base: 10 })
        );
        // '8' is not an octal digit
        assert_eq!(
            Unsigned::from_str_radix("178", 8),
            Err(Error::InvalidDigit { chr: '8', base: 8 })
        );
        // 'f' is fine in 16, out of range in 15
        assert!(Unsigned::from_str_radix("f", 16).is_ok());
        assert_eq!(
            Unsigned::from_str_radix("f", 15),
            Err(Error::InvalidDigit { chr: 'f', base: 15 })
        );
    }

    #[test]
    fn invalid_bases_are_reported() {
        let value = Unsigned::from(42u8);
        for base in [0, 1, 37, 64, 255, 257] {
            assert_eq!(
                Unsigned::from_radix_bytes(b"1", base),
                Err(Error::InvalidBase { base })
            );
            assert_eq!(value.to_radix_bytes(base), Err(Error::InvalidBase { base }));
        }
        // 256 formats bytes, not strings
        assert_eq!(
            value.str_radix(256, 0),
            Err(Error::InvalidBase { base: 256 })
        );
    }

    #[test]
    fn minimum_width_pads_with_zeros() {
        let value = Unsigned::from(0xffu8);
        assert_eq!(value.str_radix(16, 0).unwrap(), "ff");
        assert_eq!(value.str_radix(16, 4).unwrap(), "00ff");
        assert_eq!(value.str_radix(16, 2).unwrap(), "ff");
        assert_eq!(Unsigned::zero().str_radix(10, 3).unwrap(), "000");
    }

    #[test]
    fn empty_input_parses_to_zero() {
        assert!(Unsigned::from_radix_bytes(b"", 10).unwrap().is_zero());
        assert!(Unsigned::from_radix_bytes(b"", 16).unwrap().is_zero());
        assert!(Unsigned::from_radix_bytes(b"", 256).unwrap().is_zero());
    }

    #[test]
    fn base32_straddles_half_digits() {
        // 5-bit chunks never align with the half-digit boundary
        let value = Unsigned::from(0xffff_ffff_ffff_ffffu64);
        let s = value.str_radix(32, 0).unwrap();
        assert_eq!(Unsigned::from_str_radix(&s, 32).unwrap(), value);
    }
}
