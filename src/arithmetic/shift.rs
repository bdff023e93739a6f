use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::digit::DIGIT_BITS;
use crate::Unsigned;

/// Note that "left" means "higher number".
impl ShlAssign<usize> for Unsigned {
    fn shl_assign(&mut self, bits: usize) {
        if bits == 0 || self.is_zero() {
            return;
        }

        let digits = bits / DIGIT_BITS;
        let sub_digit = bits % DIGIT_BITS;

        if digits > 0 {
            self.prepend(digits, 0);
        }
        if sub_digit > 0 {
            let mut shifted = 0;
            for elem in &mut self.digits_mut()[digits..] {
                let v = (*elem << sub_digit) | shifted;
                shifted = *elem >> (DIGIT_BITS - sub_digit);
                *elem = v;
            }
            if shifted != 0 {
                self.append_digit(shifted);
            }
        }

        self.trim();
    }
}

/// Note that "right" means "lower number".
///
/// Shifting by at least [`bits()`](Unsigned::bits) clears the value. Whole
/// digits are discarded by advancing the buffer offset rather than moving
/// memory.
impl ShrAssign<usize> for Unsigned {
    fn shr_assign(&mut self, bits: usize) {
        if bits == 0 {
            return;
        }
        if bits >= self.bits() {
            self.set_zero();
            return;
        }

        let digits = bits / DIGIT_BITS;
        let sub_digit = bits % DIGIT_BITS;

        if digits > 0 {
            self.advance(digits);
        }
        if sub_digit > 0 {
            let mut shifted = 0;
            for elem in self.digits_mut().iter_mut().rev() {
                let v = (*elem >> sub_digit) | shifted;
                shifted = *elem << (DIGIT_BITS - sub_digit);
                *elem = v;
            }
        }

        self.trim();
    }
}

impl Shl<usize> for &Unsigned {
    type Output = Unsigned;

    #[inline]
    fn shl(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result <<= bits;
        result
    }
}

impl Shl<usize> for Unsigned {
    type Output = Unsigned;

    #[inline]
    fn shl(mut self, bits: usize) -> Self::Output {
        self <<= bits;
        self
    }
}

impl Shr<usize> for &Unsigned {
    type Output = Unsigned;

    #[inline]
    fn shr(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result >>= bits;
        result
    }
}

impl Shr<usize> for Unsigned {
    type Output = Unsigned;

    #[inline]
    fn shr(mut self, bits: usize) -> Self::Output {
        self >>= bits;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::digit::Digit;

    #[test]
    fn shl_is_mul_by_power_of_two() {
        let x = Unsigned::from(0b101u8);
        assert_eq!(&x << 1usize, Unsigned::from(0b1010u8));
        assert_eq!(&x << 3usize, Unsigned::from(0b101000u8));
        assert_eq!((&x << 0usize), x);

        // carry out of the top digit appends
        let top = Unsigned::from_digit(1 << (DIGIT_BITS - 1));
        assert_eq!(&*(&top << 1usize), &[0, 1]);
    }

    #[test]
    fn shl_by_whole_digits_prepends() {
        let x = Unsigned::from_digits(&[7]);
        let shifted = &x << (2 * DIGIT_BITS);
        assert_eq!(&*shifted, &[0, 0, 7]);
    }

    #[test]
    fn shr_round_trip() {
        let x = Unsigned::from(0xdead_beef_cafe_f00du64);
        for k in [1usize, 7, DIGIT_BITS - 1, DIGIT_BITS, DIGIT_BITS + 5] {
            let round = (&x << k) >> k;
            assert_eq!(round, x, "k = {}", k);
        }
    }

    #[test]
    fn shr_discards_low_bits() {
        let x = Unsigned::from(0b1101u8);
        assert_eq!(&x >> 2usize, Unsigned::from(0b11u8));
    }

    #[test]
    fn shr_past_bit_count_is_zero() {
        let x = Unsigned::from(0xffu8);
        assert!((&x >> 8usize).is_zero());
        assert!((&x >> 1000usize).is_zero());
    }

    #[test]
    fn shr_by_whole_digits_advances_offset() {
        let x = Unsigned::from_digits(&[1, 2, 3, 4]);
        let shifted = &x >> (2 * DIGIT_BITS);
        assert_eq!(&*shifted, &[3, 4]);

        // sub-digit part still walks high to low
        let y = Unsigned::from_digits(&[0, 0, 0b110]);
        let shifted = &y >> (2 * DIGIT_BITS + 1);
        assert_eq!(shifted, Unsigned::from(0b11u8));
    }

    #[test]
    fn shl_then_shr_in_place() {
        let mut x = Unsigned::from(12345u32);
        let original = x.clone();
        x <<= 100;
        x >>= 100;
        assert_eq!(x, original);
    }

    #[test]
    fn shifted_value_keeps_canonical_form() {
        let mut x = Unsigned::from_digit(Digit::MAX);
        x >>= DIGIT_BITS - 1;
        assert_eq!(&*x, &[1]);
        x >>= 1;
        assert!(x.is_zero());
        assert_eq!(x.len(), 0);
    }
}
