use core::cmp::Ordering;
use core::ops::{DivAssign, RemAssign};

use crate::arithmetic::add::adc;
use crate::arithmetic::multiply::{mul_wide, muladd};
use crate::arithmetic::subtract::subb;
use crate::digit::{bit_length, Digit, DoubleDigit, DIGIT_BITS};
use crate::error::{Error, Result};
use crate::numbers::compare;
use crate::Unsigned;

/// Divide a two-digit numerator by a one-digit divisor, returning quotient
/// and remainder.
///
/// The caller must ensure `hi < divisor` so that both fit a single digit;
/// this is not true for an arbitrary numerator/denominator. (This matches
/// what the x86 divide instruction does.)
#[inline]
pub(crate) fn div_wide(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = ((hi as DoubleDigit) << DIGIT_BITS) | lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    debug_assert!(q <= Digit::MAX as DoubleDigit);
    let r = x % divisor;
    debug_assert!(r <= Digit::MAX as DoubleDigit);

    (q as Digit, r as Digit)
}

/// Divide in place by a single digit, returning the remainder.
///
/// Runs down the digits from most to least significant, carrying the
/// remainder along.
pub(crate) fn div_rem_assign_digit(number: &mut Unsigned, divisor: Digit) -> Digit {
    let mut remainder = 0;

    for digit in number.digits_mut().iter_mut().rev() {
        let (q, r) = div_wide(remainder, *digit, divisor);
        *digit = q;
        remainder = r;
    }

    number.trim();
    remainder
}

/// Quotient and remainder for a one-digit divisor.
fn single_divmod(lhs: &Unsigned, divisor: Digit) -> (Unsigned, Unsigned) {
    let mut quotient = lhs.clone();
    let remainder = div_rem_assign_digit(&mut quotient, divisor);
    (quotient, Unsigned::from_digit(remainder))
}

/// Knuth, TAOCP vol. 2 section 4.3.1, Algorithm D.
///
/// Requires `lhs > rhs` and `rhs` at least two digits (the dispatcher
/// routes everything smaller elsewhere).
fn knuth_divmod(lhs: &Unsigned, rhs: &Unsigned) -> (Unsigned, Unsigned) {
    let mut u = lhs.clone();
    let mut v = rhs.clone();

    let n = v.len();
    debug_assert!(u.len() >= n && n >= 2);

    // D1. Normalize: shift the divisor left until its top digit has the
    // high bit set, and the dividend by the same amount. The shift has no
    // influence on the quotient and is reverted for the remainder.
    let d = DIGIT_BITS - bit_length(v.digit(n - 1));
    u <<= d;
    v <<= d;

    // The estimator needs u's top digit strictly below v's; give u a fresh
    // zero digit if the shift alone did not arrange that, plus one more as
    // scratch for the multiply-subtract window.
    if u.digit(u.len() - 1) >= v.digit(n - 1) {
        u.append_digit(0);
    }
    let u_size = u.len();
    u.append_digit(0);

    let m = u_size - n;
    let mut q = Unsigned::zero();
    q.resize(m + 1, 0);

    let vn1 = v.digit(n - 1);
    let vn2 = v.digit(n - 2);

    // D2..D7. One quotient digit per window position, high to low.
    for j in (0..=m).rev() {
        // D3. Estimate the quotient digit as the top two dividend digits
        // over the top divisor digit, capped at digit range. The estimate
        // is at most two too large; comparing qhat * vn2 against the
        // two-digit remainder window corrects all but one of that.
        let hi = u.digit(j + n);
        let num = ((hi as DoubleDigit) << DIGIT_BITS) | u.digit(j + n - 1) as DoubleDigit;
        let (mut qhat, mut rhat): (Digit, DoubleDigit) = if hi >= vn1 {
            (Digit::MAX, num - (Digit::MAX as DoubleDigit) * (vn1 as DoubleDigit))
        } else {
            ((num / vn1 as DoubleDigit) as Digit, num % vn1 as DoubleDigit)
        };
        while rhat <= Digit::MAX as DoubleDigit {
            let (mullo, mulhi) = mul_wide(qhat, vn2);
            let rlo = u.digit(j + n - 2);
            if mulhi > rhat as Digit || (mulhi == rhat as Digit && mullo > rlo) {
                qhat -= 1;
                rhat += vn1 as DoubleDigit;
            } else {
                break;
            }
        }

        // D4. Multiply and subtract: u[j..=j+n] -= qhat * v.
        let borrowed = {
            let v_digits = v.digits();
            let u_digits = u.digits_mut();
            let mut mulhi = 0;
            let mut borrow = 0;
            for i in 0..n {
                let (lo, hi) = muladd(v_digits[i], qhat, 0, mulhi);
                mulhi = hi;
                u_digits[j + i] = subb(u_digits[j + i], lo, &mut borrow);
            }
            u_digits[j + n] = subb(u_digits[j + n], mulhi, &mut borrow);
            borrow != 0
        };

        // D6. The estimate was still one too large (rare): decrement and
        // add the divisor back; the add's carry cancels the borrow.
        if borrowed {
            qhat -= 1;

            let v_digits = v.digits();
            let u_digits = u.digits_mut();
            let mut carry = 0;
            for i in 0..n {
                u_digits[j + i] = adc(u_digits[j + i], v_digits[i], &mut carry);
            }
            u_digits[j + n] = adc(u_digits[j + n], 0, &mut carry);
        }

        q.digits_mut()[j] = qhat;
    }

    // D8. Unnormalize: what is left of u is the shifted remainder.
    u.truncate(n);
    u >>= d;

    q.trim();
    u.trim();
    (q, u)
}

impl Unsigned {
    /// Quotient and remainder in one pass.
    ///
    /// Fails only for a zero divisor; `a = q * b + r` with `0 <= r < b`
    /// holds for everything else.
    pub fn divmod(&self, divisor: &Unsigned) -> Result<(Unsigned, Unsigned)> {
        // First try saving some calculations:
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }
        if self.len() == 1 && divisor.len() == 1 {
            // Native division once both fit a digit.
            let a = self.digit(0);
            let b = divisor.digit(0);
            return Ok((Unsigned::from_digit(a / b), Unsigned::from_digit(a % b)));
        }
        if divisor.is_one() {
            return Ok((self.clone(), Unsigned::zero()));
        }
        match compare(self.digits(), divisor.digits()) {
            Ordering::Equal => return Ok((Unsigned::one(), Unsigned::zero())),
            Ordering::Less => return Ok((Unsigned::zero(), self.clone())),
            Ordering::Greater => {}
        }
        if divisor.len() == 1 {
            return Ok(single_divmod(self, divisor.digit(0)));
        }

        Ok(knuth_divmod(self, divisor))
    }

    /// The quotient, or `None` for a zero divisor.
    pub fn checked_div(&self, divisor: &Unsigned) -> Option<Unsigned> {
        self.divmod(divisor).ok().map(|(q, _)| q)
    }

    /// The remainder, or `None` for a zero divisor.
    pub fn checked_rem(&self, divisor: &Unsigned) -> Option<Unsigned> {
        self.divmod(divisor).ok().map(|(_, r)| r)
    }
}

impl DivAssign<&Unsigned> for Unsigned {
    /// Panics for a zero divisor, like the primitive integer operators;
    /// [`divmod`](Unsigned::divmod) is the propagating form.
    fn div_assign(&mut self, divisor: &Unsigned) {
        let (q, _) = self.divmod(divisor).expect("attempt to divide by zero");
        *self = q;
    }
}

impl RemAssign<&Unsigned> for Unsigned {
    /// Panics for a zero divisor, like the primitive integer operators;
    /// [`divmod`](Unsigned::divmod) is the propagating form.
    fn rem_assign(&mut self, divisor: &Unsigned) {
        let (_, r) = self
            .divmod(divisor)
            .expect("attempt to calculate the remainder with a divisor of zero");
        *self = r;
    }
}

crate::arithmetic::forward_binop!(impl Div, div via DivAssign, div_assign);
crate::arithmetic::forward_binop!(impl Rem, rem via RemAssign, rem_assign);
