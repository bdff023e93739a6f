use core::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Not};

use crate::arithmetic::forward_binop;
use crate::Unsigned;

/// AND truncates to the shorter operand: the longer one's high digits meet
/// implicit zeros.
impl BitAndAssign<&Unsigned> for Unsigned {
    fn bitand_assign(&mut self, rhs: &Unsigned) {
        let sz = self.len().min(rhs.len());
        self.truncate(sz);
        for (a, b) in self.digits_mut().iter_mut().zip(rhs.digits()) {
            *a &= *b;
        }
        self.trim();
    }
}

/// OR extends to the longer operand's length.
impl BitOrAssign<&Unsigned> for Unsigned {
    fn bitor_assign(&mut self, rhs: &Unsigned) {
        let sz = self.len().max(rhs.len());
        self.resize(sz, 0);
        for (a, b) in self.digits_mut().iter_mut().zip(rhs.digits()) {
            *a |= *b;
        }
        self.trim();
    }
}

/// XOR extends to the longer operand's length.
impl BitXorAssign<&Unsigned> for Unsigned {
    fn bitxor_assign(&mut self, rhs: &Unsigned) {
        let sz = self.len().max(rhs.len());
        self.resize(sz, 0);
        for (a, b) in self.digits_mut().iter_mut().zip(rhs.digits()) {
            *a ^= *b;
        }
        self.trim();
    }
}

forward_binop!(impl BitAnd, bitand via BitAndAssign, bitand_assign);
forward_binop!(impl BitOr, bitor via BitOrAssign, bitor_assign);
forward_binop!(impl BitXor, bitxor via BitXorAssign, bitxor_assign);

/// Complement every digit, then mask back to the operand's original bit
/// length. The empty value counts as a single zero digit first, so `!zero`
/// is the all-ones digit.
impl Not for &Unsigned {
    type Output = Unsigned;

    fn not(self) -> Unsigned {
        let bits = self.bits();
        let mut inverted = self.clone();
        if inverted.is_zero() {
            inverted.resize(1, 0);
        }
        for digit in inverted.digits_mut() {
            *digit = !*digit;
        }
        inverted.trim_masked(bits);
        inverted
    }
}

impl Not for Unsigned {
    type Output = Unsigned;

    fn not(self) -> Unsigned {
        !&self
    }
}
