//! The multi-precision kernels and the operator surface built on them.
//!
//! Each submodule owns the digit-level primitive it is built from (`adc`,
//! `subb`, `muladd`, `div_wide`) together with the multi-digit walk that
//! composes it, the way a limb loop reads in `num-bigint`. Operands enter as
//! immutable digit slices; destinations are either exclusive `&mut` buffers
//! or freshly built ones, so a kernel never observes its destination
//! aliasing an operand.

pub(crate) mod add;
pub(crate) mod bitwise;
pub(crate) mod divide;
pub(crate) mod multiply;
pub(crate) mod shift;
pub(crate) mod subtract;

/// Derives the owned/borrowed operator combinations from the
/// `OpAssign<&Unsigned>` implementation a module provides.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident via $assign_imp:ident, $assign_method:ident) => {
        impl core::ops::$imp<&Unsigned> for &Unsigned {
            type Output = Unsigned;
            fn $method(self, rhs: &Unsigned) -> Unsigned {
                let mut lhs = self.clone();
                core::ops::$assign_imp::$assign_method(&mut lhs, rhs);
                lhs
            }
        }

        impl core::ops::$imp<Unsigned> for &Unsigned {
            type Output = Unsigned;
            fn $method(self, rhs: Unsigned) -> Unsigned {
                core::ops::$imp::$method(self, &rhs)
            }
        }

        impl core::ops::$imp<&Unsigned> for Unsigned {
            type Output = Unsigned;
            fn $method(mut self, rhs: &Unsigned) -> Unsigned {
                core::ops::$assign_imp::$assign_method(&mut self, rhs);
                self
            }
        }

        impl core::ops::$imp<Unsigned> for Unsigned {
            type Output = Unsigned;
            fn $method(self, rhs: Unsigned) -> Unsigned {
                core::ops::$imp::$method(self, &rhs)
            }
        }

        impl core::ops::$assign_imp<Unsigned> for Unsigned {
            fn $assign_method(&mut self, rhs: Unsigned) {
                core::ops::$assign_imp::$assign_method(self, &rhs);
            }
        }
    };
}

pub(crate) use forward_binop;
