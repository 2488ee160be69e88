//! Kernel primitives and the lifecycle contract.
//!
//! [`NaturalKernel`] is the whole of what generic code may use to inspect or
//! mutate a natural number of unknown representation. Its three primitives
//! are enough to take any magnitude apart one digit at a time and to put it
//! back together (see [`Digits`](crate::canonical::Digits)).

use crate::types::Digit;

/// The three primitive operations on a natural number.
///
/// The trait is object safe; generic code takes `K: NaturalKernel + ?Sized`
/// so it can run on trait objects as well as concrete values.
pub trait NaturalKernel {
    /// `self = self * RADIX + digit`.
    fn multiply_by_radix(&mut self, digit: Digit);

    /// `self = self / RADIX`, returning `self % RADIX` (the old value).
    ///
    /// Zero stays zero and yields [`Digit::ZERO`].
    fn divide_by_radix(&mut self) -> Digit;

    /// Whether the magnitude is zero.
    fn is_zero(&self) -> bool;
}

/// Lifecycle operations shared by every kernel component.
pub trait Standard {
    /// Reset to the initial (zero) value.
    fn clear(&mut self);

    /// A fresh, independent instance of the same concrete kind, cleared.
    fn new_instance(&self) -> Self
    where
        Self: Sized;

    /// Move `source` into `self`, leaving `source` cleared.
    ///
    /// This is a move, not a copy: no value is duplicated.
    fn transfer_from(&mut self, source: &mut Self)
    where
        Self: Sized,
    {
        let fresh = source.new_instance();
        *self = std::mem::replace(source, fresh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A natural number stored in a `u64`, for exercising the contracts.
    #[derive(Debug, Default, PartialEq)]
    struct Small(u64);

    impl NaturalKernel for Small {
        fn multiply_by_radix(&mut self, digit: Digit) {
            self.0 = self.0 * 10 + digit.get() as u64;
        }

        fn divide_by_radix(&mut self) -> Digit {
            let d = (self.0 % 10) as u8;
            self.0 /= 10;
            Digit::new(d).unwrap()
        }

        fn is_zero(&self) -> bool {
            self.0 == 0
        }
    }

    impl Standard for Small {
        fn clear(&mut self) {
            self.0 = 0;
        }

        fn new_instance(&self) -> Self {
            Small(0)
        }
    }

    #[test]
    fn test_divide_then_multiply_restores() {
        let mut n = Small(347);
        let d = n.divide_by_radix();
        assert_eq!(d.get(), 7);
        assert_eq!(n, Small(34));
        n.multiply_by_radix(d);
        assert_eq!(n, Small(347));
    }

    #[test]
    fn test_divide_zero() {
        let mut n = Small(0);
        assert_eq!(n.divide_by_radix(), Digit::ZERO);
        assert!(n.is_zero());
    }

    #[test]
    fn test_transfer_from_clears_source() {
        let mut a = Small(42);
        let mut b = Small(7);
        b.transfer_from(&mut a);
        assert_eq!(b, Small(42));
        assert!(a.is_zero());
    }

    #[test]
    fn test_kernel_object_safe() {
        let mut n = Small(5);
        let k: &mut dyn NaturalKernel = &mut n;
        k.multiply_by_radix(Digit::new(1).unwrap());
        assert!(!k.is_zero());
        assert_eq!(n, Small(51));
    }
}
