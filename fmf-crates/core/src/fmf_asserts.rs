//! Leveled internal assertions.
//!
//! The simple checks are always on; the more expensive ones are only enabled in tests or with the
//! `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const FMF_ASSERT_LEVEL_DEFINITION: u8 = FMF_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const FMF_ASSERT_LEVEL_DEFINITION: u8 = FMF_ASSERT_MODERATE;

pub const FMF_ASSERT_SIMPLE: u8 = 1;
pub const FMF_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! fmf_assert_simple {
    ($($arg:tt)*) => {
        if $crate::fmf_asserts::FMF_ASSERT_LEVEL_DEFINITION >= $crate::fmf_asserts::FMF_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fmf_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::fmf_asserts::FMF_ASSERT_LEVEL_DEFINITION >= $crate::fmf_asserts::FMF_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fmf_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::fmf_asserts::FMF_ASSERT_LEVEL_DEFINITION >= $crate::fmf_asserts::FMF_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
