//! Leveled assertions. The level is [`RETAKE_ASSERT_SIMPLE`] by default and
//! [`RETAKE_ASSERT_EXTREME`] when the `debug-checks` feature is enabled.

#[cfg(not(feature = "debug-checks"))]
pub const RETAKE_ASSERT_LEVEL_DEFINITION: u8 = RETAKE_ASSERT_SIMPLE;

#[cfg(feature = "debug-checks")]
pub const RETAKE_ASSERT_LEVEL_DEFINITION: u8 = RETAKE_ASSERT_EXTREME;

pub const RETAKE_ASSERT_SIMPLE: u8 = 1;
pub const RETAKE_ASSERT_MODERATE: u8 = 2;
pub const RETAKE_ASSERT_EXTREME: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! retake_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::RETAKE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::RETAKE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! retake_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::RETAKE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::RETAKE_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! retake_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::RETAKE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::RETAKE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! retake_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::RETAKE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::RETAKE_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
