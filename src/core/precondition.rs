use log::*;
use std::fmt;

/// Contract violation. Logs and panics.
#[cold]
#[track_caller]
pub fn failure(message: fmt::Arguments<'_>) -> ! {
    error!("{}", message);
    panic!("{}", message)
}

/// Invariant violation found by a pedantic check, which means a bug in this crate.
#[cold]
#[track_caller]
pub fn pedantic_failure(message: fmt::Arguments<'_>) -> ! {
    error!("Pedantic check failed: {}", message);
    panic!("Pedantic check failed: {}", message)
}

/// Fails with formatted message.
macro_rules! fail {
    ($($arg:tt)+) => {
        $crate::core::precondition::failure(format_args!($($arg)+))
    };
}

/// Fails with formatted message if condition doesn't hold.
macro_rules! precondition {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            fail!($($arg)+)
        }
    };
}

/// Checks invariant only in debug builds or with `pedantic` feature.
macro_rules! pedantic {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "pedantic")) && !$cond {
            $crate::core::precondition::pedantic_failure(format_args!($($arg)+))
        }
    };
}

/// Converts to isize, failing if it doesn't fit.
#[track_caller]
pub fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or_else(|_| fail!("Distance {} overflows isize", value))
}
