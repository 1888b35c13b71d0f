//! Logging shim.
//!
//! Routes to `defmt` when that feature is enabled, otherwise to the `log` facade,
//! otherwise compiles to nothing.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::trace!($($arg)*);
    }};
}
