// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional logging macros.
//!
//! With the `tracing` feature enabled these re-export the `tracing` macros.
//! Without it they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use crate::{debug, warn};

#[cfg(test)]
mod tests {
    use super::{debug, warn};

    #[test]
    fn macros_accept_tracing_field_syntax() {
        let value = -1.0_f64;
        let cause = "test";
        debug!(value, ?cause, "debug event");
        warn!(value, "warn event");
        // Fields are not consumed when tracing is off.
        let _ = (value, cause);
    }
}
