// Forward to `tracing` when the feature is enabled, compile to nothing otherwise.

macro_rules! trace {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		tracing::trace!($($arg)*);
	};
}

macro_rules! debug {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		tracing::debug!($($arg)*);
	};
}

pub(crate) use debug;
pub(crate) use trace;
