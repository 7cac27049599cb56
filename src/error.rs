use std::fmt;
use std::io;

/**
	An error from the underlying stream, together with the progress made before it occurred.

	Returned by the operations that transfer a sequence of units (bytes, bit groups or bools), so that the caller learns how many units were transferred before the failure. The wrapped error is exactly the one reported by the underlying stream; this crate never creates errors of its own.

	Converts into the wrapped [`std::io::Error`] with `?` in functions returning [`std::io::Result`].

	[`std::io::Error`]: https://doc.rust-lang.org/std/io/struct.Error.html
	[`std::io::Result`]: https://doc.rust-lang.org/std/io/type.Result.html
*/
#[derive(thiserror::Error, Debug)]
#[error("stopped after {done} units: {source}")]
pub struct Incomplete {
	done: usize,
	source: io::Error,
}

impl Incomplete {
	pub(crate) fn new(done: usize, source: io::Error) -> Self {
		Self { done, source }
	}

	/// Number of units fully transferred before the error.
	pub fn done(&self) -> usize {
		self.done
	}

	/// The error reported by the underlying stream.
	pub fn error(&self) -> &io::Error {
		&self.source
	}

	/// Shortcut for `self.error().kind()`.
	pub fn kind(&self) -> io::ErrorKind {
		self.source.kind()
	}

	/// Discards the progress count, returning the underlying error.
	pub fn into_error(self) -> io::Error {
		self.source
	}
}

impl From<Incomplete> for io::Error {
	fn from(err: Incomplete) -> Self {
		err.source
	}
}

/**
	An error returned by `BitWriter::into_inner`.

	Modeled after [`std::io::IntoInnerError`], whose constructor is not public. Holds the writer whose buffered bits could not be flushed, together with the error that occurred while flushing. The writer's buffer is already empty at this point, see the flush policy on `BitWriter`.

	[`std::io::IntoInnerError`]: https://doc.rust-lang.org/std/io/struct.IntoInnerError.html
*/
#[derive(Debug)]
pub struct IntoInnerError<W>(W, io::Error);

impl<W> IntoInnerError<W> {
	pub(crate) fn new(writer: W, error: io::Error) -> Self {
		Self(writer, error)
	}

	pub fn error(&self) -> &io::Error { &self.1 }
	pub fn into_inner(self) -> W { self.0 }
	pub fn into_error(self) -> io::Error { self.1 }
}

impl<W> fmt::Display for IntoInnerError<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.1, f)
	}
}

impl<W: fmt::Debug> std::error::Error for IntoInnerError<W> {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.1)
	}
}

#[cfg(test)]
mod tests {
	use std::io;
	use super::Incomplete;

	#[test]
	fn incomplete_passes_error_through() {
		let err = Incomplete::new(3, io::Error::new(io::ErrorKind::UnexpectedEof, "no more"));
		assert_eq!(err.done(), 3);
		assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
		assert_eq!(err.to_string(), "stopped after 3 units: no more");
		let inner: io::Error = err.into();
		assert_eq!(inner.kind(), io::ErrorKind::UnexpectedEof);
		assert_eq!(inner.to_string(), "no more");
	}

	#[test]
	fn incomplete_source_is_the_io_error() {
		use std::error::Error;
		let err = Incomplete::new(0, io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
		let source = err.source().unwrap();
		assert_eq!(source.to_string(), "gone");
	}
}
