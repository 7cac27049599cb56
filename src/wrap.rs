use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, LineWriter, Read, Write};
use std::net::TcpStream;
use std::process::{ChildStderr, ChildStdin, ChildStdout};

use crate::{BitReader, BitWriter};

/**
	Conversion into a bit reader that never nests one `BitReader` inside another.

	A `BitReader` (owned or mutably borrowed) converts into itself, keeping any buffered bits. The byte sources of the standard library convert into a fresh `BitReader` around them.

	Only the types listed among the implementors are accepted. Boxed trait objects and user-defined sources are not accepted: a `Box<dyn Read>` may hold a `BitReader` that cannot be told apart from any other source. For those, call [`BitReader::new`] explicitly.

	[`BitReader::new`]: struct.BitReader.html#method.new
*/
pub trait IntoBitReader {
	/// The reader produced.
	type Reader: Read;

	fn into_bit_reader(self) -> Self::Reader;
}

/**
	Conversion into a bit writer that never nests one `BitWriter` inside another.

	A `BitWriter` (owned or mutably borrowed) converts into itself, keeping any buffered bits. The byte sinks of the standard library convert into a fresh `BitWriter` around them.

	Only the types listed among the implementors are accepted. Boxed trait objects and user-defined sinks are not accepted: a `Box<dyn Write>` may hold a `BitWriter` that cannot be told apart from any other sink. For those, call [`BitWriter::new`] explicitly.

	[`BitWriter::new`]: struct.BitWriter.html#method.new
*/
pub trait IntoBitWriter {
	/// The writer produced.
	type Writer: Write;

	fn into_bit_writer(self) -> Self::Writer;
}

/**
	Wraps `source` for bit-level reading, returning it unchanged if it already is a `BitReader`.

	Accepts the sources implementing [`IntoBitReader`]: `BitReader`s and the byte sources of the standard library. Any other [`Read`] type, including `Box<dyn Read>`, is rejected at compile time and has to go through [`BitReader::new`].

	[`IntoBitReader`]: trait.IntoBitReader.html
	[`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
	[`BitReader::new`]: struct.BitReader.html#method.new

	# Examples

	```
	use bitio::{wrap_reader, BitReader};

	let mut reader = BitReader::new(&b"\xf0"[..]);
	reader.read_bits(2).unwrap();
	let again = wrap_reader(&mut reader);
	assert_eq!(again.buffered_bits(), 6);
	assert_eq!(again.read_bits(2).unwrap(), 0b11);
	```
*/
pub fn wrap_reader<S: IntoBitReader>(source: S) -> S::Reader {
	source.into_bit_reader()
}

/**
	Wraps `sink` for bit-level writing, returning it unchanged if it already is a `BitWriter`.

	Accepts the sinks implementing [`IntoBitWriter`]: `BitWriter`s and the byte sinks of the standard library. Any other [`Write`] type, including `Box<dyn Write>`, is rejected at compile time and has to go through [`BitWriter::new`].

	[`IntoBitWriter`]: trait.IntoBitWriter.html
	[`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
	[`BitWriter::new`]: struct.BitWriter.html#method.new
*/
pub fn wrap_writer<S: IntoBitWriter>(sink: S) -> S::Writer {
	sink.into_bit_writer()
}

impl<R: Read> IntoBitReader for BitReader<R> {
	type Reader = Self;

	fn into_bit_reader(self) -> Self {
		self
	}
}

impl<'a, R: Read> IntoBitReader for &'a mut BitReader<R> {
	type Reader = Self;

	fn into_bit_reader(self) -> Self {
		self
	}
}

impl<W: Write> IntoBitWriter for BitWriter<W> {
	type Writer = Self;

	fn into_bit_writer(self) -> Self {
		self
	}
}

impl<'a, W: Write> IntoBitWriter for &'a mut BitWriter<W> {
	type Writer = Self;

	fn into_bit_writer(self) -> Self {
		self
	}
}

macro_rules! wrap_sources {
	($($source:ty),* $(,)?) => {
		$(
			impl<'a> IntoBitReader for $source {
				type Reader = BitReader<Self>;

				fn into_bit_reader(self) -> Self::Reader {
					BitReader::new(self)
				}
			}
		)*
	};
}

macro_rules! wrap_sinks {
	($($sink:ty),* $(,)?) => {
		$(
			impl<'a> IntoBitWriter for $sink {
				type Writer = BitWriter<Self>;

				fn into_bit_writer(self) -> Self::Writer {
					BitWriter::new(self)
				}
			}
		)*
	};
}

wrap_sources! {
	&'a [u8],
	&'a File,
	&'a TcpStream,
	&'a mut File,
	&'a mut TcpStream,
	File,
	TcpStream,
	VecDeque<u8>,
	io::Stdin,
	io::StdinLock<'a>,
	io::Empty,
	io::Repeat,
	ChildStdout,
	ChildStderr,
}

wrap_sinks! {
	&'a mut [u8],
	&'a mut Vec<u8>,
	&'a File,
	&'a TcpStream,
	&'a mut File,
	&'a mut TcpStream,
	Vec<u8>,
	File,
	TcpStream,
	VecDeque<u8>,
	Cursor<&'a mut [u8]>,
	Cursor<&'a mut Vec<u8>>,
	Cursor<Vec<u8>>,
	Cursor<Box<[u8]>>,
	io::Stdout,
	io::StdoutLock<'a>,
	io::Stderr,
	io::StderrLock<'a>,
	io::Sink,
	ChildStdin,
}

impl<T: AsRef<[u8]>> IntoBitReader for Cursor<T> {
	type Reader = BitReader<Self>;

	fn into_bit_reader(self) -> Self::Reader {
		BitReader::new(self)
	}
}

impl<R: Read> IntoBitReader for BufReader<R> {
	type Reader = BitReader<Self>;

	fn into_bit_reader(self) -> Self::Reader {
		BitReader::new(self)
	}
}

impl<R: Read> IntoBitReader for io::Take<R> {
	type Reader = BitReader<Self>;

	fn into_bit_reader(self) -> Self::Reader {
		BitReader::new(self)
	}
}

impl<A: Read, B: Read> IntoBitReader for io::Chain<A, B> {
	type Reader = BitReader<Self>;

	fn into_bit_reader(self) -> Self::Reader {
		BitReader::new(self)
	}
}

impl<'a, T: AsRef<[u8]>> IntoBitReader for &'a mut Cursor<T> {
	type Reader = BitReader<Self>;

	fn into_bit_reader(self) -> Self::Reader {
		BitReader::new(self)
	}
}

impl<W: Write> IntoBitWriter for BufWriter<W> {
	type Writer = BitWriter<Self>;

	fn into_bit_writer(self) -> Self::Writer {
		BitWriter::new(self)
	}
}

impl<W: Write> IntoBitWriter for LineWriter<W> {
	type Writer = BitWriter<Self>;

	fn into_bit_writer(self) -> Self::Writer {
		BitWriter::new(self)
	}
}

impl<'a, T> IntoBitWriter for &'a mut Cursor<T>
where
	Cursor<T>: Write,
{
	type Writer = BitWriter<Self>;

	fn into_bit_writer(self) -> Self::Writer {
		BitWriter::new(self)
	}
}
