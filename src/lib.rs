/*!
	## Bit-granular reading and writing

	`std::io::{Read, Write}` only allow reading and writing on the byte-level. This is not sufficient when a format packs values of 1 to 7 bits next to each other. This crate provides wrappers for reading and writing, enabling reads and writes of single bits and of bit groups up to 8 bits wide on any object implementing [`Read`]/[`Write`].

	The wrappers are modeled after [`std::io::BufReader`] and [`std::io::BufWriter`], but buffer exactly one byte: [`BitReader`] pulls a byte from its source only once all bits of the previous one are consumed, and [`BitWriter`] passes a byte on as soon as it holds 8 bits.

	### Bit order

	Within each byte, bits are read and written most significant bit first. A bit group of `n` bits is a right-aligned value: its lowest `n` bits carry the data. A bit stream is stored as consecutive bytes; when a [`BitWriter`] is flushed in the middle of a byte, the byte is written with its unused low bits set to zero.

	```
	use bitio::{BitReader, BitWriter};

	let mut vec = vec![];
	let mut writer = BitWriter::new(&mut vec);
	writer.write_bits(0b110011, 6).unwrap();
	writer.write_bits(0b001111, 6).unwrap();
	writer.write_bool(true).unwrap();
	writer.write_bits(0b11110000, 8).unwrap();
	writer.flush_bits().unwrap();
	assert_eq!(vec, [0b11001100, 0b11111111, 0b10000000]);

	let mut reader = BitReader::new(&vec[..]);
	assert_eq!(reader.read_bits(6).unwrap(), 0b110011);
	assert_eq!(reader.read_bits(6).unwrap(), 0b001111);
	assert_eq!(reader.read_bool().unwrap(), true);
	assert_eq!(reader.read_bits(8).unwrap(), 0b11110000);
	```

	### Errors

	This crate does not create errors of its own. Every error is an [`std::io::Error`] reported by the wrapped source or sink, returned unchanged; running out of input shows up as [`ErrorKind::UnexpectedEof`]. Operations transferring several units report how far they got through [`Incomplete`]. Bit widths above 8 are clamped to 8 rather than rejected.

	### Logging

	With the `tracing` feature enabled, refills, emitted bytes and errors of the wrapped stream are reported as [`tracing`] events.

	### Non-goals of this crate

	- Data type (de-)serialization and byte endianness.
	- Least significant bit first ordering.
	- Buffering for performance. Wrap the source or sink in [`std::io::BufReader`]/[`std::io::BufWriter`] for that.
	- Sharing one reader or writer between threads. All operations take `&mut self`.

	[`std::io::BufReader`]: https://doc.rust-lang.org/std/io/struct.BufReader.html
	[`std::io::BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html
	[`std::io::Error`]: https://doc.rust-lang.org/std/io/struct.Error.html
	[`ErrorKind::UnexpectedEof`]: https://doc.rust-lang.org/std/io/enum.ErrorKind.html#variant.UnexpectedEof
	[`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
	[`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
	[`tracing`]: https://crates.io/crates/tracing
*/
mod macros;

mod error;
mod read;
mod wrap;
mod write;

pub use self::error::{Incomplete, IntoInnerError};
pub use self::read::BitReader;
pub use self::wrap::{wrap_reader, wrap_writer, IntoBitReader, IntoBitWriter};
pub use self::write::BitWriter;

/// Mask selecting the lowest `count` bits, `count` <= 8.
#[inline(always)]
pub(crate) fn low_bits(count: u8) -> u8 {
	((1u16 << count) - 1) as u8
}
