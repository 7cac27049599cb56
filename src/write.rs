use std::io::Result as Res;
use std::io::Write;

use crate::error::{Incomplete, IntoInnerError};
use crate::macros::{debug, trace};
use crate::low_bits;

/**
	Adds bit-level writing support to something implementing [`std::io::Write`].

	This is accomplished through a one byte accumulator for storing bits until they make up a whole byte. Note that this buffer is for correctness, not performance - if you want to improve performance by buffering, use [`std::io::BufWriter`] as the `BitWriter`'s write target.

	Bits are written most significant bit first. A group of `n` bits is taken from the lowest `n` bits of the value passed in.

	Bits are not written out when the `BitWriter` is dropped. A final partial byte only reaches the underlying writer through [`flush_bits`], [`Write::flush`] or [`into_inner`], which pad its unused low bits with zeros. Dropping a writer with buffered bits loses them.

	# Flush policy

	Every attempt to emit the accumulator empties it, whether or not the underlying writer accepts the byte. After a failed write the `BitWriter` is aligned again and the bits of the failed byte are gone; they are never retried.

	Use [`wrap_writer`] instead of [`BitWriter::new`] when the sink might already be a `BitWriter`, to avoid nesting two accumulators.

	[`std::io::Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
	[`std::io::BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html
	[`Write::flush`]: https://doc.rust-lang.org/std/io/trait.Write.html#tymethod.flush
	[`flush_bits`]: #method.flush_bits
	[`into_inner`]: #method.into_inner
	[`wrap_writer`]: fn.wrap_writer.html
*/
#[derive(Debug)]
pub struct BitWriter<W: Write> {
	/// Data to write to.
	inner: W,
	/// Bits not yet written, right-aligned, oldest bit most significant.
	bits: u8,
	/// Number of bits in `bits`, 0 <= filled < 8 between calls.
	filled: u8,
}

impl<W: Write> BitWriter<W> {
	/**
		Creates a new `BitWriter` from something implementing `Write`. This will be used as the underlying object to write to.

		# Examples

		Create a `BitWriter` writing to bytes in memory:

		```
		use bitio::BitWriter;

		let mut vec = vec![];
		let mut writer = BitWriter::new(&mut vec);
		```
	*/
	pub fn new(inner: W) -> Self {
		Self {
			inner,
			bits: 0,
			filled: 0,
		}
	}

	/**
		Returns the number of bits written but not yet passed on to the underlying writer.

		Always within `0..=8`, and equal to 8 minus the room left in the current byte. The value is only meaningful until the next write.
	*/
	#[inline(always)]
	pub fn buffered_bits(&self) -> u8 {
		self.filled
	}

	/// Returns whether the writer is aligned to the byte boundary.
	#[inline(always)]
	pub fn is_aligned(&self) -> bool {
		self.filled == 0
	}

	/// Aligns to byte boundary, writing out a zero-padded partial byte if the `BitWriter` was not aligned.
	pub fn align(&mut self) -> Res<()> {
		self.flush_bits()
	}

	/// Gets a reference to the underlying writer.
	pub fn get_ref(&self) -> &W {
		&self.inner
	}

	/**
		Unwraps this `BitWriter`, returning the underlying writer.

		The buffer for partial writes will be flushed before returning the writer. If an error occurs during the flushing it will be returned, together with the `BitWriter`.
	*/
	pub fn into_inner(mut self) -> Result<W, IntoInnerError<Self>> {
		match self.flush_bits() {
			Ok(()) => Ok(self.inner),
			Err(e) => Err(IntoInnerError::new(self, e)),
		}
	}

	/// Left-justifies the accumulator, writes it out and resets it, regardless of the outcome.
	fn flush_buffer(&mut self) -> Res<()> {
		let byte = (u16::from(self.bits) << (8 - self.filled)) as u8;
		self.bits = 0;
		self.filled = 0;
		if let Err(err) = self.inner.write_all(&[byte]) {
			debug!("bit writer emit failed: {}", err);
			return Err(err);
		}
		trace!(byte, "bit writer emitted byte");
		Ok(())
	}

	/**
		Writes out the partial byte, if any.

		The buffered bits become the most significant bits of the byte, the rest is zero. Does nothing if the writer is aligned. Unlike [`Write::flush`], this does not flush the underlying writer.

		# Examples

		```
		use bitio::BitWriter;

		let mut vec = vec![];
		let mut writer = BitWriter::new(&mut vec);
		writer.write_bits(0b101, 3).unwrap();
		writer.flush_bits().unwrap();
		assert_eq!(vec, [0b1010_0000]);
		```

		[`Write::flush`]: https://doc.rust-lang.org/std/io/trait.Write.html#tymethod.flush
	*/
	pub fn flush_bits(&mut self) -> Res<()> {
		if self.is_aligned() {
			return Ok(());
		}
		self.flush_buffer()
	}

	/**
		Writes 8 bits or less.

		The lowest `count` bits will be used, others will be ignored. A `count` above 8 is treated as 8, a `count` of 0 writes nothing.

		A full byte is written to the underlying writer as soon as it is complete. If that fails, the error is returned and the bits of the group that did not fit into the failed byte are not written.

		# Examples

		```
		use bitio::BitWriter;

		let mut vec = vec![];
		let mut writer = BitWriter::new(&mut vec);
		writer.write_bits(0x0a, 4).unwrap();
		writer.write_bits(0xbc, 8).unwrap();
		assert_eq!(writer.buffered_bits(), 4);
		writer.flush_bits().unwrap();
		assert_eq!(vec, b"\xab\xc0");
		```
	*/
	pub fn write_bits(&mut self, bits: u8, count: u8) -> Res<()> {
		let mut remaining = count.min(8);
		let bits = bits & low_bits(remaining);
		while remaining > 0 {
			let take = remaining.min(8 - self.filled);
			remaining -= take;
			let chunk = (bits >> remaining) & low_bits(take);
			self.bits = (u16::from(self.bits) << take) as u8 | chunk;
			self.filled += take;
			if self.filled == 8 {
				self.flush_buffer()?;
			}
		}
		Ok(())
	}

	/// Writes a single bit, the lowest bit of `bit`.
	pub fn write_bit(&mut self, bit: u8) -> Res<()> {
		self.write_bits(bit & 1, 1)
	}

	/// Writes a single bit, writing 1 for true, 0 for false.
	pub fn write_bool(&mut self, bit: bool) -> Res<()> {
		self.write_bit(bit as u8)
	}

	/// Writes one bit per bool, stopping at the first error.
	pub fn write_bools(&mut self, bits: &[bool]) -> Result<(), Incomplete> {
		for (i, bit) in bits.iter().enumerate() {
			self.write_bool(*bit).map_err(|e| Incomplete::new(i, e))?;
		}
		Ok(())
	}

	/**
		Writes each byte of `buf` as 8 bits, stopping at the first error.

		Returns the number of bytes written, which is `buf.len()` on success.
	*/
	pub fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, Incomplete> {
		for (i, byte) in buf.iter().enumerate() {
			self.write_bits(*byte, 8).map_err(|e| Incomplete::new(i, e))?;
		}
		Ok(buf.len())
	}

	/**
		Writes `total_bits` bits from `buf`.

		Whole bytes are written first, then the lowest `total_bits % 8` bits of the slot after them. `total_bits` is clamped to the number of bits `buf` holds.

		Returns the number of slots used.

		# Examples

		```
		use bitio::BitWriter;

		let mut vec = vec![];
		let mut writer = BitWriter::new(&mut vec);
		assert_eq!(writer.write_bits_from(&[0xab, 0x0c], 12).unwrap(), 2);
		writer.flush_bits().unwrap();
		assert_eq!(vec, b"\xab\xc0");
		```
	*/
	pub fn write_bits_from(&mut self, buf: &[u8], total_bits: usize) -> Result<usize, Incomplete> {
		let total_bits = total_bits.min(buf.len() * 8);
		let whole = total_bits / 8;
		let mut done = self.write_bytes(&buf[..whole])?;
		let rest = (total_bits % 8) as u8;
		if rest > 0 {
			self.write_bits(buf[done], rest).map_err(|e| Incomplete::new(done, e))?;
			done += 1;
		}
		Ok(done)
	}
}

/**
	Write bytes to a `BitWriter` just like to [`Write`], each byte becoming the next 8 bits of the bit stream.

	Mid-byte positions are supported: the bytes are then shifted relative to the underlying writer. A write that fails after some bytes were accepted returns the number of accepted bytes.

	`flush` writes out the partial byte, zero-padded, then flushes the underlying writer.

	[`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
*/
impl<W: Write> Write for BitWriter<W> {
	fn write(&mut self, buf: &[u8]) -> Res<usize> {
		match self.write_bytes(buf) {
			Ok(n) => Ok(n),
			Err(err) if err.done() > 0 => Ok(err.done()),
			Err(err) => Err(err.into_error()),
		}
	}

	fn flush(&mut self) -> Res<()> {
		self.flush_bits()?;
		self.inner.flush()
	}
}
