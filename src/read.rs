use std::io::Result as Res;
use std::io::{ErrorKind, Read};

use crate::error::Incomplete;
use crate::low_bits;
use crate::macros::{debug, trace};

/**
	Adds bit-level reading support to something implementing [`std::io::Read`].

	This is accomplished through a one byte accumulator for storing the not yet consumed bits of the last byte pulled from the source. Note that this buffer is for correctness, not performance - if you want to improve performance by buffering, use [`std::io::BufReader`] as the `BitReader`'s data source.

	Bits are read most significant bit first. A group of `n` bits is returned right-aligned, in the lowest `n` bits of the returned byte.

	A byte is only pulled from the source once the accumulator is empty, so a `BitReader` never reads further ahead than the byte it is currently consuming.

	All errors come from the source and are passed through unchanged. Running out of input is reported as [`ErrorKind::UnexpectedEof`]. Bits consumed by a call that then fails stay consumed.

	Use [`wrap_reader`] instead of [`BitReader::new`] when the source might already be a `BitReader`, to avoid nesting two accumulators.

	[`std::io::Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
	[`std::io::BufReader`]: https://doc.rust-lang.org/std/io/struct.BufReader.html
	[`ErrorKind::UnexpectedEof`]: https://doc.rust-lang.org/std/io/enum.ErrorKind.html#variant.UnexpectedEof
	[`wrap_reader`]: fn.wrap_reader.html
*/
#[derive(Debug)]
pub struct BitReader<R: Read> {
	/// Data to read from.
	inner: R,
	/// Unread bits, right-aligned. Bits above `count` are always zero.
	bits: u8,
	/// Number of unread bits in `bits`, 0 <= count <= 8.
	count: u8,
}

impl<R: Read> BitReader<R> {
	/**
		Creates a new `BitReader` from something implementing [`Read`]. This will be used as the underlying object to read from.

		# Examples

		Create a `BitReader` reading from bytes in memory:

		```
		use bitio::BitReader;

		let data = b"\xcf\xfe\xf3\x2c";
		let mut reader = BitReader::new(&data[..]);
		```

		[`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
	*/
	pub fn new(inner: R) -> Self {
		Self {
			inner,
			bits: 0,
			count: 0,
		}
	}

	/**
		Returns the number of bits that have been pulled from the source but not read yet.

		Always within `0..=8`. The value is only meaningful until the next read.
	*/
	#[inline(always)]
	pub fn buffered_bits(&self) -> u8 {
		self.count
	}

	/// Returns whether the reader is aligned to a byte boundary of the source.
	#[inline(always)]
	pub fn is_aligned(&self) -> bool {
		self.count == 0
	}

	/// Aligns to byte boundary, discarding a partial byte if the `BitReader` was not aligned.
	pub fn align(&mut self) {
		self.bits = 0;
		self.count = 0;
	}

	/// Gets a reference to the underlying reader.
	pub fn get_ref(&self) -> &R {
		&self.inner
	}

	/**
		Unwraps this `BitReader`, returning the underlying reader.

		Note that any partially read byte is lost.
	*/
	pub fn into_inner(self) -> R {
		self.inner
	}

	fn fill_buffer(&mut self) -> Res<()> {
		let mut temp = [0; 1];
		if let Err(err) = self.inner.read_exact(&mut temp) {
			debug!("bit reader refill failed: {}", err);
			return Err(err);
		}
		trace!(byte = temp[0], "bit reader refilled");
		self.bits = temp[0];
		self.count = 8;
		Ok(())
	}

	/**
		Reads 8 bits or less.

		The lowest `count` bits will be filled by this, the others will be zero. A `count` above 8 is treated as 8.

		If no bits are buffered, a byte is pulled from the source first, even when `count` is 0. Requests crossing a byte boundary pull the next byte as needed; if that fails, the whole call fails and the bits already taken from the previous byte are lost.

		# Examples

		```
		# use bitio::BitReader;
		let mut reader = BitReader::new(&b"\xab\xcd"[..]);
		assert_eq!(reader.read_bits(4).unwrap(), 0x0a);
		assert_eq!(reader.read_bits(8).unwrap(), 0xbc);
		assert_eq!(reader.buffered_bits(), 4);
		```
	*/
	pub fn read_bits(&mut self, count: u8) -> Res<u8> {
		let mut remaining = count.min(8);
		if self.count == 0 {
			self.fill_buffer()?;
		}
		let mut res = 0u16;
		while remaining > 0 {
			if self.count == 0 {
				self.fill_buffer()?;
			}
			let take = remaining.min(self.count);
			self.count -= take;
			let chunk = self.bits >> self.count;
			self.bits &= low_bits(self.count);
			res = res << take | u16::from(chunk);
			remaining -= take;
		}
		Ok(res as u8)
	}

	/**
		Reads a single bit, returning it as `0` or `1`.

		# Examples

		```
		# use bitio::BitReader;
		let mut reader = BitReader::new(&b"\x40"[..]);
		assert_eq!(reader.read_bit().unwrap(), 0);
		assert_eq!(reader.read_bit().unwrap(), 1);
		```
	*/
	pub fn read_bit(&mut self) -> Res<u8> {
		self.read_bits(1)
	}

	/**
		Reads a single bit, returning true for 1, false for 0.

		# Examples

		```
		# use bitio::BitReader;
		let mut reader = BitReader::new(&b"\x80"[..]);
		let value = reader.read_bool().unwrap();
		assert_eq!(value, true);
		```
	*/
	pub fn read_bool(&mut self) -> Res<bool> {
		Ok(self.read_bit()? == 1)
	}

	/**
		Fills `buf` with one bool per bit.

		On failure, the slots before [`Incomplete::done`] hold the bits read so far.

		[`Incomplete::done`]: struct.Incomplete.html#method.done
	*/
	pub fn read_bools(&mut self, buf: &mut [bool]) -> Result<(), Incomplete> {
		for (i, slot) in buf.iter_mut().enumerate() {
			*slot = self.read_bool().map_err(|e| Incomplete::new(i, e))?;
		}
		Ok(())
	}

	/**
		Fills each byte of `buf` with the next 8 bits, stopping at the first error.

		Returns the number of bytes filled, which is `buf.len()` on success. Unlike [`Read::read`], this never stops early without an error.

		[`Read::read`]: https://doc.rust-lang.org/std/io/trait.Read.html#tymethod.read
	*/
	pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Incomplete> {
		for (i, slot) in buf.iter_mut().enumerate() {
			*slot = self.read_bits(8).map_err(|e| Incomplete::new(i, e))?;
		}
		Ok(buf.len())
	}

	/**
		Reads `total_bits` bits into `buf`.

		Whole bytes are read first, the remaining `total_bits % 8` bits end up right-aligned in the slot after them. `total_bits` is clamped to the number of bits `buf` can hold.

		Returns the number of slots filled.

		# Examples

		```
		# use bitio::BitReader;
		let mut reader = BitReader::new(&b"\xab\xcd"[..]);
		let mut buf = [0; 2];
		assert_eq!(reader.read_bits_into(&mut buf, 12).unwrap(), 2);
		assert_eq!(buf, [0xab, 0x0c]);
		```
	*/
	pub fn read_bits_into(&mut self, buf: &mut [u8], total_bits: usize) -> Result<usize, Incomplete> {
		let total_bits = total_bits.min(buf.len() * 8);
		let whole = total_bits / 8;
		let mut done = self.read_bytes(&mut buf[..whole])?;
		let rest = (total_bits % 8) as u8;
		if rest > 0 {
			buf[done] = self.read_bits(rest).map_err(|e| Incomplete::new(done, e))?;
			done += 1;
		}
		Ok(done)
	}
}

/**
	Read bytes from a `BitReader` just like from [`Read`], each byte being the next 8 bits of the bit stream.

	Mid-byte positions are supported: the bytes returned are then shifted relative to the source. A read that fails after filling some bytes returns the number of filled bytes. Running out of input at a byte boundary before anything was filled is reported as end of input (`Ok(0)`).

	[`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
*/
impl<R: Read> Read for BitReader<R> {
	fn read(&mut self, buf: &mut [u8]) -> Res<usize> {
		let aligned = self.is_aligned();
		match self.read_bytes(buf) {
			Ok(n) => Ok(n),
			Err(err) if err.done() > 0 => Ok(err.done()),
			Err(err) if aligned && err.kind() == ErrorKind::UnexpectedEof => Ok(0),
			Err(err) => Err(err.into_error()),
		}
	}
}
