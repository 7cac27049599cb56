use std::io::{ErrorKind, Read, Write};

use bitio::{wrap_reader, wrap_writer, BitReader, BitWriter};

#[test]
fn test_grouped_widths_roundtrip() {
	let data = [42u8, 66, 130, 255, 0, 0, 34, 89];
	let widths = [3u8, 8, 1, 0, 7, 7, 1, 8, 1, 8, 4, 4, 4, 6, 2];

	let mut reader = BitReader::new(&data[..]);
	let values: Vec<u8> = widths.iter().map(|w| reader.read_bits(*w).unwrap()).collect();
	assert!(reader.is_aligned());

	let mut out = vec![];
	let mut writer = BitWriter::new(&mut out);
	for (value, width) in values.iter().zip(widths.iter()) {
		writer.write_bits(*value, *width).unwrap();
	}
	writer.flush_bits().unwrap();
	assert_eq!(out, data);
}

#[test]
fn test_single_bits_roundtrip() {
	let bits = [
		true, false, true, false, true, false, true, false,
		true, true, true, true, true, true, true, true,
	];

	let mut out = vec![];
	let mut writer = BitWriter::new(&mut out);
	for bit in bits.iter() {
		writer.write_bool(*bit).unwrap();
	}
	writer.flush_bits().unwrap();
	assert_eq!(out, [0b1010_1010, 0b1111_1111]);

	let mut reader = BitReader::new(&out[..]);
	for (i, bit) in bits.iter().enumerate() {
		assert_eq!(reader.read_bool().unwrap(), *bit, "bit #{}", i);
	}
	let err = reader.read_bool().unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn test_bool_sequences_roundtrip() {
	let bits = [true, true, false, true, false, false, true, false, true, true, false];

	let mut writer = BitWriter::new(vec![]);
	writer.write_bools(&bits).unwrap();
	let out = writer.into_inner().unwrap();
	assert_eq!(out.len(), 2);

	let mut reader = BitReader::new(&out[..]);
	let mut back = [false; 11];
	reader.read_bools(&mut back).unwrap();
	assert_eq!(back, bits);
	assert_eq!(reader.buffered_bits(), 5);
}

#[test]
fn test_partial_final_byte() {
	let values = [0b110011u8, 0b001111, 0b1, 0b11110000];
	let widths = [6u8, 6, 1, 8];

	let mut out = vec![];
	let mut writer = BitWriter::new(&mut out);
	for (value, width) in values.iter().zip(widths.iter()) {
		writer.write_bits(*value, *width).unwrap();
	}
	assert_eq!(writer.buffered_bits(), 5);
	writer.flush_bits().unwrap();
	assert_eq!(writer.buffered_bits(), 0);
	assert_eq!(out, [0b11001100, 0b11111111, 0b10000000]);
}

#[test]
fn test_width_clamping() {
	let data = [0x5au8, 0xc3];

	let mut clamped = BitReader::new(&data[..]);
	let mut exact = BitReader::new(&data[..]);
	clamped.read_bits(3).unwrap();
	exact.read_bits(3).unwrap();
	assert_eq!(clamped.read_bits(42).unwrap(), exact.read_bits(8).unwrap());
	assert_eq!(clamped.buffered_bits(), exact.buffered_bits());

	let mut clamped = BitWriter::new(vec![]);
	let mut exact = BitWriter::new(vec![]);
	for writer in [&mut clamped, &mut exact].iter_mut() {
		writer.write_bits(0b101, 3).unwrap();
	}
	clamped.write_bits(0xc3, 42).unwrap();
	exact.write_bits(0xc3, 8).unwrap();
	assert_eq!(clamped.buffered_bits(), exact.buffered_bits());
	assert_eq!(clamped.into_inner().unwrap(), exact.into_inner().unwrap());
}

#[test]
fn test_exhausted_input_on_boundary() {
	let data = [0xdeu8, 0xad, 0xbe];

	let mut reader = BitReader::new(&data[..]);
	for _ in 0..(data.len() * 8) {
		reader.read_bit().unwrap();
		assert!(reader.buffered_bits() <= 8);
	}
	let err = reader.read_bit().unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnexpectedEof);

	let mut reader = BitReader::new(&data[..]);
	for _ in 0..(data.len() * 8 / 3) {
		reader.read_bits(3).unwrap();
	}
	assert_eq!(reader.buffered_bits(), 0);
	let err = reader.read_bits(1).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn test_bit_sequences_roundtrip() {
	let data = [0x12u8, 0x34, 0x05];

	let mut writer = BitWriter::new(vec![]);
	assert_eq!(writer.write_bits_from(&data, 19).unwrap(), 3);
	assert_eq!(writer.buffered_bits(), 3);
	let out = writer.into_inner().unwrap();
	assert_eq!(out, [0x12, 0x34, 0b1010_0000]);

	let mut reader = BitReader::new(&out[..]);
	let mut back = [0u8; 4];
	assert_eq!(reader.read_bits_into(&mut back, 19).unwrap(), 3);
	assert_eq!(back, [0x12, 0x34, 0x05, 0]);
}

#[test]
fn test_bit_adapters_compose_as_streams() {
	let mut out: Vec<u8> = vec![];
	{
		let mut writer = wrap_writer(&mut out);
		writer.write_bits(0b1, 1).unwrap();
		writer.write_all(b"hello").unwrap();
		writer.flush().unwrap();
	}
	assert_eq!(out.len(), 6);

	let mut reader = wrap_reader(&out[..]);
	assert_eq!(reader.read_bit().unwrap(), 1);
	let mut text = [0u8; 5];
	reader.read_exact(&mut text).unwrap();
	assert_eq!(&text, b"hello");
	assert_eq!(reader.read_bits(7).unwrap(), 0);

	let mut rest = vec![];
	assert_eq!(reader.read_to_end(&mut rest).unwrap(), 0);
}

#[test]
fn test_nested_wrap_does_not_reorder() {
	let data = [0b1100_0011u8, 0b0011_1100];

	let mut reader = BitReader::new(&data[..]);
	assert_eq!(reader.read_bits(2).unwrap(), 0b11);
	let reader = wrap_reader(&mut reader);
	let reader = wrap_reader(reader);
	assert_eq!(reader.buffered_bits(), 6);
	assert_eq!(reader.read_bits(8).unwrap(), 0b0000_1100);
}
