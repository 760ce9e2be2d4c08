use std::io::{Cursor, Read};

use fixwire_core::{
    BinaryCodec, ByteOrder, CodecBuilder, CodecError, WireType, WireValue,
};

fn encode(order: ByteOrder, wire_type: WireType, value: WireValue) -> Vec<u8> {
    let mut codec = BinaryCodec::with_output(Vec::<u8>::new(), order);
    let written = codec.write_value(wire_type, value).unwrap();
    let bytes = codec.into_parts().1.unwrap();
    assert_eq!(written, bytes.len());
    bytes
}

fn decode(order: ByteOrder, wire_type: WireType, bytes: &[u8]) -> WireValue {
    let mut codec = BinaryCodec::with_input(bytes, order);
    codec.read_value(wire_type).unwrap()
}

#[test]
fn int32_minus_one_big_endian() {
    let bytes = encode(ByteOrder::BigEndian, WireType::Int32, WireValue::I64(-1));
    assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(
        decode(ByteOrder::BigEndian, WireType::Int32, &bytes),
        WireValue::I64(-1)
    );
}

#[test]
fn uint32_max_keeps_its_value() {
    let bytes = encode(
        ByteOrder::BigEndian,
        WireType::UInt32,
        WireValue::U64(4_294_967_295),
    );
    assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFF]);
    let value = decode(ByteOrder::BigEndian, WireType::UInt32, &bytes);
    assert_eq!(value, WireValue::U64(4_294_967_295));
    assert_eq!(value.as_i64(), Some(4_294_967_295));
}

#[test]
fn unsigned_maxima_never_flip_sign() {
    for (ty, max) in [
        (WireType::UInt8, u8::MAX as u64),
        (WireType::UInt16, u16::MAX as u64),
        (WireType::UInt32, u32::MAX as u64),
    ] {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            let bytes = encode(order, ty, WireValue::U64(max));
            assert!(bytes.iter().all(|b| *b == 0xFF));
            assert_eq!(decode(order, ty, &bytes), WireValue::U64(max));
        }
    }
}

#[test]
fn int8_200_is_out_of_range_and_writes_nothing() {
    let mut codec = BinaryCodec::with_output(Vec::<u8>::new(), ByteOrder::BigEndian);
    let err = codec.write_value(WireType::Int8, 200).unwrap_err();
    assert!(matches!(
        err,
        CodecError::OutOfRange {
            wire_type: WireType::Int8,
            ..
        }
    ));
    assert!(codec.output().unwrap().is_empty());
}

#[test]
fn range_edges_for_every_integer_type() {
    let cases: [(WireType, i128, i128); 7] = [
        (WireType::Int8, -128, 127),
        (WireType::UInt8, 0, 255),
        (WireType::Int16, -32_768, 32_767),
        (WireType::UInt16, 0, 65_535),
        (WireType::Int32, i32::MIN as i128, i32::MAX as i128),
        (WireType::UInt32, 0, u32::MAX as i128),
        (WireType::Int64, i64::MIN as i128, i64::MAX as i128),
    ];
    for (ty, min, max) in cases {
        let mut codec = BinaryCodec::with_output(Vec::<u8>::new(), ByteOrder::LittleEndian);
        for inside in [min, max] {
            let value = if inside < 0 {
                WireValue::I64(inside as i64)
            } else {
                WireValue::U64(inside as u64)
            };
            codec.write_value(ty, value).unwrap();
        }
        let below = min - 1;
        if below >= i64::MIN as i128 {
            let err = codec.write_value(ty, WireValue::I64(below as i64)).unwrap_err();
            assert!(matches!(err, CodecError::OutOfRange { .. }), "{ty} below");
        }
        let err = codec
            .write_value(ty, WireValue::U64((max + 1) as u64))
            .unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { .. }), "{ty} above");
        assert_eq!(codec.output().unwrap().len(), 2 * ty.width());
    }
}

#[test]
fn float32_one_and_a_half() {
    let bytes = encode(ByteOrder::BigEndian, WireType::Float32, WireValue::F32(1.5));
    assert_eq!(bytes, [0x3F, 0xC0, 0x00, 0x00]);
    let WireValue::F32(value) = decode(ByteOrder::BigEndian, WireType::Float32, &bytes) else {
        panic!("expected f32");
    };
    assert_eq!(value.to_bits(), 1.5f32.to_bits());
}

#[test]
fn floats_roundtrip_bit_exact() {
    let singles = [0.0f32, -0.0, 1.0e-45, f32::MAX, -f32::MAX, 0.1, f32::EPSILON];
    let doubles = [0.0f64, -0.0, 5.0e-324, f64::MAX, -f64::MAX, 0.1, 1.0 / 3.0];
    for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
        for v in singles {
            let bytes = encode(order, WireType::Float32, WireValue::F32(v));
            let WireValue::F32(out) = decode(order, WireType::Float32, &bytes) else {
                panic!("expected f32");
            };
            assert_eq!(out.to_bits(), v.to_bits());
        }
        for v in doubles {
            let bytes = encode(order, WireType::Float64, WireValue::F64(v));
            let WireValue::F64(out) = decode(order, WireType::Float64, &bytes) else {
                panic!("expected f64");
            };
            assert_eq!(out.to_bits(), v.to_bits());
        }
    }
}

#[test]
fn big_and_little_endian_are_reverses() {
    let cases = [
        (WireType::Int16, WireValue::I64(-2)),
        (WireType::UInt16, WireValue::U64(0xBEEF)),
        (WireType::Int32, WireValue::I64(0x0102_0304)),
        (WireType::UInt32, WireValue::U64(0xDEAD_BEEF)),
        (WireType::Int64, WireValue::I64(-0x0102_0304_0506_0708)),
        (WireType::Float32, WireValue::F32(-3.5)),
        (WireType::Float64, WireValue::F64(1234.5678)),
    ];
    for (ty, value) in cases {
        let be = encode(ByteOrder::BigEndian, ty, value);
        let mut le = encode(ByteOrder::LittleEndian, ty, value);
        le.reverse();
        assert_eq!(be, le, "{ty}");
    }
}

#[test]
fn short_read_names_expected_and_actual() {
    let mut codec = BinaryCodec::with_input(Cursor::new(vec![0x01u8, 0x02]), ByteOrder::BigEndian);
    let err = codec.read_value(WireType::Int32).unwrap_err();
    match err {
        CodecError::ShortRead {
            wire_type,
            expected,
            actual,
        } => {
            assert_eq!(wire_type, WireType::Int32);
            assert_eq!(expected, 4);
            assert_eq!(actual, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(codec.read_bytes(), vec![0x01, 0x02]);
}

#[test]
fn capture_matches_concatenated_reads() {
    let mut codec = BinaryCodec::with_input(
        Cursor::new(vec![0x7Fu8, 0x12, 0x34, 0x99]),
        ByteOrder::BigEndian,
    );
    let first = codec.read_result(WireType::UInt8).unwrap();
    let second = codec.read_result(WireType::Int16).unwrap();

    let captured = codec.read_bytes();
    assert_eq!(captured.len(), 3);
    let mut expected = first.raw().to_vec();
    expected.extend_from_slice(second.raw());
    assert_eq!(captured, expected);

    codec.clear_read_buffer();
    assert!(codec.read_bytes().is_empty());

    codec.read_value(WireType::Int8).unwrap();
    assert_eq!(codec.read_bytes(), vec![0x99]);
}

#[test]
fn capture_survives_until_cleared_across_many_reads() {
    let data: Vec<u8> = (0u8..=14).collect();
    let mut codec = BinaryCodec::with_input(data.as_slice(), ByteOrder::LittleEndian);
    let layout = [
        WireType::UInt8,
        WireType::UInt16,
        WireType::UInt32,
        WireType::Int64,
    ];
    let total: usize = layout.iter().map(|ty| ty.width()).sum();
    for ty in layout {
        codec.read_value(ty).unwrap();
    }
    assert_eq!(codec.read_bytes(), data[..total].to_vec());
}

#[test]
fn combined_codec_reads_and_writes_independently() {
    let mut codec = BinaryCodec::new(
        Cursor::new(vec![0x00u8, 0x00, 0x80, 0x3F]),
        Vec::<u8>::new(),
        ByteOrder::LittleEndian,
    );
    assert_eq!(
        codec.read_value(WireType::Float32).unwrap(),
        WireValue::F32(1.0)
    );
    codec.write_value(WireType::Float32, 1.0f32).unwrap();
    assert_eq!(codec.output().unwrap(), &vec![0x00, 0x00, 0x80, 0x3F]);
    assert_eq!(codec.byte_order(), ByteOrder::LittleEndian);
}

#[test]
fn bool_needs_explicit_registration() {
    let mut codec = CodecBuilder::new(ByteOrder::BigEndian)
        .input(Cursor::new(vec![0x02u8, 0x00]))
        .output(Vec::<u8>::new())
        .with_bool_support()
        .build();
    assert_eq!(codec.read_value(WireType::Bool).unwrap(), WireValue::Bool(true));
    assert_eq!(
        codec.read_value(WireType::Bool).unwrap(),
        WireValue::Bool(false)
    );
    codec.write_value(WireType::Bool, true).unwrap();
    codec.write_value(WireType::Bool, false).unwrap();
    assert_eq!(codec.output().unwrap(), &vec![0x01, 0x00]);

    let mut plain = BinaryCodec::with_input(Cursor::new(vec![0x01u8]), ByteOrder::BigEndian);
    assert!(matches!(
        plain.read_value(WireType::Bool),
        Err(CodecError::UnsupportedType { .. })
    ));
}

#[test]
fn failed_reads_leave_the_stream_usable() {
    let mut codec = BinaryCodec::with_input(Cursor::new(vec![0xABu8]), ByteOrder::BigEndian);
    assert!(codec.read_value(WireType::Bool).is_err());
    assert_eq!(
        codec.read_value(WireType::UInt8).unwrap(),
        WireValue::U64(0xAB)
    );
    let mut rest = Vec::new();
    let (input, _) = codec.into_parts();
    input.unwrap().read_to_end(&mut rest).unwrap();
    assert!(rest.is_empty());
}
