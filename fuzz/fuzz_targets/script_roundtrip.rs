#![no_main]

use bytecursor::ByteCursor;
use libfuzzer_sys::fuzz_target;

// The input is a script: each byte picks a field type and the following
// bytes supply its value. Everything written must decode bit-for-bit.
fuzz_target!(|data: &[u8]| {
    let mut script = ByteCursor::from(data);
    let mut writer = ByteCursor::new(Vec::new());
    let mut expected: Vec<(u8, u64, String)> = Vec::new();

    while let Ok(tag) = script.try_read_u8() {
        let entry = match tag % 9 {
            0 => script.try_read_u8().map(|v| {
                writer.write_u8(v);
                (0, u64::from(v), String::new())
            }),
            1 => script.try_read_i8().map(|v| {
                writer.write_i8(v);
                (1, v as u8 as u64, String::new())
            }),
            2 => script.try_read_u16().map(|v| {
                writer.write_u16(v);
                (2, u64::from(v), String::new())
            }),
            3 => script.try_read_i16().map(|v| {
                writer.write_i16(v);
                (3, v as u16 as u64, String::new())
            }),
            4 => script.try_read_u32().map(|v| {
                writer.write_u32(v);
                (4, u64::from(v), String::new())
            }),
            5 => script.try_read_i32().map(|v| {
                writer.write_i32(v);
                (5, v as u32 as u64, String::new())
            }),
            6 => script.try_read_f32().map(|v| {
                writer.write_f32(v);
                (6, u64::from(v.to_bits()), String::new())
            }),
            7 => script.try_read_f64().map(|v| {
                writer.write_f64(v);
                (7, v.to_bits(), String::new())
            }),
            _ => script.try_read_s16().map(|v| {
                writer.write_s16(&v).expect("decoded strings fit");
                (8, 0, v)
            }),
        };
        match entry {
            Ok(e) => expected.push(e),
            Err(_) => break,
        }
    }

    let mut reader = ByteCursor::from(writer.get_buffer());
    for (tag, bits, text) in expected {
        match tag {
            0 => assert_eq!(u64::from(reader.read_u8()), bits),
            1 => assert_eq!(reader.read_i8() as u8 as u64, bits),
            2 => assert_eq!(u64::from(reader.read_u16()), bits),
            3 => assert_eq!(reader.read_i16() as u16 as u64, bits),
            4 => assert_eq!(u64::from(reader.read_u32()), bits),
            5 => assert_eq!(reader.read_i32() as u32 as u64, bits),
            6 => assert_eq!(u64::from(reader.read_f32().to_bits()), bits),
            7 => assert_eq!(reader.read_f64().to_bits(), bits),
            _ => assert_eq!(reader.read_s16(), text),
        }
    }
    assert_eq!(reader.remaining(), 0);
});
