#![no_main]

use bytecursor::{ByteCursor, CursorError};
use libfuzzer_sys::fuzz_target;

// Arbitrary input must never panic the checked decoder, and a failed read
// must never move the cursor.
fuzz_target!(|data: &[u8]| {
    let mut cursor = ByteCursor::from(data);
    let mut op = 0u8;

    loop {
        let before = cursor.offset();
        let result: Result<(), CursorError> = match op % 9 {
            0 => cursor.try_read_u8().map(drop),
            1 => cursor.try_read_i8().map(drop),
            2 => cursor.try_read_u16().map(drop),
            3 => cursor.try_read_i16().map(drop),
            4 => cursor.try_read_u32().map(drop),
            5 => cursor.try_read_i32().map(drop),
            6 => cursor.try_read_f32().map(drop),
            7 => cursor.try_read_f64().map(drop),
            _ => cursor.try_read_s16().map(drop),
        };

        match result {
            Ok(()) => assert!(cursor.offset() > before),
            Err(_) => {
                assert_eq!(cursor.offset(), before);
                break;
            }
        }

        // Peeking is side-effect free even at the tail.
        let _ = cursor.try_peek_packet_type();
        assert!(cursor.offset() <= data.len());
        op = op.wrapping_add(cursor.offset() as u8 | 1);
    }
});
