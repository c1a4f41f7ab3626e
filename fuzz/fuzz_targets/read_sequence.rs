#![no_main]
use libfuzzer_sys::fuzz_target;

// Erstes Byte steuert die Operationen, der Rest ist der Buffer.
fuzz_target!(|data: &[u8]| {
    let Some((&ops, payload)) = data.split_first() else { return };
    let (head, tail) = payload.split_at(payload.len() / 2);
    let mut cursor = bitcursor::BitCursor::new(head);
    let mut op = ops;
    for _ in 0..64 {
        let before = cursor.current_bit_index();
        let _ = match op % 8 {
            0 => cursor.read_bit().map(drop),
            1 => cursor.read_bits(usize::from(op) % 65).map(drop),
            2 => cursor.read_i32().map(drop),
            3 => cursor.read_unsigned_exp_golomb().map(drop),
            4 => cursor.read_signed_exp_golomb().map(drop),
            5 => cursor.rewind(usize::from(op) % 17),
            6 => {
                cursor.trim();
                Ok(())
            }
            _ => {
                cursor.append(tail);
                Ok(())
            }
        };
        assert!(cursor.bit_offset() < 8);
        assert!(cursor.current_bit_index() <= cursor.total_bits());
        if op % 8 == 5 {
            assert!(cursor.current_bit_index() <= before);
        }
        op = op.rotate_left(3) ^ 0x5A;
    }
});
