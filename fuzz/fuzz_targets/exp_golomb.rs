#![no_main]
use libfuzzer_sys::fuzz_target;

// Dekodieren muss immer terminieren, ohne Panik und ohne Endlosschleife.
fuzz_target!(|data: &[u8]| {
    let mut cursor = bitcursor::BitCursor::new(data);
    loop {
        let before = cursor.current_bit_index();
        match cursor.read_signed_exp_golomb() {
            Ok(_) => assert!(cursor.current_bit_index() > before),
            Err(_) => break,
        }
    }
    assert!(cursor.current_bit_index() <= cursor.total_bits());
});
