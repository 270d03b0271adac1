#![no_main]

use fixwidth::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&control, rest)) = data.split_first() else {
        return;
    };

    let endian = Endian::from(control & 0x80 == 0);
    let offset = usize::from(control & 0x0F);
    let mut buffer = rest.to_vec();

    if let Ok(value) = decode_from::<u64>(rest, CodecOptions::new().with_offset(offset).with_endian(endian)) {
        assert_eq!(encode_into_ordered(value, &mut buffer, offset, endian), Ok(8));
        assert_eq!(buffer, rest);
    } else {
        assert!(encode_into_ordered(0u64, &mut buffer, offset, endian).is_err());
        assert_eq!(buffer, rest);
    }
});
