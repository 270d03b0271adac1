//! Concurrent use of the codec on disjoint regions of one buffer.

use fixwidth::prelude::*;
use rayon::prelude::*;

const RECORDS: usize = 4096;

fn record_value(index: usize) -> u64 {
    (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[test]
fn parallel_chunks_match_sequential() {
    let mut sequential = vec![0u8; RECORDS * u64::WIDTH];
    for index in 0..RECORDS {
        encode_into_ordered(
            record_value(index),
            &mut sequential,
            index * u64::WIDTH,
            Endian::Little,
        )
        .unwrap();
    }

    let mut parallel = vec![0u8; RECORDS * u64::WIDTH];
    parallel
        .par_chunks_mut(u64::WIDTH)
        .enumerate()
        .try_for_each(|(index, chunk)| {
            encode_into(
                record_value(index),
                chunk,
                CodecOptions::new().little_endian(),
            )
            .map(|_| ())
        })
        .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn parallel_decode() {
    let bytes: Vec<u8> = (0..RECORDS)
        .flat_map(|index| encode((index as u32).rotate_left(7)))
        .collect();

    let decoded: Vec<u32> = bytes
        .par_chunks(u32::WIDTH)
        .map(|chunk| decode::<u32>(chunk, Endian::Big))
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(decoded.len(), RECORDS);
    for (index, value) in decoded.into_iter().enumerate() {
        assert_eq!(value, (index as u32).rotate_left(7));
    }
}

#[test]
fn scoped_threads_share_nothing() {
    let mut buffer = vec![0u8; 4 * 64];

    std::thread::scope(|scope| {
        for (worker, region) in buffer.chunks_mut(64).enumerate() {
            scope.spawn(move || {
                let mut offset = 0;
                while offset < region.len() {
                    offset += encode_into_at(worker as u16, region, offset).unwrap();
                }
            });
        }
    });

    for (worker, region) in buffer.chunks(64).enumerate() {
        for pair in region.chunks(2) {
            assert_eq!(pair, encode(worker as u16));
        }
    }
}
