//! Tests for byte-entry buffers with a caller-chosen entry size
//!
//! 调用者指定条目大小的字节条目缓冲区测试

use super::init_logger;
use crate::{EntryFifo, FifoConfig, FifoError};

/// Build entry `n` of `entry_size` bytes with distinct contents
fn entry(n: u8, entry_size: usize) -> Vec<u8> {
    (0..entry_size as u8).map(|i| n.wrapping_mul(16).wrapping_add(i)).collect()
}

#[test]
fn test_entry_push_pop_roundtrip_order() {
    init_logger();
    let mut storage = [0u8; 12];
    let mut fifo = EntryFifo::init(&mut storage[..], 4, 3, FifoConfig::default()).unwrap();

    for n in 0..4 {
        fifo.push_entry(&entry(n, 3)).unwrap();
    }
    assert!(fifo.is_full());
    assert_eq!(fifo.push_entry(&entry(9, 3)), Err(FifoError::BufferFull));

    let mut out = [0u8; 3];
    for n in 0..4 {
        fifo.pop_entry(&mut out).unwrap();
        assert_eq!(out.to_vec(), entry(n, 3));
    }
    assert_eq!(fifo.pop_entry(&mut out), Err(FifoError::BufferEmpty));
}

#[test]
fn test_entry_length_must_match() {
    let mut storage = [0u8; 8];
    let mut fifo = EntryFifo::with_entry_size(&mut storage[..], 4, FifoConfig::default()).unwrap();
    assert_eq!(fifo.capacity(), 2);

    assert!(matches!(
        fifo.push_entry(&[1, 2, 3]),
        Err(FifoError::InvalidArgument(_))
    ));
    fifo.push_entry(&[1, 2, 3, 4]).unwrap();

    let mut short = [0u8; 2];
    assert!(matches!(
        fifo.pop_entry(&mut short),
        Err(FifoError::InvalidArgument(_))
    ));
    assert_eq!(fifo.len(), 1);
}

#[test]
fn test_with_entry_size_ignores_trailing_bytes() {
    let mut storage = [0x55u8; 10];
    {
        let mut fifo = EntryFifo::with_entry_size(
            &mut storage[..],
            3,
            FifoConfig::default().with_clear_on_init(true),
        )
        .unwrap();
        assert_eq!(fifo.capacity(), 3);
        fifo.push_slice(&[1, 1, 1, 2, 2, 2, 3, 3, 3]).unwrap();
        assert!(fifo.is_full());
    }
    assert_eq!(storage[9], 0x55);
}

#[test]
fn test_entry_bulk_split_for_various_widths() {
    // Wrapped bulk copies stay aligned to whole entries for every width
    // 所有宽度下环绕批量拷贝都按整条目对齐
    for entry_size in [1usize, 2, 3, 4, 7] {
        let capacity = 5;
        for start in 0..capacity {
            for count in 1..=capacity {
                let mut storage = vec![0u8; capacity * entry_size];
                let mut fifo =
                    EntryFifo::init(&mut storage[..], capacity, entry_size, FifoConfig::default())
                        .unwrap();

                for n in 0..start {
                    fifo.push_entry(&entry(n as u8, entry_size)).unwrap();
                    let mut sink = vec![0u8; entry_size];
                    fifo.pop_entry(&mut sink).unwrap();
                }

                let source: Vec<u8> = (0..count)
                    .flat_map(|n| entry(n as u8 + 1, entry_size))
                    .collect();
                fifo.push_bulk(&source, count).unwrap();
                assert_eq!(fifo.len(), count);

                let entries: Vec<&[u8]> = fifo.iter().collect();
                assert_eq!(entries.len(), count);
                assert_eq!(entries.concat(), source);

                let mut dest = vec![0u8; count * entry_size];
                fifo.pop_bulk(&mut dest, count).unwrap();
                assert_eq!(
                    dest, source,
                    "entry_size={entry_size}, start={start}, count={count}"
                );
                assert!(fifo.is_empty());
            }
        }
    }
}

#[test]
fn test_entry_bulk_matches_single_pushes() {
    let entry_size = 4;
    let capacity = 6;
    for start in 0..capacity {
        let mut bulk_storage = vec![0u8; capacity * entry_size];
        let mut single_storage = vec![0u8; capacity * entry_size];
        let source: Vec<u8> = (0..4).flat_map(|n| entry(n + 1, entry_size)).collect();

        {
            let mut bulk =
                EntryFifo::init(&mut bulk_storage[..], capacity, entry_size, FifoConfig::default())
                    .unwrap();
            let mut single = EntryFifo::init(
                &mut single_storage[..],
                capacity,
                entry_size,
                FifoConfig::default(),
            )
            .unwrap();

            let mut sink = vec![0u8; entry_size];
            for fifo in [&mut bulk, &mut single] {
                for _ in 0..start {
                    fifo.push_entry(&[0xff; 4]).unwrap();
                    fifo.pop_entry(&mut sink).unwrap();
                }
            }

            bulk.push_bulk(&source, 4).unwrap();
            for chunk in source.chunks(entry_size) {
                single.push_entry(chunk).unwrap();
            }
        }

        assert_eq!(bulk_storage, single_storage, "start={start}");
    }
}

#[test]
fn test_entry_bulk_rejections() {
    let mut storage = [0u8; 8];
    let mut fifo = EntryFifo::init(&mut storage[..], 4, 2, FifoConfig::default()).unwrap();

    // Source holds 1.5 entries
    assert!(matches!(
        fifo.push_bulk(&[1, 2, 3], 2),
        Err(FifoError::InvalidArgument(_))
    ));
    assert!(matches!(
        fifo.push_slice(&[1, 2, 3]),
        Err(FifoError::InvalidArgument(_))
    ));
    assert_eq!(
        fifo.push_bulk(&[0; 10], 5),
        Err(FifoError::InsufficientSpace { requested: 5, free: 4 })
    );

    fifo.push_bulk(&[1, 2, 3, 4], 2).unwrap();
    let mut dest = [0u8; 6];
    assert_eq!(
        fifo.pop_bulk(&mut dest, 3),
        Err(FifoError::InsufficientData { requested: 3, available: 2 })
    );
    assert!(matches!(
        fifo.pop_slice(&mut dest[..3]),
        Err(FifoError::InvalidArgument(_))
    ));
    fifo.pop_slice(&mut dest[..4]).unwrap();
    assert_eq!(&dest[..4], &[1, 2, 3, 4]);
}

#[test]
fn test_entry_clear_zeroes_whole_region() {
    let mut storage = [0u8; 9];
    {
        let mut fifo = EntryFifo::init(&mut storage[..], 3, 3, FifoConfig::default()).unwrap();
        fifo.push_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(fifo.peek_entry(), Some(&[1, 2, 3][..]));
        assert_eq!(fifo.peek(), Some(&1));
        fifo.clear();
        assert_eq!(fifo.peek_entry(), None);
        assert_eq!(fifo.free_slots(), 3);
    }
    assert_eq!(storage, [0u8; 9]);
}
