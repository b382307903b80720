//! Allocates slots from a free-space bitmap stored big endian inside a page,
//! the way an on-disk index would keep it.

use endian_bitvec::{BitVec, Endianness, Result};

const PAGE_WORDS: usize = 4;

/// Claims `count` consecutive slots, returning the first one.
fn first_fit(bits: &mut BitVec<'_>, count: usize) -> Option<usize> {
    let mut start = bits.find_first_zero(0)?;
    loop {
        let end = bits.find_first_one(start).unwrap_or(bits.len());
        if end - start >= count {
            for idx in start..start + count {
                bits.set(idx);
            }
            return Some(start);
        }
        start = bits.find_first_zero(end)?;
    }
}

fn main() -> Result<()> {
    let mut page = [0u64; PAGE_WORDS];
    let mut bits = BitVec::new(bytemuck::cast_slice_mut(&mut page), Endianness::Big)?;

    for request in [3, 60, 10, 1, 200, 5] {
        match first_fit(&mut bits, request) {
            Some(start) => println!("{request:>3} slots at {start}"),
            None => println!("{request:>3} slots: no room"),
        }
    }
    bits.clear(4);
    println!("freed slot 4, next free is {:?}", bits.find_first_zero(0));
    println!(
        "{} of {} slots used, highest {:?}",
        bits.count_ones(),
        bits.len(),
        bits.find_last_one()
    );
    println!("raw page bytes: {:02x?}", &bits.as_bytes()[..8]);
    Ok(())
}
