use endian_bitvec::{BitVec, Endianness};

fn main() {
    let bits;
    {
        let mut words = [0u64; 2];
        bits = BitVec::new(bytemuck::cast_slice_mut(&mut words), Endianness::Little);
    }
    assert!(bits.is_ok());
}
