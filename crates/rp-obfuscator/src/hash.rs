//! Seed-free 64-bit FNV-1a.
//!
//! Path aliases are derived from this hash, so its output must never
//! change between processes, builds or platforms.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

pub fn hash_path(path: &str) -> u64 {
    fnv1a_64(path.as_bytes())
}
