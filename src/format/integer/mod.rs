use std::fmt;

use itertools::Itertools;

use super::PrintIp;

/// Write `octets` as decimal numbers joined by `.`.
/// `octets` must already be ordered most-significant first.
pub fn write_octets(octets: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", octets.iter().format("."))
}

// Octets are taken from the raw bit pattern, signed values are not sign-interpreted.
macro_rules! integer_impls {
    ($($t:ty)+) => {$(
        impl PrintIp for $t {
            fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_octets(&self.to_be_bytes(), f)
            }
        }
    )+};
}

integer_impls! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }
