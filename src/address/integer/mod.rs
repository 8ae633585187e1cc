use std::fmt::{self, Display};

use crate::PrintIp;

use super::AddressError;

/// The primitive integer type an [`Integer`] address is stored in.
/// The width of the type decides how many octets are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IntegerType {
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl IntegerType {
    /// Width of the type in bytes, equal to the number of printed octets
    pub fn width(&self) -> usize {
        match self {
            IntegerType::I8 | IntegerType::U8 => 1,
            IntegerType::I16 | IntegerType::U16 => 2,
            IntegerType::I32 | IntegerType::U32 => 4,
            IntegerType::I64 | IntegerType::U64 => 8,
            IntegerType::I128 | IntegerType::U128 => 16,
        }
    }
}

impl Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntegerType::I8 => "i8",
            IntegerType::I16 => "i16",
            IntegerType::I32 => "i32",
            IntegerType::I64 => "i64",
            IntegerType::I128 => "i128",
            IntegerType::U8 => "u8",
            IntegerType::U16 => "u16",
            IntegerType::U32 => "u32",
            IntegerType::U64 => "u64",
            IntegerType::U128 => "u128",
        };
        write!(f, "{}", name)
    }
}

/// An integer address whose type is only known at run time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Integer {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
}

// Hex input is read as the unsigned type of the same width, then reinterpreted bit-for-bit.
macro_rules! parse_integer {
    ($text:expr, $t:ty, $unsigned:ty) => {
        match $text
            .strip_prefix("0x")
            .or_else(|| $text.strip_prefix("0X"))
        {
            Some(hex) => <$unsigned>::from_str_radix(hex, 16).map(|v| v as $t),
            None => $text.parse::<$t>(),
        }
    };
}

impl Integer {
    /// Parse `text` into an integer of type `ty`.
    /// Accepts decimal notation and hexadecimal notation prefixed with `0x`.
    pub fn parse(ty: IntegerType, text: &str) -> Result<Integer, AddressError> {
        let text = text.trim();
        let parsed = match ty {
            IntegerType::I8 => parse_integer!(text, i8, u8).map(Integer::I8),
            IntegerType::I16 => parse_integer!(text, i16, u16).map(Integer::I16),
            IntegerType::I32 => parse_integer!(text, i32, u32).map(Integer::I32),
            IntegerType::I64 => parse_integer!(text, i64, u64).map(Integer::I64),
            IntegerType::I128 => parse_integer!(text, i128, u128).map(Integer::I128),
            IntegerType::U8 => parse_integer!(text, u8, u8).map(Integer::U8),
            IntegerType::U16 => parse_integer!(text, u16, u16).map(Integer::U16),
            IntegerType::U32 => parse_integer!(text, u32, u32).map(Integer::U32),
            IntegerType::U64 => parse_integer!(text, u64, u64).map(Integer::U64),
            IntegerType::U128 => parse_integer!(text, u128, u128).map(Integer::U128),
        };
        parsed.map_err(|e| AddressError::InvalidInteger {
            value: text.to_owned(),
            ty,
            reason: e.to_string(),
        })
    }

    pub fn integer_type(&self) -> IntegerType {
        match self {
            Integer::I8(_) => IntegerType::I8,
            Integer::I16(_) => IntegerType::I16,
            Integer::I32(_) => IntegerType::I32,
            Integer::I64(_) => IntegerType::I64,
            Integer::I128(_) => IntegerType::I128,
            Integer::U8(_) => IntegerType::U8,
            Integer::U16(_) => IntegerType::U16,
            Integer::U32(_) => IntegerType::U32,
            Integer::U64(_) => IntegerType::U64,
            Integer::U128(_) => IntegerType::U128,
        }
    }
}

impl PrintIp for Integer {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer::I8(v) => v.fmt_ip(f),
            Integer::I16(v) => v.fmt_ip(f),
            Integer::I32(v) => v.fmt_ip(f),
            Integer::I64(v) => v.fmt_ip(f),
            Integer::I128(v) => v.fmt_ip(f),
            Integer::U8(v) => v.fmt_ip(f),
            Integer::U16(v) => v.fmt_ip(f),
            Integer::U32(v) => v.fmt_ip(f),
            Integer::U64(v) => v.fmt_ip(f),
            Integer::U128(v) => v.fmt_ip(f),
        }
    }
}
