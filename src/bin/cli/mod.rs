use clap::{Parser, ValueEnum};
use ip_print::address::{AddressKind, IntegerType};
use log::LevelFilter;

macro_rules! env_prefix {
    () => {
        "IP_PRINT_"
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Representation to read the values as
    #[arg(
        value_enum,
        short = 'k',
        long,
        required_unless_present = "demo",
        value_name = "KIND",
        env = concat!(env_prefix!(), "KIND")
    )]
    pub kind: Option<Kind>,

    /// Integer type to store the value in. Only has an effect if 'kind' == 'int'
    #[arg(
        value_enum,
        short = 't',
        long,
        default_value_t = IntType::U32,
        value_name = "TYPE",
        env = concat!(env_prefix!(), "INT_TYPE")
    )]
    pub int_type: IntType,

    /// Set the loglevel of the application
    #[arg(
        value_enum,
        short = 'l',
        long,
        default_value_t = Loglevel::Info,
        value_name = "LEVEL",
        env = concat!(env_prefix!(), "LOGLEVEL")
    )]
    pub loglevel: Loglevel,

    /// Print a fixed set of example addresses in every representation, then exit
    #[arg(long, action, default_value_t = false, conflicts_with_all = ["kind", "values"])]
    pub demo: bool,

    /// Values making up the address.
    /// 'int' and 'text' take exactly one value, 'seq' and 'tuple' take any number
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Which representation the address values are given in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum)]
pub enum Kind {
    /// A single integer, printed octet by octet
    Int,
    /// A single string, printed verbatim
    Text,
    /// Any number of elements, joined with ", "
    Seq,
    /// Any number of elements of one type, joined with "."
    Tuple,
}
impl Kind {
    pub fn address_kind(self, int_type: IntType) -> AddressKind {
        match self {
            Kind::Int => AddressKind::Integer(int_type.into()),
            Kind::Text => AddressKind::Text,
            Kind::Seq => AddressKind::Sequence,
            Kind::Tuple => AddressKind::Tuple,
        }
    }
}

/// Integer type for 'int' addresses.
// Mirrors ip_print::address::IntegerType, which doesn't derive ValueEnum
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum)]
pub enum IntType {
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
impl From<IntType> for IntegerType {
    fn from(value: IntType) -> Self {
        match value {
            IntType::I8 => IntegerType::I8,
            IntType::I16 => IntegerType::I16,
            IntType::I32 => IntegerType::I32,
            IntType::I64 => IntegerType::I64,
            IntType::I128 => IntegerType::I128,
            IntType::U8 => IntegerType::U8,
            IntType::U16 => IntegerType::U16,
            IntType::U32 => IntegerType::U32,
            IntType::U64 => IntegerType::U64,
            IntType::U128 => IntegerType::U128,
        }
    }
}

/// Used to set the applications loglevel
// This is essentially a re-creation of log:Level. However, that enum doesn't derive ValueEnum, so we have to do it manually here
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum)]
pub enum Loglevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl From<Loglevel> for LevelFilter {
    fn from(ll: Loglevel) -> Self {
        match ll {
            Loglevel::Error => LevelFilter::Error,
            Loglevel::Warn => LevelFilter::Warn,
            Loglevel::Info => LevelFilter::Info,
            Loglevel::Debug => LevelFilter::Debug,
            Loglevel::Trace => LevelFilter::Trace,
        }
    }
}
