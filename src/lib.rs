//! Main crate for the `ip-print` application.
//!
//! Renders an IP address held in one of several representations:
//! - fixed-width integers, split into octets, most-significant first (`192.168.0.1`)
//! - strings, printed verbatim
//! - sequences ([`Vec`], [`LinkedList`](std::collections::LinkedList), ...), joined with `", "`
//! - homogeneous tuples, joined with `"."`
//!
//! The formatter is picked at compile time from the type of the argument, see [`PrintIp`].
//! Values that are only known at run time (e.g. command line input) go through [`address::Address`].
//!
//! ```
//! use ip_print::write_ip;
//!
//! let mut out = Vec::new();
//! write_ip(&mut out, &3232235521u32).unwrap();
//! write_ip(&mut out, &(200, 168, 1, 1)).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "192.168.0.1\n200.168.1.1\n");
//! ```
//!
//! Tuples whose elements differ in type are rejected when building:
//!
//! ```compile_fail
//! ip_print::print_ip(&(192u8, 168u16, 0u8, 1u8));
//! ```

#![allow(clippy::uninlined_format_args)]

pub mod address;
pub mod format;
mod print;

pub use format::{IpDisplay, PrintIp};
pub use print::{print_ip, write_ip};
