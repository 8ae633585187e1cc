//! The formatters behind [`print_ip`](crate::print_ip).
//! Each representation implements the [`PrintIp`] trait:
//! - [`integer`]: primitive integers, split into octets
//! - [`text`]: strings, emitted as-is
//! - [`sequence`]: `Vec`, `LinkedList` and `VecDeque` of displayable elements
//! - [`tuple`]: tuples whose elements all share one displayable type

pub mod integer;
pub mod sequence;
pub mod text;
pub mod tuple;

use std::fmt::{self, Display};

/// A value that can be rendered as an IP address.
///
/// Implementations write the address only, the line terminator is added by
/// [`print_ip`](crate::print_ip) and [`write_ip`](crate::write_ip).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be printed as an IP address",
    label = "unsupported address representation",
    note = "supported are integers, strings, Vec/LinkedList/VecDeque of displayable elements and tuples",
    note = "tuple elements must share a type"
)]
pub trait PrintIp {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Wrap this value into an [`IpDisplay`], usable with `{}` in any formatting macro.
    fn display_ip(&self) -> IpDisplay<'_, Self> {
        IpDisplay(self)
    }
}

impl<T: PrintIp + ?Sized> PrintIp for &T {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_ip(f)
    }
}

/// [`Display`] adapter for any [`PrintIp`] value.
#[derive(Debug, Clone, Copy)]
pub struct IpDisplay<'a, T: ?Sized>(pub &'a T);

impl<T: PrintIp + ?Sized> Display for IpDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_ip(f)
    }
}
