use std::io::{self, Write};

use log::{error, trace};

use crate::PrintIp;

/// Print `value` as an IP address to stdout, followed by a newline.
///
/// The formatter is chosen by the type of `value`, see [`PrintIp`] for the supported representations.
/// Errors writing to stdout are logged and otherwise ignored.
pub fn print_ip<T: PrintIp + ?Sized>(value: &T) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_ip(&mut out, value) {
        error!("Unable to write address to stdout: {}", e);
    }
}

/// Write `value` as an IP address to `out`, followed by a newline.
pub fn write_ip<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: PrintIp + ?Sized,
{
    let line = value.display_ip().to_string();
    trace!("Formatted address: {}", line);
    writeln!(out, "{}", line)?;
    out.flush()
}
