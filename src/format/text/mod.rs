use std::{borrow::Cow, fmt};

use super::PrintIp;

// Strings are assumed to be in final display form already.
impl PrintIp for str {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl PrintIp for String {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt_ip(f)
    }
}

impl PrintIp for Box<str> {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_ip(f)
    }
}

impl PrintIp for Cow<'_, str> {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt_ip(f)
    }
}
