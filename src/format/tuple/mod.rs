use std::fmt::{self, Display};

use itertools::Itertools;

use super::PrintIp;

const TUPLE_SEP: &str = ".";

/// Write `elements` in declaration order, joined by `"."`.
pub fn write_tuple<I>(elements: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "{}", elements.into_iter().format(TUPLE_SEP))
}

impl PrintIp for () {
    fn fmt_ip(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

// Only homogeneous tuples get an impl, every element position is the same `T`.
macro_rules! tuple_impls {
    (@elem $idx:tt) => { T };
    ($(($($idx:tt)+))+) => {$(
        impl<T: Display> PrintIp for ($(tuple_impls!(@elem $idx),)+) {
            fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_tuple([$(&self.$idx),+], f)
            }
        }
    )+};
}

tuple_impls! {
    (0)
    (0 1)
    (0 1 2)
    (0 1 2 3)
    (0 1 2 3 4)
    (0 1 2 3 4 5)
    (0 1 2 3 4 5 6)
    (0 1 2 3 4 5 6 7)
    (0 1 2 3 4 5 6 7 8)
    (0 1 2 3 4 5 6 7 8 9)
    (0 1 2 3 4 5 6 7 8 9 10)
    (0 1 2 3 4 5 6 7 8 9 10 11)
}

#[cfg(test)]
mod tests {
    use crate::PrintIp;

    #[test]
    fn should_join_elements_with_dot() {
        assert_eq!((200, 168, 1, 1).display_ip().to_string(), "200.168.1.1");
        assert_eq!(
            (123, 456, 789, 0).display_ip().to_string(),
            "123.456.789.0"
        );
    }

    #[test]
    fn should_print_single_element_without_separator() {
        assert_eq!((10u8,).display_ip().to_string(), "10");
    }

    #[test]
    fn should_print_nothing_for_unit() {
        assert_eq!(().display_ip().to_string(), "");
    }

    #[test]
    fn should_keep_declaration_order() {
        let t = ("fe80", "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "b");
        assert_eq!(t.display_ip().to_string(), "fe80.1.2.3.4.5.6.7.8.9.a.b");
    }
}
