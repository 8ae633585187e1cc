use std::{
    collections::{LinkedList, VecDeque},
    fmt::{self, Display},
};

use itertools::Itertools;

use super::PrintIp;

const SEQUENCE_SEP: &str = ", ";

/// Write every element of `elements` in iteration order, joined by `", "`.
/// Nothing is written for an empty iterator.
pub fn write_sequence<I>(elements: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "{}", elements.into_iter().format(SEQUENCE_SEP))
}

impl<T: Display> PrintIp for Vec<T> {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(self, f)
    }
}

impl<T: Display> PrintIp for LinkedList<T> {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(self, f)
    }
}

impl<T: Display> PrintIp for VecDeque<T> {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use crate::PrintIp;

    #[test]
    fn should_join_elements_with_comma() {
        assert_eq!(vec![0, 0, 0, 0].display_ip().to_string(), "0, 0, 0, 0");
        assert_eq!(
            vec![100, 200, 300, 400].display_ip().to_string(),
            "100, 200, 300, 400"
        );
    }

    #[test]
    fn should_keep_iteration_order() {
        let list = LinkedList::from([400, 300, 200, 100]);
        assert_eq!(list.display_ip().to_string(), "400, 300, 200, 100");

        let mut deque = VecDeque::from([2, 3]);
        deque.push_front(1);
        assert_eq!(deque.display_ip().to_string(), "1, 2, 3");
    }

    #[test]
    fn should_print_nothing_for_empty_sequence() {
        assert_eq!(Vec::<u8>::new().display_ip().to_string(), "");
        assert_eq!(LinkedList::<u8>::new().display_ip().to_string(), "");
    }

    #[test]
    fn should_use_element_display() {
        let v = vec!["10.0.0.1", "10.0.0.2"];
        assert_eq!(v.display_ip().to_string(), "10.0.0.1, 10.0.0.2");
        assert_eq!(vec![1.5f32].display_ip().to_string(), "1.5");
    }
}
