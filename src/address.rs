//! Addresses whose representation is only known at run time, such as command line input.
//!
//! An [`Address`] is built once from raw text with [`Address::from_values()`].
//! All validation happens at that point, a constructed [`Address`] always prints successfully.
//! The printed form follows the same rules as the static formatters in [`crate::format`].

mod element;
mod integer;

pub use element::{Element, ElementKind};
pub use integer::{Integer, IntegerType};

use std::fmt::{self, Display};

use log::debug;
use thiserror::Error;

use crate::{
    format::{sequence::write_sequence, tuple::write_tuple},
    PrintIp,
};

/// Which representation to build an [`Address`] in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressKind {
    Integer(IntegerType),
    Text,
    Sequence,
    Tuple,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    Integer(Integer),
    Text(String),
    Sequence(Vec<Element>),
    Tuple(Vec<Element>),
}

/// The kind of container that failed the shared element type check
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Container {
    Sequence,
    Tuple,
}

impl Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Sequence => write!(f, "sequence"),
            Container::Tuple => write!(f, "tuple"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("`{value}` is not a valid {ty} integer ({} octets): {reason}", .ty.width())]
    InvalidInteger {
        value: String,
        ty: IntegerType,
        reason: String,
    },
    #[error("{kind} address takes exactly one value, got {count}")]
    ValueCount { kind: &'static str, count: usize },
    #[error("{container} elements must share a type: element {index} (`{value}`) is {found}, expected {expected}")]
    MixedElements {
        container: Container,
        index: usize,
        value: String,
        found: ElementKind,
        expected: ElementKind,
    },
}

impl Address {
    /// Build an address of the given `kind` from raw `values`.
    ///
    /// Integer and text addresses take exactly one value.
    /// Sequence and tuple addresses take any number of values (including none),
    /// which must all parse to the same [`ElementKind`].
    pub fn from_values<S: AsRef<str>>(
        kind: AddressKind,
        values: &[S],
    ) -> Result<Address, AddressError> {
        let addr = match kind {
            AddressKind::Integer(ty) => {
                Address::Integer(Integer::parse(ty, single_value("integer", values)?)?)
            }
            AddressKind::Text => Address::Text(single_value("text", values)?.to_owned()),
            AddressKind::Sequence => {
                Address::Sequence(homogeneous_elements(Container::Sequence, values)?)
            }
            AddressKind::Tuple => Address::Tuple(homogeneous_elements(Container::Tuple, values)?),
        };
        if let Address::Integer(i) = &addr {
            debug!(
                "Built {} address with {} octets",
                i.integer_type(),
                i.integer_type().width()
            );
        } else {
            debug!("Built address {:?}", addr);
        }
        Ok(addr)
    }
}

impl PrintIp for Address {
    fn fmt_ip(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Integer(i) => i.fmt_ip(f),
            Address::Text(t) => t.fmt_ip(f),
            Address::Sequence(elements) => write_sequence(elements, f),
            Address::Tuple(elements) => write_tuple(elements, f),
        }
    }
}

fn single_value<'a, S: AsRef<str>>(
    kind: &'static str,
    values: &'a [S],
) -> Result<&'a str, AddressError> {
    match values {
        [v] => Ok(v.as_ref()),
        _ => Err(AddressError::ValueCount {
            kind,
            count: values.len(),
        }),
    }
}

// The first element decides the kind every other element must match
fn homogeneous_elements<S: AsRef<str>>(
    container: Container,
    values: &[S],
) -> Result<Vec<Element>, AddressError> {
    let elements = values
        .iter()
        .map(|v| Element::parse(v.as_ref()))
        .collect::<Vec<_>>();

    if let Some(expected) = elements.first().map(Element::kind) {
        if let Some((index, mismatch)) = elements
            .iter()
            .enumerate()
            .find(|(_, e)| e.kind() != expected)
        {
            return Err(AddressError::MixedElements {
                container,
                index,
                value: mismatch.to_string(),
                found: mismatch.kind(),
                expected,
            });
        }
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use totems::{assert_err, assert_ok};

    use super::*;

    fn build(kind: AddressKind, values: &[&str]) -> String {
        Address::from_values(kind, values)
            .unwrap()
            .display_ip()
            .to_string()
    }

    #[test]
    fn should_build_integer_address() {
        assert_eq!(
            build(AddressKind::Integer(IntegerType::U32), &["3232235521"]),
            "192.168.0.1"
        );
        assert_eq!(build(AddressKind::Integer(IntegerType::U8), &["0"]), "0");
    }

    #[test]
    fn should_build_text_address() {
        assert_eq!(
            build(AddressKind::Text, &["255.255.255.255"]),
            "255.255.255.255"
        );
    }

    #[test]
    fn should_build_sequence_address() {
        assert_eq!(
            build(AddressKind::Sequence, &["0", "0", "0", "0"]),
            "0, 0, 0, 0"
        );
        assert_eq!(build(AddressKind::Sequence, &[]), "");
    }

    #[test]
    fn should_build_tuple_address() {
        assert_eq!(
            build(AddressKind::Tuple, &["200", "168", "1", "1"]),
            "200.168.1.1"
        );
        assert_eq!(build(AddressKind::Tuple, &["10"]), "10");
        assert_eq!(build(AddressKind::Tuple, &[]), "");
    }

    #[test]
    fn should_require_exactly_one_value_for_scalars() {
        assert_eq!(
            Address::from_values(AddressKind::Text, &["a", "b"]),
            Err(AddressError::ValueCount {
                kind: "text",
                count: 2
            })
        );
        assert_eq!(
            Address::from_values::<&str>(AddressKind::Integer(IntegerType::U32), &[]),
            Err(AddressError::ValueCount {
                kind: "integer",
                count: 0
            })
        );
    }

    #[test]
    fn should_reject_mixed_tuple() {
        let err = Address::from_values(AddressKind::Tuple, &["192", "168", "x", "1"]).unwrap_err();
        assert_eq!(
            err,
            AddressError::MixedElements {
                container: Container::Tuple,
                index: 2,
                value: "x".to_owned(),
                found: ElementKind::Text,
                expected: ElementKind::Number,
            }
        );
        assert!(err
            .to_string()
            .starts_with("tuple elements must share a type"));
    }

    #[test]
    fn should_print_elements_verbatim() {
        assert_eq!(build(AddressKind::Sequence, &["007", "+5"]), "007, +5");
        assert_eq!(
            build(AddressKind::Tuple, &["192", "168", "001", "001"]),
            "192.168.001.001"
        );
        assert_eq!(build(AddressKind::Tuple, &[" 10", "0"]), " 10.0");
    }

    #[test]
    fn should_accept_numbers_wider_than_64_bits() {
        assert_eq!(
            build(AddressKind::Sequence, &["1", "18446744073709551615"]),
            "1, 18446744073709551615"
        );
        assert_eq!(
            build(
                AddressKind::Tuple,
                &["-170141183460469231731687303715884105728", "0"]
            ),
            "-170141183460469231731687303715884105728.0"
        );
    }

    #[test]
    fn should_reject_mixed_sequence() {
        assert_err!(Address::from_values(AddressKind::Sequence, &["a", "1"]));
        assert_ok!(Address::from_values(AddressKind::Sequence, &["a", "b"]));
    }

    #[test]
    fn should_propagate_integer_errors() {
        let err = Address::from_values(AddressKind::Integer(IntegerType::I8), &["128"]).unwrap_err();
        assert!(matches!(err, AddressError::InvalidInteger { .. }));
        assert!(err.to_string().contains("i8 integer (1 octets)"));

        let err = Address::from_values(AddressKind::Integer(IntegerType::U64), &["-1"]).unwrap_err();
        assert!(err.to_string().contains("u64 integer (8 octets)"));
    }
}
