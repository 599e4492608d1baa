//! The tagged initializer accepted by [`Node::with_init`][crate::Node::with_init].
//!
//! A tree can be seeded with a single number, a sequence of numbers, or
//! nothing at all. The accepted shapes form a small sum type, so run-time
//! validation only happens where genuinely untyped data enters: converting
//! from a [`serde_json::Value`].

use std::convert::TryFrom;

use serde_json::Value;

use crate::{Error, Node};

/// What to seed a new [`Node`][crate::Node] with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Init {
    /// Start with no value at all: the empty tree.
    Empty,
    /// Start with a single value at the root.
    Scalar(i64),
    /// Insert each value in order. The first element lands at the root and
    /// later duplicates are ignored, so the sequence order determines the
    /// shape of the tree.
    Sequence(Vec<i64>),
}

impl From<i64> for Init {
    fn from(n: i64) -> Self {
        Self::Scalar(n)
    }
}

impl From<Vec<i64>> for Init {
    fn from(ns: Vec<i64>) -> Self {
        Self::Sequence(ns)
    }
}

impl From<&[i64]> for Init {
    fn from(ns: &[i64]) -> Self {
        Self::Sequence(ns.to_vec())
    }
}

impl TryFrom<&Value> for Init {
    type Error = Error;

    /// Validates a dynamically-typed initializer. `null` means empty, a
    /// number must be an integer, and an array must hold only integers.
    ///
    /// A sequence is validated in full before it is accepted, so a mixed
    /// array like `[1, "foo", 3]` fails without any element having been
    /// applied anywhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::convert::TryFrom;
    ///
    /// use bstree::Init;
    /// use serde_json::json;
    ///
    /// assert_eq!(Init::try_from(&json!(null)), Ok(Init::Empty));
    /// assert_eq!(Init::try_from(&json!(7)), Ok(Init::Scalar(7)));
    /// assert_eq!(
    ///     Init::try_from(&json!([3, 1, 7])),
    ///     Ok(Init::Sequence(vec![3, 1, 7]))
    /// );
    ///
    /// assert!(Init::try_from(&json!("foo")).is_err());
    /// assert!(Init::try_from(&json!(["foo", "bar"])).is_err());
    /// assert!(Init::try_from(&json!(1.5)).is_err());
    /// ```
    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(Self::Empty),
            Value::Number(n) => as_integer(n).map(Self::Scalar),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Number(n) => as_integer(n),
                    other => Err(Error::InvalidArgument(format!(
                        "sequence element {} is not an integer",
                        other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Sequence),
            other => Err(Error::InvalidArgument(format!(
                "{} is not an integer or a sequence of integers",
                other
            ))),
        }
    }
}

impl TryFrom<&Value> for Node {
    type Error = Error;

    /// Builds a tree straight from dynamically-typed data by validating it
    /// into an [`Init`] first. Nothing is inserted unless the whole input
    /// is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::convert::TryFrom;
    ///
    /// use bstree::Node;
    /// use serde_json::json;
    ///
    /// let tree = Node::try_from(&json!([3, 1, 7])).unwrap();
    /// assert_eq!(tree.value(), Some(3));
    ///
    /// assert!(Node::try_from(&json!("foo")).is_err());
    /// ```
    fn try_from(value: &Value) -> Result<Self, Error> {
        Init::try_from(value).map(Self::with_init)
    }
}

fn as_integer(n: &serde_json::Number) -> Result<i64, Error> {
    n.as_i64()
        .ok_or_else(|| Error::InvalidArgument(format!("{} is not an integer", n)))
}
