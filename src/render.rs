//! Textual and structured renderings of a tree.
//!
//! These are peripheral, deterministic dumps of `{value, children}`. The
//! one behavioral contract is the explicit empty marker: a valueless node
//! renders as `{}` (or its JSON/XML equivalent) rather than disappearing.

use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::Node;

/// Formats the subtree as a nested `{ value: left, right }` string. A
/// missing child of a non-leaf prints as the empty marker `{}`.
///
/// # Examples
///
/// ```
/// use bstree::Tree;
///
/// assert_eq!(Tree::new().to_string(), "{}");
/// assert_eq!(Tree::with_value(5).to_string(), "{ 5 }");
/// assert_eq!(
///     Tree::with_init(vec![4, 2, 6]).to_string(),
///     "{ 4: { 2 }, { 6 } }"
/// );
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self.value() {
            None => return write!(f, "{{}}"),
            Some(v) => v,
        };
        match (self.left(), self.right()) {
            (None, None) => write!(f, "{{ {} }}", v),
            (Some(left), None) => write!(f, "{{ {}: {}, {{}} }}", v, left),
            (None, Some(right)) => write!(f, "{{ {}: {{}}, {} }}", v, right),
            (Some(left), Some(right)) => write!(f, "{{ {}: {}, {} }}", v, left, right),
        }
    }
}

/// Debug output mirrors [`Display`][fmt::Display]; the raw handle guts are
/// not informative.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Serializes in the same shape as [`Node::to_json`].
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl Node {
    /// A JSON rendering of the subtree: `{}` for an empty node,
    /// `{"value": v}` for a leaf, and `{"children": [left, right],
    /// "value": v}` otherwise, with `null` standing in for a missing child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    /// use serde_json::json;
    ///
    /// let tree = Tree::with_init(vec![4, 6]);
    /// assert_eq!(
    ///     tree.to_json(),
    ///     json!({ "children": [null, { "value": 6 }], "value": 4 })
    /// );
    /// ```
    pub fn to_json(&self) -> Value {
        let v = match self.value() {
            None => return json!({}),
            Some(v) => v,
        };
        let child = |c: Option<Node>| c.map_or(Value::Null, |c| c.to_json());
        match (self.left(), self.right()) {
            (None, None) => json!({ "value": v }),
            (left, right) => json!({
                "children": [child(left), child(right)],
                "value": v,
            }),
        }
    }

    /// An XML rendering of the subtree. An empty node (and a missing child
    /// of a non-leaf) renders as the empty marker `<node></node>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// assert_eq!(Tree::new().to_xml(), "<node></node>");
    /// assert_eq!(
    ///     Tree::with_value(5).to_xml(),
    ///     "<node><value>5</value></node>"
    /// );
    /// ```
    pub fn to_xml(&self) -> String {
        let v = match self.value() {
            None => return String::from("<node></node>"),
            Some(v) => v,
        };
        let child = |c: Option<Node>| c.map_or_else(|| String::from("<node></node>"), |c| c.to_xml());
        match (self.left(), self.right()) {
            (None, None) => format!("<node><value>{}</value></node>", v),
            (left, right) => format!(
                "<node><children>{}{}</children><value>{}</value></node>",
                child(left),
                child(right),
                v
            ),
        }
    }
}
