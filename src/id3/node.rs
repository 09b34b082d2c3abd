//! Defines the inner representation 
//! of the ID3 decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;

use crate::{Error, Result};


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A node that consumes an attribute
    /// and has a child per observed value.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// The keys of `children` are exactly the values of `attribute`
/// observed in the training slice that reached this node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) attribute: String,
    pub(super) children: BTreeMap<String, Node>,
}


impl BranchNode {
    /// Returns the name of the attribute consumed by this node.
    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }


    /// Returns the pairs of attribute value and child node.
    #[inline]
    pub fn children(&self) -> &BTreeMap<String, Node> {
        &self.children
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: String,
}


impl LeafNode {
    /// Returns the label predicted by this leaf.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}


impl Node {
    /// Construct a leaf node that predicts `label`.
    #[inline]
    pub(crate) fn leaf<S: Into<String>>(label: S) -> Self {
        Node::Leaf(LeafNode { label: label.into() })
    }


    /// Construct a branch node from the given components.
    #[inline]
    pub(crate) fn branch<S: Into<String>>(
        attribute: S,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        Node::Branch(BranchNode { attribute: attribute.into(), children })
    }


    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(branch) => branch.children.values()
                .map(Node::leaf_count)
                .sum(),
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(branch) => 1 + branch.children.values()
                .map(Node::depth)
                .max()
                .unwrap_or(0),
        }
    }


    /// Walk down the tree along `record` and returns the label.
    /// `schema` is the full attribute list used at training time,
    /// and `record` is addressed by it.
    pub(crate) fn predict<'a, S>(&'a self, schema: &[String], record: &[S])
        -> Result<&'a str>
        where S: AsRef<str>
    {
        let mut node = self;
        loop {
            let branch = match node {
                Node::Leaf(leaf) => return Ok(&leaf.label),
                Node::Branch(branch) => branch,
            };

            let position = schema.iter()
                .position(|name| *name == branch.attribute)
                .ok_or_else(|| Error::input(format!(
                    "attribute `{}` is not in the schema",
                    branch.attribute
                )))?;
            let value = record.get(position)
                .map(AsRef::<str>::as_ref)
                .ok_or_else(|| Error::input(format!(
                    "record has no value for attribute `{}`",
                    branch.attribute
                )))?;

            node = branch.children.get(value)
                .ok_or_else(|| Error::UnseenValue {
                    attribute: branch.attribute.clone(),
                    value: value.to_string(),
                })?;
        }
    }


    /// Check that this sub-tree can be grown from `schema`.
    /// `path` holds the attributes consumed by the ancestors.
    pub(crate) fn validate<'a>(
        &'a self,
        schema: &[String],
        path: &mut Vec<&'a str>,
    ) -> Result<()>
    {
        let branch = match self {
            Node::Leaf(_) => return Ok(()),
            Node::Branch(branch) => branch,
        };

        let name = branch.attribute.as_str();
        if name.trim().is_empty() {
            return Err(Error::structure("a branch has an empty attribute name"));
        }
        if !schema.iter().any(|a| a == name) {
            return Err(Error::structure(
                format!("attribute `{name}` is not in the schema")
            ));
        }
        if path.contains(&name) {
            return Err(Error::structure(
                format!("attribute `{name}` is consumed twice on a path")
            ));
        }
        if branch.children.is_empty() {
            return Err(Error::structure(
                format!("branch on `{name}` has no child")
            ));
        }

        path.push(name);
        for child in branch.children.values() {
            child.validate(schema, path)?;
        }
        path.pop();

        Ok(())
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attr} ?\" ];\n",
                    attr = escape(&b.attribute),
                )];

                let mut next_id = id + 1;
                for (value, child) in b.children.iter() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{value}\" ];\n",
                        value = escape(value),
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{label}\", \
                     shape = box, \
                     ];\n",
                    label = escape(&l.label),
                );

                (vec![info], id + 1)
            }
        }
    }


    /// Write the sub-tree in an indented text form.
    pub(super) fn write_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        level: usize,
    ) -> fmt::Result
    {
        let pad = "  ".repeat(level);
        match self {
            Node::Leaf(leaf) => writeln!(f, "{pad}-> {}", leaf.label),
            Node::Branch(branch) => {
                writeln!(f, "{pad}[{}]", branch.attribute)?;
                for (value, child) in branch.children.iter() {
                    match child {
                        Node::Leaf(leaf) => {
                            writeln!(f, "{pad}  {value} -> {}", leaf.label)?;
                        },
                        Node::Branch(_) => {
                            writeln!(f, "{pad}  {value}:")?;
                            child.write_indented(f, level + 2)?;
                        },
                    }
                }
                Ok(())
            },
        }
    }
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}


/// Escape backslashes and `"` for a dot label.
#[inline]
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
