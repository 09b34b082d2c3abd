//! Flat storage layout of `Id3Classifier`.
//!
//! Nodes are kept in a single array in level order;
//! the root sits at index `0`
//! and every branch refers to its children by index.
//! Restoring a tree from this layout needs no recursion,
//! so the depth of a stored tree is bounded only by its schema.
use serde::{Serialize, Deserialize};

use std::collections::{BTreeMap, VecDeque};

use crate::{Error, Result};
use super::id3_classifier::Id3Classifier;
use super::node::Node;


/// Stored form of `Id3Classifier`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TreeSchema {
    pub(crate) schema: Vec<String>,
    pub(crate) nodes: Vec<NodeSchema>,
}


/// Stored form of a single node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) enum NodeSchema {
    Branch {
        attribute: String,
        children: BTreeMap<String, usize>,
    },
    Leaf {
        label: String,
    },
}


impl From<&Id3Classifier> for TreeSchema {
    fn from(classifier: &Id3Classifier) -> Self {
        let mut nodes = Vec::new();
        let mut queue = VecDeque::from([classifier.root()]);
        // Index of the next node pushed to `queue`.
        let mut next = 1;

        while let Some(node) = queue.pop_front() {
            let stored = match node {
                Node::Leaf(leaf) => NodeSchema::Leaf {
                    label: leaf.label().to_string(),
                },
                Node::Branch(branch) => {
                    let children = branch.children()
                        .iter()
                        .map(|(value, child)| {
                            queue.push_back(child);
                            next += 1;
                            (value.clone(), next - 1)
                        })
                        .collect();
                    NodeSchema::Branch {
                        attribute: branch.attribute().to_string(),
                        children,
                    }
                },
            };
            nodes.push(stored);
        }

        Self { schema: classifier.schema().to_vec(), nodes }
    }
}


impl TryFrom<TreeSchema> for Id3Classifier {
    type Error = Error;

    fn try_from(stored: TreeSchema) -> Result<Self> {
        let TreeSchema { schema, nodes } = stored;
        check_links(&nodes)?;

        let depth = stored_depth(&nodes);
        if depth > schema.len() {
            return Err(Error::structure(format!(
                "depth {depth} exceeds the number of attributes {}",
                schema.len()
            )));
        }

        // Every child has a larger index than its parent,
        // so the nodes are rebuilt from the last one.
        let mut built: Vec<Option<Node>> = Vec::with_capacity(nodes.len());
        built.resize_with(nodes.len(), || None);
        for (ix, node) in nodes.into_iter().enumerate().rev() {
            let node = match node {
                NodeSchema::Leaf { label } => Node::leaf(label),
                NodeSchema::Branch { attribute, children } => {
                    let children = children.into_iter()
                        .map(|(value, child)| {
                            built[child].take()
                                .map(|node| (value, node))
                                .ok_or_else(|| Error::structure(format!(
                                    "node {child} is used twice"
                                )))
                        })
                        .collect::<Result<BTreeMap<_, _>>>()?;
                    Node::branch(attribute, children)
                },
            };
            built[ix] = Some(node);
        }

        let root = built.into_iter()
            .next()
            .flatten()
            .ok_or_else(|| Error::structure("the tree has no node"))?;

        let classifier = Id3Classifier::from_components(schema, root);
        classifier.validate()?;
        Ok(classifier)
    }
}


/// Check that `nodes` forms a single tree rooted at index `0`.
fn check_links(nodes: &[NodeSchema]) -> Result<()> {
    let n_nodes = nodes.len();
    if n_nodes == 0 {
        return Err(Error::structure("the tree has no node"));
    }

    let mut has_parent = vec![false; n_nodes];
    for (ix, node) in nodes.iter().enumerate() {
        let NodeSchema::Branch { children, .. } = node else { continue; };
        for &child in children.values() {
            if child <= ix || child >= n_nodes {
                return Err(Error::structure(format!(
                    "node {ix} refers to node {child} \
                    out of range {}..{n_nodes}",
                    ix + 1,
                )));
            }
            if std::mem::replace(&mut has_parent[child], true) {
                return Err(Error::structure(format!(
                    "node {child} has more than one parent"
                )));
            }
        }
    }

    if let Some(orphan) = (1..n_nodes).find(|&ix| !has_parent[ix]) {
        return Err(Error::structure(format!(
            "node {orphan} is not reachable from the root"
        )));
    }
    Ok(())
}


/// Depth of the stored tree.
/// Assumes `nodes` passed `check_links`.
fn stored_depth(nodes: &[NodeSchema]) -> usize {
    let mut depth = vec![0_usize; nodes.len()];
    for (ix, node) in nodes.iter().enumerate().rev() {
        if let NodeSchema::Branch { children, .. } = node {
            depth[ix] = 1 + children.values()
                .map(|&child| depth[child])
                .max()
                .unwrap_or(0);
        }
    }
    depth[0]
}
