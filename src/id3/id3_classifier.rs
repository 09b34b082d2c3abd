//! Defines the ID3 decision tree classifier.
use tracing::info;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Classifier, Error, Result};
use super::node::*;
use super::persisted::TreeSchema;


/// ID3 decision tree classifier.
/// This struct is a wrapper of `Node`
/// that also remembers the attribute list used at training time,
/// so that a tree reloaded from a file can classify by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3Classifier {
    schema: Vec<String>,
    root: Node,
}


impl Id3Classifier {
    #[inline]
    pub(super) fn from_components(schema: Vec<String>, root: Node) -> Self {
        Self { schema, root }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the attribute list used at training time.
    #[inline]
    pub fn schema(&self) -> &[String] {
        &self.schema[..]
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }


    /// Returns the depth of the tree.
    /// A tree consisting of a single leaf has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Serialize the tree to a pretty-printed JSON string.
    /// The nodes are stored as a flat array in level order,
    /// and each branch refers to its children by their index.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&TreeSchema::from(self))?;
        Ok(json)
    }


    /// Restore a tree from the JSON string made by
    /// [`Id3Classifier::to_json`].
    /// Besides the syntax, this method checks that the tree
    /// could have been grown from its schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let stored = serde_json::from_str::<TreeSchema>(json)?;
        Self::try_from(stored)
    }


    /// Write the current decision tree to a JSON file.
    /// The tree is first written to a temporary file next to `path`,
    /// which then replaces `path`.
    pub fn save<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let json = self.to_json()?;

        let tmp = temporary_path(path);
        if let Err(e) = fs::write(&tmp, json.as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::io(&tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::io(path, e));
        }

        info!(path = %path.display(), leaves = self.leaf_count(), "saved tree");
        Ok(())
    }


    /// Read a decision tree from the JSON file written by
    /// [`Id3Classifier::save`].
    pub fn load<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| Error::io(path, e))?;
        let tree = Self::from_json(&json)?;

        info!(path = %path.display(), leaves = tree.leaf_count(), "loaded tree");
        Ok(tree)
    }


    /// Returns the current decision tree in the dot language.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph DecisionTree {\n");
        let info = self.root.to_dot_info(0).0;
        info.into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push('}');
        dot
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        fs::write(path, self.to_dot())
            .map_err(|e| Error::io(path, e))
    }


    pub(super) fn validate(&self) -> Result<()> {
        if self.schema.iter().any(|a| a.trim().is_empty()) {
            return Err(Error::structure("the schema has an empty attribute name"));
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(name) = self.schema.iter().find(|a| !seen.insert(*a)) {
            return Err(Error::structure(
                format!("attribute `{name}` appears twice in the schema")
            ));
        }

        self.root.validate(&self.schema, &mut Vec::new())?;

        let depth = self.depth();
        if depth > self.schema.len() {
            return Err(Error::structure(format!(
                "depth {depth} exceeds the number of attributes {}",
                self.schema.len()
            )));
        }
        Ok(())
    }
}


impl Classifier for Id3Classifier {
    fn predict<S>(&self, record: &[S]) -> Result<String>
        where S: AsRef<str>
    {
        classify(&self.root, &self.schema, record)
    }
}


/// Classify `record` by the tree rooted at `root`.
/// `schema` is the full attribute list used at training time.
/// `record` holds a value per attribute in `schema`,
/// optionally followed by its label.
/// 
/// Fails with [`Error::UnseenValue`] if `record` reaches a node
/// that has no child for the value of the record.
pub fn classify<S>(root: &Node, schema: &[String], record: &[S])
    -> Result<String>
    where S: AsRef<str>
{
    let n_attributes = schema.len();
    if record.len() != n_attributes && record.len() != n_attributes + 1 {
        return Err(Error::input(format!(
            "record has {} fields, expected {n_attributes} \
            (or {} with a label)",
            record.len(),
            n_attributes + 1,
        )));
    }

    root.predict(schema, record)
        .map(str::to_string)
}


/// Returns `path` followed by `.tmp`.
#[inline]
fn temporary_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}


impl fmt::Display for Id3Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ID3 tree ({} leaves, depth {})",
            self.leaf_count(),
            self.depth(),
        )?;
        write!(f, "{}", self.root)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn tree() -> Id3Classifier {
        let root = Node::branch(
            "tearRate",
            BTreeMap::from([
                ("reduced".to_string(), Node::leaf("none")),
                ("normal".to_string(), Node::leaf("soft")),
            ]),
        );
        let schema = ["age", "tearRate"].map(String::from).to_vec();
        Id3Classifier::from_components(schema, root)
    }

    #[test]
    fn test_json_round_trip() {
        let f = tree();
        let json = f.to_json().unwrap();
        let g = Id3Classifier::from_json(&json).unwrap();
        assert_eq!(f, g);
    }

    #[test]
    fn test_json_layout() {
        let json = tree().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["schema"][1], "tearRate");
        assert_eq!(value["nodes"][0]["Branch"]["attribute"], "tearRate");

        let ix = value["nodes"][0]["Branch"]["children"]["reduced"]
            .as_u64()
            .unwrap() as usize;
        assert_eq!(value["nodes"][ix]["Leaf"]["label"], "none");
    }

    #[test]
    fn test_truncated_json() {
        let json = tree().to_json().unwrap();
        let res = Id3Classifier::from_json(&json[..json.len() / 2]);
        assert!(matches!(res, Err(Error::Serialization(_))), "got {res:?}");
    }

    #[test]
    fn test_inconsistent_json() {
        let json = r#"{
            "schema": ["age"],
            "nodes": [
                {"Branch": {"attribute": "tearRate", "children": {"reduced": 1}}},
                {"Leaf": {"label": "none"}}
            ]
        }"#;
        let res = Id3Classifier::from_json(json);
        assert!(matches!(res, Err(Error::Structure { .. })), "got {res:?}");
    }

    #[test]
    fn test_empty_schema_name() {
        let json = r#"{
            "schema": ["age", ""],
            "nodes": [{"Leaf": {"label": "none"}}]
        }"#;
        let res = Id3Classifier::from_json(json);
        assert!(matches!(res, Err(Error::Structure { .. })), "got {res:?}");
    }

    #[test]
    fn test_classify_arity() {
        let f = tree();
        assert_eq!(f.predict(&["young", "normal"]).unwrap(), "soft");
        assert_eq!(f.predict(&["young", "normal", "soft"]).unwrap(), "soft");
        let res = f.predict(&["normal"]);
        assert!(matches!(res, Err(Error::Input { .. })), "got {res:?}");
    }

    #[test]
    fn test_dot() {
        let dot = tree().to_dot();
        assert!(dot.starts_with("graph DecisionTree {"));
        assert!(dot.contains("label = \"reduced\""));
        assert!(dot.ends_with('}'));
    }

    #[test]
    fn test_display() {
        let text = tree().to_string();
        assert!(text.starts_with("ID3 tree (2 leaves, depth 1)"));
        assert!(text.contains("[tearRate]"));
        assert!(text.contains("reduced -> none"));
    }
}
