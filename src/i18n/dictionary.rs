//! Translation dictionaries and dotted-key lookup.
//!
//! A dictionary is a JSON tree: objects nest sections, arrays hold repeating
//! content (project cards, job entries), strings are the leaves. Keys address
//! the tree with dot-separated segments; array elements are addressed by their
//! decimal index (`projects.items.0.title`).

use serde_json::Value;

/// A parsed translation tree for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// Wrap an already parsed JSON tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a dictionary from JSON source.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source).map(Self::new)
    }

    /// A dictionary without any entries. Every lookup misses.
    pub fn empty() -> Self {
        Self::new(Value::Object(serde_json::Map::new()))
    }

    /// The root of the tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Descend the tree one segment at a time.
    ///
    /// Returns `None` as soon as a segment is absent or the current value is a
    /// leaf that cannot be traversed further.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.').try_fold(&self.root, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Look up a string leaf. Subtrees and non-string leaves are misses.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.lookup(key).and_then(Value::as_str)
    }

    /// Every dotted path that ends in a leaf, in key order.
    ///
    /// Array elements contribute their index as a segment.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(&self.root, String::new(), &mut paths);
        paths
    }
}

fn collect_leaf_paths(value: &Value, prefix: String, out: &mut Vec<String>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", prefix, segment)
        }
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaf_paths(child, join(key), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_leaf_paths(child, join(&index.to_string()), out);
            }
        }
        _ => {
            if !prefix.is_empty() {
                out.push(prefix);
            }
        }
    }
}
