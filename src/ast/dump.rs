//! Structural JSON dump of a tree, for tooling and debug output.
//!
//! The dump is produced by a generic walk and carries no node-specific
//! attributes beyond a short label. It is not a stable format.

use super::{NodeLocation, NodeRef};
use crate::config::Config;
use crate::debug_println;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DumpNode {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<NodeLocation>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    truncated: bool,
    children: Vec<DumpNode>,
}

pub struct TreeDumper {
    config: Config,
}

impl TreeDumper {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn dump(&self, root: NodeRef<'_>) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.build(root, 0))
    }

    pub fn dump_pretty(&self, root: NodeRef<'_>) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build(root, 0))
    }

    fn build(&self, node: NodeRef<'_>, depth: usize) -> DumpNode {
        let children = node.children();
        let truncated = !children.is_empty() && self.config.max_depth == Some(depth);
        if truncated {
            debug_println!("dump: truncating {} at depth {}", node.kind(), depth);
        }

        DumpNode {
            kind: node.kind(),
            label: node.label(),
            location: node.location().filter(|_| self.config.include_locations),
            truncated,
            children: if truncated {
                Vec::new()
            } else {
                children
                    .into_iter()
                    .map(|child| self.build(child, depth + 1))
                    .collect()
            },
        }
    }
}

impl Default for TreeDumper {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
