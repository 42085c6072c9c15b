/// Options for structural tree dumps
#[derive(Debug, Clone)]
pub struct Config {
    /// Emit `location` for nodes that carry one
    pub include_locations: bool,
    /// Stop descending below this depth; the root is depth 0
    pub max_depth: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_locations: true,
            max_depth: None,
        }
    }
}
