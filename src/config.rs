//! Parser configuration.

/// How operators of equal priority group together.
///
/// The parser splits every subexpression at its lowest-priority operator.
/// When several operators share that priority, this decides which one becomes the pivot.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Associativity {
    /// Split at the rightmost candidate: `1-2-3` is `(1-2)-3`.
    #[default]
    Left,
    /// Split at the leftmost candidate: `1-2-3` is `1-(2-3)`.
    Right,
}

/// Configuration options for [`parse_with_config`][crate::parser::parse_with_config].
///
/// # Examples
///
/// ```
/// use polish_rs::config::{Associativity, ParseConfig};
/// use polish_rs::parser::parse_with_config;
///
/// let config = ParseConfig {
///     associativity: Associativity::Right,
///     ..ParseConfig::default()
/// };
///
/// let tree = parse_with_config("1-2-3", &config).unwrap();
/// assert_eq!(tree.to_infix(), "(1 - (2 - 3))");
/// ```
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Grouping of equal-priority operators (default: left)
    pub associativity: Associativity,
    /// Maximum depth of the resulting tree (default: 1024, capped at [`MAX_DEPTH_CEILING`][Self::MAX_DEPTH_CEILING])
    pub max_depth: usize,
}

impl ParseConfig {
    /// Hard upper bound on the tree depth, whatever `max_depth` says.
    ///
    /// Tree construction recurses once per level.
    pub const MAX_DEPTH_CEILING: usize = 2048;

    /// The depth limit actually enforced by the parser.
    ///
    /// ```
    /// use polish_rs::config::ParseConfig;
    ///
    /// assert_eq!(ParseConfig::default().depth_limit(), 1024);
    ///
    /// let config = ParseConfig {
    ///     max_depth: usize::MAX,
    ///     ..ParseConfig::default()
    /// };
    /// assert_eq!(config.depth_limit(), ParseConfig::MAX_DEPTH_CEILING);
    /// ```
    pub fn depth_limit(&self) -> usize {
        self.max_depth.min(Self::MAX_DEPTH_CEILING)
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            associativity: Associativity::Left,
            max_depth: 1024,
        }
    }
}
