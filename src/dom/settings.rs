use super::flags::NodeFlags;
use super::level::ApiLevel;

/// Configuration fixed when an [`Ast`](super::Ast) is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AstSettings {
    /// Language level; decides which properties each kind declares.
    pub level: ApiLevel,
    /// Flags stamped on every node the tree creates.
    pub default_flags: NodeFlags,
    /// Record an [`AstChange`](super::AstChange) for every successful edit.
    pub record_changes: bool,
}

impl AstSettings {
    pub fn new(level: ApiLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: ApiLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_default_flags(mut self, flags: NodeFlags) -> Self {
        self.default_flags = flags;
        self
    }

    pub fn with_record_changes(mut self, record: bool) -> Self {
        self.record_changes = record;
        self
    }
}
