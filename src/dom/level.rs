use std::fmt;

/// Language level a tree is configured for.
///
/// The set of structural properties a node kind declares may differ between
/// levels; see [`NodeKind::properties`](super::NodeKind::properties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ApiLevel {
    Jls2,
    Jls3,
    #[default]
    Jls8,
}

impl ApiLevel {
    pub const LATEST: ApiLevel = ApiLevel::Jls8;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jls2 => "JLS2",
            Self::Jls3 => "JLS3",
            Self::Jls8 => "JLS8",
        }
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
