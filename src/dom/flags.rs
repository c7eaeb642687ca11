use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Per-node status bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeFlags(u8);

impl NodeFlags {
    pub const NONE: NodeFlags = NodeFlags(0);
    /// The node was built from syntactically broken input.
    pub const MALFORMED: NodeFlags = NodeFlags(1 << 0);
    /// The node was created by a parser rather than by an edit.
    pub const ORIGINAL: NodeFlags = NodeFlags(1 << 1);
    /// Property edits on the node are rejected.
    pub const PROTECT: NodeFlags = NodeFlags(1 << 2);
    /// The node was synthesized by error recovery.
    pub const RECOVERED: NodeFlags = NodeFlags(1 << 3);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: NodeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 | other.0)
    }

    pub const fn difference(self, other: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 & !other.0)
    }
}

impl BitOr for NodeFlags {
    type Output = NodeFlags;

    fn bitor(self, rhs: NodeFlags) -> NodeFlags {
        self.union(rhs)
    }
}

impl BitOrAssign for NodeFlags {
    fn bitor_assign(&mut self, rhs: NodeFlags) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for NodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(NodeFlags, &str); 4] = [
            (NodeFlags::MALFORMED, "MALFORMED"),
            (NodeFlags::ORIGINAL, "ORIGINAL"),
            (NodeFlags::PROTECT, "PROTECT"),
            (NodeFlags::RECOVERED, "RECOVERED"),
        ];
        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if set.is_empty() {
            f.write_str("NodeFlags(NONE)")
        } else {
            write!(f, "NodeFlags({})", set.join(" | "))
        }
    }
}
