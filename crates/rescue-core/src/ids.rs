//! Typed identifiers.
//!
//! Each id wraps a dense `u32` index into one of the simulation's tables
//! (agents, graph nodes, CSR arcs).  Ids are totally ordered; the scheduler
//! and every tie-break rule lean on that order.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A rescue agent.  Assigned in roster order starting at 0.
    pub struct AgentId(u32);
}

typed_id! {
    /// A location in the flooded region.
    pub struct NodeId(u32);
}

typed_id! {
    /// A directed arc; roads are stored as two arcs.
    pub struct EdgeId(u32);
}
