//! Role names for ports and datapaths.

/// Input prefix.
const DATAPATH_PREFIX: &str = "idx";
const PORT_PREFIX: &str = "p";

/// Request-issuing endpoint with index in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port(pub usize);

impl ToString for Port {
    fn to_string(&self) -> String { format!("{}{}", PORT_PREFIX, self.0) }
}

/// Resource/requester signal with index in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datapath(pub usize);

impl ToString for Datapath {
    fn to_string(&self) -> String { format!("{}{}", DATAPATH_PREFIX, self.0) }
}
