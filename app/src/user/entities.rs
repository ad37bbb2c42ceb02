/// Caller-supplied user identifier. Ids are opaque strings; uniqueness is
/// enforced by the [`Directory`](super::Directory) at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(pub String);
