// Tagged outcome of a bucket region probe
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Outcome of resolving a bucket's home region.
///
/// `Inaccessible` is a definitive denial from the provider, while
/// `Unavailable` means the probe kept failing and retries were exhausted.
/// Both leave the bucket without a region, but only the latter is worth
/// flagging loudly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegionLookup {
    /// The bucket's home region.
    Resolved(String),

    /// The provider definitively refused the probe.
    Inaccessible,

    /// The probe kept failing transiently until retries ran out.
    Unavailable,
}

impl RegionLookup {
    /// The resolved region, if any.
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::Resolved(region) => Some(region),
            _                      => None,
        }
    }
}
