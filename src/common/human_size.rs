// HumanSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use humansize::{
    format_size_i,
    DECIMAL,
};

/// `HumanSize` trait.
pub trait HumanSize {
    /// Return `self` as a human friendly size.
    fn humansize(&self) -> String;
}

/// `HumanSize` trait implementation for `f64`.
impl HumanSize for f64 {
    /// Sizes arrive as floats of bytes and growth can be negative, so we
    /// format through the signed path.
    fn humansize(&self) -> String {
        format_size_i(*self, DECIMAL)
    }
}
