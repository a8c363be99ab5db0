//! Typed mirrors of the toolkit's custom resources.
//!
//! The schemas belong to the controllers; only the fields the CLI reads or
//! re-emits are modelled. Open-ended sub-objects stay as untyped JSON.

mod helm;
mod kustomize;
mod meta;
mod source;

pub use helm::*;
pub use kustomize::*;
pub use meta::*;
pub use source::*;
