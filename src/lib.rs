//! Patch group association management for AWS Systems Manager.
//!
//! A library for registering SSM patch baselines to patch groups and for
//! reconciling the remote associations back into local records.

pub mod association;
pub mod output;
pub mod ssm;

mod error;

pub use association::PatchGroupAssociation;
pub use error::PatchGroupError;
pub use ssm::{PatchGroupManager, SsmError, SsmPatchClient};
