//! Tester distribution packaging.
//!
//! Copies a pre-built extension directory and the generated guide page into
//! an ephemeral staging tree, synthesizes the tester README, compresses the
//! tree into a date-stamped zip archive and removes the staging directory.

mod archive;
pub mod bundler;
mod readme;
mod staging;

pub use bundler::{
    assemble, BundleConfig, BundleError, BundleReport, SkippedItem, GUIDE_HTML,
};
