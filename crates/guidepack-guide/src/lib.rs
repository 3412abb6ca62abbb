//! Testing-guide page generation.
//!
//! This crate turns a static catalog of Markdown guide documents into one
//! self-contained, browsable HTML page: a registry of guides with display
//! metadata, path-derived identifiers shared by navigation and content
//! lookup, embedded raw Markdown rendered client-side on first view.

mod assets;
pub mod content;
pub mod ident;
pub mod page;
pub mod registry;

pub use content::{assemble, escape_embedded, Assembled, ContentError, ContentMap, SkippedGuide};
pub use ident::GuideId;
pub use page::{PageEmitter, PageError, PageOptions};
pub use registry::{CategoryKind, GuideCategory, GuideEntry, GuideRegistry, RegistryError};
