//! Reads registered guides and prepares their text for embedding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ident::GuideId;
use crate::registry::GuideRegistry;

/// Escape raw text for embedding inside a JavaScript template literal.
///
/// Backslashes are escaped before the delimiters so the escapes themselves
/// are not re-escaped. The target parser reverses this exactly, so the
/// round trip is identity.
pub fn escape_embedded(content: &str) -> String {
    content
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Insertion-ordered mapping from guide identifier to escaped document text.
///
/// Inserting an identifier that is already present replaces its text in
/// place (last write wins, original position kept). The registry rejects
/// duplicate identifiers up front, so replacement only happens when a
/// caller builds a map outside a validated registry.
#[derive(Debug, Default)]
pub struct ContentMap {
    entries: Vec<(GuideId, String)>,
}

impl ContentMap {
    pub fn insert(&mut self, id: GuideId, text: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = text,
            None => self.entries.push((id, text)),
        }
    }

    pub fn get(&self, id: &GuideId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, text)| text.as_str())
    }

    pub fn contains(&self, id: &GuideId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GuideId, &str)> {
        self.entries.iter().map(|(id, text)| (id, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A registered guide whose source file was not found on disk.
#[derive(Debug, Clone)]
pub struct SkippedGuide {
    pub id: GuideId,
    pub path: PathBuf,
}

/// Result of content assembly: the content map plus non-fatal skips.
#[derive(Debug)]
pub struct Assembled {
    pub content: ContentMap,
    pub skipped: Vec<SkippedGuide>,
}

/// Errors that can occur during content assembly.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read guide {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read every registered guide relative to `base_dir` and build the
/// content map.
///
/// A missing file is a warning, not a failure: the guide is recorded in
/// `skipped` and omitted from the map, and assembly continues. Any other
/// read error aborts.
pub fn assemble(registry: &GuideRegistry, base_dir: &Path) -> Result<Assembled, ContentError> {
    let mut content = ContentMap::default();
    let mut skipped = Vec::new();

    for (kind, entry) in registry.entries() {
        let id = kind.guide_id(&entry.relative_path);
        let path = base_dir.join(&entry.relative_path);

        match fs::read_to_string(&path) {
            Ok(text) => content.insert(id, escape_embedded(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("guide not found, skipping: {}", path.display());
                skipped.push(SkippedGuide { id, path });
            }
            Err(source) => return Err(ContentError::Read { path, source }),
        }
    }

    Ok(Assembled { content, skipped })
}
