//! Template stores.

use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::{TemplateRecord, TemplateStore};
use crate::error::{Error, Result};

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("NON_SLUG is a valid static regex"));

/// Derive a file-safe id from a template name plus a random suffix.
fn new_record_id(name: &str) -> String {
    let lowered = name.to_lowercase();
    let slug = NON_SLUG.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "template" } else { slug };
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", slug, &suffix[..8])
}

fn check_record_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::Store(format!("Invalid template id: {:?}", id)))
    }
}

/// Stores each record as `<id>.json` in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        check_record_id(id)?;
        Ok(self.root.join(format!("{}.json", id)))
    }

    fn write(&self, record: &TemplateRecord) -> Result<()> {
        let id = record
            .id
            .as_deref()
            .ok_or_else(|| Error::Store("Record has no id".into()))?;
        let path = self.path_for(id)?;
        fs::write(&path, serde_json::to_string_pretty(record)?)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    /// All stored records, ordered by id.
    pub fn list(&self) -> Result<Vec<TemplateRecord>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read_to_string(&path)?;
            records.push(serde_json::from_str::<TemplateRecord>(&data)?);
        }
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }
}

impl TemplateStore for FileStore {
    fn fetch(&self, id: &str) -> Result<TemplateRecord> {
        let path = self.path_for(id)?;
        let data = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::Store(format!("Template not found: {}", id)),
            _ => Error::Io(e),
        })?;
        Ok(serde_json::from_str(&data)?)
    }

    fn create(&mut self, name: &str, html: &str) -> Result<TemplateRecord> {
        let record = TemplateRecord::html(name, html).with_id(new_record_id(name));
        self.write(&record)?;
        Ok(record)
    }

    fn update(&mut self, id: &str, name: &str, html: &str) -> Result<TemplateRecord> {
        let existing = self.fetch(id)?;
        let mut record = TemplateRecord::html(name, html).with_id(id);
        record.thumbnail_url = existing.thumbnail_url;
        self.write(&record)?;
        Ok(record)
    }
}

/// Keeps records in memory. Useful for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, TemplateRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record as-is, assigning an id if it has none.
    pub fn insert(&mut self, mut record: TemplateRecord) -> String {
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| new_record_id(&record.name));
        record.id = Some(id.clone());
        self.records.insert(id.clone(), record);
        id
    }
}

impl TemplateStore for MemoryStore {
    fn fetch(&self, id: &str) -> Result<TemplateRecord> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Store(format!("Template not found: {}", id)))
    }

    fn create(&mut self, name: &str, html: &str) -> Result<TemplateRecord> {
        let record = TemplateRecord::html(name, html).with_id(new_record_id(name));
        self.insert(record.clone());
        Ok(record)
    }

    fn update(&mut self, id: &str, name: &str, html: &str) -> Result<TemplateRecord> {
        let slot = self
            .records
            .get_mut(id)
            .ok_or_else(|| Error::Store(format!("Template not found: {}", id)))?;
        slot.name = name.to_string();
        slot.content = html.to_string();
        slot.content_type = crate::detect::ContentKind::Html;
        Ok(slot.clone())
    }
}
