use tracing::{debug, trace};

use crate::core::{CanonicalRecord, ExternalRecord, ItemKey, KeyAllocator, Variant};
use crate::error::PlotResult;
use crate::extensions::{
    Annotation, AnnotationAxis, GraphOptions, export_annotations, import_annotations,
};
use crate::normalize::{ExportTarget, canonicalize, denormalize_all};
use crate::validator::{InvalidItem, first_invalid};

use super::{PlotDocument, SessionConfig};

/// One editing session: the flat item list plus the key source for it.
///
/// Records are addressed by [`ItemKey`], which stays stable across reorders
/// and removals; list position is the render order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSession {
    config: SessionConfig,
    keys: KeyAllocator,
    records: Vec<CanonicalRecord>,
    annotations: Vec<Annotation>,
    options: GraphOptions,
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl PlotSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            keys: KeyAllocator::starting_at(config.first_key),
            records: Vec::new(),
            annotations: Vec::new(),
            options: GraphOptions::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Replaces the item list with imported records.
    ///
    /// All-or-nothing: on error the current list is left untouched.
    pub fn load(&mut self, data: &[ExternalRecord]) -> PlotResult<()> {
        let mut keys = self.keys.clone();
        let records = denormalize_all(data, &mut keys)?;
        self.keys = keys;
        self.records = records;
        debug!(count = self.records.len(), "loaded plot items");
        Ok(())
    }

    /// Replaces items, annotations and graph options from a document.
    ///
    /// All-or-nothing, like [`Self::load`].
    pub fn load_document(&mut self, document: &PlotDocument) -> PlotResult<()> {
        let mut keys = self.keys.clone();
        let records = denormalize_all(&document.data, &mut keys)?;
        let annotations = import_annotations(&document.annotations, &mut keys)?;
        self.keys = keys;
        self.records = records;
        self.annotations = annotations;
        self.options = GraphOptions::from_external(&document.options);
        debug!(
            count = self.records.len(),
            annotations = self.annotations.len(),
            "loaded plot document"
        );
        Ok(())
    }

    /// Appends a new item of `variant` at its defaults and returns its key.
    pub fn push_blank(&mut self, variant: Variant) -> PlotResult<ItemKey> {
        let key = self.keys.next_key()?;
        self.records.push(CanonicalRecord::blank(variant, key));
        trace!(key = key.raw(), variant = %variant, "pushed blank item");
        Ok(key)
    }

    /// Inserts a new default item at `index` (clamped to the list length).
    pub fn insert_blank(&mut self, index: usize, variant: Variant) -> PlotResult<ItemKey> {
        let key = self.keys.next_key()?;
        let index = index.min(self.records.len());
        self.records.insert(index, CanonicalRecord::blank(variant, key));
        trace!(key = key.raw(), index, variant = %variant, "inserted blank item");
        Ok(key)
    }

    pub fn remove(&mut self, key: ItemKey) -> Option<CanonicalRecord> {
        let index = self.position(key)?;
        trace!(key = key.raw(), index, "removed item");
        Some(self.records.remove(index))
    }

    /// Moves the item with `key` to `index` (clamped). Returns `false` when the
    /// key is unknown.
    pub fn move_to(&mut self, key: ItemKey, index: usize) -> bool {
        let Some(from) = self.position(key) else {
            return false;
        };
        let record = self.records.remove(from);
        let index = index.min(self.records.len());
        self.records.insert(index, record);
        true
    }

    #[must_use]
    pub fn position(&self, key: ItemKey) -> Option<usize> {
        self.records.iter().position(|record| record.key == key)
    }

    #[must_use]
    pub fn get(&self, key: ItemKey) -> Option<&CanonicalRecord> {
        self.records.iter().find(|record| record.key == key)
    }

    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut CanonicalRecord> {
        self.records.iter_mut().find(|record| record.key == key)
    }

    /// Returns `false` when the key is unknown.
    pub fn set_hidden(&mut self, key: ItemKey, hidden: bool) -> bool {
        match self.get_mut(key) {
            Some(record) => {
                record.hidden = hidden;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Adds an annotation line with a fresh key.
    pub fn push_annotation(
        &mut self,
        axis: AnnotationAxis,
        value: impl Into<String>,
        text: impl Into<String>,
    ) -> PlotResult<ItemKey> {
        let key = self.keys.next_key()?;
        self.annotations.push(Annotation {
            key,
            axis,
            value: value.into(),
            text: text.into(),
        });
        Ok(key)
    }

    pub fn remove_annotation(&mut self, key: ItemKey) -> Option<Annotation> {
        let index = self.annotations.iter().position(|item| item.key == key)?;
        Some(self.annotations.remove(index))
    }

    #[must_use]
    pub fn graph_options(&self) -> &GraphOptions {
        &self.options
    }

    pub fn graph_options_mut(&mut self) -> &mut GraphOptions {
        &mut self.options
    }

    #[must_use]
    pub fn validate(&self) -> Option<InvalidItem> {
        first_invalid(&self.records)
    }

    /// Exports to the configured target.
    pub fn export(&self) -> PlotResult<Vec<ExternalRecord>> {
        self.export_to(self.config.export_target)
    }

    pub fn export_to(&self, target: ExportTarget) -> PlotResult<Vec<ExternalRecord>> {
        canonicalize(&self.records, target)
    }

    /// Final export of the whole session.
    pub fn document(&self) -> PlotResult<PlotDocument> {
        Ok(PlotDocument {
            data: self.export_to(ExportTarget::Final)?,
            annotations: export_annotations(&self.annotations)?,
            options: self.options.to_external(),
        })
    }
}
