use crate::data_model::target::{SavedTarget, TargetPatch, TargetRecord, ValidationError};
use tracing::warn;

/// Ordered list of saved pings. Indices are positions in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedTargets {
    entries: Vec<SavedTarget>,
}

impl SavedTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates records read from disk; entries that fail are dropped.
    pub fn from_records(records: &[TargetRecord]) -> Self {
        let entries = records
            .iter()
            .filter_map(|record| match SavedTarget::from_record(record) {
                Ok(saved) => Some(saved),
                Err(err) => {
                    warn!(name = %record.name, error = %err, "dropping invalid saved ping");
                    None
                }
            })
            .collect();
        Self { entries }
    }

    pub fn to_records(&self) -> Vec<TargetRecord> {
        self.entries.iter().map(SavedTarget::to_record).collect()
    }

    /// Appends a new entry and returns its index.
    pub fn create(&mut self, record: &TargetRecord) -> Result<usize, ValidationError> {
        let saved = SavedTarget::from_record(record)?;
        self.entries.push(saved);
        Ok(self.entries.len() - 1)
    }

    pub fn edit(&mut self, index: usize, patch: &TargetPatch) -> Result<&SavedTarget, ValidationError> {
        let current = self.checked(index)?;
        let updated = current.apply(patch)?;
        self.entries[index] = updated;
        Ok(&self.entries[index])
    }

    pub fn delete(&mut self, index: usize) -> Result<SavedTarget, ValidationError> {
        self.checked(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn list(&self) -> &[SavedTarget] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SavedTarget> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn checked(&self, index: usize) -> Result<&SavedTarget, ValidationError> {
        self.entries
            .get(index)
            .ok_or(ValidationError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }
}
