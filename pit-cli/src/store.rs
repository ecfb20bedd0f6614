//! Local persistence for drafts and saved assessments.
//!
//! The presentation layer owns this store; the calculators in `pit-core`
//! never read or write it. The store keeps at most one draft (the last form
//! the user worked on) and an append-only list of saved assessments.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pit_core::{Regime, TaxAssessment};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::TaxForm;

/// Errors that can occur reading or writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store contains invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An assessment the user chose to keep, with the regime it was computed
/// under and the headline figures alongside the full result payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAssessment {
    pub regime: Regime,
    pub total_tax: Decimal,
    pub after_tax_income: Decimal,
    pub assessment: TaxAssessment,
    pub saved_at: DateTime<Utc>,
}

impl SavedAssessment {
    pub fn new(regime: Regime, assessment: TaxAssessment) -> Self {
        Self {
            regime,
            total_tax: assessment.total_tax,
            after_tax_income: assessment.after_tax_income,
            assessment,
            saved_at: Utc::now(),
        }
    }
}

/// Interface the presentation layer programs against.
pub trait DraftStore {
    fn load_draft(&self) -> Result<Option<TaxForm>, StoreError>;
    fn save_draft(&self, form: &TaxForm) -> Result<(), StoreError>;
    fn save_assessment(&self, saved: &SavedAssessment) -> Result<(), StoreError>;
    fn list_assessments(&self) -> Result<Vec<SavedAssessment>, StoreError>;
}

/// Everything the store holds, as one JSON document on disk.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoreDocument {
    draft: Option<TaxForm>,
    assessments: Vec<SavedAssessment>,
}

/// A [`DraftStore`] backed by a single JSON file.
///
/// A missing file reads as an empty store; the file is created on first
/// write. Writes are whole-document read-modify-write, which is fine for a
/// single-user local estimator.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<StoreDocument, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoreDocument::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_document(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl DraftStore for JsonFileStore {
    fn load_draft(&self) -> Result<Option<TaxForm>, StoreError> {
        Ok(self.read_document()?.draft)
    }

    fn save_draft(&self, form: &TaxForm) -> Result<(), StoreError> {
        let mut doc = self.read_document()?;
        doc.draft = Some(form.clone());
        self.write_document(&doc)
    }

    fn save_assessment(&self, saved: &SavedAssessment) -> Result<(), StoreError> {
        let mut doc = self.read_document()?;
        doc.assessments.push(saved.clone());
        self.write_document(&doc)
    }

    fn list_assessments(&self) -> Result<Vec<SavedAssessment>, StoreError> {
        Ok(self.read_document()?.assessments)
    }
}
