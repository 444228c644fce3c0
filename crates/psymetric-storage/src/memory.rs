use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};
use uuid::Uuid;

use psymetric_core::models::administration::{Administration, Respondent};
use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::norms::NormativeRecord;
use psymetric_core::models::response::ItemResponse;
use psymetric_core::models::result::SubscaleResult;
use psymetric_core::models::scale::ScaleDefinition;
use psymetric_scoring::Instrument;
use psymetric_scoring::cut_points::validate_cut_points;
use psymetric_scoring::error::ScoringError;
use psymetric_scoring::normalize::score_item;
use psymetric_scoring::store::ScoringStore;
use psymetric_scoring::validate::{AnswerError, validate_answers, validate_scale};

use crate::catalog::{CURRENT_VERSION, Catalog, ScaleRecord};
use crate::error::StorageError;

/// Process-local store for reference data, administrations, answers and
/// results.
///
/// Answer recording and completion of one administration are serialized
/// through a per-administration lock.
#[derive(Default)]
pub struct MemoryStore {
    scales: RwLock<HashMap<String, ScaleDefinition>>,
    administrations: RwLock<HashMap<Uuid, Administration>>,
    responses: RwLock<HashMap<Uuid, Vec<ItemResponse>>>,
    norms: RwLock<Vec<NormativeRecord>>,
    cut_points: RwLock<Vec<CutPointRecord>>,
    results: RwLock<HashMap<Uuid, Vec<SubscaleResult>>>,
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

/// Outcome of a batch answer submission.
#[derive(Debug)]
pub enum BatchOutcome {
    Recorded(Vec<ItemResponse>),
    Rejected(Vec<AnswerError>),
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: Catalog) -> Result<Self, StorageError> {
        let store = Self::new();
        store.install_catalog(catalog)?;
        Ok(store)
    }

    /// Install catalog contents. Everything is validated before anything
    /// is written.
    pub fn install_catalog(&self, catalog: Catalog) -> Result<(), StorageError> {
        let scales = catalog
            .scales
            .into_iter()
            .map(ScaleRecord::into_definition)
            .collect::<Result<Vec<_>, _>>()?;
        validate_cut_points(&catalog.cut_points)?;

        let known = |scale_id: &str| -> Result<bool, StorageError> {
            Ok(scales.iter().any(|s| s.id == scale_id) || read(&self.scales)?.contains_key(scale_id))
        };
        for record in &catalog.norms {
            if !known(&record.scale_id)? {
                return Err(StorageError::InvalidCatalog(format!(
                    "normative record {} references unknown scale '{}'",
                    record.id, record.scale_id
                )));
            }
        }
        for record in &catalog.cut_points {
            if !known(&record.scale_id)? {
                return Err(StorageError::InvalidCatalog(format!(
                    "cut-point '{}' references unknown scale '{}'",
                    record.label, record.scale_id
                )));
            }
        }

        {
            let installed = read(&self.scales)?;
            for scale in &scales {
                if self.replaces_scale_in_use(&installed, scale)? {
                    return Err(StorageError::ScaleInUse(scale.id.clone()));
                }
            }
        }

        for scale in scales {
            self.insert_scale(scale)?;
        }
        write(&self.norms)?.extend(catalog.norms);
        self.insert_cut_points(catalog.cut_points)?;
        Ok(())
    }

    pub fn install_instrument(&self, instrument: &dyn Instrument) -> Result<(), StorageError> {
        self.insert_scale(instrument.definition().clone())?;
        self.insert_cut_points(instrument.cut_points().to_vec())?;
        debug!(scale_id = instrument.id(), "instrument installed");
        Ok(())
    }

    /// Add or replace a scale. A scale with administrations may only be
    /// re-inserted unchanged.
    pub fn insert_scale(&self, scale: ScaleDefinition) -> Result<(), StorageError> {
        validate_scale(&scale)?;
        let mut scales = write(&self.scales)?;
        if self.replaces_scale_in_use(&scales, &scale)? {
            return Err(StorageError::ScaleInUse(scale.id));
        }
        scales.insert(scale.id.clone(), scale);
        Ok(())
    }

    pub fn insert_normative_record(&self, record: NormativeRecord) -> Result<(), StorageError> {
        if !read(&self.scales)?.contains_key(&record.scale_id) {
            return Err(StorageError::ScaleNotFound(record.scale_id));
        }
        write(&self.norms)?.push(record);
        Ok(())
    }

    /// Install cut-points. Bands for a (scale, subscale) pair present in
    /// `records` replace the bands previously stored for that pair.
    pub fn insert_cut_points(&self, records: Vec<CutPointRecord>) -> Result<(), StorageError> {
        let mut stored = write(&self.cut_points)?;
        let mut combined: Vec<CutPointRecord> = stored
            .iter()
            .filter(|old| {
                !records
                    .iter()
                    .any(|new| new.scale_id == old.scale_id && new.subscale == old.subscale)
            })
            .cloned()
            .collect();
        combined.extend(records);
        validate_cut_points(&combined)?;
        *stored = combined;
        Ok(())
    }

    /// The installed reference data as a catalog, ready for `save_catalog`.
    pub fn export_catalog(&self) -> Result<Catalog, StorageError> {
        Ok(Catalog {
            catalog_version: CURRENT_VERSION,
            scales: self.scales()?.iter().map(ScaleRecord::from).collect(),
            norms: read(&self.norms)?.clone(),
            cut_points: read(&self.cut_points)?.clone(),
        })
    }

    /// Every scale, ordered by id.
    pub fn scales(&self) -> Result<Vec<ScaleDefinition>, StorageError> {
        let mut scales: Vec<ScaleDefinition> = read(&self.scales)?.values().cloned().collect();
        scales.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(scales)
    }

    /// Every cut-point of a scale, across subscales.
    pub fn scale_cut_points(&self, scale_id: &str) -> Result<Vec<CutPointRecord>, StorageError> {
        Ok(read(&self.cut_points)?
            .iter()
            .filter(|r| r.scale_id == scale_id)
            .cloned()
            .collect())
    }

    pub fn create_administration(
        &self,
        scale_id: &str,
        respondent: Respondent,
        now: jiff::Timestamp,
    ) -> Result<Administration, StorageError> {
        if !read(&self.scales)?.contains_key(scale_id) {
            return Err(StorageError::ScaleNotFound(scale_id.to_string()));
        }
        let administration = Administration::new(scale_id, respondent, now);
        write(&self.administrations)?.insert(administration.id, administration.clone());
        info!(administration_id = %administration.id, scale_id, "administration created");
        Ok(administration)
    }

    /// Record (or re-record) the answer to one item. The answer is scored
    /// immediately, so invalid answers are rejected here.
    pub fn record_response(
        &self,
        administration_id: Uuid,
        item_sequence: u32,
        raw_answer: &str,
        now: jiff::Timestamp,
    ) -> Result<ItemResponse, StorageError> {
        let lock = self.lock_for(administration_id)?;
        let _guard = lock.lock().map_err(|_| StorageError::LockPoisoned)?;

        let (administration, scale) = self.open_administration(administration_id)?;
        self.record_locked(&administration, &scale, item_sequence, raw_answer, now)
    }

    /// Record several answers at once. Nothing is recorded unless every
    /// answer is valid.
    pub fn record_responses(
        &self,
        administration_id: Uuid,
        answers: &[(u32, String)],
        now: jiff::Timestamp,
    ) -> Result<BatchOutcome, StorageError> {
        let lock = self.lock_for(administration_id)?;
        let _guard = lock.lock().map_err(|_| StorageError::LockPoisoned)?;

        let (administration, scale) = self.open_administration(administration_id)?;
        let errors = validate_answers(&scale, answers);
        if !errors.is_empty() {
            return Ok(BatchOutcome::Rejected(errors));
        }

        let mut recorded = Vec::with_capacity(answers.len());
        for (sequence, answer) in answers {
            recorded.push(self.record_locked(&administration, &scale, *sequence, answer, now)?);
        }
        Ok(BatchOutcome::Recorded(recorded))
    }

    pub fn administration_responses(&self, administration_id: Uuid) -> Result<Vec<ItemResponse>, StorageError> {
        Ok(read(&self.responses)?
            .get(&administration_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Stored results; empty until the administration has been completed.
    pub fn results(&self, administration_id: Uuid) -> Result<Vec<SubscaleResult>, StorageError> {
        if !read(&self.administrations)?.contains_key(&administration_id) {
            return Err(StorageError::AdministrationNotFound(administration_id));
        }
        Ok(read(&self.results)?
            .get(&administration_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Whether installing `scale` would change a stored scale that already
    /// has administrations.
    fn replaces_scale_in_use(
        &self,
        installed: &HashMap<String, ScaleDefinition>,
        scale: &ScaleDefinition,
    ) -> Result<bool, StorageError> {
        let Some(existing) = installed.get(&scale.id) else {
            return Ok(false);
        };
        if existing == scale {
            return Ok(false);
        }
        Ok(read(&self.administrations)?
            .values()
            .any(|a| a.scale_id == scale.id))
    }

    fn open_administration(
        &self,
        administration_id: Uuid,
    ) -> Result<(Administration, ScaleDefinition), StorageError> {
        let administration = read(&self.administrations)?
            .get(&administration_id)
            .cloned()
            .ok_or(StorageError::AdministrationNotFound(administration_id))?;
        if administration.is_completed() {
            return Err(StorageError::AdministrationCompleted(administration_id));
        }
        let scale = read(&self.scales)?
            .get(&administration.scale_id)
            .cloned()
            .ok_or_else(|| StorageError::ScaleNotFound(administration.scale_id.clone()))?;
        Ok((administration, scale))
    }

    fn record_locked(
        &self,
        administration: &Administration,
        scale: &ScaleDefinition,
        item_sequence: u32,
        raw_answer: &str,
        now: jiff::Timestamp,
    ) -> Result<ItemResponse, StorageError> {
        let item = scale
            .item(item_sequence)
            .ok_or_else(|| StorageError::UnknownItem {
                scale_id: scale.id.clone(),
                sequence: item_sequence,
            })?;
        let score = score_item(item, raw_answer)?;

        let response = ItemResponse {
            administration_id: administration.id,
            scale_id: scale.id.clone(),
            item_sequence,
            raw_answer: raw_answer.trim().to_string(),
            score,
            answered_at: now,
        };

        let mut responses = write(&self.responses)?;
        let answers = responses.entry(administration.id).or_default();
        match answers.iter_mut().find(|r| r.item_sequence == item_sequence) {
            Some(existing) => *existing = response.clone(),
            None => answers.push(response.clone()),
        }
        Ok(response)
    }

    fn lock_for(&self, administration_id: Uuid) -> Result<Arc<Mutex<()>>, StorageError> {
        let mut locks = self.locks.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(Arc::clone(locks.entry(administration_id).or_default()))
    }
}

impl ScoringStore for MemoryStore {
    fn scale(&self, scale_id: &str) -> Result<ScaleDefinition, ScoringError> {
        read(&self.scales)?
            .get(scale_id)
            .cloned()
            .ok_or_else(|| ScoringError::UnknownScale(scale_id.to_string()))
    }

    fn administration(&self, administration_id: Uuid) -> Result<Administration, ScoringError> {
        read(&self.administrations)?
            .get(&administration_id)
            .cloned()
            .ok_or(ScoringError::UnknownAdministration(administration_id))
    }

    fn responses(&self, administration_id: Uuid) -> Result<Vec<ItemResponse>, ScoringError> {
        Ok(self.administration_responses(administration_id)?)
    }

    fn normative_records(
        &self,
        scale_id: &str,
        subscale: &str,
    ) -> Result<Vec<NormativeRecord>, ScoringError> {
        Ok(read(&self.norms)?
            .iter()
            .filter(|r| r.scale_id == scale_id && r.subscale == subscale)
            .cloned()
            .collect())
    }

    fn cut_points(
        &self,
        scale_id: &str,
        subscale: &str,
    ) -> Result<Vec<CutPointRecord>, ScoringError> {
        Ok(read(&self.cut_points)?
            .iter()
            .filter(|r| r.scale_id == scale_id && r.subscale == subscale)
            .cloned()
            .collect())
    }

    fn replace_results(
        &self,
        administration_id: Uuid,
        results: &[SubscaleResult],
    ) -> Result<(), ScoringError> {
        write(&self.results)?.insert(administration_id, results.to_vec());
        Ok(())
    }

    fn commit_completion(
        &self,
        administration: &Administration,
        results: &[SubscaleResult],
    ) -> Result<(), ScoringError> {
        let mut administrations = write(&self.administrations)?;
        let mut stored = write(&self.results)?;
        administrations.insert(administration.id, administration.clone());
        stored.insert(administration.id, results.to_vec());
        Ok(())
    }

    fn administration_lock(&self, administration_id: Uuid) -> Result<Arc<Mutex<()>>, ScoringError> {
        Ok(self.lock_for(administration_id)?)
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StorageError> {
    lock.read().map_err(|_| StorageError::LockPoisoned)
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StorageError> {
    lock.write().map_err(|_| StorageError::LockPoisoned)
}
