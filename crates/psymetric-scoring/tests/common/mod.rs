#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use psymetric_core::models::administration::{Administration, Respondent};
use psymetric_core::models::cut_point::{CutPointRecord, ScoreRange};
use psymetric_core::models::norms::NormativeRecord;
use psymetric_core::models::response::ItemResponse;
use psymetric_core::models::result::SubscaleResult;
use psymetric_core::models::scale::{
    ItemDefinition, ResponseType, ScaleDefinition, TargetPopulation, TotalPolicy,
};
use psymetric_scoring::Instrument;
use psymetric_scoring::error::ScoringError;
use psymetric_scoring::normalize::score_item;
use psymetric_scoring::store::ScoringStore;

pub fn now() -> jiff::Timestamp {
    "2024-03-01T10:00:00Z".parse().unwrap()
}

pub fn likert4_scale(id: &str, items: &[(u32, bool, Option<&str>)], policy: TotalPolicy) -> ScaleDefinition {
    ScaleDefinition {
        id: id.to_string(),
        name: id.to_uppercase(),
        population: TargetPopulation::All,
        estimated_minutes: 5,
        total_policy: policy,
        description: None,
        items: items
            .iter()
            .map(|(sequence, inverted, subscale)| ItemDefinition {
                sequence: *sequence,
                text: format!("item {sequence}"),
                response_type: ResponseType::Likert4,
                inverted: *inverted,
                subscale: subscale.map(str::to_string),
            })
            .collect(),
    }
}

pub fn cut_point(scale_id: &str, subscale: &str, min: f64, max: f64, label: &str, alert: bool) -> CutPointRecord {
    CutPointRecord {
        scale_id: scale_id.to_string(),
        subscale: subscale.to_string(),
        range: ScoreRange { min, max },
        label: label.to_string(),
        description: format!("{label} range"),
        alert,
    }
}

/// In-memory collaborator for exercising the assembler.
#[derive(Default)]
pub struct FixtureStore {
    pub scales: Mutex<HashMap<String, ScaleDefinition>>,
    pub administrations: Mutex<HashMap<Uuid, Administration>>,
    pub responses: Mutex<Vec<ItemResponse>>,
    pub norms: Mutex<Vec<NormativeRecord>>,
    pub cut_points: Mutex<Vec<CutPointRecord>>,
    pub results: Mutex<HashMap<Uuid, Vec<SubscaleResult>>>,
    lock: Arc<Mutex<()>>,
}

impl FixtureStore {
    pub fn with_scale(scale: ScaleDefinition) -> Self {
        let store = Self::default();
        store.scales.lock().unwrap().insert(scale.id.clone(), scale);
        store
    }

    pub fn with_instrument(instrument: &dyn Instrument) -> Self {
        let store = Self::with_scale(instrument.definition().clone());
        store
            .cut_points
            .lock()
            .unwrap()
            .extend(instrument.cut_points().iter().cloned());
        store
    }

    pub fn open(&self, scale_id: &str) -> Administration {
        let administration = Administration::new(scale_id, Respondent::default(), now());
        self.administrations
            .lock()
            .unwrap()
            .insert(administration.id, administration.clone());
        administration
    }

    pub fn answer(&self, administration: &Administration, sequence: u32, raw: &str) {
        let scale = self.scales.lock().unwrap()[&administration.scale_id].clone();
        let score = scale
            .item(sequence)
            .map(|item| score_item(item, raw).unwrap())
            .unwrap_or(0.0);
        self.responses.lock().unwrap().push(ItemResponse {
            administration_id: administration.id,
            scale_id: administration.scale_id.clone(),
            item_sequence: sequence,
            raw_answer: raw.to_string(),
            score,
            answered_at: now(),
        });
    }

    pub fn answer_all(&self, administration: &Administration, raw: &str) {
        let scale = self.scales.lock().unwrap()[&administration.scale_id].clone();
        for item in &scale.items {
            self.answer(administration, item.sequence, raw);
        }
    }

    pub fn stored_results(&self, administration_id: Uuid) -> Option<Vec<SubscaleResult>> {
        self.results.lock().unwrap().get(&administration_id).cloned()
    }
}

impl ScoringStore for FixtureStore {
    fn scale(&self, scale_id: &str) -> Result<ScaleDefinition, ScoringError> {
        self.scales
            .lock()
            .unwrap()
            .get(scale_id)
            .cloned()
            .ok_or_else(|| ScoringError::UnknownScale(scale_id.to_string()))
    }

    fn administration(&self, administration_id: Uuid) -> Result<Administration, ScoringError> {
        self.administrations
            .lock()
            .unwrap()
            .get(&administration_id)
            .cloned()
            .ok_or(ScoringError::UnknownAdministration(administration_id))
    }

    fn responses(&self, administration_id: Uuid) -> Result<Vec<ItemResponse>, ScoringError> {
        Ok(self
            .responses
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.administration_id == administration_id)
            .cloned()
            .collect())
    }

    fn normative_records(&self, scale_id: &str, subscale: &str) -> Result<Vec<NormativeRecord>, ScoringError> {
        Ok(self
            .norms
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.scale_id == scale_id && r.subscale == subscale)
            .cloned()
            .collect())
    }

    fn cut_points(&self, scale_id: &str, subscale: &str) -> Result<Vec<CutPointRecord>, ScoringError> {
        Ok(self
            .cut_points
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.scale_id == scale_id && r.subscale == subscale)
            .cloned()
            .collect())
    }

    fn replace_results(&self, administration_id: Uuid, results: &[SubscaleResult]) -> Result<(), ScoringError> {
        self.results
            .lock()
            .unwrap()
            .insert(administration_id, results.to_vec());
        Ok(())
    }

    fn commit_completion(
        &self,
        administration: &Administration,
        results: &[SubscaleResult],
    ) -> Result<(), ScoringError> {
        self.administrations
            .lock()
            .unwrap()
            .insert(administration.id, administration.clone());
        self.replace_results(administration.id, results)
    }

    fn administration_lock(&self, _administration_id: Uuid) -> Result<Arc<Mutex<()>>, ScoringError> {
        Ok(Arc::clone(&self.lock))
    }
}
