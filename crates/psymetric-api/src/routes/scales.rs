use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::scale::{ScaleDefinition, TargetPopulation};
use psymetric_scoring::aggregate::result_subscales;
use psymetric_scoring::store::ScoringStore;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ScaleSummary {
    id: String,
    name: String,
    population: TargetPopulation,
    estimated_minutes: u32,
    item_count: usize,
}

#[derive(Serialize)]
pub struct ScaleDetail {
    #[serde(flatten)]
    definition: ScaleDefinition,
    subscales: Vec<String>,
    cut_points: Vec<CutPointRecord>,
}

pub async fn list_scales(State(state): State<AppState>) -> Result<Json<Vec<ScaleSummary>>, ApiError> {
    let scales = state
        .store
        .scales()?
        .into_iter()
        .map(|scale| ScaleSummary {
            item_count: scale.items.len(),
            id: scale.id,
            name: scale.name,
            population: scale.population,
            estimated_minutes: scale.estimated_minutes,
        })
        .collect();
    Ok(Json(scales))
}

pub async fn get_scale(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScaleDetail>, ApiError> {
    let definition = state.store.scale(&id)?;
    let cut_points = state.store.scale_cut_points(&id)?;
    let subscales = result_subscales(&definition)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(ScaleDetail {
        definition,
        subscales,
        cut_points,
    }))
}
