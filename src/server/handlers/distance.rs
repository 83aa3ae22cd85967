use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::entities::WaypointDraft;
use crate::error::Error;
use crate::geo::format_distance;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct MeasureParams {
    #[serde(default)]
    waypoints: Vec<WaypointDraft>,
}

#[derive(Serialize, Deserialize)]
pub struct Measurement {
    total_distance: f64,
    display: String,
}

pub async fn measure(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(params): Json<MeasureParams>,
) -> Result<Json<Measurement>, Error> {
    let total_distance = api.measure_distance(user, params.waypoints).await?;

    Ok(Measurement {
        total_distance,
        display: format_distance(total_distance),
    }
    .into())
}
