use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{Route, RouteDetail, RouteDraft, RouteSummary};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(draft): Json<RouteDraft>,
) -> Result<Json<Route>, Error> {
    let route = api.create_route(user, draft).await?;

    Ok(route.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    user: User,
) -> Result<Json<Vec<RouteSummary>>, Error> {
    let routes = api.list_routes(user).await?;

    Ok(routes.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    user: User,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteDetail>, Error> {
    let route = api.find_route(user, id).await?;

    Ok(route.into())
}
