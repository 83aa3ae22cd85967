use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    Executor, Pool, Postgres, Row,
};
use uuid::Uuid;

use super::RouteStore;
use crate::{
    entities::{Route, RouteSummary, Waypoint},
    error::Error,
};

pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    #[tracing::instrument(name = "PgStore::new", skip_all)]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        // idempotent; existing tables are left untouched
        pool.execute(
            "CREATE TABLE IF NOT EXISTS routes (
                id UUID PRIMARY KEY,
                name VARCHAR NOT NULL,
                total_distance DOUBLE PRECISION NOT NULL,
                user_id UUID,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .await?;
        pool.execute(
            "CREATE TABLE IF NOT EXISTS waypoints (
                id UUID PRIMARY KEY,
                route_id UUID NOT NULL,
                latitude DOUBLE PRECISION NOT NULL,
                longitude DOUBLE PRECISION NOT NULL,
                order_index INT4 NOT NULL CHECK (order_index > 0),
                CONSTRAINT fk_waypoint_route FOREIGN KEY(route_id) REFERENCES routes(id) ON DELETE CASCADE,
                CONSTRAINT uq_waypoint_order UNIQUE (route_id, order_index)
            )",
        )
        .await?;

        tracing::info!("route tables ready");

        Ok(Self { pool })
    }
}

fn route_from_row(row: &PgRow) -> Result<Route, sqlx::Error> {
    Ok(Route {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        total_distance: row.try_get("total_distance")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
    })
}

fn waypoint_from_row(row: &PgRow) -> Result<Waypoint, sqlx::Error> {
    Ok(Waypoint {
        id: row.try_get("id")?,
        route_id: row.try_get("route_id")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        order_index: row.try_get("order_index")?,
    })
}

#[async_trait]
impl RouteStore for PgStore {
    #[tracing::instrument(skip(self, route, waypoints), fields(route_id = %route.id))]
    async fn insert_route(&self, route: &Route, waypoints: &[Waypoint]) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        tx.execute(
            sqlx::query(
                "INSERT INTO routes (id, name, total_distance, user_id, created_at) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(route.id)
            .bind(route.name.as_str())
            .bind(route.total_distance)
            .bind(route.user_id)
            .bind(route.created_at),
        )
        .await?;

        for waypoint in waypoints {
            tx.execute(
                sqlx::query(
                    "INSERT INTO waypoints (id, route_id, latitude, longitude, order_index) VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(waypoint.id)
                .bind(waypoint.route_id)
                .bind(waypoint.latitude)
                .bind(waypoint.longitude)
                .bind(waypoint.order_index),
            )
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_routes(&self) -> Result<Vec<RouteSummary>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut results = conn.fetch(sqlx::query(
            "
            SELECT
                r.id, r.name, r.total_distance, r.user_id, r.created_at,
                (SELECT COUNT(*) FROM waypoints w WHERE w.route_id = r.id) AS waypoint_count
            FROM
                routes r
            ORDER BY
                r.created_at DESC
            ",
        ));

        let mut summaries = vec![];

        while let Some(row) = results.try_next().await? {
            summaries.push(RouteSummary {
                route: route_from_row(&row)?,
                waypoint_count: row.try_get("waypoint_count")?,
            });
        }

        Ok(summaries)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_route(&self, id: Uuid) -> Result<Option<Route>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query(
                    "SELECT id, name, total_distance, user_id, created_at FROM routes WHERE id = $1",
                )
                .bind(id),
            )
            .await?;

        match maybe_result {
            Some(row) => Ok(Some(route_from_row(&row)?)),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_waypoints(&self, route_id: Uuid) -> Result<Vec<Waypoint>, Error> {
        let mut conn = self.pool.acquire().await?;

        let results = conn
            .fetch_all(
                sqlx::query(
                    "SELECT id, route_id, latitude, longitude, order_index FROM waypoints WHERE route_id = $1 ORDER BY order_index",
                )
                .bind(route_id),
            )
            .await?;

        let mut waypoints = Vec::with_capacity(results.len());
        for row in results.iter() {
            waypoints.push(waypoint_from_row(row)?);
        }

        Ok(waypoints)
    }
}
