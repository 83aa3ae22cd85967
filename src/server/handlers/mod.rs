pub mod distance;
pub mod routes;
