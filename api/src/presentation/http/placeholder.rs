use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BusStatusResp {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn banner() -> &'static str {
    "SmartBusFlow Backend Running!"
}

pub async fn bus_info() -> Json<BusStatusResp> {
    Json(BusStatusResp {
        status: "online",
        message: "Bus tracking API coming soon",
    })
}

/// Two-route stand-in API served by the `placeholder` binary.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/api/bus", get(bus_info))
}
