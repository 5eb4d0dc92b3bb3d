use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::catalog;
use crate::models::{Booking, BookingAction, RoomType};
use crate::services::booking_store::ActionOutcome;
use crate::services::export::bookings_csv;
use crate::services::trend::{self, TREND_POINTS};
use crate::state::AppState;

use super::session;

fn bad_request(message: String) -> AppError {
    tracing::debug!(error = %message, "rejected api request");
    AppError::BadRequest(message)
}

#[derive(Serialize)]
pub struct BookingResponse {
    index: usize,
    #[serde(flatten)]
    booking: Booking,
}

// GET /api/bookings
pub async fn list_bookings(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let handle = session::resolve(&state, &headers);

    let response: Vec<BookingResponse> = state.sessions.with_session(handle.id, |s| {
        s.bookings
            .list()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, booking)| BookingResponse { index, booking })
            .collect()
    });

    session::attach(&state, handle, Json(response))
}

// POST /api/bookings
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub guest: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: RoomType,
    pub notes: Option<String>,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Response {
    let handle = session::resolve(&state, &headers);
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return session::attach(&state, handle, bad_request(rejection.body_text()));
        }
    };

    let result = state.sessions.with_session(handle.id, |s| {
        let index = s.bookings.add(
            &body.guest,
            body.check_in,
            body.check_out,
            body.room_type,
            body.notes.as_deref().unwrap_or(""),
        )?;
        let booking = s.bookings.list()[index].clone();
        Ok::<_, AppError>(BookingResponse { index, booking })
    });

    let result = result.map(|created| {
        tracing::info!(session = %handle.id, index = created.index, "booking added via api");
        (StatusCode::CREATED, Json(created))
    });
    session::attach(&state, handle, result)
}

// POST /api/bookings/:index/action
#[derive(Deserialize)]
pub struct ActionRequest {
    pub action: BookingAction,
}

pub async fn apply_action(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ActionRequest>, JsonRejection>,
) -> Response {
    let handle = session::resolve(&state, &headers);
    let index = match path {
        Ok(Path(index)) => index,
        Err(rejection) => {
            return session::attach(&state, handle, bad_request(rejection.body_text()));
        }
    };
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return session::attach(&state, handle, bad_request(rejection.body_text()));
        }
    };

    let result = state.sessions.with_session(handle.id, |s| {
        let index = s.bookings.resolve_index(index)?;
        let outcome = s.bookings.apply_action(index, body.action)?;
        Ok::<_, AppError>(outcome)
    });

    let result = result.map(|outcome| {
        tracing::info!(session = %handle.id, action = body.action.as_str(), "booking action via api");
        match outcome {
            ActionOutcome::Deleted(booking) => Json(serde_json::json!({
                "ok": true,
                "deleted": booking,
            })),
            ActionOutcome::StatusChanged { index, status } => Json(serde_json::json!({
                "ok": true,
                "index": index,
                "status": status,
            })),
        }
    });
    session::attach(&state, handle, result)
}

// GET /api/bookings/export.csv
pub async fn export_csv(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let handle = session::resolve(&state, &headers);
    let csv = state
        .sessions
        .with_session(handle.id, |s| bookings_csv(s.bookings.list()));

    let result = csv
        .map(|csv| {
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"bookings.csv\"",
                    ),
                ],
                csv,
            )
        })
        .map_err(|e| {
            tracing::error!(error = %e, "failed to export bookings");
            AppError::from(e)
        });
    session::attach(&state, handle, result)
}

// GET /api/dashboard
pub async fn dashboard() -> impl IntoResponse {
    let series = trend::random_series(&mut rand::thread_rng(), TREND_POINTS);
    Json(serde_json::json!({
        "metrics": catalog::METRICS,
        "recent_bookings": catalog::RECENT_BOOKINGS,
        "trend": series,
    }))
}
