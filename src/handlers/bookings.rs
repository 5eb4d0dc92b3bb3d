//! Form posts from the Bookings view. Every submission leaves a flash
//! message in the session and redirects back to `/bookings`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Redirect, Response};
use axum::Form;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{BookingAction, RoomType};
use crate::services::booking_store::ActionOutcome;
use crate::services::sessions::Flash;
use crate::state::AppState;

use super::session;

// POST /bookings
#[derive(Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub guest: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub notes: String,
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{field} date must be a valid date (YYYY-MM-DD)."))
}

fn parse_stay(form: &BookingForm) -> Result<(NaiveDate, NaiveDate, RoomType), String> {
    let check_in = parse_date("Check-in", &form.check_in)?;
    let check_out = parse_date("Check-out", &form.check_out)?;
    let room_type = RoomType::parse(&form.room_type)
        .ok_or_else(|| format!("Unknown room type: {}", form.room_type.trim()))?;
    Ok((check_in, check_out, room_type))
}

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<BookingForm>,
) -> Response {
    let handle = session::resolve(&state, &headers);
    let stay = parse_stay(&form);

    state.sessions.with_session(handle.id, |s| {
        let flash = match stay {
            Err(message) => Flash::error(message),
            Ok((check_in, check_out, room_type)) => {
                match s
                    .bookings
                    .add(&form.guest, check_in, check_out, room_type, &form.notes)
                {
                    Ok(index) => {
                        tracing::info!(session = %handle.id, index, "booking added");
                        Flash::success("Booking added successfully!")
                    }
                    Err(e) => {
                        tracing::debug!(session = %handle.id, error = %e, "booking rejected");
                        Flash::error(e.to_string())
                    }
                }
            }
        };
        s.flash = Some(flash);
    });

    session::attach(&state, handle, Redirect::to("/bookings"))
}

// POST /bookings/action
#[derive(Deserialize)]
pub struct ActionForm {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub action: String,
}

pub async fn submit_action(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<ActionForm>,
) -> Response {
    let handle = session::resolve(&state, &headers);

    let action = match BookingAction::parse_choice(&form.action) {
        Ok(Some(action)) => action,
        // "None" just refreshes the page.
        Ok(None) => return session::attach(&state, handle, Redirect::to("/bookings")),
        Err(message) => {
            state
                .sessions
                .with_session(handle.id, |s| s.flash = Some(Flash::error(message)));
            return session::attach(&state, handle, Redirect::to("/bookings"));
        }
    };

    state.sessions.with_session(handle.id, |s| {
        let flash = match form.index.trim().parse::<i64>() {
            Err(_) => Flash::error("Booking index must be a whole number."),
            Ok(raw) => {
                let result = s
                    .bookings
                    .resolve_index(raw)
                    .and_then(|index| s.bookings.apply_action(index, action));
                match result {
                    Ok(ActionOutcome::Deleted(booking)) => {
                        tracing::info!(session = %handle.id, guest = %booking.guest, "booking deleted");
                        Flash::success(format!("Deleted booking for {}", booking.guest))
                    }
                    Ok(ActionOutcome::StatusChanged { index, status }) => {
                        tracing::info!(
                            session = %handle.id,
                            index,
                            status = status.as_str(),
                            "booking status updated"
                        );
                        Flash::success("Status updated.")
                    }
                    Err(e) => {
                        tracing::debug!(session = %handle.id, error = %e, "booking action rejected");
                        Flash::error(e.to_string())
                    }
                }
            }
        };
        s.flash = Some(flash);
    });

    session::attach(&state, handle, Redirect::to("/bookings"))
}
