use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use chrono::Local;

use crate::services::trend::{self, TREND_POINTS};
use crate::state::AppState;
use crate::views;

use super::session;

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], views::STYLE_CSS)
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let series = trend::random_series(&mut rand::thread_rng(), TREND_POINTS);
    let chart = trend::render_svg(&series, 600, 200);
    Html(views::dashboard_page(&state.config.hotel_name, &chart))
}

// GET /bookings
pub async fn bookings(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let handle = session::resolve(&state, &headers);

    let (bookings, flash) = state.sessions.with_session(handle.id, |s| {
        (s.bookings.list().to_vec(), s.take_flash())
    });

    let html = views::bookings_page(
        &state.config.hotel_name,
        &bookings,
        flash.as_ref(),
        Local::now().date_naive(),
    );
    session::attach(&state, handle, Html(html))
}

pub async fn rooms(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::rooms_page(&state.config.hotel_name))
}

pub async fn customers(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::customers_page(&state.config.hotel_name))
}

pub async fn staff(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::staff_page(&state.config.hotel_name))
}
