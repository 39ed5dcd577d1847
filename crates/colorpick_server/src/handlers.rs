//! Request handlers for the color form.
//!
//! # Responsibility
//! - Decode the form body and negotiate the page language per request.
//! - Run store I/O on the blocking pool and answer with an uncacheable page.
//!
//! # Invariants
//! - Every request to `/` answers with a full HTML page; form decoding
//!   problems surface as a validation message.

use crate::AppState;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Form;
use colorpick_core::{render_page, ColorRecord, FormError, Locale, PageState};
use log::{debug, error};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ColorForm {
    #[serde(default, alias = "tbTestColor")]
    color: String,
}

pub(crate) async fn show_color(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let locale = negotiate_locale(&state, &headers);
    let service = state.service.clone();

    let page = match tokio::task::spawn_blocking(move || service.show()).await {
        Ok(page) => page,
        Err(err) => {
            error!("event=color_show module=http status=error error={}", err);
            PageState {
                current: ColorRecord::default(),
                errors: Vec::new(),
                saved: false,
            }
        }
    };
    html_response(render_page(&page, locale).into_string())
}

pub(crate) async fn submit_color(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<ColorForm>, FormRejection>,
) -> Response {
    let locale = negotiate_locale(&state, &headers);
    let submitted = match form {
        Ok(Form(form)) => form.color,
        Err(rejection) => {
            debug!(
                "event=color_submit module=http status=bad_form error={}",
                rejection
            );
            String::new()
        }
    };
    let service = state.service.clone();

    let page = match tokio::task::spawn_blocking(move || service.submit(&submitted)).await {
        Ok(page) => page,
        Err(err) => {
            error!("event=color_submit module=http status=error error={}", err);
            PageState {
                current: ColorRecord::default(),
                errors: vec![FormError::Storage],
                saved: false,
            }
        }
    };
    html_response(render_page(&page, locale).into_string())
}

fn negotiate_locale(state: &AppState, headers: &HeaderMap) -> Locale {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    Locale::negotiate(accept_language, state.default_locale)
}

fn html_response(body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
        .into_response()
}
