//! Route handlers: the form page and the JSON API
//!
//! Every failure a request can provoke (bad input, prediction failure,
//! missing model) is rendered back to the caller; handlers never panic on
//! user input.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use predictor_facade::format::format_currency;
use predictor_facade::{parse_feature, DEFAULT_MODEL_FILE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::AppState;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Salary Predictor</title>
<style>
  body { font-family: sans-serif; max-width: 28rem; margin: 4rem auto; }
  label { display: block; margin-bottom: 0.5rem; }
  input[type=number] { width: 100%; padding: 0.4rem; box-sizing: border-box; }
  button { margin-top: 0.75rem; padding: 0.4rem 1.2rem; }
  .success { color: #0a6e31; }
  .error { color: #b00020; }
</style>
</head>
<body>
<h1>Salary Predictor</h1>
<form method="post" action="/">
  <label for="value">Years of experience</label>
  <input type="number" id="value" name="value" step="any" value="__VALUE__">
  <button type="submit">Predict salary</button>
</form>
<div id="result">__RESULT__</div>
</body>
</html>
"#;

/// The one field the form submits
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub value: String,
}

/// JSON API request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub value: f64,
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_page(value: &str, result: &str) -> Html<String> {
    Html(
        PAGE_TEMPLATE
            .replace("__VALUE__", &escape_html(value))
            .replace("__RESULT__", result),
    )
}

fn success_fragment(input: f64, formatted: &str) -> String {
    format!(
        r#"<p class="success">Estimated salary for {} years of experience: <strong>{}</strong></p>"#,
        input,
        escape_html(formatted)
    )
}

fn error_fragment(message: &str) -> String {
    format!(r#"<p class="error">{}</p>"#, escape_html(message))
}

/// Render the form, carrying a startup load failure into the result area
pub async fn form_page(State(state): State<AppState>) -> Html<String> {
    match &*state.engine {
        Ok(_) => render_page("0", ""),
        Err(error) => render_page("0", &error_fragment(&error.to_string())),
    }
}

/// Handle a form submission and re-render the page with the outcome
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Html<String> {
    let engine = match &*state.engine {
        Ok(engine) => engine,
        Err(error) => return render_page(&form.value, &error_fragment(&error.to_string())),
    };

    let outcome = parse_feature(&form.value).and_then(|value| {
        engine.predict_one(value).map(|prediction| (value, prediction))
    });

    match outcome {
        Ok((value, prediction)) => render_page(
            &form.value,
            &success_fragment(value, &format_currency(prediction)),
        ),
        Err(error) => render_page(&form.value, &error_fragment(&error.to_string())),
    }
}

/// JSON prediction endpoint
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> (StatusCode, Json<Value>) {
    let engine = match &*state.engine {
        Ok(engine) => engine,
        Err(error) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": error.to_string() })),
            )
        }
    };

    match engine.predict_one(request.value) {
        Ok(prediction) => (
            StatusCode::OK,
            Json(json!({
                "prediction": prediction,
                "currency": format_currency(prediction),
            })),
        ),
        Err(error) => {
            tracing::warn!("prediction rejected: {}", error);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": error.to_string() })),
            )
        }
    }
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the server answer predictions?
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match &*state.engine {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "model": DEFAULT_MODEL_FILE
            })),
        ),
        Err(error) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unavailable",
                "error": error.to_string()
            })),
        ),
    }
}
