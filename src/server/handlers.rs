use super::error::ApiError;
use super::AppState;
use crate::insights::{run_insights, InsightsError, InsightsRequest, QueryParams};
use crate::parser::AggregatedEntry;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use log::{error, info, warn};
use std::time::Instant;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>News Insights</title></head>
<body>
<h1>News Insights</h1>
<p>Ranked entities, concepts and keywords from recent news.</p>
<p>Query <code>/newsinsights?start=now-1d&amp;end=now&amp;type=concepts</code>
(<code>type</code> is one of <code>entities</code>, <code>concepts</code>, <code>keywords</code>).</p>
</body>
</html>
"#;

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// GET /newsinsights
pub async fn handle_news_insights(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<AggregatedEntry>>, ApiError> {
    let started = Instant::now();
    info!(
        "GET /newsinsights start={:?} end={:?} type={:?}",
        params.start, params.end, params.kind
    );

    let request = InsightsRequest::from_params(&params).map_err(|e| {
        warn!("Rejected request: {}", e);
        ApiError(InsightsError::Input(e))
    })?;

    match run_insights(state.source.as_ref(), &request, &state.settings).await {
        Ok(entries) => {
            info!(
                "Returned {} {} in {:.2}s",
                entries.len(),
                request.kind,
                started.elapsed().as_secs_f64()
            );
            Ok(Json(entries))
        }
        Err(e) => {
            match &e {
                InsightsError::Upstream(payload) => {
                    warn!("Forwarding upstream error: {}", payload)
                }
                other => error!("News insights failed: {}", other),
            }
            Err(ApiError(e))
        }
    }
}
