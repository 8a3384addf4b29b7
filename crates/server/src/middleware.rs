//! Per-request trace id and access logging.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::observability::{HTTP_REQUESTS_TOTAL, REQUEST_DURATION};

pub const TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-trace-id");

/// Reuse the caller's `X-Trace-ID` or mint one, echo it on the response and
/// log method, uri, status, latency and peer once the handler is done.
/// Everything the handler logs runs inside a `request` span carrying the id.
pub async fn trace_requests(mut req: Request, next: Next) -> Response {
    let start = Instant::now();

    let trace_id = req
        .headers()
        .get(&TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());
    let header_value = HeaderValue::from_str(&trace_id).ok();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    if let Some(v) = &header_value {
        req.headers_mut().insert(TRACE_ID_HEADER, v.clone());
    }

    let span = info_span!("request", %trace_id);
    let mut resp = next.run(req).instrument(span).await;

    if let Some(v) = header_value {
        resp.headers_mut().insert(TRACE_ID_HEADER, v);
    }

    let latency = start.elapsed();
    let status = resp.status();
    HTTP_REQUESTS_TOTAL.with_label_values(&[method.as_str(), status.as_str()]).inc();
    REQUEST_DURATION.observe(latency.as_secs_f64());
    info!(
        %method,
        %uri,
        %trace_id,
        status = status.as_u16(),
        latency_ms = latency.as_secs_f64() * 1000.0,
        %peer,
        "request"
    );
    resp
}

/// CORS policy: any origin, CRUD verbs, JSON + auth headers.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    use super::*;

    struct SpanTraceId(String);

    struct TraceIdVisitor<'a>(&'a mut Option<String>);

    impl Visit for TraceIdVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            if field.name() == "trace_id" {
                *self.0 = Some(format!("{value:?}"));
            }
        }
    }

    /// Records the trace id of the nearest enclosing span for every event.
    #[derive(Clone, Default)]
    struct EventTraceIds(Arc<Mutex<Vec<String>>>);

    impl<S> Layer<S> for EventTraceIds
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let mut found = None;
            attrs.record(&mut TraceIdVisitor(&mut found));
            if let (Some(v), Some(span)) = (found, ctx.span(id)) {
                span.extensions_mut().insert(SpanTraceId(v));
            }
        }

        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            let Some(scope) = ctx.event_scope(event) else { return };
            for span in scope {
                if let Some(SpanTraceId(v)) = span.extensions().get::<SpanTraceId>() {
                    self.0.lock().unwrap().push(v.clone());
                    return;
                }
            }
        }
    }

    #[tokio::test]
    async fn handler_events_carry_the_request_trace_id() -> anyhow::Result<()> {
        let seen = EventTraceIds::default();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(seen.clone()));

        let app = Router::new()
            .route("/ping", get(|| async { info!("handler ran"); "pong" }))
            .layer(axum::middleware::from_fn(trace_requests));
        let req = axum::http::Request::builder().uri("/ping").header(&TRACE_ID_HEADER, "abc123").body(Body::empty())?;
        let resp = app.oneshot(req).await?;

        assert_eq!(resp.headers()[&TRACE_ID_HEADER], "abc123");
        // access log is emitted after the span closes, only the handler event is inside it
        assert_eq!(*seen.0.lock().unwrap(), vec!["abc123".to_string()]);
        Ok(())
    }
}
