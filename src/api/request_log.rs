//! Per-request execution-time logging.
//!
//! [`RequestLogLayer`] times every request through the router and hands the
//! method, path, and elapsed milliseconds to a [`RequestLog`] sink once the
//! response is ready. The sink sees the request after the fact; it cannot
//! fail the request or change the response.

use axum::http::{Method, Request, Response};
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};

/// Sink for request timings.
pub trait RequestLog: fmt::Debug + Send + Sync {
    /// Records one completed request.
    fn record(&self, method: &Method, path: &str, elapsed_ms: u128);
}

/// Request log that writes through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRequestLog;

impl RequestLog for TracingRequestLog {
    fn record(&self, method: &Method, path: &str, elapsed_ms: u128) {
        tracing::info!("[{method}] {path} - Execution time: {elapsed_ms}ms");
    }
}

/// Layer that times requests and reports them to a [`RequestLog`].
#[derive(Debug, Clone)]
pub struct RequestLogLayer {
    sink: Arc<dyn RequestLog>,
}

impl RequestLogLayer {
    /// Creates a layer reporting to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn RequestLog>) -> Self {
        Self { sink }
    }
}

impl Default for RequestLogLayer {
    fn default() -> Self {
        Self::new(Arc::new(TracingRequestLog))
    }
}

impl<InnerService> Layer<InnerService> for RequestLogLayer {
    type Service = RequestLogService<InnerService>;

    fn layer(&self, inner: InnerService) -> Self::Service {
        RequestLogService {
            inner,
            sink: Arc::clone(&self.sink),
        }
    }
}

/// Service produced by [`RequestLogLayer`].
#[derive(Debug, Clone)]
pub struct RequestLogService<InnerService> {
    inner: InnerService,
    sink: Arc<dyn RequestLog>,
}

impl<InnerService, RequestBody, ResponseBody> Service<Request<RequestBody>>
    for RequestLogService<InnerService>
where
    InnerService:
        Service<Request<RequestBody>, Response = Response<ResponseBody>> + Clone + Send + 'static,
    InnerService::Future: Send,
    RequestBody: Send + 'static,
    ResponseBody: Send + 'static,
{
    type Response = Response<ResponseBody>;
    type Error = InnerService::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, context: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(context)
    }

    fn call(&mut self, request: Request<RequestBody>) -> Self::Future {
        let start = Instant::now();
        let method = request.method().clone();
        let path = request.uri().path().to_owned();
        let sink = Arc::clone(&self.sink);
        // The clone may not be ready; keep the instance that was polled.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let response = inner.call(request).await?;
            sink.record(&method, &path, start.elapsed().as_millis());
            Ok(response)
        })
    }
}
