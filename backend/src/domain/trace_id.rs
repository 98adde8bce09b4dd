//! Correlation identifier shared by a request's logs, error bodies and the
//! `trace-id` response header.
//!
//! Callers may pin the identifier by sending their own `trace-id` header; see
//! [`TraceId::adopt_or_generate`] for which values are honoured. The active
//! identifier is held in a Tokio task-local, so work moved onto a spawned task
//! must be wrapped in [`TraceId::scope`] again to keep it.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Request and response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static ACTIVE: TraceId;
}

/// Where a request's trace identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOrigin {
    /// Taken from the caller's `trace-id` header.
    Inbound,
    /// Minted because the caller sent none, or sent one we refuse.
    Generated,
}

/// Identifier correlating everything a single request produced.
///
/// # Examples
/// ```
/// use sweetshop::domain::{TraceId, TraceOrigin};
///
/// let (id, origin) =
///     TraceId::adopt_or_generate(Some(" 3fa85f64-5717-4562-b3fc-2c963f66afa6 "));
/// assert_eq!(origin, TraceOrigin::Inbound);
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Honour a caller-supplied header value when it is a usable identifier,
    /// otherwise mint a fresh one.
    ///
    /// Surrounding whitespace is ignored. The nil UUID is refused because
    /// every client that defaults it would share one trace.
    #[must_use]
    pub fn adopt_or_generate(inbound: Option<&str>) -> (Self, TraceOrigin) {
        match inbound.map(str::parse::<TraceId>) {
            Some(Ok(id)) => (id, TraceOrigin::Inbound),
            _ => (Self::generate(), TraceOrigin::Generated),
        }
    }

    /// The identifier of the request currently being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        ACTIVE.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use sweetshop::TraceId;
    /// use uuid::Uuid;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id = TraceId::from_uuid(Uuid::new_v4());
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        ACTIVE.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// Why a `trace-id` value was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceIdParseError {
    #[error("trace id is not a UUID: {0}")]
    Malformed(#[from] uuid::Error),
    #[error("trace id must not be the nil UUID")]
    Nil,
}

impl FromStr for TraceId {
    type Err = TraceIdParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(raw.trim())?;
        if uuid.is_nil() {
            return Err(TraceIdParseError::Nil);
        }
        Ok(Self(uuid))
    }
}
