//! Reporting layer
//!
//! Mounts a [`Handler`] on a `tracing_subscriber` registry. Filtering by
//! level/target and fan-out to other layers stay with the subscriber; the
//! layer only converts events into records.

use rplog_core::{Handler, ReportingClient, RpHandler};
use std::cell::Cell;
use std::sync::Arc;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::visitor::RecordVisitor;

thread_local! {
    /// Set while this thread is inside a handler call
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as dispatching until dropped
struct DispatchGuard;

impl DispatchGuard {
    /// `None` if the thread is already dispatching
    fn enter() -> Option<Self> {
        DISPATCHING.with(|flag| {
            if flag.get() {
                None
            } else {
                flag.set(true);
                Some(DispatchGuard)
            }
        })
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        DISPATCHING.with(|flag| flag.set(false));
    }
}

/// `tracing` layer forwarding every event to a [`Handler`].
///
/// Events raised while the same thread is already inside the handler (a
/// client's HTTP stack logging its own requests, say) are not dispatched
/// again.
///
/// # Example
///
/// ```ignore
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let subscriber = tracing_subscriber::registry()
///     .with(RpLayer::for_client(Arc::new(client)));
/// ```
#[derive(Debug)]
pub struct RpLayer<H = RpHandler> {
    handler: H,
}

impl<H: Handler> RpLayer<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl RpLayer<RpHandler> {
    /// Layer with a default [`RpHandler`] (accepts every severity)
    pub fn for_client(client: Arc<dyn ReportingClient>) -> Self {
        Self::new(RpHandler::new(client))
    }
}

impl<S, H> Layer<S> for RpLayer<H>
where
    S: Subscriber,
    H: Handler + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(_guard) = DispatchGuard::enter() else {
            return;
        };

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        let record = visitor.into_record(event.metadata());

        self.handler.handle(&record);
    }
}
