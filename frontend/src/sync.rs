//! Live subscriptions to the catalog collections.
//!
//! Each subscription owns a server-sent event stream for one collection and
//! forwards every snapshot to its callback. When the stream drops it reports
//! `Reconnecting`, waits according to the retry policy and opens a new stream.
//! A snapshot resets the attempt counter. Once the policy is exhausted it
//! reports `Failed` and stops.

use common::catalog::{Reconnect, RetryPolicy, SyncEvent};
use common::gateway::Collection;
use common::requests::SNAPSHOT_EVENT;
use futures_util::future::{abortable, AbortHandle};
use futures_util::StreamExt;
use gloo_console::warn;
use gloo_net::eventsource::futures::EventSource;
use gloo_timers::future::TimeoutFuture;
use yew::Callback;

use crate::config::API_BASE;

/// Handle to a running subscription. Dropping it closes the stream and
/// cancels any pending reconnect.
pub struct Subscription {
    handle: AbortHandle,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn subscribe<C: Collection + 'static>(
    on_event: Callback<SyncEvent<C::Document>>,
    policy: RetryPolicy,
) -> Subscription {
    let url = format!("{}/{}/subscribe", API_BASE, C::NAME);
    let (task, handle) = abortable(run::<C>(url, on_event, policy));
    wasm_bindgen_futures::spawn_local(async move {
        let _ = task.await;
    });
    Subscription { handle }
}

async fn run<C: Collection>(
    url: String,
    on_event: Callback<SyncEvent<C::Document>>,
    policy: RetryPolicy,
) {
    let mut reconnect = Reconnect::new(policy);
    loop {
        let reason = stream_snapshots::<C>(&url, &on_event, &mut reconnect).await;

        match reconnect.on_drop() {
            Some((attempt, delay)) => {
                warn!(format!(
                    "{} subscription dropped ({}), reconnect attempt {} in {:?}",
                    C::NAME,
                    reason,
                    attempt,
                    delay
                ));
                on_event.emit(SyncEvent::Reconnecting { attempt });
                TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)).await;
            }
            None => {
                on_event.emit(SyncEvent::Failed(reason));
                return;
            }
        }
    }
}

/// Forwards snapshots until the stream ends. Returns why it ended.
async fn stream_snapshots<C: Collection>(
    url: &str,
    on_event: &Callback<SyncEvent<C::Document>>,
    reconnect: &mut Reconnect,
) -> String {
    let mut source = match EventSource::new(url) {
        Ok(source) => source,
        Err(e) => return e.to_string(),
    };
    let mut snapshots = match source.subscribe(SNAPSHOT_EVENT) {
        Ok(stream) => stream,
        Err(e) => return e.to_string(),
    };

    while let Some(item) = snapshots.next().await {
        let (_, message) = match item {
            Ok(item) => item,
            Err(e) => return e.to_string(),
        };
        let Some(data) = message.data().as_string() else {
            continue;
        };
        match serde_json::from_str::<Vec<C::Document>>(&data) {
            Ok(items) => {
                reconnect.on_snapshot();
                on_event.emit(SyncEvent::Snapshot(items));
            }
            // A snapshot we cannot read leaves the mirror as it was.
            Err(e) => warn!(format!("ignoring malformed {} snapshot: {}", C::NAME, e)),
        }
    }
    "stream closed".to_string()
}
