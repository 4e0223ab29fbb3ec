//! Server-sent-event stream of collection snapshots.
//!
//! Each event is `event: snapshot` followed by a single `data:` line holding
//! the whole collection as JSON. The stream ends only when the client goes
//! away or the hub is dropped.

use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::web::{self, Bytes};
use actix_web::HttpResponse;
use common::requests::SNAPSHOT_EVENT;
use futures_util::stream::{self, Stream};
use log::debug;
use serde::Serialize;
use tokio::sync::watch;

use crate::live::state::{CatalogState, LiveCollection, Snapshot};

/// Handler for `GET /api/<collection>/subscribe`.
pub async fn process<C: LiveCollection>(state: web::Data<CatalogState>) -> HttpResponse {
    let receiver = C::hub(&state).subscribe();
    debug!(
        "new {} subscriber ({} connected)",
        C::NAME,
        C::hub(&state).subscriber_count()
    );

    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/event-stream"))
        .insert_header((CACHE_CONTROL, "no-cache"))
        .streaming(snapshot_stream(receiver))
}

/// Yields the current snapshot immediately, then one event per publish.
///
/// Publishes that happen faster than the client reads are coalesced; the
/// client always receives the latest full snapshot.
pub fn snapshot_stream<T>(
    receiver: watch::Receiver<Snapshot<T>>,
) -> impl Stream<Item = Result<Bytes, serde_json::Error>> + 'static
where
    T: Serialize + Send + Sync + 'static,
{
    stream::unfold((receiver, true), |(mut receiver, first)| async move {
        if !first && receiver.changed().await.is_err() {
            return None;
        }
        let snapshot = receiver.borrow_and_update().clone();
        Some((encode_event(&snapshot), (receiver, false)))
    })
}

fn encode_event<T: Serialize>(items: &[T]) -> Result<Bytes, serde_json::Error> {
    let json = serde_json::to_string(items)?;
    Ok(Bytes::from(format!("event: {SNAPSHOT_EVENT}\ndata: {json}\n\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::sync::Arc;

    fn event(body: &str) -> Bytes {
        Bytes::from(format!("event: snapshot\ndata: {body}\n\n"))
    }

    #[actix_web::test]
    async fn sends_current_snapshot_then_each_update() {
        let (sender, receiver) = watch::channel(Arc::new(vec!["a".to_string()]));
        let mut events = Box::pin(snapshot_stream(receiver));

        assert_eq!(events.next().await.unwrap().unwrap(), event(r#"["a"]"#));

        sender.send_replace(Arc::new(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(events.next().await.unwrap().unwrap(), event(r#"["a","b"]"#));

        sender.send_replace(Arc::new(Vec::new()));
        assert_eq!(events.next().await.unwrap().unwrap(), event("[]"));
    }

    #[actix_web::test]
    async fn ends_when_the_hub_goes_away() {
        let (sender, receiver) = watch::channel(Arc::new(Vec::<u32>::new()));
        let mut events = Box::pin(snapshot_stream(receiver));
        events.next().await;

        drop(sender);
        assert!(events.next().await.is_none());
    }
}
