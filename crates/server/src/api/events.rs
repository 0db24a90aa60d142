//! Server-sent store events

use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures::stream::{self, Stream};
use std::{convert::Infallible, time::Duration};
use storefront_core::state::StoreEvent;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::app::AppState;

const HEARTBEAT: Duration = Duration::from_secs(15);

/// One item of the event stream
#[derive(Debug)]
enum Frame {
    Store(StoreEvent),
    Heartbeat,
}

impl Frame {
    fn into_event(self) -> Event {
        match self {
            Frame::Store(event) => {
                let json = serde_json::to_string(&event).unwrap_or_default();
                Event::default().event("store").data(json)
            }
            Frame::Heartbeat => Event::default().comment("heartbeat"),
        }
    }
}

/// Wait for the next store event, or a heartbeat after `idle`
///
/// A lagged receiver skips what it missed. `None` once the store is gone.
async fn next_frame(rx: &mut broadcast::Receiver<StoreEvent>, idle: Duration) -> Option<Frame> {
    loop {
        match tokio::time::timeout(idle, rx.recv()).await {
            Ok(Ok(event)) => return Some(Frame::Store(event)),
            Ok(Err(RecvError::Lagged(skipped))) => {
                tracing::debug!(skipped, "SSE subscriber lagged");
            }
            Ok(Err(RecvError::Closed)) => return None,
            Err(_) => return Some(Frame::Heartbeat),
        }
    }
}

/// SSE endpoint for store changes with heartbeat
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.store.subscribe();

    let stream = stream::unfold(rx, |mut rx| async move {
        let frame = next_frame(&mut rx, HEARTBEAT).await?;
        Some((Ok(frame.into_event()), rx))
    });

    Sse::new(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::state::StoreEventKind;

    #[tokio::test]
    async fn test_lagged_receiver_skips_to_oldest_retained() {
        let (tx, mut rx) = broadcast::channel(2);
        for seq in 1..=5 {
            tx.send(StoreEvent::new(seq, StoreEventKind::CartChanged))
                .unwrap();
        }

        match next_frame(&mut rx, Duration::from_secs(1)).await {
            Some(Frame::Store(event)) => assert_eq!(event.seq, 4),
            other => panic!("unexpected frame: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_idle_stream_sends_heartbeat() {
        let (_tx, mut rx) = broadcast::channel::<StoreEvent>(4);
        let frame = next_frame(&mut rx, Duration::from_millis(20)).await;
        assert!(matches!(frame, Some(Frame::Heartbeat)));
    }

    #[tokio::test]
    async fn test_closed_channel_ends_stream() {
        let (tx, mut rx) = broadcast::channel::<StoreEvent>(4);
        drop(tx);
        assert!(next_frame(&mut rx, Duration::from_secs(1)).await.is_none());
    }
}
