//! Presentation contract: something that renders snapshots and reacts to
//! one-shot events.

use std::future::Future;

use tokio::sync::broadcast::error::RecvError;

use super::mvi::StateHolder;

/// A stateless renderer for one screen.
pub trait Surface<S, E>: Send {
    fn render(&mut self, state: &S);

    fn on_event(&mut self, event: E);
}

/// Connect `surface` to `holder`.
///
/// Subscriptions are taken before this returns, so no event emitted after
/// the call is missed. The returned future renders the current snapshot,
/// then every new one, forwards events as they arrive, and resolves with the
/// surface once the holder is dropped.
pub fn drive<H, V>(holder: &H, mut surface: V) -> impl Future<Output = V> + Send + 'static
where
    H: StateHolder,
    V: Surface<H::State, H::Event> + 'static,
{
    let mut events = holder.subscribe_events();
    let mut states = holder.subscribe_state();

    async move {
        let initial = states.borrow_and_update().clone();
        surface.render(&initial);

        loop {
            tokio::select! {
                changed = states.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = states.borrow_and_update().clone();
                    surface.render(&snapshot);
                }
                event = events.recv() => match event {
                    Ok(event) => surface.on_event(event),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Surface fell behind, events dropped");
                    }
                    Err(RecvError::Closed) => break,
                },
            }
        }

        tracing::debug!("State holder dropped, surface detached");
        surface
    }
}
