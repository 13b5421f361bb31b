//! Session actor - message loop processing UI events and scheduler ticks

use tokio::sync::mpsc;

use crate::constants::TICK_INTERVAL;
use crate::messages::{RenderState, UiEvent};
use crate::session::state::AppState;

/// Session actor that owns the application state. UI events mutate it,
/// the interval tick drives the scheduler, and every turn emits a fresh
/// render snapshot.
pub struct SessionActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl SessionActor {
    pub fn new(render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        SessionActor {
            state: AppState::new(),
            render_tx,
        }
    }

    /// Build the actor around a preconfigured state (tests inject a manual
    /// clock this way)
    pub fn with_state(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        SessionActor { state, render_tx }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    match event {
                        Some(event) => {
                            if self.state.handle_event(event) {
                                tracing::info!("quit requested");
                                break;
                            }
                            let _ = self.render_tx.send(self.state.to_render_state());
                        }
                        None => break,
                    }
                }
                _ = ticker.tick() => {
                    self.state.tick();
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::nav::Page;

    #[tokio::test]
    async fn test_initial_render_is_splash() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(SessionActor::new(render_tx).run(ui_rx));

        let first = render_rx.recv().await.expect("initial render state");
        assert_eq!(first.page, Page::Splash);
        assert!(!first.is_authenticated);

        ui_tx.send(UiEvent::Quit).expect("send quit");
        handle.await.expect("actor terminates");
    }

    #[tokio::test]
    async fn test_actor_stops_when_ui_channel_closes() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
        let (render_tx, _render_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(SessionActor::new(render_tx).run(ui_rx));
        drop(ui_tx);
        handle.await.expect("actor terminates");
    }
}
