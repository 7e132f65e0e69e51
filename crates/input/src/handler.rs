//! Per-frame terminal event handling.
//!
//! Events are polled until the frame deadline, at most `MAX_EVENTS_PER_FRAME`
//! of them, and collected into a bounded batch. Whatever is still queued waits
//! for the next frame, so a burst of input (a paste, a window being dragged)
//! can't stall rendering.

use std::io;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::core::WindowState;
use crate::map::handle_key_event;
use crate::types::{AppAction, MAX_EVENTS_PER_FRAME};

/// Actions gathered during one frame.
pub type ActionBatch = ArrayVec<AppAction, MAX_EVENTS_PER_FRAME>;

/// Translate one terminal event, applying resizes to `window` in place.
pub fn handle_event(event: &Event, window: &mut WindowState) -> Option<AppAction> {
    match event {
        Event::Key(key) => handle_key_event(*key),
        Event::Resize(width, height) => {
            if window.resize(*width, *height) {
                log::debug!(
                    "viewport resized to {}x{}",
                    window.width(),
                    window.height()
                );
                Some(AppAction::Resized)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Polls terminal events for the render loop.
#[derive(Debug, Clone, Default)]
pub struct EventHandler {
    /// Total events seen, for diagnostics
    seen: u64,
    /// Events seen since the current frame began
    frame_seen: usize,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events_seen(&self) -> u64 {
        self.seen
    }

    /// Start counting events for a new frame.
    pub fn begin_frame(&mut self) {
        self.frame_seen = 0;
    }

    /// Record one event and push the resulting action, if any, onto `batch`.
    ///
    /// Consecutive resizes are coalesced. Returns false once the frame should
    /// stop taking events: quit requested, batch full, or `MAX_EVENTS_PER_FRAME`
    /// events seen, whether or not they produced actions.
    pub fn push_event(&mut self, event: &Event, window: &mut WindowState, batch: &mut ActionBatch) -> bool {
        self.seen += 1;
        self.frame_seen += 1;
        match handle_event(event, window) {
            Some(AppAction::Resized) if batch.last() == Some(&AppAction::Resized) => {}
            Some(action) => {
                if batch.try_push(action).is_err() {
                    log::warn!("dropping {} action: event batch full", action.as_str());
                }
                if action == AppAction::Quit {
                    return false;
                }
            }
            None => {}
        }
        !batch.is_full() && self.frame_seen < MAX_EVENTS_PER_FRAME
    }

    /// Wait up to `timeout` for terminal events and handle all that arrive.
    pub fn drain(&mut self, timeout: Duration, window: &mut WindowState) -> io::Result<ActionBatch> {
        let mut batch = ActionBatch::new();
        let deadline = Instant::now() + timeout;
        self.begin_frame();

        let mut wait = timeout;
        while event::poll(wait)? {
            let ev = event::read()?;
            if !self.push_event(&ev, window, &mut batch) {
                break;
            }
            wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() {
                break;
            }
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    #[test]
    fn resize_updates_window() {
        let mut window = WindowState::new(80, 24);
        assert_eq!(
            handle_event(&Event::Resize(100, 40), &mut window),
            Some(AppAction::Resized)
        );
        assert_eq!((window.width(), window.height()), (100, 40));

        // Same size again is not a change.
        assert_eq!(handle_event(&Event::Resize(100, 40), &mut window), None);
    }

    #[test]
    fn zero_height_resize_is_clamped() {
        let mut window = WindowState::new(80, 24);
        handle_event(&Event::Resize(50, 0), &mut window);
        assert_eq!(window.height(), 1);
    }

    #[test]
    fn escape_event_quits() {
        let mut window = WindowState::default();
        assert_eq!(
            handle_event(&Event::Key(KeyEvent::from(KeyCode::Esc)), &mut window),
            Some(AppAction::Quit)
        );
        assert_eq!(handle_event(&Event::FocusGained, &mut window), None);
    }

    #[test]
    fn batch_coalesces_resizes_and_stops_on_quit() {
        let mut handler = EventHandler::new();
        let mut window = WindowState::default();
        let mut batch = ActionBatch::new();

        assert!(handler.push_event(&Event::Resize(10, 10), &mut window, &mut batch));
        assert!(handler.push_event(&Event::Resize(20, 10), &mut window, &mut batch));
        assert!(!handler.push_event(&Event::Key(KeyEvent::from(KeyCode::Esc)), &mut window, &mut batch));

        assert_eq!(batch.as_slice(), &[AppAction::Resized, AppAction::Quit]);
        assert_eq!(window.width(), 20);
        assert_eq!(handler.events_seen(), 3);
    }

    #[test]
    fn frame_stops_after_event_limit_without_actions() {
        let mut handler = EventHandler::new();
        let mut window = WindowState::default();
        let mut batch = ActionBatch::new();
        let key = Event::Key(KeyEvent::from(KeyCode::Char('x')));

        let mut accepted = 0;
        for _ in 0..10_000 {
            accepted += 1;
            if !handler.push_event(&key, &mut window, &mut batch) {
                break;
            }
        }
        assert_eq!(accepted, MAX_EVENTS_PER_FRAME);
        assert!(batch.is_empty());

        // Same-size resizes produce no action either.
        handler.begin_frame();
        let same = Event::Resize(window.width(), window.height());
        let mut accepted = 0;
        while handler.push_event(&same, &mut window, &mut batch) {
            accepted += 1;
        }
        assert_eq!(accepted + 1, MAX_EVENTS_PER_FRAME);
        assert!(batch.is_empty());
    }

    #[test]
    fn begin_frame_resets_event_limit() {
        let mut handler = EventHandler::new();
        let mut window = WindowState::default();
        let mut batch = ActionBatch::new();
        let key = Event::Key(KeyEvent::from(KeyCode::Char('x')));

        for _ in 0..MAX_EVENTS_PER_FRAME {
            handler.push_event(&key, &mut window, &mut batch);
        }
        assert!(!handler.push_event(&key, &mut window, &mut batch));

        handler.begin_frame();
        assert!(handler.push_event(&key, &mut window, &mut batch));
        assert_eq!(handler.events_seen(), MAX_EVENTS_PER_FRAME as u64 + 2);
    }
}
