// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame tick dispatch.
//!
//! `FrameLoop` owns the monotonically increasing frame counter and calls every
//! subscribed listener once per [`FrameLoop::advance`]. Listeners are held
//! weakly: dropping the last strong reference detaches a listener without an
//! explicit unsubscribe.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{trace, warn};

/// Something that wants to run once per frame.
pub trait FrameListener {
    /// Called once per frame with the frame counter.
    fn on_frame(&mut self, frame: u64);
}

/// Subscription handle returned by [`FrameLoop::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Single-threaded tick source.
#[derive(Default)]
pub struct FrameLoop {
    frame: u64,
    next_id: u64,
    listeners: Vec<(ListenerId, Weak<RefCell<dyn FrameListener>>)>,
}

impl FrameLoop {
    /// Tick source starting at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick source whose next dispatched frame is `frame`.
    pub fn starting_at(frame: u64) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// Frame number the next [`advance`](Self::advance) will dispatch.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Register `listener` for every subsequent frame.
    pub fn subscribe<L>(&mut self, listener: &Rc<RefCell<L>>) -> ListenerId
    where
        L: FrameListener + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let shared: Rc<RefCell<dyn FrameListener>> = listener.clone();
        self.listeners.push((id, Rc::downgrade(&shared)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of listeners still alive.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|(_, l)| l.strong_count() > 0)
            .count()
    }

    /// Dispatch the current frame to every listener, then move to the next.
    ///
    /// Returns the dispatched frame number. A listener that is already
    /// borrowed elsewhere misses this frame.
    pub fn advance(&mut self) -> u64 {
        let frame = self.frame;
        self.listeners.retain(|(_, l)| l.strong_count() > 0);
        for (id, weak) in &self.listeners {
            let Some(listener) = weak.upgrade() else {
                continue;
            };
            let Ok(mut listener) = listener.try_borrow_mut() else {
                warn!(?id, frame, "listener busy, skipping frame");
                continue;
            };
            listener.on_frame(frame);
        }
        trace!(frame, listeners = self.listeners.len(), "frame dispatched");
        self.frame = self.frame.wrapping_add(1);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<u64>,
    }

    impl FrameListener for Recorder {
        fn on_frame(&mut self, frame: u64) {
            self.frames.push(frame);
        }
    }

    #[test]
    fn dispatches_monotonic_frames() {
        let mut frames = FrameLoop::starting_at(10);
        let rec = Rc::new(RefCell::new(Recorder::default()));
        frames.subscribe(&rec);
        assert_eq!(frames.advance(), 10);
        assert_eq!(frames.advance(), 11);
        assert_eq!(frames.frame(), 12);
        assert_eq!(rec.borrow().frames, vec![10, 11]);
    }

    #[test]
    fn unsubscribe_stops_dispatch() {
        let mut frames = FrameLoop::new();
        let rec = Rc::new(RefCell::new(Recorder::default()));
        let id = frames.subscribe(&rec);
        frames.advance();
        assert!(frames.unsubscribe(id));
        assert!(!frames.unsubscribe(id));
        frames.advance();
        assert_eq!(rec.borrow().frames, vec![0]);
        assert_eq!(frames.listener_count(), 0);
    }

    #[test]
    fn dropped_listener_detaches() {
        let mut frames = FrameLoop::new();
        let rec = Rc::new(RefCell::new(Recorder::default()));
        frames.subscribe(&rec);
        assert_eq!(frames.listener_count(), 1);
        drop(rec);
        assert_eq!(frames.listener_count(), 0);
        frames.advance();
    }

    #[test]
    fn busy_listener_misses_frame() {
        let mut frames = FrameLoop::new();
        let rec = Rc::new(RefCell::new(Recorder::default()));
        frames.subscribe(&rec);
        {
            let _held = rec.borrow();
            frames.advance();
        }
        frames.advance();
        assert_eq!(rec.borrow().frames, vec![1]);
    }
}
