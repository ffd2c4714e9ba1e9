// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! A previewer attached to a [`FrameLoop`].

use std::cell::RefCell;
use std::rc::Rc;

use glint_port::{ColorTable, ColorTableStore, ObjectRef, ObjectRegistry, RowKey};
use tracing::warn;

use crate::frame_loop::{FrameLoop, ListenerId};
use crate::previewer::LivePreviewer;

/// Handle the UI layer talks to.
///
/// Subscribes the previewer to the tick source on creation. `dispose`
/// restores and unsubscribes; dropping the controller restores too (the
/// previewer's own `Drop`) and the tick source forgets it on its next frame.
pub struct PreviewController<R, S>
where
    R: ObjectRegistry + 'static,
    S: ColorTableStore + 'static,
{
    previewer: Rc<RefCell<LivePreviewer<R, S>>>,
    subscription: Option<ListenerId>,
}

impl<R, S> PreviewController<R, S>
where
    R: ObjectRegistry + 'static,
    S: ColorTableStore + 'static,
{
    /// Subscribe `previewer` to `frames`.
    pub fn attach(frames: &mut FrameLoop, previewer: LivePreviewer<R, S>) -> Self {
        let previewer = Rc::new(RefCell::new(previewer));
        let subscription = Some(frames.subscribe(&previewer));
        Self {
            previewer,
            subscription,
        }
    }

    /// Forward a hover request for the current frame.
    pub fn request_hover(&self, key: RowKey, object: ObjectRef, current: &ColorTable) -> bool {
        match self.previewer.try_borrow_mut() {
            Ok(mut previewer) => previewer.request_hover(key, object, current),
            Err(_) => {
                warn!(%key, "previewer busy, hover dropped");
                false
            }
        }
    }

    /// Inspect the previewer, or `None` while a frame holds it.
    pub fn with_previewer<T>(&self, f: impl FnOnce(&LivePreviewer<R, S>) -> T) -> Option<T> {
        match self.previewer.try_borrow() {
            Ok(previewer) => Some(f(&previewer)),
            Err(_) => {
                warn!("previewer busy, inspection skipped");
                None
            }
        }
    }

    /// `true` until [`dispose`](Self::dispose) has run.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Restore any active highlight, then unsubscribe from `frames`.
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self, frames: &mut FrameLoop) {
        match self.previewer.try_borrow_mut() {
            Ok(mut previewer) => previewer.dispose(),
            Err(_) => warn!("previewer busy during dispose"),
        }
        if let Some(id) = self.subscription.take() {
            frames.unsubscribe(id);
        }
    }
}
