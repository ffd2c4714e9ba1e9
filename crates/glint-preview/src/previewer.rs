// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hover/tick state machine that owns the live highlight.
//!
//! # Frame contract
//!
//! Per frame the host makes zero or more [`LivePreviewer::request_hover`]
//! calls, then exactly one [`LivePreviewer::on_tick`]. The first request of a
//! frame wins; the slot is emptied at the end of every tick, so a highlight
//! survives only while the UI keeps asking for it.
//!
//! # Restore guarantee
//!
//! Leaving a session always writes the saved table back, unless the object
//! has disappeared from the registry (nothing left to write to).

use glint_app_core::PreviewSettings;
use glint_port::{
    scale_rgb, ColorTable, ColorTableStore, ObjectHandle, ObjectRef, ObjectRegistry, ResolveError,
    Rgb, RowKey,
};
use tracing::{debug, info, instrument, warn};

use crate::frame_loop::FrameListener;
use crate::hue::HueCycle;
use crate::session::{PendingHover, Session};

/// What a single tick did.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The previewer has been disposed; nothing happened.
    Detached,
    /// No hover this frame; any active highlight was restored.
    Idle,
    /// The hovered object no longer resolves to a character; nothing written.
    TargetLost,
    /// The highlight could not be written this frame.
    Unresolved(ResolveError),
    /// The row was highlighted with `color`.
    Highlighted {
        /// Highlighted row.
        key: RowKey,
        /// Diffuse color written to the row.
        color: Rgb,
    },
}

/// Live color-table previewer.
///
/// Generic over the host's object registry and table store so it can run
/// against the real scene or an in-memory fake.
pub struct LivePreviewer<R, S>
where
    R: ObjectRegistry,
    S: ColorTableStore,
{
    registry: R,
    tables: S,
    hue: HueCycle,
    emissive_divisor: f32,
    pending: Option<PendingHover>,
    session: Option<Session>,
    disposed: bool,
}

impl<R, S> LivePreviewer<R, S>
where
    R: ObjectRegistry,
    S: ColorTableStore,
{
    /// Previewer with the default 64-step hue cycle and emissive divisor 8.
    pub fn new(registry: R, tables: S) -> Self {
        Self::with_settings(registry, tables, &PreviewSettings::default())
    }

    /// Previewer tuned by `settings` (sanitized first).
    pub fn with_settings(registry: R, tables: S, settings: &PreviewSettings) -> Self {
        let settings = settings.clone().sanitized();
        Self {
            registry,
            tables,
            hue: HueCycle::from(&settings),
            emissive_divisor: settings.emissive_divisor,
            pending: None,
            session: None,
            disposed: false,
        }
    }

    /// Record a hover on `key` of `object` for the current frame.
    ///
    /// `current` is the caller's view of the table; it becomes the restore
    /// baseline only when the hover moves to a different resource. A hover on
    /// the active resource carries the session's own snapshot instead.
    ///
    /// A valid key with [`ObjectRef::NONE`] still takes the slot; the tick
    /// then treats the frame as idle. Returns `false` when the request was
    /// ignored (slot already taken this frame, invalid key, or previewer
    /// disposed).
    pub fn request_hover(&mut self, key: RowKey, object: ObjectRef, current: &ColorTable) -> bool {
        if self.disposed || self.pending.is_some() || !key.is_valid() {
            return false;
        }

        let baseline = match self.session.as_ref() {
            Some(session) if session.covers_resource(&key, object) => session.saved.clone(),
            _ => current.clone(),
        };
        self.pending = Some(PendingHover {
            key,
            object,
            baseline,
        });
        true
    }

    /// Advance one frame: apply, move or drop the highlight.
    #[instrument(level = "trace", skip(self))]
    pub fn on_tick(&mut self, frame: u64) -> TickOutcome {
        if self.disposed {
            return TickOutcome::Detached;
        }

        // Taking the slot empties it on every path below.
        let Some(pending) = self.pending.take().filter(|p| p.object.is_some()) else {
            self.restore();
            return TickOutcome::Idle;
        };

        let Some(target) = self.resolve_character(pending.object) else {
            debug!(object = %pending.object, "hover target is gone");
            return TickOutcome::TargetLost;
        };

        let is_new_target = !self
            .session
            .as_ref()
            .is_some_and(|s| s.is_target(&pending.key, pending.object));
        if is_new_target {
            self.end_session();
            info!(object = %pending.object, key = %pending.key, "begin highlight");
            self.session = Some(Session {
                key: pending.key,
                object: pending.object,
                saved: pending.baseline,
            });
        }

        self.apply_highlight(&target, frame)
    }

    /// Write the saved table back and end the session, if any.
    ///
    /// Returns `true` when a session was ended.
    pub fn restore(&mut self) -> bool {
        self.end_session().is_some()
    }

    /// Restore any active highlight and stop reacting to hovers and ticks.
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.pending = None;
        self.restore();
        self.disposed = true;
        info!("previewer disposed");
    }

    /// `true` once [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The active session, if a row is highlighted.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Row currently highlighted.
    pub fn active_key(&self) -> Option<RowKey> {
        self.session.as_ref().map(Session::key)
    }

    /// Object the current highlight was applied to.
    pub fn active_object(&self) -> Option<ObjectRef> {
        self.session.as_ref().map(Session::object)
    }

    /// Snapshot that will be written back when the session ends.
    pub fn saved_table(&self) -> Option<&ColorTable> {
        self.session.as_ref().map(Session::saved)
    }

    /// Row requested since the last tick.
    pub fn pending_key(&self) -> Option<RowKey> {
        self.pending.as_ref().map(|p| p.key)
    }

    /// Hue cycle in use.
    pub fn hue(&self) -> HueCycle {
        self.hue
    }

    /// Emissive divisor in use.
    pub fn emissive_divisor(&self) -> f32 {
        self.emissive_divisor
    }

    fn resolve_character(&self, object: ObjectRef) -> Option<ObjectHandle> {
        self.registry
            .resolve(object)
            .filter(ObjectHandle::is_character)
    }

    fn apply_highlight(&mut self, target: &ObjectHandle, frame: u64) -> TickOutcome {
        let Some(session) = self.session.as_ref() else {
            return TickOutcome::Idle;
        };
        let key = session.key;
        let color = self.hue.color_at(frame);

        let mut working = session.saved.clone();
        let Some(row) = working.row_mut(key.row_index) else {
            return TickOutcome::Unresolved(ResolveError::InvalidKey(key));
        };
        row.diffuse = color;
        row.emissive = scale_rgb(color, self.emissive_divisor);

        match self.tables.replace_color_table(target, key, &working) {
            Ok(()) => {
                debug!(object = %target.object, %key, frame, "set highlight");
                TickOutcome::Highlighted { key, color }
            }
            Err(err) => {
                debug!(%key, %err, "highlight target unresolved");
                TickOutcome::Unresolved(err)
            }
        }
    }

    fn end_session(&mut self) -> Option<Session> {
        let session = self.session.take()?;
        match self.resolve_character(session.object) {
            Some(target) => {
                if let Err(err) =
                    self.tables
                        .replace_color_table(&target, session.key, &session.saved)
                {
                    warn!(key = %session.key, %err, "could not write back saved table");
                }
            }
            None => {
                debug!(object = %session.object, "object gone, nothing to write back");
            }
        }
        info!(object = %session.object, key = %session.key, "reset highlight");
        Some(session)
    }
}

impl<R, S> FrameListener for LivePreviewer<R, S>
where
    R: ObjectRegistry,
    S: ColorTableStore,
{
    fn on_frame(&mut self, frame: u64) {
        self.on_tick(frame);
    }
}

impl<R, S> Drop for LivePreviewer<R, S>
where
    R: ObjectRegistry,
    S: ColorTableStore,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
