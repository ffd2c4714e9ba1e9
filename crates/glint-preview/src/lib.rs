// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Live color-table preview engine.
//!
//! The UI layer calls [`LivePreviewer::request_hover`] every frame the pointer
//! rests on a row; the tick source calls [`LivePreviewer::on_tick`] once per
//! frame. Only the tick touches the external table:
//!
//! - a hover that is not renewed expires at the end of the tick, and the
//!   original table is written back on the next tick;
//! - moving to another row restores the previous one before highlighting;
//! - disposing (or dropping) the previewer restores whatever is active.
//!
//! # Modules
//!
//! - [`hue`] - deterministic hue cycle driven by the frame counter
//! - [`previewer`] - the hover/tick state machine
//! - [`frame_loop`] - per-frame tick dispatch
//! - [`controller`] - previewer attached to a [`FrameLoop`]
//! - [`mock_adapter`] - in-memory registry and table store

pub mod controller;
pub mod frame_loop;
pub mod hue;
pub mod mock_adapter;
pub mod previewer;
mod session;

pub use controller::PreviewController;
pub use frame_loop::{FrameListener, FrameLoop, ListenerId};
pub use hue::{hsv_to_rgb, hue_cycle, HueCycle, DEFAULT_HUE_STEPS};
pub use mock_adapter::MockScene;
pub use previewer::{LivePreviewer, TickOutcome};
pub use session::Session;
