// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted hover sessions against the mock scene.

use clap::ValueEnum;
use glint_app_core::PreviewSettings;
use glint_port::{
    ColorRow, ColorTable, ColorTableStore, DrawObject, ObjectRef, ObjectRegistry, ResourceKey,
    RowKey, ROW_COUNT,
};
use glint_preview::{FrameLoop, LivePreviewer, MockScene, PreviewController};
use tracing::info;

/// Which scripted session to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Hover one row, then stop hovering.
    A,
    /// Hover one row, slide to a neighbour in the same table, then stop.
    B,
    /// Hover one row, then the character disappears.
    C,
}

/// State observed after one frame.
#[derive(Debug)]
pub struct FrameRecord {
    /// Dispatched frame number.
    pub frame: u64,
    /// Row the UI hovered this frame.
    pub hovered: Option<RowKey>,
    /// Row the previewer holds after the frame.
    pub active: Option<RowKey>,
    /// Rows of the table that differ from the original.
    pub dirty_rows: Vec<u8>,
}

/// Result of a scripted run.
#[derive(Debug)]
pub struct DemoReport {
    /// Per-frame observations.
    pub frames: Vec<FrameRecord>,
    /// `true` when the table ended bit-identical to the original.
    pub restored: bool,
    /// `true` when the script removed the character (restore impossible).
    pub object_removed: bool,
}

const ACTOR: ObjectRef = ObjectRef(0);

fn resource() -> ResourceKey {
    RowKey::new(ACTOR, DrawObject::Human, 0, 4, 0).resource()
}

fn original_table() -> ColorTable {
    let rows = core::array::from_fn::<_, ROW_COUNT, _>(|i| {
        let shade = i as f32 / ROW_COUNT as f32;
        ColorRow {
            diffuse: [shade, 0.5, 1.0 - shade],
            ..ColorRow::default()
        }
    });
    ColorTable::from_rows(rows)
}

/// Run `scenario`, hovering each row for `hold` frames.
pub fn run(scenario: Scenario, hold: u32, settings: &PreviewSettings) -> DemoReport {
    let scene = MockScene::new();
    scene.spawn_character(ACTOR);
    let original = original_table();
    scene.bind_table(resource(), original.clone());

    let script: Vec<Option<RowKey>> = match scenario {
        Scenario::A | Scenario::C => (0..hold).map(|_| Some(resource().row(4))).collect(),
        Scenario::B => (0..hold)
            .map(|_| Some(resource().row(4)))
            .chain((0..hold).map(|_| Some(resource().row(5))))
            .collect(),
    };

    let mut frames = FrameLoop::new();
    let mut controller = PreviewController::attach(
        &mut frames,
        LivePreviewer::with_settings(scene.clone(), scene.clone(), settings),
    );
    let mut records = Vec::new();

    // The UI reads through the port like any host; once the character is
    // gone it keeps hovering with the last table it saw.
    let mut last_seen = original.clone();
    let mut step = |hovered: Option<RowKey>, frames: &mut FrameLoop| {
        if let Some(key) = hovered {
            if let Some(live) = scene
                .resolve(ACTOR)
                .and_then(|handle| scene.color_table(&handle, key).ok())
            {
                last_seen = live;
            }
            controller.request_hover(key, ACTOR, &last_seen);
        }
        let frame = frames.advance();
        let live = scene.table(resource()).unwrap_or_default();
        records.push(FrameRecord {
            frame,
            hovered,
            active: controller
                .with_previewer(LivePreviewer::active_key)
                .flatten(),
            dirty_rows: original.differing_rows(&live),
        });
    };

    for hovered in script {
        step(hovered, &mut frames);
    }
    let object_removed = scenario == Scenario::C;
    if object_removed {
        info!(object = %ACTOR, "removing character mid-highlight");
        scene.despawn(ACTOR);
        step(Some(resource().row(4)), &mut frames);
    } else {
        step(None, &mut frames);
    }

    controller.dispose(&mut frames);
    let restored = scene
        .table(resource())
        .is_some_and(|live| live.bit_eq(&original));
    DemoReport {
        frames: records,
        restored,
        object_removed,
    }
}
