// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mock scene for headless runs of the previewer.
//!
//! MockScene tracks live objects and bound color tables in HashMaps without any
//! renderer. Clones share state, so a test can hand one clone to the previewer
//! and inspect writes through another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use glint_port::{
    ColorTable, ColorTableStore, ObjectHandle, ObjectKind, ObjectRef, ObjectRegistry,
    ResolveError, ResourceKey, RowKey,
};

/// In-memory object registry and color-table store.
#[derive(Clone, Debug, Default)]
pub struct MockScene {
    inner: Arc<Mutex<MockSceneInner>>,
}

#[derive(Debug, Default)]
struct MockSceneInner {
    objects: HashMap<ObjectRef, ObjectKind>,
    /// Loaded materials; `None` when the material carries no color table.
    tables: HashMap<ResourceKey, Option<ColorTable>>,
    writes: Vec<ResourceKey>,
}

impl MockScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut MockSceneInner) -> T) -> T {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut inner)
    }

    /// Add (or re-kind) a live object.
    pub fn spawn(&self, object: ObjectRef, kind: ObjectKind) {
        self.with_inner(|s| {
            s.objects.insert(object, kind);
        });
    }

    /// Add a live character.
    pub fn spawn_character(&self, object: ObjectRef) {
        self.spawn(object, ObjectKind::Character);
    }

    /// Remove an object from the registry. Its tables stay bound, so a
    /// respawn sees whatever was last written.
    pub fn despawn(&self, object: ObjectRef) -> bool {
        self.with_inner(|s| s.objects.remove(&object).is_some())
    }

    /// Load the material at `resource` with `table`, replacing any previous
    /// table. Not counted as a write.
    pub fn bind_table(&self, resource: ResourceKey, table: ColorTable) {
        self.with_inner(|s| {
            s.tables.insert(resource, Some(table));
        });
    }

    /// Strip the table from `resource`; the material stays loaded.
    pub fn unbind_table(&self, resource: ResourceKey) -> Option<ColorTable> {
        self.with_inner(|s| s.tables.get_mut(&resource).and_then(Option::take))
    }

    /// Unload the material at `resource` entirely.
    pub fn unload_material(&self, resource: ResourceKey) -> Option<ColorTable> {
        self.with_inner(|s| s.tables.remove(&resource).flatten())
    }

    /// Current contents of `resource`.
    pub fn table(&self, resource: ResourceKey) -> Option<ColorTable> {
        self.with_inner(|s| s.tables.get(&resource).cloned().flatten())
    }

    /// Number of `replace_color_table` calls that succeeded.
    pub fn write_count(&self) -> usize {
        self.with_inner(|s| s.writes.len())
    }

    /// Number of successful writes to `resource`.
    pub fn writes_to(&self, resource: ResourceKey) -> usize {
        self.with_inner(|s| s.writes.iter().filter(|r| **r == resource).count())
    }

    fn locate(
        s: &MockSceneInner,
        target: &ObjectHandle,
        key: RowKey,
    ) -> Result<ResourceKey, ResolveError> {
        if !key.is_valid() {
            return Err(ResolveError::InvalidKey(key));
        }
        match s.objects.get(&target.object) {
            None => return Err(ResolveError::ObjectGone(target.object)),
            Some(ObjectKind::Other) => return Err(ResolveError::NotCharacter(target.object)),
            Some(ObjectKind::Character) => {}
        }
        let resource = ResourceKey {
            object: target.object,
            ..key.resource()
        };
        match s.tables.get(&resource) {
            None => Err(ResolveError::MaterialMissing(resource)),
            Some(None) => Err(ResolveError::NoColorTable(resource)),
            Some(Some(_)) => Ok(resource),
        }
    }
}

impl ObjectRegistry for MockScene {
    fn resolve(&self, object: ObjectRef) -> Option<ObjectHandle> {
        if object.is_none() {
            return None;
        }
        self.with_inner(|s| {
            s.objects
                .get(&object)
                .map(|kind| ObjectHandle { object, kind: *kind })
        })
    }
}

impl ColorTableStore for MockScene {
    fn color_table(&self, target: &ObjectHandle, key: RowKey) -> Result<ColorTable, ResolveError> {
        self.with_inner(|s| {
            let resource = Self::locate(s, target, key)?;
            s.tables
                .get(&resource)
                .cloned()
                .flatten()
                .ok_or(ResolveError::NoColorTable(resource))
        })
    }

    fn replace_color_table(
        &mut self,
        target: &ObjectHandle,
        key: RowKey,
        table: &ColorTable,
    ) -> Result<(), ResolveError> {
        self.with_inner(|s| {
            let resource = Self::locate(s, target, key)?;
            s.tables.insert(resource, Some(table.clone()));
            s.writes.push(resource);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_port::DrawObject;

    fn key(object: ObjectRef) -> RowKey {
        RowKey::new(object, DrawObject::MainHand, 2, 0, 5)
    }

    #[test]
    fn resolve_reports_kind() {
        let scene = MockScene::new();
        scene.spawn_character(ObjectRef(1));
        scene.spawn(ObjectRef(2), ObjectKind::Other);
        assert!(scene.resolve(ObjectRef(1)).unwrap().is_character());
        assert!(!scene.resolve(ObjectRef(2)).unwrap().is_character());
        assert!(scene.resolve(ObjectRef(3)).is_none());
        assert!(scene.resolve(ObjectRef::NONE).is_none());
    }

    #[test]
    fn replace_requires_bound_table() {
        let mut scene = MockScene::new();
        let obj = ObjectRef(1);
        scene.spawn_character(obj);
        let handle = scene.resolve(obj).unwrap();
        let table = ColorTable::default();

        assert!(matches!(
            scene.replace_color_table(&handle, key(obj), &table),
            Err(ResolveError::MaterialMissing(_))
        ));

        scene.bind_table(key(obj).resource(), table.clone());
        scene
            .replace_color_table(&handle, key(obj), &table)
            .unwrap();
        assert_eq!(scene.write_count(), 1);
        assert_eq!(scene.writes_to(key(obj).resource()), 1);
    }

    #[test]
    fn despawned_object_is_gone_for_the_store() {
        let scene = MockScene::new();
        let obj = ObjectRef(4);
        scene.spawn_character(obj);
        scene.bind_table(key(obj).resource(), ColorTable::default());
        let handle = scene.resolve(obj).unwrap();
        assert!(scene.color_table(&handle, key(obj)).is_ok());

        assert!(scene.despawn(obj));
        assert_eq!(
            scene.color_table(&handle, key(obj)),
            Err(ResolveError::ObjectGone(obj))
        );
        assert!(scene.table(key(obj).resource()).is_some());
    }

    #[test]
    fn stripped_table_and_unloaded_material_are_distinct_errors() {
        let scene = MockScene::new();
        let obj = ObjectRef(6);
        scene.spawn_character(obj);
        let handle = scene.resolve(obj).unwrap();
        let resource = key(obj).resource();
        scene.bind_table(resource, ColorTable::default());

        assert_eq!(scene.unbind_table(resource), Some(ColorTable::default()));
        assert_eq!(
            scene.color_table(&handle, key(obj)),
            Err(ResolveError::NoColorTable(resource))
        );
        assert!(scene.table(resource).is_none());

        scene.bind_table(resource, ColorTable::default());
        assert!(scene.unload_material(resource).is_some());
        assert_eq!(
            scene.color_table(&handle, key(obj)),
            Err(ResolveError::MaterialMissing(resource))
        );
    }

    #[test]
    fn clones_share_state() {
        let a = MockScene::new();
        let b = a.clone();
        a.spawn_character(ObjectRef(8));
        assert!(b.resolve(ObjectRef(8)).is_some());
        assert_eq!(b.unbind_table(key(ObjectRef(8)).resource()), None);
    }
}
