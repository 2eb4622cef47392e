use bevy::prelude::*;

/// Mesh built from a lattice key `K`, reused until the key changes or the
/// geometry is marked dirty.
#[derive(Debug, Clone)]
pub struct LatticeMeshCache<K> {
    mesh: Option<Handle<Mesh>>,
    built_with: Option<K>,
    geometry_dirty: bool,
}

impl<K> Default for LatticeMeshCache<K> {
    fn default() -> Self {
        Self {
            mesh: None,
            built_with: None,
            geometry_dirty: false,
        }
    }
}

impl<K: PartialEq + Copy> LatticeMeshCache<K> {
    pub fn mesh(&self) -> Option<&Handle<Mesh>> {
        self.mesh.as_ref()
    }

    pub fn set_geometry_dirty(&mut self) {
        self.geometry_dirty = true;
    }

    pub fn is_geometry_dirty(&self) -> bool {
        self.geometry_dirty
    }

    /// True when the cached mesh cannot be used for `key`.
    pub fn needs_rebuild(&self, key: K, meshes: &Assets<Mesh>) -> bool {
        let mesh_alive = self.mesh.as_ref().is_some_and(|handle| meshes.contains(handle));
        !mesh_alive || self.geometry_dirty || self.built_with != Some(key)
    }

    /// Return the mesh for `key`, rebuilding it only when required.
    ///
    /// A rebuild overwrites the existing asset so its handle stays valid.
    /// The boolean is true when `build` ran.
    pub fn ensure(
        &mut self,
        key: K,
        meshes: &mut Assets<Mesh>,
        build: impl FnOnce(K) -> Mesh,
    ) -> (Handle<Mesh>, bool) {
        if !self.needs_rebuild(key, meshes) {
            if let Some(handle) = &self.mesh {
                return (handle.clone(), false);
            }
        }

        let mesh = build(key);
        let handle = match self.mesh.as_ref() {
            Some(handle) if meshes.contains(handle) => {
                if let Some(existing) = meshes.get_mut(handle) {
                    *existing = mesh;
                }
                handle.clone()
            }
            _ => meshes.add(mesh),
        };

        self.mesh = Some(handle.clone());
        self.built_with = Some(key);
        self.geometry_dirty = false;
        (handle, true)
    }
}
