//! Scene graph backing [`WorldService`].

use std::collections::BTreeMap;

use armory_core::{ItemId, Layers, Mount, Vec3, WorldService};

/// World representation of one item.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub position: Vec3,
    pub visible: bool,
    pub parent: Option<Mount>,
    pub layers: Layers,
}

/// Flat scene graph keyed by item.
///
/// Parented nodes follow their weapon and are excluded from proximity queries.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: BTreeMap<ItemId, SceneNode>,
}

impl SceneGraph {
    pub fn insert(&mut self, item: ItemId, position: Vec3, layers: Layers) {
        self.nodes.insert(
            item,
            SceneNode {
                position,
                visible: true,
                parent: None,
                layers,
            },
        );
    }

    /// Removes an item's representation (consumed items).
    pub fn despawn(&mut self, item: ItemId) -> Option<SceneNode> {
        self.nodes.remove(&item)
    }

    pub fn node(&self, item: ItemId) -> Option<&SceneNode> {
        self.nodes.get(&item)
    }

    pub fn is_visible(&self, item: ItemId) -> bool {
        self.nodes.get(&item).is_some_and(|node| node.visible)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl WorldService for SceneGraph {
    fn overlap_sphere(&self, center: Vec3, radius: f32, layers: Layers) -> Vec<ItemId> {
        let mut hits: Vec<(f32, ItemId)> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.visible && node.parent.is_none())
            .filter(|(_, node)| node.layers.intersects(layers))
            .map(|(id, node)| (node.position.distance(center), *id))
            .filter(|(distance, _)| *distance <= radius)
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    fn place(&mut self, item: ItemId, position: Vec3) {
        match self.nodes.get_mut(&item) {
            Some(node) => node.position = position,
            None => {
                tracing::warn!(%item, "placing item without a scene node");
                self.nodes.insert(
                    item,
                    SceneNode {
                        position,
                        visible: false,
                        parent: None,
                        layers: Layers::ITEMS,
                    },
                );
            }
        }
    }

    fn set_visible(&mut self, item: ItemId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(&item) {
            node.visible = visible;
        }
    }

    fn parent(&mut self, item: ItemId, mount: Option<Mount>) {
        if let Some(node) = self.nodes.get_mut(&item) {
            node.parent = mount;
        }
    }
}
