//! High-level runtime orchestrator.
//!
//! The runtime owns the armory state, the in-memory scene standing in for the
//! host engine, and the event bus. Each frame it runs the armory tick, then
//! publishes whatever the armory emitted.

use armory_content::{ConfigLoader, ItemCatalog, ItemLoader, LevelLayout, LevelLoader, builtin};
use armory_core::{
    ArmoryEngine, ArmoryEvent, ArmoryState, HandPose, InputSnapshot, ItemDefinition, ItemId,
    ItemSpec, Layers, TickOutcome, Vec3,
};
use tokio::sync::broadcast;

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::loadout::Loadout;
use crate::scene::Scene;

/// Headless armory host driven one frame at a time.
pub struct Runtime {
    config: RuntimeConfig,
    catalog: ItemCatalog,
    state: ArmoryState,
    scene: Scene,
    bus: EventBus,
    frame: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &ArmoryState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Get a cloneable handle to the event bus
    pub fn bus(&self) -> EventBus {
        self.bus.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// Places an item in the armory and gives it a scene node.
    pub fn spawn(&mut self, definition: ItemDefinition, position: Vec3) -> ItemId {
        let layers = match definition.spec {
            ItemSpec::Weapon(_) => Layers::ITEMS | Layers::WEAPONS,
            _ => Layers::ITEMS,
        };
        let id = self.state.spawn(definition, position);
        self.scene.graph.insert(id, position, layers);
        id
    }

    /// Spawns a catalog item by name.
    pub fn spawn_named(&mut self, name: &str, position: Vec3) -> Result<ItemId> {
        let definition = self
            .catalog
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownItem {
                name: name.to_string(),
            })?;
        Ok(self.spawn(definition, position))
    }

    /// First item in the world with the given name.
    pub fn find(&self, name: &str) -> Result<ItemId> {
        self.state
            .items()
            .find_by_name(name)
            .ok_or_else(|| RuntimeError::UnknownItem {
                name: name.to_string(),
            })
    }

    pub fn set_hand_pose(&mut self, pose: HandPose) {
        self.state.set_hand_pose(pose);
    }

    /// Runs one armory frame and publishes its events.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> TickOutcome {
        self.frame += 1;
        let span = tracing::debug_span!("frame", frame = self.frame);
        let _guard = span.enter();

        let outcome = self.state.tick(input, dt, self.scene.env());
        self.publish_pending();
        outcome
    }

    /// Runs UI-driven operations (drag-and-drop mounting, drops, slot swaps)
    /// outside the frame loop. Events are published when `op` returns.
    pub fn apply<R>(&mut self, op: impl FnOnce(&mut ArmoryEngine<'_, '_>) -> R) -> R {
        let mut engine = ArmoryEngine::new(&mut self.state, self.scene.env());
        let result = op(&mut engine);
        self.publish_pending();
        result
    }

    pub fn loadout(&self) -> Loadout {
        Loadout::of(&self.state)
    }

    fn publish_pending(&mut self) {
        for payload in self.state.drain_events() {
            if let ArmoryEvent::ItemConsumed { item, .. } = &payload {
                self.scene.graph.despawn(*item);
            }
            self.bus.publish(Event {
                frame: self.frame,
                payload,
            });
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
///
/// Content given directly takes precedence over the paths in
/// [`RuntimeConfig`]; without either, the embedded demo content is used.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<ItemCatalog>,
    level: Option<LevelLayout>,
    hand_pose: Option<HandPose>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(mut self, catalog: ItemCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn level(mut self, level: LevelLayout) -> Self {
        self.level = Some(level);
        self
    }

    pub fn hand_pose(mut self, pose: HandPose) -> Self {
        self.hand_pose = Some(pose);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let config = self.config;

        let armory = match &config.config_path {
            Some(path) => {
                ConfigLoader::load(path).map_err(|e| RuntimeError::content("armory config", e))?
            }
            None => config.armory.clone(),
        };
        let armory = config.overrides.apply(armory);

        let catalog = match (self.catalog, &config.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => {
                ItemLoader::load(path).map_err(|e| RuntimeError::content("item catalog", e))?
            }
            (None, None) => {
                builtin::catalog().map_err(|e| RuntimeError::content("item catalog", e))?
            }
        };

        let level = match (self.level, &config.level_path) {
            (Some(level), _) => level,
            (None, Some(path)) => {
                LevelLoader::load(path).map_err(|e| RuntimeError::content("level", e))?
            }
            (None, None) => builtin::range_level().map_err(|e| RuntimeError::content("level", e))?,
        };
        let placements = level
            .resolve(&catalog)
            .map_err(|e| RuntimeError::content("level", e))?;

        let mut state = ArmoryState::new(armory);
        if let Some(pose) = self.hand_pose {
            state.set_hand_pose(pose);
        }

        let mut runtime = Runtime {
            bus: EventBus::with_capacity(config.event_capacity),
            config,
            catalog,
            state,
            scene: Scene::default(),
            frame: 0,
        };
        for (definition, position) in placements {
            runtime.spawn(definition, position);
        }

        tracing::info!(
            items = runtime.state.items().len(),
            radius = runtime.state.config().detection_radius,
            "armory runtime ready"
        );
        Ok(runtime)
    }
}
