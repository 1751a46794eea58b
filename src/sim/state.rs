//! Game session state
//!
//! Owns the player, waypoint, home and the four enemy collections, plus the
//! seeded RNG every random decision draws from.

use glam::{UVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Archetype, Behavior, Collection, Enemy, SessionView};
use super::entity::{Home, Player, Waypoint};
use super::level::Level;
use crate::settings::{EnemyTuning, Settings};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player reached home (terminal)
    Won,
    /// An enemy touched the player (terminal)
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// Things that happened during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Spawned { id: u32, archetype: Archetype, tick: u64 },
    Despawned { id: u32, archetype: Archetype, tick: u64 },
    Won { tick: u64 },
    Lost { tick: u64, enemy: u32 },
}

/// Enemy storage partitioned by archetype family
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub general: Vec<Enemy>,
    pub patrol: Vec<Enemy>,
    pub boss: Vec<Enemy>,
    pub bullet: Vec<Enemy>,
}

impl Collections {
    pub fn get(&self, collection: Collection) -> &[Enemy] {
        match collection {
            Collection::General => &self.general,
            Collection::Patrol => &self.patrol,
            Collection::Boss => &self.boss,
            Collection::Bullet => &self.bullet,
        }
    }

    fn get_mut(&mut self, collection: Collection) -> &mut Vec<Enemy> {
        match collection {
            Collection::General => &mut self.general,
            Collection::Patrol => &mut self.patrol,
            Collection::Boss => &mut self.boss,
            Collection::Bullet => &mut self.bullet,
        }
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.get(collection).len()
    }

    /// Total enemies across all collections
    pub fn total(&self) -> usize {
        self.general.len() + self.patrol.len() + self.boss.len() + self.bullet.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.general
            .iter()
            .chain(&self.patrol)
            .chain(&self.boss)
            .chain(&self.bullet)
    }
}

/// Complete session state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub level: Level,
    /// Canvas size in pixels
    pub canvas: UVec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub waypoint: Waypoint,
    pub home: Home,
    pub enemies: Collections,
    pub tuning: EnemyTuning,
    phase: GamePhase,
    /// Live enemies in registration order
    registry: Vec<(u32, Collection)>,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session for the given settings, canvas size and seed.
    /// Out-of-range settings are repaired first.
    pub fn new(settings: &Settings, canvas: UVec2, seed: u64) -> Self {
        let settings = settings.clone().validated();
        let canvas = canvas.max(UVec2::ONE);
        let mid_y = (canvas.y / 2) as f32;

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: Level::new(settings.level),
            canvas,
            time_ticks: 0,
            player: Player::new(Vec2::new(settings.player_start_x, mid_y), settings.player_speed),
            waypoint: Waypoint::default(),
            home: Home::new(
                Vec2::new(canvas.x as f32 - settings.home_inset, mid_y),
                settings.home_size,
            ),
            enemies: Collections::default(),
            tuning: settings.enemies.clone(),
            phase: GamePhase::Running,
            registry: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Snapshot of what enemies read from the session
    pub fn view(&self) -> SessionView {
        SessionView {
            player: self.player.pos,
            canvas: self.canvas.as_vec2(),
            canvas_size: self.canvas,
        }
    }

    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Live enemy ids with their collection, oldest first
    pub fn registry(&self) -> &[(u32, Collection)] {
        &self.registry
    }

    pub fn enemy(&self, id: u32) -> Option<&Enemy> {
        let &(_, collection) = self.registry.iter().find(|(eid, _)| *eid == id)?;
        self.enemies.get(collection).iter().find(|e| e.id == id)
    }

    /// Insert an enemy into the collection for its archetype and register
    /// it for updates. Returns the assigned id.
    pub fn add_enemy(&mut self, mut enemy: Enemy) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        enemy.id = id;

        let archetype = enemy.archetype();
        let collection = archetype.collection();
        log::debug!("Spawn {archetype:?} #{id} at {} (tick {})", enemy.pos, self.time_ticks);
        self.enemies.get_mut(collection).push(enemy);
        self.registry.push((id, collection));
        self.events.push(GameEvent::Spawned {
            id,
            archetype,
            tick: self.time_ticks,
        });
        id
    }

    /// Remove an enemy from play. Unknown ids are ignored.
    pub fn remove_enemy(&mut self, id: u32) -> Option<Enemy> {
        let slot = self.registry.iter().position(|(eid, _)| *eid == id)?;
        let (_, collection) = self.registry.remove(slot);
        let list = self.enemies.get_mut(collection);
        let index = list.iter().position(|e| e.id == id)?;
        let enemy = list.remove(index);

        log::debug!("Despawn {:?} #{id} (tick {})", enemy.archetype(), self.time_ticks);
        self.events.push(GameEvent::Despawned {
            id,
            archetype: enemy.archetype(),
            tick: self.time_ticks,
        });
        Some(enemy)
    }

    /// Enter the won state. No-op (returns false) once the session ended.
    pub fn win(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = GamePhase::Won;
        log::info!("Player reached home at tick {}", self.time_ticks);
        self.events.push(GameEvent::Won { tick: self.time_ticks });
        true
    }

    /// Enter the lost state. No-op (returns false) once the session ended.
    pub fn lose(&mut self, enemy: u32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = GamePhase::Lost;
        log::info!("Player caught by enemy #{enemy} at tick {}", self.time_ticks);
        self.events.push(GameEvent::Lost {
            tick: self.time_ticks,
            enemy,
        });
        true
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one enemy by a tick and apply what it asks for
    pub(crate) fn update_enemy(&mut self, id: u32, collection: Collection) {
        let view = self.view();
        let Some(enemy) = self
            .enemies
            .get_mut(collection)
            .iter_mut()
            .find(|e| e.id == id)
        else {
            return;
        };
        let outcome = enemy.update(&view, &mut self.rng);

        if let Some(at) = outcome.fire {
            let params = self.tuning.bullet;
            let acceleration = params.speed * self.tuning.bullet_acceleration;
            self.add_enemy(Enemy::new(at, params, Behavior::bullet(acceleration)));
        }
        if outcome.hit_player {
            self.lose(id);
        }
        if outcome.left_canvas {
            self.remove_enemy(id);
        }
    }
}
