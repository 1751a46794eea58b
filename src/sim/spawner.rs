//! Enemy spawn scheduler
//!
//! Each run tops up the general, patrol and boss populations by at most one
//! enemy each, then re-registers itself with a level-derived delay. Once the
//! session has ended a run does nothing and does not reschedule, which is
//! what stops spawning for good.

use rand::Rng;

use super::enemy::{Behavior, Collection, Enemy, spawn_point};
use super::level::Level;
use super::state::GameState;
use crate::timer::{Timer, TimerQueue};

/// Decides what to spawn and when
#[derive(Debug, Clone)]
pub struct EnemyGenerator {
    level: Level,
}

impl EnemyGenerator {
    /// Create the scheduler and seed its first run
    pub fn new(level: Level, timers: &mut TimerQueue) -> Self {
        let delay = level.initial_spawn_delay_ms();
        log::debug!("Spawner for level {} starts in {delay} ms", level.get());
        timers.after(delay, Timer::SpawnEnemies);
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// One scheduling tick. Returns how many enemies were spawned.
    pub fn run(&self, state: &mut GameState, timers: &mut TimerQueue) -> usize {
        if !state.is_running() {
            log::trace!("Spawner fired after session end; ignoring");
            return 0;
        }

        let level = self.level;
        let mut spawned = 0;

        if state.enemies.len(Collection::General) as f64 <= level.enemy_target() {
            let canvas = state.canvas;
            let rng = state.rng_mut();
            let pos = spawn_point(rng, canvas);
            let enemy = if rng.random_bool(0.5) {
                let behavior = Behavior::wander(rng, canvas);
                Enemy::new(pos, state.tuning.wanderer, behavior)
            } else {
                Enemy::new(pos, state.tuning.chaser, Behavior::Chase)
            };
            state.add_enemy(enemy);
            spawned += 1;
        }

        if state.enemies.len(Collection::Patrol) as f64 <= level.patrol_target() {
            let canvas = state.canvas;
            let (a, b) = (state.tuning.patrol_side_min, state.tuning.patrol_side_max);
            let (side_min, side_max) = (a.min(b), a.max(b));
            let reverse_chance = state.tuning.patrol_reverse_chance;
            let rng = state.rng_mut();
            let pos = spawn_point(rng, canvas);
            let side = rng.random_range(side_min..=side_max) as f32;
            let reverse = rng.random::<f64>() < reverse_chance;
            let behavior = Behavior::patrol(state.home.pos(), side, reverse);
            state.add_enemy(Enemy::new(pos, state.tuning.patroller, behavior));
            spawned += 1;
        }

        if level.boss_gate() && (state.enemies.len(Collection::Boss) as i64) <= level.boss_target() {
            let canvas = state.canvas;
            let pos = spawn_point(state.rng_mut(), canvas);
            let behavior = Behavior::boss(state.tuning.boss_fire_chance);
            state.add_enemy(Enemy::new(pos, state.tuning.boss, behavior));
            spawned += 1;
        }

        let delay = level.spawn_delay_ms();
        log::debug!("Spawned {spawned}, next spawn run in {delay} ms");
        timers.after(delay, Timer::SpawnEnemies);
        spawned
    }
}
