//! Fixed timestep simulation tick
//!
//! Updates every live element once, in registration order: waypoint, home,
//! player, then enemies oldest first. Enemies spawned during a tick are first
//! updated on the following one.

use glam::Vec2;

use super::state::GameState;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer click; moves and activates the waypoint
    pub click: Option<Vec2>,
}

/// Advance the session by one tick. Does nothing once the session ended.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }
    if let Some(pos) = input.click {
        state.waypoint.activate(pos);
    }

    state.time_ticks += 1;

    // Waypoint and home are static; the player checks home before moving
    if state.home.contains(state.player.pos) {
        state.win();
        return;
    }
    state.player.follow(&mut state.waypoint);

    let order = state.registry().to_vec();
    for (id, collection) in order {
        if !state.is_running() {
            break;
        }
        state.update_enemy(id, collection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ArchetypeParams, Settings};
    use crate::sim::{Behavior, Collection, Color, Enemy, GameEvent, GamePhase};
    use glam::UVec2;

    fn state() -> GameState {
        GameState::new(&Settings::default(), UVec2::new(800, 600), 777)
    }

    fn params(size: f32, speed: f32) -> ArchetypeParams {
        ArchetypeParams::new(size, Color::Green, speed)
    }

    #[test]
    fn test_click_moves_player() {
        let mut s = state();
        let click = TickInput {
            click: Some(Vec2::new(50.0, 100.0)),
        };
        tick(&mut s, &click);
        assert_eq!(s.player.pos, Vec2::new(50.0, 295.0));
        tick(&mut s, &TickInput::default());
        assert_eq!(s.player.pos, Vec2::new(50.0, 290.0));
        assert_eq!(s.time_ticks, 2);
    }

    #[test]
    fn test_chaser_contact_loses_next_tick() {
        let mut s = state();
        s.player.pos = Vec2::new(105.0, 100.0);
        let id = s.add_enemy(Enemy::new(Vec2::new(100.0, 100.0), params(20.0, 3.0), Behavior::Chase));
        s.drain_events();

        tick(&mut s, &TickInput::default());
        assert_eq!(s.phase(), GamePhase::Lost);
        assert_eq!(s.drain_events(), vec![GameEvent::Lost { tick: 1, enemy: id }]);

        // Further ticks change nothing
        let pos = s.enemy(id).unwrap().pos;
        for _ in 0..10 {
            tick(&mut s, &TickInput::default());
        }
        assert_eq!(s.time_ticks, 1);
        assert_eq!(s.enemy(id).unwrap().pos, pos);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_two_touching_enemies_lose_once() {
        let mut s = state();
        s.player.pos = Vec2::new(200.0, 200.0);
        let first = s.add_enemy(Enemy::new(Vec2::new(198.0, 200.0), params(20.0, 1.0), Behavior::Chase));
        s.add_enemy(Enemy::new(Vec2::new(202.0, 200.0), params(20.0, 1.0), Behavior::Chase));
        s.drain_events();

        tick(&mut s, &TickInput::default());
        let events = s.drain_events();
        assert_eq!(events, vec![GameEvent::Lost { tick: 1, enemy: first }]);
    }

    #[test]
    fn test_player_at_home_wins() {
        let mut s = state();
        s.player.pos = s.home.pos();
        tick(&mut s, &TickInput::default());
        assert_eq!(s.phase(), GamePhase::Won);
        assert!(!s.lose(0));
    }

    #[test]
    fn test_click_after_win_is_ignored() {
        let mut s = state();
        s.win();
        let start = s.player.pos;

        let input = TickInput {
            click: Some(Vec2::new(300.0, 300.0)),
        };
        tick(&mut s, &input);
        assert!(!s.waypoint.is_active());
        assert_eq!(s.player.pos, start);
        assert_eq!(s.time_ticks, 0);
    }

    #[test]
    fn test_bullet_despawns_when_leaving_canvas() {
        let mut s = state();
        s.player.pos = Vec2::new(400.0, 300.0);
        let id = s.add_enemy(Enemy::new(
            Vec2::new(799.0, 300.0),
            params(10.0, 2.0),
            Behavior::Bullet {
                vel: Vec2::new(3.0, 0.0),
                acceleration: 0.2,
            },
        ));
        s.drain_events();

        tick(&mut s, &TickInput::default());
        // 799 + (3.0 - 0.2) leaves [0, 800]
        assert!(s.enemy(id).is_none());
        assert_eq!(s.enemies.len(Collection::Bullet), 0);
        assert!(s.registry().is_empty());
        assert!(matches!(
            s.drain_events().as_slice(),
            [GameEvent::Despawned { id: gone, tick: 1, .. }] if *gone == id
        ));
        assert!(s.is_running());
    }

    #[test]
    fn test_bullet_inside_canvas_stays() {
        let mut s = state();
        s.player.pos = Vec2::new(400.0, 300.0);
        let id = s.add_enemy(Enemy::new(Vec2::new(700.0, 300.0), params(10.0, 2.0), Behavior::bullet(0.2)));
        tick(&mut s, &TickInput::default());
        assert!(s.enemy(id).is_some());
    }

    #[test]
    fn test_new_bullet_waits_for_next_tick() {
        let mut s = state();
        s.player.pos = Vec2::new(400.0, 300.0);
        let boss = s.add_enemy(Enemy::new(Vec2::new(0.0, 300.0), params(20.0, 2.0), Behavior::boss(1.0)));

        tick(&mut s, &TickInput::default());
        let boss_pos = s.enemy(boss).unwrap().pos;
        let bullet = &s.enemies.bullet[0];
        assert_eq!(bullet.pos, boss_pos);
    }
}
