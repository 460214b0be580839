//! Frame driver — the core of the game.
//!
//! `GameEngine` owns the hecs world and all session state, runs the
//! gameplay systems in fixed order each frame, and returns a HUD snapshot.
//! The caller supplies `dt` and an `InputState`; rendering goes through a
//! `RenderSink` on demand. Same seed, same inputs, same frames.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, trace};

use holdout_core::constants::{
    FIRE_COOLDOWN_SECS, PLAYER_PROJECTILE_DAMAGE, PLAYER_PROJECTILE_SPEED,
};
use holdout_core::events::GameEvent;
use holdout_core::input::InputState;
use holdout_core::render::{Color, RenderSink};
use holdout_core::state::HudSnapshot;
use holdout_core::types::{Position, Viewport};

use crate::parallel::WorkerPools;
use crate::spawn;
use crate::systems;

/// How per-frame system batches are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecMode {
    /// Canonical single-threaded path.
    #[default]
    Serial,
    /// Fork-join batches on dedicated worker pools, joined per stage.
    Parallel,
}

/// Configuration for a new session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed. Spawn placement is the only randomness in the engine.
    pub seed: u64,
    /// Viewport dimensions reported by the render backend.
    pub viewport: Viewport,
    pub exec: ExecMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
            exec: ExecMode::Serial,
        }
    }
}

/// The frame driver. Owns the registry and the session counters.
pub struct GameEngine {
    world: World,
    rng: ChaCha8Rng,
    viewport: Viewport,
    pools: Option<WorkerPools>,
    kill_count: u32,
    survival_secs: f32,
    game_over: bool,
    fire_timer: f32,
    events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let pools = match config.exec {
            ExecMode::Serial => None,
            ExecMode::Parallel => match WorkerPools::new() {
                Ok(pools) => {
                    debug!(workers = pools.workers(), "worker pools ready");
                    Some(pools)
                }
                Err(err) => {
                    error!("worker pool setup failed, running serial: {err}");
                    None
                }
            },
        };

        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            viewport: config.viewport,
            pools,
            kill_count: 0,
            survival_secs: 0.0,
            game_over: false,
            fire_timer: 0.0,
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one frame. `dt` is the caller-supplied
    /// elapsed time in seconds; integration uses it directly, with no
    /// fixed-step accumulation. After game over only the snapshot is
    /// produced; the world stays frozen.
    pub fn frame(&mut self, input: &InputState, dt: f32) -> HudSnapshot {
        trace!(dt, game_over = self.game_over, "frame");

        if !self.game_over {
            self.survival_secs += dt;

            // 1. Player control.
            self.fire_timer += dt;
            let request = systems::player_control::run(&mut self.world, input, self.viewport);
            if let Some(request) = request {
                if self.fire_timer >= FIRE_COOLDOWN_SECS {
                    self.fire_timer = 0.0;
                    self.spawn_projectile(
                        request.from,
                        request.toward,
                        PLAYER_PROJECTILE_DAMAGE,
                        PLAYER_PROJECTILE_SPEED,
                        (20.0, 20.0),
                        Color::YELLOW,
                    );
                    self.events.push(GameEvent::ShotFired);
                }
            }

            // 2. Steering.
            systems::steering::run(&mut self.world);

            // 3. Physics integration, fully joined before the detectors.
            match &self.pools {
                Some(pools) => systems::physics::run_parallel(
                    &mut self.world,
                    self.viewport,
                    dt,
                    &pools.physics,
                ),
                None => systems::physics::run(&mut self.world, self.viewport, dt),
            }

            // 4. Player-vs-hostile detection. Serial by design: the early
            //    exit on player death is defined in registry order.
            systems::player_contact::run(&mut self.world, &mut self.game_over, &mut self.events);
            if self.game_over {
                debug!(survival_secs = self.survival_secs, "game over");
                self.events.push(GameEvent::GameOver {
                    survival_secs: self.survival_secs,
                });
            }

            // 5. Projectile-vs-hostile detection. Kill partials merge here.
            let kills = match &self.pools {
                Some(pools) => systems::projectile_hits::run_parallel(
                    &mut self.world,
                    self.game_over,
                    &pools.collision,
                ),
                None => systems::projectile_hits::run(&mut self.world, self.game_over),
            };
            for _ in 0..kills {
                self.kill_count += 1;
                self.events.push(GameEvent::HostileDown {
                    kill_count: self.kill_count,
                });
            }
        }

        // 6. Statistics snapshot; events drain into it.
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.kill_count,
            self.survival_secs,
            self.game_over,
            events,
        )
    }

    /// Draw the world: sprites, health bars, render hooks.
    pub fn render(&mut self, sink: &mut dyn RenderSink) {
        systems::render::run(&mut self.world, sink);
    }

    /// Spawn the player at the viewport center.
    pub fn spawn_player(&mut self) -> Entity {
        let center = Position::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        self.spawn_player_at(center)
    }

    pub fn spawn_player_at(&mut self, position: Position) -> Entity {
        spawn::spawn_player(&mut self.world, position)
    }

    /// Spawn a hostile on a random viewport edge, outside the visible area.
    pub fn spawn_hostile(
        &mut self,
        health: i32,
        speed: f32,
        size: (f32, f32),
        color: Color,
    ) -> Entity {
        spawn::spawn_hostile(
            &mut self.world,
            &mut self.rng,
            self.viewport,
            health,
            speed,
            size,
            color,
        )
    }

    /// Spawn a hostile at an explicit position.
    pub fn spawn_hostile_at(
        &mut self,
        position: Position,
        health: i32,
        speed: f32,
        size: (f32, f32),
        color: Color,
    ) -> Entity {
        spawn::spawn_hostile_at(&mut self.world, position, health, speed, size, color)
    }

    /// Spawn a projectile heading from `start` toward `target`.
    pub fn spawn_projectile(
        &mut self,
        start: Position,
        target: Position,
        damage: i32,
        speed: f32,
        size: (f32, f32),
        color: Color,
    ) -> Entity {
        spawn::spawn_projectile(&mut self.world, start, target, damage, speed, size, color)
    }

    pub fn kill_count(&self) -> u32 {
        self.kill_count
    }

    pub fn survival_time_secs(&self) -> f32 {
        self.survival_secs
    }

    pub fn live_enemy_count(&self) -> u32 {
        systems::snapshot::live_enemy_count(&self.world)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
