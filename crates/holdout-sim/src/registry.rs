//! Registry helpers over the hecs world.
//!
//! The world is the live entity registry: `World::spawn` inserts a fully
//! assembled component bundle, typed queries are the per-kind views, and
//! iteration within an archetype follows insertion order because entities
//! are soft-deleted via `Active(false)`, never despawned mid-session.
//! Component absence is a skip condition, never an error.

use hecs::{Entity, World};

use holdout_core::components::{Active, Name, Player};

/// True if the entity exists and its activity flag is set.
pub fn is_active(world: &World, entity: Entity) -> bool {
    matches!(world.get::<&Active>(entity), Ok(active) if active.0)
}

/// First active entity carrying the given name, in registry order.
pub fn find_active_by_name(world: &World, name: &str) -> Option<Entity> {
    let mut query = world.query::<(&Name, &Active)>();
    let found = query
        .iter()
        .find(|(_, (n, active))| active.0 && n.0 == name)
        .map(|(entity, _)| entity);
    found
}

/// The active player entity, if any.
pub fn find_active_player(world: &World) -> Option<Entity> {
    let mut query = world.query::<(&Player, &Active)>();
    let found = query
        .iter()
        .find(|(_, (_, active))| active.0)
        .map(|(entity, _)| entity);
    found
}
