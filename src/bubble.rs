//! Pooled bubble lifecycle controller.
//!
//! Bubbles are pure decoration: no rigid body, no collider, just a transform
//! animated by this module and drawn by the gizmo pass. The whole pool is
//! allocated once at startup; "spawning" a bubble claims a free instance and
//! "despawning" returns it, so steady-state play never touches the allocator.
//!
//! Idle shrimp exhale single bubbles on an irregular cadence; an arm landing
//! a smack on a shrimp knocks out a whole burst at once.

use crate::arm::Arm;
use crate::cadence::SpawnCadence;
use crate::config::SimConfig;
use crate::frustum::FrustumSlice;
use crate::shrimp::Shrimp;
use crate::tween::{Easing, ScalarTween};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

/// Out-of-view parking spot for free bubbles.
const PARKED: Vec3 = Vec3::new(0.0, 1000.0, 0.0);

#[derive(Debug)]
pub enum BubbleState {
    /// In the pool, parked out of view at zero scale.
    Free,
    /// Scaling up in place at the emission point.
    Growing(ScalarTween),
    /// Fully grown, floating up toward the surface.
    Rising,
}

#[derive(Component, Debug)]
pub struct Bubble {
    pub state: BubbleState,
}

/// Free-list over the pre-spawned bubble entities.
#[derive(Resource, Debug, Default)]
pub struct BubblePool {
    free: Vec<Entity>,
}

impl BubblePool {
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

/// Timing state for idle emissions from live shrimp.
#[derive(Resource, Debug)]
pub struct BubbleEmitter(pub SpawnCadence);

impl BubbleEmitter {
    pub fn new(base_interval: f32) -> Self {
        Self(SpawnCadence::new(base_interval))
    }
}

/// Startup system: allocate the whole pool up front.
pub fn spawn_bubble_pool(mut commands: Commands, mut pool: ResMut<BubblePool>) {
    for _ in 0..crate::constants::BUBBLE_POOL_SIZE {
        let entity = commands
            .spawn((
                Transform::from_translation(PARKED).with_scale(Vec3::ZERO),
                GlobalTransform::default(),
                Bubble {
                    state: BubbleState::Free,
                },
            ))
            .id();
        pool.free.push(entity);
    }
}

/// Claim one free bubble and start it growing at `position`.
///
/// Returns false when the pool is exhausted; the emission is simply skipped —
/// nobody counts bubbles.
pub fn emit_bubble(
    pool: &mut BubblePool,
    bubbles: &mut Query<(&mut Bubble, &mut Transform)>,
    config: &SimConfig,
    position: Vec3,
    rng: &mut impl Rng,
) -> bool {
    let Some(entity) = pool.free.pop() else {
        debug!("bubble pool exhausted; skipping emission");
        return false;
    };
    let Ok((mut bubble, mut transform)) = bubbles.get_mut(entity) else {
        return false;
    };

    let blowup_time = config.bubble_blowup_time
        + rng.gen_range(-config.bubble_blowup_jitter..=config.bubble_blowup_jitter);
    transform.translation = position
        + Vec3::new(
            rng.gen_range(-0.3..0.3),
            rng.gen_range(-0.1..0.1),
            rng.gen_range(-0.3..0.3),
        );
    transform.scale = Vec3::ZERO;
    bubble.state = BubbleState::Growing(ScalarTween::new(0.0, 1.0, blowup_time, Easing::QuadOut));
    true
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Exhale a single bubble from a random live shrimp on the irregular cadence.
pub fn bubble_emit_system(
    mut pool: ResMut<BubblePool>,
    mut emitter: ResMut<BubbleEmitter>,
    mut bubbles: Query<(&mut Bubble, &mut Transform)>,
    shrimp: Query<&Transform, (With<Shrimp>, Without<Bubble>)>,
    config: Res<SimConfig>,
    time: Res<Time>,
) {
    let mut rng = rand::thread_rng();
    if !emitter
        .0
        .fire(time.elapsed_secs(), config.bubble_emit_interval, &mut rng)
    {
        return;
    }
    let count = shrimp.iter().count();
    if count == 0 {
        return;
    }
    let Some(mouth) = shrimp.iter().nth(rng.gen_range(0..count)) else {
        return;
    };
    emit_bubble(
        &mut pool,
        &mut bubbles,
        &config,
        mouth.translation,
        &mut rng,
    );
}

/// Knock a burst of bubbles out of any shrimp an arm makes contact with.
pub fn bubble_burst_system(
    mut pool: ResMut<BubblePool>,
    mut bubbles: Query<(&mut Bubble, &mut Transform)>,
    mut collisions: MessageReader<CollisionEvent>,
    arms: Query<(), With<Arm>>,
    shrimp: Query<&Transform, (With<Shrimp>, Without<Bubble>)>,
    config: Res<SimConfig>,
) {
    let mut rng = rand::thread_rng();
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };
        let hit = if arms.contains(*a) {
            shrimp.get(*b).ok()
        } else if arms.contains(*b) {
            shrimp.get(*a).ok()
        } else {
            None
        };
        let Some(hit) = hit else {
            continue;
        };
        let position = hit.translation;
        for _ in 0..config.bubble_burst_count {
            if !emit_bubble(&mut pool, &mut bubbles, &config, position, &mut rng) {
                break;
            }
        }
    }
}

/// Advance every live bubble: grow in place, then rise, then reset above the
/// visible region and rejoin the pool.
pub fn bubble_update_system(
    mut pool: ResMut<BubblePool>,
    mut bubbles: Query<(Entity, &mut Bubble, &mut Transform)>,
    config: Res<SimConfig>,
    slice: Res<FrustumSlice>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    let ceiling = slice.half_height() * config.bubble_cull_margin;

    for (entity, mut bubble, mut transform) in bubbles.iter_mut() {
        match &mut bubble.state {
            BubbleState::Free => {}
            BubbleState::Growing(tween) => {
                tween.advance(dt);
                transform.scale = Vec3::splat(tween.sample());
                if tween.finished() {
                    bubble.state = BubbleState::Rising;
                }
            }
            BubbleState::Rising => {
                transform.translation.y += config.bubble_rise_speed * dt;
                if transform.translation.y > ceiling {
                    bubble.state = BubbleState::Free;
                    transform.translation = PARKED;
                    transform.scale = Vec3::ZERO;
                    pool.free.push(entity);
                }
            }
        }
    }
}
