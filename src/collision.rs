//! Collision-group registry and contact coefficients.
//!
//! Every entity class gets a disjoint power-of-two Rapier [`Group`] bit and a
//! `collide_with` mask computed on read from the peers it is allowed to touch.
//! The masks intentionally reference each other (shrimp list arms, arms list
//! shrimp); computing them per call keeps the definitions declarative with no
//! initialization-order concerns.
//!
//! Bit 1 is reserved (Rapier's default group for colliders that never opt in
//! to filtering), so the first registered class gets id 2.

use bevy_rapier3d::prelude::{CollisionGroups, Group};

/// The entity classes participating in collision filtering.
///
/// Order matters: a class's bit is derived from its position here, and the
/// resulting ids are stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Shrimp,
    Vehicle,
    Delimiter,
    Arm,
    Head,
    Bubble,
}

impl Layer {
    /// Every registered class, in registration order.
    pub const ALL: [Layer; 6] = [
        Layer::Shrimp,
        Layer::Vehicle,
        Layer::Delimiter,
        Layer::Arm,
        Layer::Head,
        Layer::Bubble,
    ];

    /// The class's unique power-of-two group bit. First class gets 2.
    pub fn id(self) -> Group {
        Group::from_bits_truncate(1 << (self as u32 + 1))
    }

    /// Which groups this class may physically interact with.
    ///
    /// Pairs are declared symmetrically except for the intentional
    /// exclusions: delimiters and the head only confine/bump the swimming
    /// bodies (shrimp and vehicles), never the arms; bubbles are visual-only
    /// and collide with nothing.
    pub fn collide_with(self) -> Group {
        match self {
            Layer::Shrimp => {
                Layer::Arm.id()
                    | Layer::Delimiter.id()
                    | Layer::Shrimp.id()
                    | Layer::Head.id()
                    | Layer::Vehicle.id()
            }
            Layer::Vehicle => {
                Layer::Arm.id()
                    | Layer::Head.id()
                    | Layer::Shrimp.id()
                    | Layer::Vehicle.id()
                    | Layer::Delimiter.id()
            }
            Layer::Delimiter => Layer::Shrimp.id() | Layer::Vehicle.id(),
            Layer::Arm => Layer::Shrimp.id() | Layer::Arm.id() | Layer::Vehicle.id(),
            Layer::Head => Layer::Shrimp.id() | Layer::Vehicle.id(),
            Layer::Bubble => Group::NONE,
        }
    }

    /// Ready-to-insert Rapier filter component for this class.
    pub fn groups(self) -> CollisionGroups {
        CollisionGroups::new(self.id(), self.collide_with())
    }
}

// ── Contact coefficients ──────────────────────────────────────────────────────

/// Friction/restitution pair for a specific class-vs-class contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactCoefficients {
    pub friction: f32,
    pub restitution: f32,
}

/// World-level default used for any pair without an explicit entry.
pub const DEFAULT_CONTACT: ContactCoefficients = ContactCoefficients {
    friction: 0.3,
    restitution: 0.3,
};

/// Per-pair contact coefficients. Pairs not listed fall back to
/// [`DEFAULT_CONTACT`]. Lookup is order-insensitive.
pub fn contact_coefficients(a: Layer, b: Layer) -> ContactCoefficients {
    use Layer::*;
    let pair = |x: Layer, y: Layer| (a == x && b == y) || (a == y && b == x);

    if pair(Shrimp, Shrimp) {
        // Shrimp pile up on each other: grippy, a bit bouncy.
        ContactCoefficients {
            friction: 0.8,
            restitution: 0.5,
        }
    } else if pair(Shrimp, Delimiter) || pair(Vehicle, Delimiter) {
        // Invisible walls: frictionless, elastic.
        ContactCoefficients {
            friction: 0.0,
            restitution: 1.0,
        }
    } else if pair(Shrimp, Head) || pair(Vehicle, Head) {
        ContactCoefficients {
            friction: 0.1,
            restitution: 0.1,
        }
    } else if pair(Shrimp, Arm) || pair(Vehicle, Arm) {
        ContactCoefficients {
            friction: 0.4,
            restitution: 0.4,
        }
    } else {
        DEFAULT_CONTACT
    }
}

/// Coefficients a freshly spawned collider of this class should carry.
///
/// Rapier combines per-collider coefficients at contact time, so each class
/// carries the values of its dominant declared pair (self-contact for the
/// swimming bodies, wall contact for delimiters).
pub fn surface(layer: Layer) -> ContactCoefficients {
    match layer {
        Layer::Shrimp => contact_coefficients(Layer::Shrimp, Layer::Shrimp),
        Layer::Vehicle => contact_coefficients(Layer::Vehicle, Layer::Arm),
        Layer::Delimiter => contact_coefficients(Layer::Shrimp, Layer::Delimiter),
        Layer::Arm => contact_coefficients(Layer::Shrimp, Layer::Arm),
        Layer::Head => contact_coefficients(Layer::Shrimp, Layer::Head),
        Layer::Bubble => DEFAULT_CONTACT,
    }
}
