//! Struct and functions for working with the `Sprocket`s a belt wraps around.

use crate::float_types::{Real, TAU};
use nalgebra::{Point2, Vector2};

/// A circular sprocket plus the belt-contact data derived for it during
/// [`ChainDrive`](crate::chain::ChainDrive) construction.
///
/// The contact arc runs from `entry_angle` to `exit_angle`, sweeping
/// toward decreasing angles on a clockwise sprocket and increasing angles
/// on a counter-clockwise one.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprocket {
    /// Center of the sprocket circle.
    pub center: Point2<Real>,
    /// Radius of the sprocket circle.
    pub radius: Real,
    /// Cosmetic tooth count; not used by the geometry itself.
    pub teeth: usize,
    /// Rotation direction implied by the belt winding.
    pub clockwise: bool,
    /// Angle (radians, measured from `center`) at which the belt arrives,
    /// reduced to `[0, 2π)`.
    pub entry_angle: Real,
    /// Angle at which the belt departs; within one turn of `entry_angle`
    /// on the rotation-direction side.
    pub exit_angle: Real,
    /// Tangency point with the incoming straight segment.
    pub entry_point: Point2<Real>,
    /// Tangency point with the outgoing straight segment.
    pub exit_point: Point2<Real>,
}

impl Sprocket {
    /// Finish a sprocket from its raw tangent angles: normalizes the pair
    /// (see [`normalize_contact_angles`]) and derives the tangency points.
    pub(crate) fn from_contact(
        center: Point2<Real>,
        radius: Real,
        teeth: usize,
        clockwise: bool,
        entry_angle: Real,
        exit_angle: Real,
    ) -> Self {
        let (entry_angle, exit_angle) =
            normalize_contact_angles(entry_angle, exit_angle, clockwise);
        Sprocket {
            center,
            radius,
            teeth,
            clockwise,
            entry_angle,
            exit_angle,
            entry_point: point_on_circle(center, radius, entry_angle),
            exit_point: point_on_circle(center, radius, exit_angle),
        }
    }

    /// Point on the sprocket circle at `angle` radians from the center.
    pub fn point_at(&self, angle: Real) -> Point2<Real> {
        point_on_circle(self.center, self.radius, angle)
    }

    /// Angular span of the contact arc, in `[0, 2π)`.
    pub fn contact_span(&self) -> Real {
        (self.exit_angle - self.entry_angle).abs()
    }

    /// Length of belt in contact with this sprocket.
    pub fn wrap_length(&self) -> Real {
        self.contact_span() * self.radius
    }

    /// The sign with which angles advance along the belt direction:
    /// `-1` on a clockwise sprocket, `+1` on a counter-clockwise one.
    pub fn turn_sign(&self) -> Real {
        if self.clockwise { -1.0 } else { 1.0 }
    }
}

#[inline]
fn point_on_circle(center: Point2<Real>, radius: Real, angle: Real) -> Point2<Real> {
    center + Vector2::new(angle.cos(), angle.sin()) * radius
}

/// Reduce a raw `(entry, exit)` tangent-angle pair to the canonical
/// window: `entry` lands in `[0, 2π)`, and `exit` is shifted by whole
/// turns until
///
/// - clockwise: `entry − 2π < exit ≤ entry`
/// - counter-clockwise: `entry ≤ exit < entry + 2π`
///
/// which pins the contact arc to the belt-consistent sweep of less than
/// one full turn. This is the tie-break rule for every angular
/// computation downstream.
pub(crate) fn normalize_contact_angles(
    entry: Real,
    exit: Real,
    clockwise: bool,
) -> (Real, Real) {
    let mut entry = entry.rem_euclid(TAU);
    if entry >= TAU {
        // rem_euclid lands on the modulus itself for tiny negatives.
        entry = 0.0;
    }
    let mut exit = exit % TAU;
    if clockwise {
        while exit > entry {
            exit -= TAU;
        }
        while exit <= entry - TAU {
            exit += TAU;
        }
    } else {
        while exit < entry {
            exit += TAU;
        }
        while exit >= entry + TAU {
            exit -= TAU;
        }
    }
    (entry, exit)
}
