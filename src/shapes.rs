//! Cosmetic 2D outlines for sprockets and links as `geo` polygons.
//!
//! Everything here is styling, not belt geometry: the engine never reads
//! these shapes back. Outlines are centered on the origin so a renderer
//! can rotate them by the sampled phase and translate them into place.

use crate::float_types::{FRAC_PI_2, PI, Real, TAU};
use crate::sprocket::Sprocket;
use geo::{LineString, Polygon};

/// Pushes `segments + 1` points of a circular arc from `start` to `end`
/// radians at `radius` around (`cx`, `cy`), including both endpoints.
fn push_arc(
    coords: &mut Vec<(Real, Real)>,
    cx: Real,
    cy: Real,
    radius: Real,
    start: Real,
    end: Real,
    segments: usize,
) {
    for k in 0..=segments {
        let theta = start + (end - start) * (k as Real) / (segments as Real);
        coords.push((cx + radius * theta.cos(), cy + radius * theta.sin()));
    }
}

fn circle_ring(radius: Real, segments: usize) -> LineString<Real> {
    let mut coords: Vec<(Real, Real)> = (0..segments)
        .map(|i| {
            let theta = TAU * (i as Real) / (segments as Real);
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    coords.push(coords[0]);
    LineString::from(coords)
}

impl Sprocket {
    /// The toothed rim outline: alternating valley arcs at
    /// `radius - tooth_depth` and crest arcs at `radius + tooth_depth`,
    /// one crest per tooth, each spanning half the tooth period. The
    /// classic rendering uses `tooth_depth = 2.0`.
    ///
    /// A toothless sprocket (radius small enough that `teeth` rounded to
    /// zero) degrades to a plain circle at `radius`.
    pub fn outline(&self, tooth_depth: Real, segments_per_tooth: usize) -> Polygon<Real> {
        if self.teeth == 0 || segments_per_tooth == 0 {
            return Polygon::new(circle_ring(self.radius, 32), vec![]);
        }

        let teeth = self.teeth as Real;
        let valley = self.radius - tooth_depth;
        let crest = self.radius + tooth_depth;
        let mut coords: Vec<(Real, Real)> =
            Vec::with_capacity(2 * self.teeth * (segments_per_tooth + 1) + 1);
        for i in 0..self.teeth {
            let i = i as Real;
            // Quarter-period boundaries of tooth i; the radial jumps
            // between arcs become the tooth flanks.
            let a1 = PI * (4.0 * i - 1.0) / (2.0 * teeth);
            let a2 = PI * (4.0 * i + 1.0) / (2.0 * teeth);
            let a3 = PI * (4.0 * i + 3.0) / (2.0 * teeth);
            push_arc(&mut coords, 0.0, 0.0, valley, a1, a2, segments_per_tooth);
            push_arc(&mut coords, 0.0, 0.0, crest, a2, a3, segments_per_tooth);
        }
        coords.push(coords[0]);
        Polygon::new(LineString::from(coords), vec![])
    }

    /// The hub overlay: a disc inset from the rim with a small hole at
    /// the center, through which the rim color shows as the axle pin.
    /// The classic rendering uses `inset = 4.5`, `pin_radius = 3.0`.
    pub fn hub_outline(&self, inset: Real, pin_radius: Real, segments: usize) -> Polygon<Real> {
        let disc_radius = (self.radius - inset).max(0.0);
        let pin_radius = pin_radius.min(disc_radius);
        Polygon::new(
            circle_ring(disc_radius, segments),
            vec![circle_ring(pin_radius, segments)],
        )
    }
}

/// A link plate outline: a wide round end at `(-pitch/2, 0)` tapering to
/// a narrow round end at `(pitch/2, 0)`. Centered on the link midpoint,
/// so a renderer positions it at the midpoint of two consecutive sample
/// points and rotates it to their chord angle. Classic widths are
/// `narrow_width = 2.0`, `wide_width = 6.0`.
pub fn link_outline(
    pitch: Real,
    narrow_width: Real,
    wide_width: Real,
    segments: usize,
) -> Polygon<Real> {
    // Half-angle at which the taper lines leave the wide end tangent to
    // the narrow end's width.
    let flare = (narrow_width / wide_width).asin();
    let mut coords: Vec<(Real, Real)> = Vec::with_capacity(2 * segments + 3);
    push_arc(
        &mut coords,
        -pitch / 2.0,
        0.0,
        wide_width / 2.0,
        flare,
        TAU - flare,
        segments,
    );
    push_arc(
        &mut coords,
        pitch / 2.0,
        0.0,
        narrow_width / 2.0,
        -FRAC_PI_2,
        FRAC_PI_2,
        segments,
    );
    coords.push(coords[0]);
    Polygon::new(LineString::from(coords), vec![])
}
