//! `ChainDrive` — the ordered cyclic sprocket collection and its belt geometry.
//!
//! Construction runs three passes over the input circles: rotation
//! directions from the local winding at each sprocket, tangent angles for
//! every adjacent pair, then the cumulative length table and the link
//! pitch. The result is immutable; only [`sample`](ChainDrive::sample)
//! takes a varying input.

use crate::errors::DegenerateConfiguration;
use crate::float_types::{PI, Real, tolerance};
use crate::sprocket::Sprocket;
use geo::{Rect, coord};
use nalgebra::Point2;

/// Construction parameters for [`ChainDrive`], replacing the stylistic
/// constants of typical chain-drawing code.
///
/// The defaults pair up deliberately: with `target_pitch = 4π` and
/// `teeth_per_radius = 0.5`, the angle a sprocket turns per link,
/// `pitch / radius ≈ 4π/r`, equals the tooth spacing `2π/(r/2)`, so tooth
/// rendering stays seamless when the sample offset wraps by whole pitches.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Nominal link spacing; the realized pitch is the candidate closest
    /// to this that divides the belt length into a whole number of links.
    pub target_pitch: Real,
    /// Tooth count per unit radius, rounded to the nearest whole tooth.
    /// Cosmetic only.
    pub teeth_per_radius: Real,
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            target_pitch: 4.0 * PI,
            teeth_per_radius: 0.5,
        }
    }
}

/// Cumulative belt length at the end of sprocket i's contact arc and at
/// the end of the straight segment from sprocket i to sprocket i+1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentBounds {
    /// Belt position where sprocket i's contact arc ends.
    pub arc_end: Real,
    /// Belt position where the straight segment to sprocket i+1 ends.
    pub segment_end: Real,
}

/// A closed belt wrapped around a cyclic arrangement of sprockets.
///
/// Built once from `[x, y, radius]` triplets; all tangent geometry,
/// lengths, and the link pitch are derived during construction and never
/// change. Sampling link positions for animation is a read-only query, so
/// sharing a `ChainDrive` across threads needs no locking.
///
/// # Example
/// ```
/// use chaindrive::ChainDrive;
///
/// let drive = ChainDrive::new(&[[0.0, 0.0, 26.0], [120.0, 0.0, 26.0]]).unwrap();
/// let sample = drive.sample(0.0);
/// assert_eq!(sample.points.len(), drive.link_count());
/// ```
#[derive(Debug, Clone)]
pub struct ChainDrive {
    pub(crate) sprockets: Vec<Sprocket>,
    pub(crate) total_length: Real,
    pub(crate) segment_bounds: Vec<SegmentBounds>,
    pub(crate) link_pitch: Real,
    pub(crate) link_count: usize,
}

impl ChainDrive {
    /// Build a chain drive from `[x, y, radius]` triplets with the
    /// default [`ChainConfig`].
    pub fn new(circles: &[[Real; 3]]) -> Result<Self, DegenerateConfiguration> {
        Self::with_config(circles, &ChainConfig::default())
    }

    /// Build a chain drive from `[x, y, radius]` triplets.
    ///
    /// The input order defines the cyclic belt path. If the winding at
    /// the first sprocket turns out counter-clockwise, the remaining
    /// sprockets are re-ordered so the whole cycle is traversed in one
    /// consistent sense; callers should therefore read the normalized
    /// order back via [`sprockets`](Self::sprockets).
    pub fn with_config(
        circles: &[[Real; 3]],
        config: &ChainConfig,
    ) -> Result<Self, DegenerateConfiguration> {
        if circles.len() < 2 {
            return Err(DegenerateConfiguration::TooFewSprockets(circles.len()));
        }
        for (index, circle) in circles.iter().enumerate() {
            if circle[2] <= 0.0 {
                return Err(DegenerateConfiguration::NonPositiveRadius {
                    index,
                    radius: circle[2],
                });
            }
        }

        let mut rims: Vec<(Point2<Real>, Real)> = circles
            .iter()
            .map(|c| (Point2::new(c[0], c[1]), c[2]))
            .collect();
        let mut clockwise = infer_directions(&rims)?;

        // The tangent formulas assume sprocket 0 rotates clockwise and the
        // sequence advances in one winding sense. Re-order and flip when
        // the input winds the other way (polygon-winding normalization).
        if !clockwise[0] {
            rims[1..].reverse();
            clockwise[1..].reverse();
            for flag in &mut clockwise {
                *flag = !*flag;
            }
        }

        let contact = tangent_angles(&rims, &clockwise)?;
        let sprockets: Vec<Sprocket> = rims
            .iter()
            .zip(clockwise.iter())
            .zip(contact.iter())
            .map(|((&(center, radius), &clockwise), &(entry, exit))| {
                let teeth = (radius * config.teeth_per_radius).round() as usize;
                Sprocket::from_contact(center, radius, teeth, clockwise, entry, exit)
            })
            .collect();

        let (segment_bounds, total_length) = measure(&sprockets);
        let (link_pitch, link_count) = choose_pitch(total_length, config.target_pitch);

        Ok(ChainDrive {
            sprockets,
            total_length,
            segment_bounds,
            link_pitch,
            link_count,
        })
    }

    /// The sprockets in normalized belt order.
    pub fn sprockets(&self) -> &[Sprocket] {
        &self.sprockets
    }

    /// Total belt length: every contact arc plus every straight segment,
    /// once around the cycle.
    pub fn total_length(&self) -> Real {
        self.total_length
    }

    /// Cumulative arc/segment length bounds per sprocket;
    /// `segment_bounds()[n-1].segment_end == total_length()`.
    pub fn segment_bounds(&self) -> &[SegmentBounds] {
        &self.segment_bounds
    }

    /// Realized spacing between consecutive link anchors;
    /// `link_pitch() * link_count() as Real == total_length()`.
    pub fn link_pitch(&self) -> Real {
        self.link_pitch
    }

    /// Number of links tiling the belt.
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Axis-aligned bounds spanning every sprocket circle, for scene
    /// framing. Margins are the consumer's business.
    pub fn bounding_box(&self) -> Rect<Real> {
        let mut min_x = Real::MAX;
        let mut min_y = Real::MAX;
        let mut max_x = Real::MIN;
        let mut max_y = Real::MIN;
        for sprocket in &self.sprockets {
            min_x = min_x.min(sprocket.center.x - sprocket.radius);
            min_y = min_y.min(sprocket.center.y - sprocket.radius);
            max_x = max_x.max(sprocket.center.x + sprocket.radius);
            max_y = max_y.max(sprocket.center.y + sprocket.radius);
        }
        Rect::new(
            coord! { x: min_x, y: min_y },
            coord! { x: max_x, y: max_y },
        )
    }
}

/// Rotation direction per sprocket from the local winding test: the 2D
/// cross product of the vectors toward the previous and next centers.
fn infer_directions(
    rims: &[(Point2<Real>, Real)],
) -> Result<Vec<bool>, DegenerateConfiguration> {
    let n = rims.len();

    // Coincident adjacent centers leave the winding test undefined.
    for i in 0..n {
        let j = (i + 1) % n;
        if (rims[j].0 - rims[i].0).norm() < tolerance() {
            return Err(DegenerateConfiguration::CoincidentCenters(rims[i].0));
        }
    }

    let mut clockwise = vec![false; n];
    for i in 0..n {
        let j = (i + 1) % n;
        let k = (j + 1) % n;
        let to_prev = rims[i].0 - rims[j].0;
        let to_next = rims[k].0 - rims[j].0;
        clockwise[j] = to_prev.perp(&to_next) > 0.0;
    }
    Ok(clockwise)
}

/// Raw `(entry, exit)` tangent angles for every sprocket. Pairs rotating
/// the same way take the external tangent; opposite pairs take the
/// internal one, where the belt crosses between the circles.
fn tangent_angles(
    rims: &[(Point2<Real>, Real)],
    clockwise: &[bool],
) -> Result<Vec<(Real, Real)>, DegenerateConfiguration> {
    let n = rims.len();
    let mut contact = vec![(0.0, 0.0); n];
    for i in 0..n {
        let j = (i + 1) % n;
        let v = rims[j].0 - rims[i].0;
        let d = v.norm();
        let a = v.y.atan2(v.x);

        // Adjacent circles must be disjoint: an overlapping pair cannot
        // both carry the belt, whichever tangent its directions call for.
        // `d >= r_i + r_j` also keeps both acos arguments below in domain.
        if d < rims[i].1 + rims[j].1 {
            return Err(DegenerateConfiguration::TangentInfeasible {
                from: i,
                to: j,
                distance: d,
                reach: rims[i].1 + rims[j].1,
            });
        }

        let internal = clockwise[i] != clockwise[j];
        let reach = if internal {
            rims[i].1 + rims[j].1
        } else {
            rims[i].1 - rims[j].1
        };
        let mut phi = (reach / d).acos();
        if !clockwise[i] {
            phi = -phi;
        }
        contact[i].1 = a + phi;
        contact[j].0 = if internal { a + phi - PI } else { a + phi };
    }
    Ok(contact)
}

/// Accumulate arc and segment lengths once around the cycle.
fn measure(sprockets: &[Sprocket]) -> (Vec<SegmentBounds>, Real) {
    let n = sprockets.len();
    let mut bounds = Vec::with_capacity(n);
    let mut length = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let arc_end = length + sprockets[i].wrap_length();
        let segment_end =
            arc_end + (sprockets[j].entry_point - sprockets[i].exit_point).norm();
        bounds.push(SegmentBounds {
            arc_end,
            segment_end,
        });
        length = segment_end;
    }
    (bounds, length)
}

/// Pick the link pitch dividing `total_length` into a whole number of
/// links, as close to `target_pitch` as the division allows. Ties prefer
/// the coarser pitch (fewer links).
fn choose_pitch(total_length: Real, target_pitch: Real) -> (Real, usize) {
    let count = (total_length / target_pitch).floor() as usize;
    if count == 0 {
        // Belts shorter than the target pitch still carry one link.
        return (total_length, 1);
    }
    let coarse = total_length / count as Real;
    let fine = total_length / (count + 1) as Real;
    if (coarse - target_pitch).abs() <= (fine - target_pitch).abs() {
        (coarse, count)
    } else {
        (fine, count + 1)
    }
}
