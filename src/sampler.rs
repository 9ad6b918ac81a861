//! Arc-length traversal of the belt path: evenly spaced link anchors and
//! per-sprocket rotation phases for any offset along the belt.

use crate::chain::ChainDrive;
use crate::float_types::{EPSILON, Real};
use nalgebra::Point2;

/// One animation frame's worth of belt state, returned by
/// [`ChainDrive::sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSample {
    /// Exactly `link_count` anchor points, evenly spaced one link pitch
    /// apart along the belt; `points[0]` sits at the sampled offset.
    /// Consecutive points (cyclically) pair up as link endpoints.
    pub points: Vec<Point2<Real>>,
    /// One rotation phase per sprocket, in normalized belt order: the
    /// angle at which the sprocket's contact arc is next sampled. Rotate
    /// the sprocket's teeth to this angle to keep them meshed.
    pub phases: Vec<Real>,
}

impl ChainDrive {
    /// Walk the belt once around and emit the link anchor points and
    /// sprocket phases for the given offset.
    ///
    /// Any finite `offset` is accepted; it is wrapped into
    /// `[0, total_length)` first, so a driver can pass raw
    /// `elapsed_time * speed` and let it grow without bound. The result
    /// is periodic in `total_length`, and advancing the offset by one
    /// link pitch rotates the point sequence by exactly one index.
    ///
    /// Pure: identical offsets give identical samples, and concurrent
    /// calls on a shared `ChainDrive` are safe.
    pub fn sample(&self, offset: Real) -> ChainSample {
        let n = self.sprockets.len();
        let mut wrapped = offset.rem_euclid(self.total_length);
        if wrapped >= self.total_length {
            // rem_euclid can land exactly on the modulus for tiny
            // negative offsets.
            wrapped = 0.0;
        }

        // Split off whole pitches: the walk itself runs from the local
        // remainder, and the whole-pitch part becomes an index rotation
        // at the end. fmod is exact while the division rounds, so the
        // shift is derived from the remainder to keep the pair consistent
        // at ulp boundaries.
        let local = wrapped % self.link_pitch;
        let shift = ((wrapped - local) / self.link_pitch).round() as usize;

        let mut points: Vec<Point2<Real>> = Vec::with_capacity(self.link_count);
        let mut phases: Vec<Real> = Vec::with_capacity(n);

        // `total` is the belt position of the next emission; `pending` is
        // how far past the current sprocket's entry tangent it lies.
        let mut total = local;
        let mut pending = local;

        // One lap emits every point except when floating point drift
        // leaves the count one short at the seam; the second lap (bounds
        // shifted by a full belt length) finishes in that case.
        'laps: for lap in 0..2 {
            let base = lap as Real * self.total_length;
            for i in 0..n {
                let j = (i + 1) % n;
                let sprocket = &self.sprockets[i];
                let sign = sprocket.turn_sign();

                let mut phi = sprocket.entry_angle + sign * pending / sprocket.radius;
                if lap == 0 {
                    phases.push(phi);
                }

                let arc_end = base + self.segment_bounds[i].arc_end;
                while total <= arc_end {
                    if points.len() < self.link_count {
                        points.push(sprocket.point_at(phi));
                    }
                    phi += sign * self.link_pitch / sprocket.radius;
                    total += self.link_pitch;
                }

                let segment_end = base + self.segment_bounds[i].segment_end;
                let chord = self.sprockets[j].entry_point - sprocket.exit_point;
                let chord_length = chord.norm();
                let mut along = total - arc_end;
                while total <= segment_end {
                    if points.len() < self.link_count {
                        // Tangent circles leave a zero-length segment;
                        // the exit point itself is the only anchor there.
                        let point = if chord_length > EPSILON {
                            sprocket.exit_point + chord * (along / chord_length)
                        } else {
                            sprocket.exit_point
                        };
                        points.push(point);
                    }
                    along += self.link_pitch;
                    total += self.link_pitch;
                }

                pending = total - segment_end;
                if lap > 0 && points.len() == self.link_count {
                    break 'laps;
                }
            }
            if points.len() == self.link_count {
                break;
            }
        }

        // points[0] currently sits at belt position `local`; rotate so it
        // sits at `wrapped` itself. This is what makes
        // sample(offset + pitch) a one-index rotation of sample(offset).
        points.rotate_left(shift % self.link_count);

        ChainSample { points, phases }
    }
}
