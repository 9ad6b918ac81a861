//! WASM bindings: a flat-array wrapper around [`ChainDrive`] so a browser
//! `requestAnimationFrame` loop can drive the animation.

use crate::chain::ChainDrive;
use crate::float_types::Real;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ChainDriveJs {
    inner: ChainDrive,
}

#[wasm_bindgen]
impl ChainDriveJs {
    /// Builds a chain drive from a flat `[x0, y0, r0, x1, y1, r1, ...]`
    /// array of sprocket triplets.
    #[wasm_bindgen(constructor)]
    pub fn new(triplets: &[f64]) -> Result<ChainDriveJs, JsValue> {
        if triplets.len() % 3 != 0 {
            return Err(JsValue::from_str(
                "Sprocket triplets must be a flat [x, y, radius, ...] array with length divisible by 3",
            ));
        }
        let circles: Vec<[Real; 3]> = triplets
            .chunks_exact(3)
            .map(|c| [c[0] as Real, c[1] as Real, c[2] as Real])
            .collect();
        let inner =
            ChainDrive::new(&circles).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ChainDriveJs { inner })
    }

    #[wasm_bindgen(js_name = totalLength)]
    pub fn total_length(&self) -> f64 {
        self.inner.total_length() as f64
    }

    #[wasm_bindgen(js_name = linkPitch)]
    pub fn link_pitch(&self) -> f64 {
        self.inner.link_pitch() as f64
    }

    #[wasm_bindgen(js_name = linkCount)]
    pub fn link_count(&self) -> usize {
        self.inner.link_count()
    }

    /// Sprockets in normalized belt order, flattened to
    /// `[x, y, radius, teeth, clockwise(0|1), ...]` (five numbers each).
    pub fn sprockets(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.inner.sprockets().len() * 5);
        for sprocket in self.inner.sprockets() {
            flat.push(sprocket.center.x as f64);
            flat.push(sprocket.center.y as f64);
            flat.push(sprocket.radius as f64);
            flat.push(sprocket.teeth as f64);
            flat.push(if sprocket.clockwise { 1.0 } else { 0.0 });
        }
        flat
    }

    /// Bounding box of all sprocket circles as `[min_x, min_y, max_x, max_y]`.
    #[wasm_bindgen(js_name = boundingBox)]
    pub fn bounding_box(&self) -> Vec<f64> {
        let rect = self.inner.bounding_box();
        vec![
            rect.min().x as f64,
            rect.min().y as f64,
            rect.max().x as f64,
            rect.max().y as f64,
        ]
    }

    /// Link anchor points at `offset`, flattened to `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen(js_name = samplePoints)]
    pub fn sample_points(&self, offset: f64) -> Vec<f64> {
        let sample = self.inner.sample(offset as Real);
        let mut flat = Vec::with_capacity(sample.points.len() * 2);
        for point in &sample.points {
            flat.push(point.x as f64);
            flat.push(point.y as f64);
        }
        flat
    }

    /// Sprocket rotation phases at `offset`, one per sprocket in
    /// normalized belt order.
    #[wasm_bindgen(js_name = samplePhases)]
    pub fn sample_phases(&self, offset: f64) -> Vec<f64> {
        self.inner
            .sample(offset as Real)
            .phases
            .iter()
            .map(|&phase| phase as f64)
            .collect()
    }
}
