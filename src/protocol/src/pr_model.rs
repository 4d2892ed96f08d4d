// pr_model: cloth state snapshot for rendering

use serde::{Deserialize, Serialize};

use crate::V3;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PrParticle {
	pub pos: [f32; 3],
}

impl PrParticle {
	pub fn new(pos: V3) -> Self {
		Self { pos: pos.into() }
	}
}

// one line segment per spring, endpoints already in world space
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PrSpring {
	pub a: [f32; 3],
	pub b: [f32; 3],
}

impl PrSpring {
	pub fn new(a: V3, b: V3) -> Self {
		Self {
			a: a.into(),
			b: b.into(),
		}
	}
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum PrCollider {
	Plane { y: f32 },
	Sphere { pos: [f32; 3], r: f32 },
	Cube { pos: [f32; 3], a: f32 },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrModel {
	// row-major, rows x cols
	pub particles: Vec<Vec<PrParticle>>,
	pub stretch: Vec<PrSpring>,
	pub shear: Vec<PrSpring>,
	pub colliders: Vec<PrCollider>,
}
