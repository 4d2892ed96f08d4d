use crate::error::SimError;
use crate::grid::ParticleGrid;
use crate::V3;
use protocol::pr_model::PrCollider;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColliderKind {
	Plane,
	Sphere,
	Cube,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
	Plane { y: f32 },
	Sphere { pos: V3, r: f32 },
	Cube { pos: V3, a: f32 },
}

impl Collider {
	// clamp pos out of the solid, true when corrected
	pub fn apply(&self, pos: &mut V3) -> bool {
		match *self {
			Collider::Plane { y } => {
				if pos[1] < y {
					pos[1] = y;
					return true;
				}
				false
			}
			Collider::Sphere { pos: c, r } => {
				let dp = *pos - c;
				let l = dp.magnitude();
				if l >= r {
					return false;
				}
				// a particle at the exact center has no outward axis
				let dir = if l.is_normal() {
					dp / l
				} else {
					V3::new(0., 1., 0.)
				};
				*pos = c + dir * r;
				true
			}
			Collider::Cube { pos: c, a } => {
				let dp = *pos - c;
				if dp[0].abs() >= a || dp[1].abs() >= a || dp[2].abs() >= a {
					return false;
				}
				// push out along the axis of least penetration
				let mut axis = 0;
				let mut depth = a - dp[0].abs();
				for i in 1..3 {
					let d = a - dp[i].abs();
					if d < depth {
						depth = d;
						axis = i;
					}
				}
				pos[axis] = if dp[axis] >= 0f32 {
					c[axis] + a
				} else {
					c[axis] - a
				};
				true
			}
		}
	}
}

// the three primitives in fixed plane, sphere, cube resolve order
pub struct CollisionObj {
	colliders: [Collider; 3],
	active: [bool; 3],
}

impl Default for CollisionObj {
	fn default() -> Self {
		Self {
			colliders: [
				Collider::Plane { y: -2.0 },
				Collider::Sphere {
					pos: V3::new(0., -1., 0.),
					r: 1.0,
				},
				Collider::Cube {
					pos: V3::new(0., -1., 0.),
					a: 0.8,
				},
			],
			active: [false, false, false],
		}
	}
}

fn slot(kind: ColliderKind) -> usize {
	match kind {
		ColliderKind::Plane => 0,
		ColliderKind::Sphere => 1,
		ColliderKind::Cube => 2,
	}
}

impl CollisionObj {
	pub fn is_active(&self, kind: ColliderKind) -> bool {
		self.active[slot(kind)]
	}

	pub fn set_active(&mut self, kind: ColliderKind, on: bool) {
		self.active[slot(kind)] = on;
	}

	pub fn toggle(&mut self, kind: ColliderKind) {
		let idx = slot(kind);
		self.active[idx] = !self.active[idx];
	}

	pub fn get(&self, kind: ColliderKind) -> Collider {
		self.colliders[slot(kind)]
	}

	pub fn set_plane_y(&mut self, y: f32) {
		self.colliders[0] = Collider::Plane { y };
	}

	pub fn set_sphere(&mut self, pos: V3, r: f32) -> Result<(), SimError> {
		if !(r > 0f32) || !r.is_finite() {
			return Err(SimError::InvalidColliderSize);
		}
		self.colliders[1] = Collider::Sphere { pos, r };
		Ok(())
	}

	pub fn set_cube(&mut self, pos: V3, a: f32) -> Result<(), SimError> {
		if !(a > 0f32) || !a.is_finite() {
			return Err(SimError::InvalidColliderSize);
		}
		self.colliders[2] = Collider::Cube { pos, a };
		Ok(())
	}

	// pin state is ignored here, solids push every particle out
	pub fn resolve(&self, grid: &mut ParticleGrid) {
		for p in grid.particles_mut() {
			for i in 0..3 {
				if self.active[i] {
					self.colliders[i].apply(&mut p.pos);
				}
			}
		}
	}

	pub fn pr_colliders(&self) -> Vec<PrCollider> {
		let mut result = Vec::new();
		for i in 0..3 {
			if !self.active[i] {
				continue;
			}
			result.push(match self.colliders[i] {
				Collider::Plane { y } => PrCollider::Plane { y },
				Collider::Sphere { pos, r } => PrCollider::Sphere {
					pos: pos.into(),
					r,
				},
				Collider::Cube { pos, a } => PrCollider::Cube {
					pos: pos.into(),
					a,
				},
			});
		}
		result
	}
}
