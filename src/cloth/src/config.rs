use crate::error::SimError;
use crate::V3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinMode {
	None,
	Corners,
	TopRow,
}

#[derive(Clone, Copy, Debug)]
pub struct ClothConfig {
	pub cols: usize,
	pub rows: usize,
	pub spacing: f32,
	// y of the flat sheet at rest
	pub height: f32,
	pub mass: f32,
	pub stretch_stiffness: f32,
	pub shear_stiffness: f32,
	pub gravity: V3,
	pub damping: f32,
	pub dt: f32,
	pub iterations: usize,
	// per-step displacement clamp, infinity disables
	pub max_dp: f32,
	pub pin_mode: PinMode,
}

impl Default for ClothConfig {
	fn default() -> Self {
		Self {
			cols: 20,
			rows: 20,
			spacing: 0.2,
			height: 0.0,
			mass: 1.0,
			stretch_stiffness: 0.9,
			shear_stiffness: 0.9,
			gravity: V3::new(0., -9.8, 0.),
			damping: 0.99,
			dt: 0.016,
			iterations: 10,
			max_dp: f32::INFINITY,
			pin_mode: PinMode::Corners,
		}
	}
}

impl ClothConfig {
	pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
		self.cols = cols;
		self.rows = rows;
		self
	}

	pub fn with_spacing(mut self, spacing: f32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn with_height(mut self, height: f32) -> Self {
		self.height = height;
		self
	}

	pub fn with_mass(mut self, mass: f32) -> Self {
		self.mass = mass;
		self
	}

	pub fn with_stretch_stiffness(mut self, k: f32) -> Self {
		self.stretch_stiffness = k;
		self
	}

	pub fn with_shear_stiffness(mut self, k: f32) -> Self {
		self.shear_stiffness = k;
		self
	}

	pub fn with_gravity(mut self, gravity: V3) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_max_dp(mut self, max_dp: f32) -> Self {
		self.max_dp = max_dp;
		self
	}

	pub fn with_pin_mode(mut self, pin_mode: PinMode) -> Self {
		self.pin_mode = pin_mode;
		self
	}

	pub fn validate(&self) -> Result<(), SimError> {
		if self.cols < 2 || self.rows < 2 {
			return Err(SimError::InvalidGridDimensions);
		}
		if !(self.spacing > 0f32) || !self.spacing.is_finite() {
			return Err(SimError::InvalidSpacing);
		}
		if !(self.mass > 0f32) || !self.mass.is_finite() {
			return Err(SimError::InvalidMass);
		}
		for k in [self.stretch_stiffness, self.shear_stiffness] {
			if !(k > 0f32) || k > 1f32 {
				return Err(SimError::InvalidStiffness);
			}
		}
		if !(self.dt > 0f32) || !self.dt.is_finite() {
			return Err(SimError::InvalidTimestep);
		}
		if self.iterations == 0 {
			return Err(SimError::InvalidIterations);
		}
		Ok(())
	}
}
