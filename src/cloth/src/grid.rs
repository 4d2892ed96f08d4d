use crate::config::{ClothConfig, PinMode};
use crate::error::SimError;
use crate::particle::Particle;
use crate::V3;

pub struct ParticleGrid {
	rows: usize,
	cols: usize,
	data: Vec<Particle>,
}

impl ParticleGrid {
	pub fn new(config: &ClothConfig) -> Result<Self, SimError> {
		config.validate()?;
		let rows = config.rows;
		let cols = config.cols;
		// sheet centered on the origin in the xz plane
		let x0 = -(cols as f32 - 1.) * config.spacing / 2.;
		let z0 = -(rows as f32 - 1.) * config.spacing / 2.;
		let mut data = Vec::with_capacity(rows * cols);
		for row in 0..rows {
			for col in 0..cols {
				let pos = V3::new(
					x0 + config.spacing * col as f32,
					config.height,
					z0 + config.spacing * row as f32,
				);
				data.push(Particle::new(pos, config.mass));
			}
		}
		let mut grid = Self { rows, cols, data };
		match config.pin_mode {
			PinMode::None => {}
			PinMode::Corners => {
				for rc in [
					(0, 0),
					(0, cols - 1),
					(rows - 1, 0),
					(rows - 1, cols - 1),
				] {
					grid.get_mut(rc).pinned = true;
				}
			}
			PinMode::TopRow => {
				for col in 0..cols {
					grid.get_mut((0, col)).pinned = true;
				}
			}
		}
		Ok(grid)
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn cols(&self) -> usize {
		self.cols
	}

	pub fn at(&self, row: usize, col: usize) -> Result<&Particle, SimError> {
		if row >= self.rows || col >= self.cols {
			return Err(SimError::OutOfRange {
				row,
				col,
				rows: self.rows,
				cols: self.cols,
			});
		}
		Ok(&self.data[row * self.cols + col])
	}

	pub fn at_mut(
		&mut self,
		row: usize,
		col: usize,
	) -> Result<&mut Particle, SimError> {
		if row >= self.rows || col >= self.cols {
			return Err(SimError::OutOfRange {
				row,
				col,
				rows: self.rows,
				cols: self.cols,
			});
		}
		Ok(&mut self.data[row * self.cols + col])
	}

	pub fn particles(&self) -> &[Particle] {
		&self.data
	}

	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.data
	}

	// index-free access for spring topology, coordinates are known valid
	pub(crate) fn get(&self, rc: (usize, usize)) -> &Particle {
		&self.data[rc.0 * self.cols + rc.1]
	}

	pub(crate) fn get_mut(&mut self, rc: (usize, usize)) -> &mut Particle {
		let idx = rc.0 * self.cols + rc.1;
		&mut self.data[idx]
	}
}
