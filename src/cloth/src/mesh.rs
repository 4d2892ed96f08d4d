use crate::collision::CollisionObj;
use crate::config::ClothConfig;
use crate::error::SimError;
use crate::grid::ParticleGrid;
use crate::spring::{Spring, SpringSet};
use protocol::pr_model::{PrModel, PrParticle, PrSpring};

pub struct ClothMesh {
	config: ClothConfig,
	grid: ParticleGrid,
	stretch: SpringSet,
	shear: SpringSet,
	collision: CollisionObj,
}

impl ClothMesh {
	pub fn new(config: ClothConfig) -> Result<Self, SimError> {
		let grid = ParticleGrid::new(&config)?;
		let stretch = SpringSet::stretch(&grid, config.stretch_stiffness);
		let shear = SpringSet::shear(&grid, config.shear_stiffness);
		eprintln!(
			"INFO: built {}x{} cloth, {} stretch + {} shear springs",
			config.rows,
			config.cols,
			stretch.len(),
			shear.len()
		);
		Ok(Self {
			config,
			grid,
			stretch,
			shear,
			collision: CollisionObj::default(),
		})
	}

	// one fixed tick: integrate, then iterate relax + collide, then
	// refresh the spring endpoint caches for the renderer
	pub fn cloth_update(&mut self) {
		let c = self.config;
		for p in self.grid.particles_mut() {
			p.update(c.gravity, c.dt, c.damping, c.max_dp);
		}
		for _ in 0..c.iterations {
			self.stretch.relax_pass(&mut self.grid);
			self.shear.relax_pass(&mut self.grid);
			self.collision.resolve(&mut self.grid);
		}
		self.stretch.refresh(&self.grid);
		self.shear.refresh(&self.grid);
	}

	// constraint satisfaction only, stretch before shear each pass
	pub fn relax(&mut self, iterations: usize) {
		for _ in 0..iterations {
			self.stretch.relax_pass(&mut self.grid);
			self.shear.relax_pass(&mut self.grid);
		}
		self.stretch.refresh(&self.grid);
		self.shear.refresh(&self.grid);
	}

	pub fn resolve_collisions(&mut self) {
		self.collision.resolve(&mut self.grid);
		self.stretch.refresh(&self.grid);
		self.shear.refresh(&self.grid);
	}

	pub fn width(&self) -> usize {
		self.grid.cols()
	}

	pub fn height(&self) -> usize {
		self.grid.rows()
	}

	pub fn config(&self) -> &ClothConfig {
		&self.config
	}

	pub fn mesh(&self) -> &ParticleGrid {
		&self.grid
	}

	pub fn mesh_mut(&mut self) -> &mut ParticleGrid {
		&mut self.grid
	}

	pub fn stretch_springs(&self) -> &[Spring] {
		self.stretch.springs()
	}

	pub fn shear_springs(&self) -> &[Spring] {
		self.shear.springs()
	}

	pub fn collision_obj(&self) -> &CollisionObj {
		&self.collision
	}

	pub fn collision_obj_mut(&mut self) -> &mut CollisionObj {
		&mut self.collision
	}

	pub fn pr_model(&self) -> PrModel {
		let mut particles = Vec::with_capacity(self.grid.rows());
		for row in 0..self.grid.rows() {
			let mut line = Vec::with_capacity(self.grid.cols());
			for col in 0..self.grid.cols() {
				line.push(PrParticle::new(self.grid.get((row, col)).pos));
			}
			particles.push(line);
		}
		let segments = |springs: &[Spring]| -> Vec<PrSpring> {
			springs
				.iter()
				.map(|s| PrSpring::new(s.a_position(), s.b_position()))
				.collect()
		};
		PrModel {
			particles,
			stretch: segments(self.stretch.springs()),
			shear: segments(self.shear.springs()),
			colliders: self.collision.pr_colliders(),
		}
	}
}
