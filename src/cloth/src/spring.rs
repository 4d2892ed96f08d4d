use rand::Rng;

use crate::grid::ParticleGrid;
use crate::V3;

#[derive(Clone, Copy, Debug)]
pub struct Spring {
	a: (usize, usize),
	b: (usize, usize),
	l0: f32,
	stiffness: f32,
	pos_a: V3,
	pos_b: V3,
}

// small random kick to split coincident endpoints
fn rp() -> V3 {
	let mut rng = rand::thread_rng();
	V3::new(
		rng.gen_range(-1e-4f32..1e-4f32),
		rng.gen_range(-1e-4f32..1e-4f32),
		rng.gen_range(-1e-4f32..1e-4f32),
	)
}

impl Spring {
	fn new(
		grid: &ParticleGrid,
		a: (usize, usize),
		b: (usize, usize),
		stiffness: f32,
	) -> Self {
		let pos_a = grid.get(a).pos;
		let pos_b = grid.get(b).pos;
		Self {
			a,
			b,
			l0: (pos_a - pos_b).magnitude(),
			stiffness,
			pos_a,
			pos_b,
		}
	}

	pub fn endpoints(&self) -> ((usize, usize), (usize, usize)) {
		(self.a, self.b)
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	pub fn stiffness(&self) -> f32 {
		self.stiffness
	}

	// cached world positions, refreshed after every step
	pub fn a_position(&self) -> V3 {
		self.pos_a
	}

	pub fn b_position(&self) -> V3 {
		self.pos_b
	}

	fn step(&self, grid: &mut ParticleGrid) {
		let pa = *grid.get(self.a);
		let pb = *grid.get(self.b);
		let imass_a = pa.imass();
		let imass_b = pb.imass();
		let imass = imass_a + imass_b;
		if imass == 0f32 {
			return;
		}
		let dp = pa.pos - pb.pos;
		let l = dp.magnitude();
		if !l.is_normal() {
			eprintln!("WARN: bad spring length {}", l);
			grid.get_mut(self.a).add_pos(rp());
			grid.get_mut(self.b).add_pos(rp());
			return;
		}
		let dl = l - self.l0;
		let correct = -dl * self.stiffness * dp / l;
		grid.get_mut(self.a).add_pos(correct * (imass_a / imass));
		grid.get_mut(self.b).add_pos(-correct * (imass_b / imass));
	}
}

pub(crate) struct SpringSet {
	springs: Vec<Spring>,
}

impl SpringSet {
	// one spring to the +col and +row neighbor of every node
	pub fn stretch(grid: &ParticleGrid, stiffness: f32) -> Self {
		let mut springs = Vec::new();
		for row in 0..grid.rows() {
			for col in 0..grid.cols() {
				if col + 1 < grid.cols() {
					springs.push(Spring::new(
						grid,
						(row, col),
						(row, col + 1),
						stiffness,
					));
				}
				if row + 1 < grid.rows() {
					springs.push(Spring::new(
						grid,
						(row, col),
						(row + 1, col),
						stiffness,
					));
				}
			}
		}
		Self { springs }
	}

	// both diagonals of every lattice cell
	pub fn shear(grid: &ParticleGrid, stiffness: f32) -> Self {
		let mut springs = Vec::new();
		for row in 1..grid.rows() {
			for col in 1..grid.cols() {
				springs.push(Spring::new(
					grid,
					(row - 1, col),
					(row, col - 1),
					stiffness,
				));
				springs.push(Spring::new(
					grid,
					(row - 1, col - 1),
					(row, col),
					stiffness,
				));
			}
		}
		Self { springs }
	}

	pub fn len(&self) -> usize {
		self.springs.len()
	}

	pub fn springs(&self) -> &[Spring] {
		&self.springs
	}

	// one gauss-seidel sweep, corrections land in place
	pub fn relax_pass(&self, grid: &mut ParticleGrid) {
		for s in self.springs.iter() {
			s.step(grid);
		}
	}

	pub fn refresh(&mut self, grid: &ParticleGrid) {
		for s in self.springs.iter_mut() {
			s.pos_a = grid.get(s.a).pos;
			s.pos_b = grid.get(s.b).pos;
		}
	}
}
