use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
	InvalidGridDimensions,
	InvalidSpacing,
	InvalidMass,
	InvalidStiffness,
	InvalidTimestep,
	InvalidIterations,
	InvalidColliderSize,
	OutOfRange {
		row: usize,
		col: usize,
		rows: usize,
		cols: usize,
	},
}

impl fmt::Display for SimError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SimError::InvalidGridDimensions => {
				write!(f, "grid must be at least 2x2")
			}
			SimError::InvalidSpacing => {
				write!(f, "spacing must be positive and finite")
			}
			SimError::InvalidMass => {
				write!(f, "mass must be positive and finite")
			}
			SimError::InvalidStiffness => {
				write!(f, "stiffness must be in (0, 1]")
			}
			SimError::InvalidTimestep => {
				write!(f, "dt must be positive and finite")
			}
			SimError::InvalidIterations => {
				write!(f, "iteration count must be at least 1")
			}
			SimError::InvalidColliderSize => {
				write!(f, "collider radius/extent must be positive")
			}
			SimError::OutOfRange {
				row,
				col,
				rows,
				cols,
			} => {
				write!(
					f,
					"grid index ({}, {}) out of range for {}x{} grid",
					row, col, rows, cols
				)
			}
		}
	}
}

impl std::error::Error for SimError {}
