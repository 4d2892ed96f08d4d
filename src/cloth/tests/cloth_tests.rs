use cloth::collision::ColliderKind;
use cloth::config::{ClothConfig, PinMode};
use cloth::mesh::ClothMesh;
use cloth::V3;

#[test]
fn rest_state_is_a_fixed_point() {
	let config = ClothConfig::default()
		.with_size(4, 4)
		.with_stretch_stiffness(1.0)
		.with_shear_stiffness(1.0)
		.with_gravity(V3::new(0., 0., 0.))
		.with_pin_mode(PinMode::None);
	let mut mesh = ClothMesh::new(config).unwrap();
	let initial: Vec<V3> =
		mesh.mesh().particles().iter().map(|p| p.pos).collect();
	for _ in 0..50 {
		mesh.cloth_update();
	}
	let after: Vec<V3> =
		mesh.mesh().particles().iter().map(|p| p.pos).collect();
	assert_eq!(initial, after, "no-op step disturbed a resting sheet");
}

#[test]
fn pinned_corners_anchor_the_sheet() {
	let config = ClothConfig::default()
		.with_size(5, 5)
		.with_pin_mode(PinMode::Corners);
	let mut mesh = ClothMesh::new(config).unwrap();
	let corners = [(0, 0), (0, 4), (4, 0), (4, 4)];
	let initial: Vec<V3> = corners
		.iter()
		.map(|&(r, c)| mesh.mesh().at(r, c).unwrap().pos)
		.collect();
	let center0 = mesh.mesh().at(2, 2).unwrap().pos;
	for _ in 0..100 {
		mesh.cloth_update();
	}
	for (&(r, c), &init) in corners.iter().zip(initial.iter()) {
		assert_eq!(
			mesh.mesh().at(r, c).unwrap().pos,
			init,
			"pinned corner ({}, {}) moved",
			r,
			c
		);
	}
	let center = mesh.mesh().at(2, 2).unwrap().pos;
	assert!(
		center[1] < center0[1] - 0.01,
		"center did not sag: {} -> {}",
		center0[1],
		center[1]
	);
}

#[test]
fn single_pin_sag_scenario() {
	let config = ClothConfig::default()
		.with_size(2, 2)
		.with_spacing(1.0)
		.with_gravity(V3::new(0., -9.8, 0.))
		.with_dt(0.016)
		.with_damping(0.9)
		.with_pin_mode(PinMode::None);
	let mut mesh = ClothMesh::new(config).unwrap();
	mesh.mesh_mut().at_mut(0, 0).unwrap().pinned = true;
	let pin0 = mesh.mesh().at(0, 0).unwrap().pos;
	let b0 = mesh.mesh().at(0, 1).unwrap().pos;
	let c0 = mesh.mesh().at(1, 0).unwrap().pos;
	let d0 = mesh.mesh().at(1, 1).unwrap().pos;
	let free_sep0 = (b0 - c0).magnitude();
	for _ in 0..100 {
		mesh.cloth_update();
	}
	let pin = mesh.mesh().at(0, 0).unwrap().pos;
	let b = mesh.mesh().at(0, 1).unwrap().pos;
	let c = mesh.mesh().at(1, 0).unwrap().pos;
	let d = mesh.mesh().at(1, 1).unwrap().pos;
	assert_eq!(pin, pin0, "pinned corner drifted");
	assert!(b[1] < b0[1] - 0.1, "corner did not fall: y = {}", b[1]);
	assert!(c[1] < c0[1] - 0.1, "corner did not fall: y = {}", c[1]);
	assert!(d[1] < d0[1] - 0.1, "corner did not fall: y = {}", d[1]);
	let free_sep = (b - c).magnitude();
	assert!(
		free_sep < free_sep0,
		"free corners did not draw together: {} -> {}",
		free_sep0,
		free_sep
	);
	// springs resist full collapse
	for (p, q) in [(b, c), (b, d), (c, d), (pin, b), (pin, c), (pin, d)] {
		assert!(
			(p - q).magnitude() > 0.05,
			"particles collapsed together"
		);
	}
}

#[test]
fn pr_model_snapshot_matches_state() {
	let config = ClothConfig::default().with_size(3, 4);
	let mut mesh = ClothMesh::new(config).unwrap();
	mesh.collision_obj_mut().set_plane_y(-1.0);
	mesh.collision_obj_mut().set_active(ColliderKind::Plane, true);
	mesh.collision_obj_mut().set_active(ColliderKind::Cube, true);
	for _ in 0..3 {
		mesh.cloth_update();
	}
	let model = mesh.pr_model();
	assert_eq!(model.particles.len(), 4);
	for (row, line) in model.particles.iter().enumerate() {
		assert_eq!(line.len(), 3);
		for (col, pr) in line.iter().enumerate() {
			let pos: [f32; 3] =
				mesh.mesh().at(row, col).unwrap().pos.into();
			assert_eq!(pr.pos, pos);
		}
	}
	assert_eq!(model.stretch.len(), mesh.stretch_springs().len());
	assert_eq!(model.shear.len(), mesh.shear_springs().len());
	assert_eq!(model.colliders.len(), 2);
	let s = &mesh.stretch_springs()[0];
	let a: [f32; 3] = s.a_position().into();
	let b: [f32; 3] = s.b_position().into();
	assert_eq!(model.stretch[0].a, a);
	assert_eq!(model.stretch[0].b, b);
}
