use cloth::collision::ColliderKind;
use cloth::config::{ClothConfig, PinMode};
use cloth::mesh::ClothMesh;
use cloth::V3;

fn run(ticks: usize) -> Vec<V3> {
	let config = ClothConfig::default()
		.with_size(10, 10)
		.with_pin_mode(PinMode::TopRow);
	let mut mesh = ClothMesh::new(config).unwrap();
	mesh.collision_obj_mut()
		.set_sphere(V3::new(0., -1.5, 0.), 1.0)
		.unwrap();
	mesh.collision_obj_mut().set_active(ColliderKind::Sphere, true);
	mesh.collision_obj_mut().set_plane_y(-2.5);
	mesh.collision_obj_mut().set_active(ColliderKind::Plane, true);
	for _ in 0..ticks {
		mesh.cloth_update();
	}
	mesh.mesh().particles().iter().map(|p| p.pos).collect()
}

#[test]
fn identical_runs_are_bit_identical() {
	let a = run(100);
	let b = run(100);
	assert_eq!(a, b);
}
