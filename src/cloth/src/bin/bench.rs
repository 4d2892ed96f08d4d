use std::time::SystemTime;

use cloth::config::ClothConfig;
use cloth::world::ClothWorld;

fn main() {
	let start = SystemTime::now();
	let config = ClothConfig::default().with_size(40, 40);
	let mut world = ClothWorld::new(config).unwrap().with_ppr(10);
	let rframes = 100;
	for _ in 0..rframes {
		world.run();
	}
	let time =
		rframes as f32 * world.mesh().config().dt * world.ppr as f32;
	let duration =
		SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
