use std::sync::mpsc::channel;

use cloth::collision::ColliderKind;
use cloth::config::ClothConfig;
use cloth::controller_message::ControllerMessage;
use cloth::world::ClothWorld;
use protocol::sock::SockServer;
use protocol::Message;

fn main() {
	let mut world = ClothWorld::new(ClothConfig::default()).unwrap();
	let obj = world.mesh_mut().collision_obj_mut();
	obj.set_plane_y(-2.0);
	obj.set_active(ColliderKind::Plane, true);
	obj.set_active(ColliderKind::Sphere, true);
	let (tx, rx) = channel();
	let (_ctx, crx) = channel::<ControllerMessage>();
	std::thread::spawn(move || world.run_thread(tx, crx));
	let mut sock = SockServer::default();
	for model in rx {
		sock.send_msg(&Message::WorldUpdate(model).to_bytes());
	}
}
