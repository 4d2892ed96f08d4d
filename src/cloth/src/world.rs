use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime};

use crate::config::ClothConfig;
use crate::controller_message::ControllerMessage;
use crate::error::SimError;
use crate::mesh::ClothMesh;
use protocol::pr_model::PrModel;

pub struct ClothWorld {
	pub ppr: usize,
	pub time_scale: f32,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,

	mesh: ClothMesh,
}

impl ClothWorld {
	pub fn new(config: ClothConfig) -> Result<Self, SimError> {
		Ok(Self {
			ppr: 1,
			time_scale: 1.0,
			forward_frames: -1,
			mesh: ClothMesh::new(config)?,
		})
	}

	pub fn with_ppr(mut self, ppr: usize) -> Self {
		self.ppr = ppr;
		self
	}

	pub fn with_time_scale(mut self, time_scale: f32) -> Self {
		self.time_scale = time_scale;
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	pub fn mesh(&self) -> &ClothMesh {
		&self.mesh
	}

	pub fn mesh_mut(&mut self) -> &mut ClothMesh {
		&mut self.mesh
	}

	pub fn run(&mut self) {
		for _ in 0..self.ppr {
			self.mesh.cloth_update();
		}
	}

	fn handle(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::ToggleCollider(kind) => {
				self.mesh.collision_obj_mut().toggle(kind);
			}
		}
	}

	// fixed-step frame loop, one snapshot per frame, control messages
	// drained strictly between ticks; dropping the receiver stops it
	pub fn run_thread(
		&mut self,
		tx: Sender<PrModel>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut start_time = SystemTime::now();
		let rtime: u64 = (self.mesh.config().dt
			* 1e6 * self.ppr as f32
			* self.time_scale) as u64;
		let mut first_frame = true;
		loop {
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				if !first_frame {
					self.run();
				} else {
					first_frame = false;
				}
				let model = self.mesh.pr_model();
				if tx.send(model).is_err() {
					return;
				}
			}

			let next_time = SystemTime::now();
			let dt = next_time
				.duration_since(start_time)
				.unwrap_or_default()
				.as_micros() as u64;
			while let Ok(msg) = rx.try_recv() {
				self.handle(msg);
			}
			if dt < rtime {
				std::thread::sleep(Duration::from_micros(rtime - dt));
			}
			start_time = next_time;
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::collision::ColliderKind;

	#[test]
	fn test_pause_state_machine() {
		let mut world = ClothWorld::new(ClothConfig::default())
			.unwrap()
			.with_paused();
		assert_eq!(world.forward_frames, 1);
		world.handle(ControllerMessage::TogglePause);
		assert_eq!(world.forward_frames, 0);
		world.handle(ControllerMessage::FrameForward);
		assert_eq!(world.forward_frames, 1);
		world.handle(ControllerMessage::TogglePause);
		assert_eq!(world.forward_frames, 0);
		world.handle(ControllerMessage::TogglePause);
		assert_eq!(world.forward_frames, -1);
		world.handle(ControllerMessage::ToggleCollider(
			ColliderKind::Cube,
		));
		assert!(world
			.mesh()
			.collision_obj()
			.is_active(ColliderKind::Cube));
	}
}
