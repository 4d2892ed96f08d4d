use crate::collision::ColliderKind;

#[derive(Clone, Copy, Debug)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	ToggleCollider(ColliderKind),
}
