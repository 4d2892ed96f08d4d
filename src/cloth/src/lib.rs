pub mod collision;
pub mod config;
pub mod controller_message;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod particle;
pub mod spring;
pub mod world;

pub type V3 = nalgebra::Vector3<f32>;
