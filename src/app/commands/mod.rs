pub mod grid;
pub mod inputs;
pub mod stage;
pub mod textures;
pub mod vectors;
pub mod worker_pool;
