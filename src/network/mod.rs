pub mod blueprint;
pub mod network;
pub mod spec;

pub use blueprint::NetBlueprint;
pub use network::{ForwardPass, Network};
pub use spec::NetworkSpec;
