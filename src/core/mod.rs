pub mod constants;
pub mod effects;
pub mod entrance;
pub mod nav;
pub mod scene;
pub mod state;

pub use constants::*;
pub use effects::*;
pub use entrance::*;
pub use nav::*;
pub use scene::*;
pub use state::*;
