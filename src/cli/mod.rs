pub mod args;
pub mod help;
pub mod play;

pub use args::*;
pub use help::*;
pub use play::*;
