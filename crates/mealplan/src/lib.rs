mod generate;
mod projection;

pub use generate::*;
pub use projection::*;
