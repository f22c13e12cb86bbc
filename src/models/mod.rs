mod envelope;
mod overview;
mod stock;
mod ticker;

pub use envelope::*;
pub use overview::*;
pub use stock::*;
pub use ticker::*;
