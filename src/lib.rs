pub mod sink;
mod aggregate;
mod canon;
mod error;
mod ioutil;
mod progress;
mod reconcile;
mod records;

pub use aggregate::*;
pub use canon::*;
pub use error::Error;
pub use ioutil::magic_open;
pub use progress::*;
pub use reconcile::*;
pub use records::*;
