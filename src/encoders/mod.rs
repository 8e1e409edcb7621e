pub mod codec;
pub mod errors;
pub mod scalar;
pub mod stream;

pub use codec::{Backend, Codec};
pub use errors::{ErrorKind, RcnbError};
