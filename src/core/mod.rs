pub mod functions;
pub mod logger;
pub mod script;

pub use crate::domain::model::{Employee, Person, PersonUpdate, ServerConfig};
pub use crate::domain::ports::{Greeter, Loggable};
pub use crate::utils::error::Result;
