#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod cancellation;
mod error;
mod exercise;
mod muscle;
mod name;
mod plan;
mod selection;
mod service;
mod settings;

pub use cancellation::*;
pub use error::*;
pub use exercise::*;
pub use muscle::*;
pub use name::*;
pub use plan::*;
pub use selection::*;
pub use service::*;
pub use settings::*;
