// adm-domain library entry point
pub mod application;
pub mod errors;
pub mod program;

pub use application::{Application, ApplicationPayload};
pub use errors::DomainError;
pub use program::{FeeItem, Program, ProgramPayload};
