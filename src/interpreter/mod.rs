mod client;
mod types;

pub use client::{HttpInterpreter, InterpretationService};
pub use types::{ServiceRequest, ServiceResponse};

#[cfg(test)]
pub use client::MockInterpretationService;
