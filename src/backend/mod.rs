//! Backend client module for HTTP communication

mod client;
mod error;
mod traits;
mod types;

pub use client::BackendClient;
pub use error::BackendError;
pub use traits::BackendApi;
pub use types::{
    ApiReply, CheckMobileReply, CreateProfileReply, CreateProfileRequest, LoginReply,
    LoginRequest,
};

#[cfg(test)]
pub use traits::MockBackendApi;
