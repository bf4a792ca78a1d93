//! Wire models shared between the web client and the `sadmin` backend.

pub mod admin;
pub mod error;
pub mod institute;

pub use admin::{AdminProfile, AdminUser, ErrorResponse, LoginRequest};
pub use error::ApiError;
pub use institute::{
    InstituteCollection, InstituteStatus, InstituteSummary, StatusUpdateRequest,
};
