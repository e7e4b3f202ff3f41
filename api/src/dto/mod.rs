//! Request and response data transfer objects.

pub mod auth_dto;
pub mod image_dto;
pub mod profile_dto;

pub use auth_dto::{RegisterRequest, SignInRequest, SignInResponse, WhoAmIResponse};
pub use image_dto::{ImageEntryRequest, ImageUrlRequest};
pub use profile_dto::{ProfileFormInput, ProfileUpdateRequest};
