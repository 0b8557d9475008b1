pub mod landing;
pub mod probe;

#[cfg(feature = "backend")]
pub mod api;
#[cfg(feature = "backend")]
pub mod cli;
#[cfg(feature = "backend")]
pub mod config;
