pub mod access_point;
pub mod portal;

// Re-export use cases
pub use access_point::StartAccessPointUseCase;
pub use portal::LoadPortalPageUseCase;
