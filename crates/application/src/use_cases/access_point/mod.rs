mod start;

pub use start::StartAccessPointUseCase;
