mod load_page;

pub use load_page::LoadPortalPageUseCase;
