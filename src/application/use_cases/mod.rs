pub mod resolve_wwn;

pub use resolve_wwn::ResolveWwnUseCase;
