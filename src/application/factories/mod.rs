pub mod handler_factory;

pub use handler_factory::HandlerFactory;
