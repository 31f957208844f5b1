pub mod dto;
pub mod service;

pub use dto::{MovieDto, MovieForm};
pub use service::MovieService;
