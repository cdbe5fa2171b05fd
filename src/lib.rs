#[macro_use]
extern crate lazy_static;

pub mod error;
pub use error::Error;

mod util;

pub mod schema;

pub mod forms;

pub mod models;

pub mod mapper;

pub mod app;
