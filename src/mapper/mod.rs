//! Validated wire payloads to entities, and list filters to query parameters.

mod article;
mod filter;
pub use self::{
  article::*,
  filter::*,
};
