mod article;
mod filter;
pub use self::{
  article::*,
  filter::*,
};
