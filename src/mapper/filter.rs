use crate::forms::filter::FilterQueryDto;
use crate::models::FilterQuery;

/// Articles per page.
pub const PAGE_LIMIT: u64 = 10;

/// Turn a page-based filter into offset/limit query parameters. `page` and
/// `source` are dropped; `source` only picks the endpoint.
///
/// A page that does not hold a number counts as page 1. Fractional pages
/// start at the floor of their offset.
pub fn map_filter_to_dto(filter: &FilterQuery) -> FilterQueryDto {
  let page = filter.page_number().unwrap_or(1.0);
  let offset = ((page - 1.0) * PAGE_LIMIT as f64).floor().max(0.0) as u64;

  FilterQueryDto {
    offset,
    limit: PAGE_LIMIT,
    tag: filter.tag.clone(),
    author: filter.author.clone(),
    favorited: filter.favorited.clone(),
  }
}

impl From<&FilterQuery> for FilterQueryDto {
  fn from(filter: &FilterQuery) -> Self {
    map_filter_to_dto(filter)
  }
}
