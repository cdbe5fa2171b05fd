use log::*;

use clap::ArgMatches;
use serde_json::json;

use crate::error::*;
use crate::app::*;
use crate::forms::*;
use crate::mapper::*;
use crate::models::*;
use crate::schema::*;

pub fn execute(config: &AppConfig, cli: &ArgMatches) -> Result<()> {
  let registry = Registry::new(config.registry_options()?);
  let input = commands::read_input(cli.value_of("file"))?;

  let output = match cli.value_of("kind").unwrap_or_default() {
    "article" => {
      let res = registry.parse::<ArticleOut<ArticleData>>(&input)?;
      let article = map_article_response(res);
      debug!("map: article slug={}", article.slug);
      serde_json::to_value(&article)?
    },
    "articles" => {
      let res = registry.parse::<ArticleList<ArticleData>>(&input)?;
      let articles = map_articles_response(res);
      debug!("map: {} of {} articles", articles.len(), articles.articles_count);
      serde_json::to_value(&articles)?
    },
    "filter" => {
      let filter = registry.parse::<FilterQuery>(&input)?;
      let dto = map_filter_to_dto(&filter);
      debug!("map: filter page={} -> offset={}", filter.page, dto.offset);
      json!({
        "endpoint": filter.endpoint(),
        "query": dto,
      })
    },
    kind => {
      return Err(Error::UnknownContract(kind.to_string()));
    },
  };

  println!("{}", commands::render(config, &output)?);
  Ok(())
}
