use crate::schema::{ContractKind, RegistryOptions, Rule};

pub mod article;
pub use article::*;

pub mod comment;
pub use comment::*;

pub mod user;
pub use user::*;

pub mod tag;
pub use tag::*;

pub mod filter;
pub use filter::*;

pub mod error;
pub use error::*;

/// Build the rule for one contract.
pub fn contract_rule(kind: ContractKind, options: &RegistryOptions) -> Rule {
  match kind {
    ContractKind::Article => article_rule(options),
    ContractKind::Articles => articles_rule(options),
    ContractKind::CreateArticle => create_article_rule(),
    ContractKind::UpdateArticle => update_article_rule(),
    ContractKind::FilterQuery => filter_query_rule(),
    ContractKind::FilterQueryDto => filter_query_dto_rule(),
    ContractKind::Comment => comment_rule(),
    ContractKind::Comments => comments_rule(),
    ContractKind::CreateComment => create_comment_rule(),
    ContractKind::Profile => profile_rule(),
    ContractKind::User => user_rule(),
    ContractKind::LoginUser => login_user_rule(),
    ContractKind::RegisterUser => register_user_rule(),
    ContractKind::UpdateUser => update_user_rule(),
    ContractKind::Tags => tags_rule(),
    ContractKind::ApiErrorData => api_error_data_rule(),
    ContractKind::ApiErrorMessages => api_error_messages_rule(),
    ContractKind::ArticleEntity => article_entity_rule(),
    ContractKind::ArticlesEntity => articles_entity_rule(),
  }
}
