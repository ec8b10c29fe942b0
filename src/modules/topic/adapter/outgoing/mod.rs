pub mod sea_orm_entity;
mod topic_repository_postgres;

pub use topic_repository_postgres::TopicRepositoryPostgres;
