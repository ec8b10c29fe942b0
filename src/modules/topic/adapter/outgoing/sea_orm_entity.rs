use sea_orm::entity::prelude::*;

use crate::topic::application::domain::entities::{Topic, TopicAuthor, TopicId, TopicStatus};
use crate::topic::application::ports::outgoing::TopicRepositoryError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub author_id: i64,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub course: String,

    // OPEN / CLOSED / SOLVED
    #[sea_orm(column_type = "String(StringLen::N(16))")]
    pub status: String,

    pub active: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self, author_name: String) -> Result<Topic, TopicRepositoryError> {
        let status = self
            .status
            .parse::<TopicStatus>()
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Topic {
            id: TopicId::from(self.id),
            title: self.title.clone(),
            message: self.message.clone(),
            course: self.course.clone(),
            created_at: self.created_at.into(),
            status,
            author: TopicAuthor {
                id: self.author_id.into(),
                name: author_name,
            },
            active: self.active,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::profile::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::AuthorId",
        to = "crate::profile::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Author,
}

impl Related<crate::profile::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
