use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::profile::application::domain::entities::{Profile, ProfileId};
use crate::profile::application::ports::outgoing::{
    NewProfileData, ProfileChanges, ProfileRepository, ProfileRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::topic::adapter::outgoing::sea_orm_entity::{
    Column as TopicColumn, Entity as TopicEntity,
};

use super::sea_orm_entity::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as ProfileEntity,
    Model as ProfileModel,
};

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    // email is the only unique column besides the key
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ProfileRepositoryError::EmailAlreadyExists,
        _ => ProfileRepositoryError::DatabaseError(e.to_string()),
    }
}

/// Titles of every topic authored by the given profiles, grouped by author and
/// ordered by topic id.
async fn load_topic_titles<C>(
    conn: &C,
    author_ids: Vec<i64>,
) -> Result<HashMap<i64, Vec<String>>, DbErr>
where
    C: ConnectionTrait,
{
    let mut titles: HashMap<i64, Vec<String>> = HashMap::new();

    if author_ids.is_empty() {
        return Ok(titles);
    }

    let topics = TopicEntity::find()
        .filter(TopicColumn::AuthorId.is_in(author_ids))
        .order_by_asc(TopicColumn::Id)
        .all(conn)
        .await?;

    for topic in topics {
        titles.entry(topic.author_id).or_default().push(topic.title);
    }

    Ok(titles)
}

async fn with_titles<C>(conn: &C, model: ProfileModel) -> Result<Profile, DbErr>
where
    C: ConnectionTrait,
{
    let mut titles = load_topic_titles(conn, vec![model.id]).await?;
    Ok(model.to_domain(titles.remove(&model.id).unwrap_or_default()))
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn list_active(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<Profile>, ProfileRepositoryError> {
        let query = ProfileEntity::find()
            .filter(ProfileColumn::Active.eq(true))
            .order_by_asc(ProfileColumn::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models: Vec<ProfileModel> = query
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut titles = load_topic_titles(&*self.db, models.iter().map(|m| m.id).collect())
            .await
            .map_err(map_db_err)?;

        let content = models
            .iter()
            .map(|m| m.to_domain(titles.remove(&m.id).unwrap_or_default()))
            .collect();

        Ok(PageResult::new(content, page, total))
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, ProfileRepositoryError> {
        let model = ProfileEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match model {
            Some(model) => with_titles(&*self.db, model)
                .await
                .map(Some)
                .map_err(map_db_err),
            None => Ok(None),
        }
    }

    async fn save(&self, data: NewProfileData) -> Result<Profile, ProfileRepositoryError> {
        let active = ProfileActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            active: Set(true),
            ..Default::default()
        };

        let inserted: ProfileModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        // A new profile cannot have authored anything yet
        Ok(inserted.to_domain(Vec::new()))
    }

    async fn update(
        &self,
        id: ProfileId,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(current) = ProfileEntity::find_by_id(id.value())
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(ProfileRepositoryError::ProfileNotFound);
        };

        let mut active: ProfileActiveModel = current.clone().into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }

        let updated = if active.is_changed() {
            active.update(&txn).await.map_err(map_db_err)?
        } else {
            current
        };

        let profile = with_titles(&txn, updated).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(profile)
    }

    async fn deactivate(&self, id: ProfileId) -> Result<(), ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(current) = ProfileEntity::find_by_id(id.value())
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(ProfileRepositoryError::ProfileNotFound);
        };

        if current.active {
            let mut active: ProfileActiveModel = current.into();
            active.active = Set(false);
            active.update(&txn).await.map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}
