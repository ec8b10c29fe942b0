use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::profile::adapter::outgoing::sea_orm_entity::{
    Column as ProfileColumn, Entity as ProfileEntity,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::topic::application::domain::entities::{Topic, TopicId};
use crate::topic::application::ports::outgoing::{
    NewTopicData, TopicChanges, TopicRepository, TopicRepositoryError,
};

use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as TopicEntity,
    Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TopicRepositoryError {
    // the only unique index besides the key is uq_topics_active_title_message
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => TopicRepositoryError::TopicAlreadyExists,
        _ => TopicRepositoryError::DatabaseError(e.to_string()),
    }
}

// =====================================================
// Author resolution
// =====================================================

async fn load_author_names<C>(conn: &C, author_ids: Vec<i64>) -> Result<HashMap<i64, String>, DbErr>
where
    C: ConnectionTrait,
{
    if author_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let authors = ProfileEntity::find()
        .filter(ProfileColumn::Id.is_in(author_ids))
        .all(conn)
        .await?;

    Ok(authors.into_iter().map(|p| (p.id, p.name)).collect())
}

fn attach_author(
    model: &TopicModel,
    names: &HashMap<i64, String>,
) -> Result<Topic, TopicRepositoryError> {
    // author_id is a foreign key, so a miss means the store is inconsistent
    let name = names.get(&model.author_id).cloned().ok_or_else(|| {
        TopicRepositoryError::DatabaseError(format!(
            "author {} of topic {} not found",
            model.author_id, model.id
        ))
    })?;

    model.to_domain(name)
}

async fn with_author<C>(conn: &C, model: &TopicModel) -> Result<Topic, TopicRepositoryError>
where
    C: ConnectionTrait,
{
    let names = load_author_names(conn, vec![model.author_id])
        .await
        .map_err(map_db_err)?;

    attach_author(model, &names)
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn list_active(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<Topic>, TopicRepositoryError> {
        let query = TopicEntity::find()
            .filter(TopicColumn::Active.eq(true))
            .order_by_asc(TopicColumn::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models: Vec<TopicModel> = query
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let author_ids: BTreeSet<i64> = models.iter().map(|m| m.author_id).collect();
        let names = load_author_names(&*self.db, author_ids.into_iter().collect())
            .await
            .map_err(map_db_err)?;

        let content = models
            .iter()
            .map(|m| attach_author(m, &names))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(content, page, total))
    }

    async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicRepositoryError> {
        let model = TopicEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match model {
            Some(model) => with_author(&*self.db, &model).await.map(Some),
            None => Ok(None),
        }
    }

    async fn duplicate_exists(
        &self,
        title: &str,
        message: &str,
    ) -> Result<bool, TopicRepositoryError> {
        let count = TopicEntity::find()
            .filter(TopicColumn::Active.eq(true))
            .filter(TopicColumn::Title.eq(title))
            .filter(TopicColumn::Message.eq(message))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn create_topic(&self, data: NewTopicData) -> Result<Topic, TopicRepositoryError> {
        let active = TopicActiveModel {
            author_id: Set(data.author.id.value()),
            title: Set(data.title),
            message: Set(data.message),
            course: Set(data.course),
            status: Set(data.status.as_str().to_string()),
            active: Set(true),
            created_at: Set(data.created_at.fixed_offset()),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        inserted.to_domain(data.author.name)
    }

    async fn update_topic(
        &self,
        id: TopicId,
        changes: TopicChanges,
    ) -> Result<Topic, TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(current) = TopicEntity::find_by_id(id.value())
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(TopicRepositoryError::TopicNotFound);
        };

        let mut active: TopicActiveModel = current.clone().into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(message) = changes.message {
            active.message = Set(message);
        }
        if let Some(course) = changes.course {
            active.course = Set(course);
        }
        if let Some(status) = changes.status {
            active.status = Set(status.as_str().to_string());
        }

        let updated = if active.is_changed() {
            active.update(&txn).await.map_err(map_db_err)?
        } else {
            current
        };

        let topic = with_author(&txn, &updated).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(topic)
    }

    async fn deactivate_topic(&self, id: TopicId) -> Result<(), TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(current) = TopicEntity::find_by_id(id.value())
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(TopicRepositoryError::TopicNotFound);
        };

        if current.active {
            let mut active: TopicActiveModel = current.into();
            active.active = Set(false);
            active.update(&txn).await.map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr, Value};

    use crate::profile::adapter::outgoing::sea_orm_entity::Model as ProfileModel;
    use crate::profile::application::domain::entities::ProfileId;
    use crate::topic::application::domain::entities::{TopicAuthor, TopicStatus};

    // =====================================================
    // Helpers
    // =====================================================

    fn topic_model(id: i64, author_id: i64, title: &str, status: &str, active: bool) -> TopicModel {
        let now = Utc::now().fixed_offset();

        TopicModel {
            id,
            author_id,
            title: title.to_string(),
            message: format!("Message for {}", title),
            course: "Rust".to_string(),
            status: status.to_string(),
            active,
            created_at: now,
            updated_at: now,
        }
    }

    fn author(id: i64, name: &str) -> ProfileModel {
        let now = Utc::now().fixed_offset();

        ProfileModel {
            id,
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn count_row(n: i64) -> std::collections::BTreeMap<&'static str, Value> {
        btreemap! { "num_items" => Value::BigInt(Some(n)) }
    }

    fn repo(db: MockDatabase) -> TopicRepositoryPostgres {
        TopicRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    fn recording_repo(db: MockDatabase) -> (TopicRepositoryPostgres, Arc<DatabaseConnection>) {
        let conn = Arc::new(db.into_connection());
        (TopicRepositoryPostgres::new(conn.clone()), conn)
    }

    fn executed_sql(repo: TopicRepositoryPostgres, conn: Arc<DatabaseConnection>) -> Vec<String> {
        drop(repo);
        Arc::try_unwrap(conn)
            .ok()
            .expect("connection still shared")
            .into_transaction_log()
            .into_iter()
            .flat_map(|t| t.statements().iter().map(|s| s.sql.clone()).collect::<Vec<_>>())
            .collect()
    }

    // =====================================================
    // list_active
    // =====================================================

    #[tokio::test]
    async fn list_active_resolves_author_names() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(3)]])
            .append_query_results(vec![vec![
                topic_model(1, 1, "Traits", "OPEN", true),
                topic_model(2, 2, "Macros", "SOLVED", true),
                topic_model(3, 1, "Async", "CLOSED", true),
            ]])
            .append_query_results(vec![vec![author(1, "Ana"), author(2, "Bea")]]);

        let result = repo(db).list_active(PageRequest::default()).await.unwrap();

        assert_eq!(result.total_elements, 3);
        assert_eq!(result.content.len(), 3);
        assert_eq!(result.content[0].author.name, "Ana");
        assert_eq!(result.content[1].author.name, "Bea");
        assert_eq!(result.content[1].status, TopicStatus::Solved);
        assert_eq!(result.content[2].author.id, ProfileId::from(1));
    }

    #[tokio::test]
    async fn list_active_missing_author_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .append_query_results(vec![vec![topic_model(1, 7, "Orphan", "OPEN", true)]])
            .append_query_results(vec![Vec::<ProfileModel>::new()]);

        let result = repo(db).list_active(PageRequest::default()).await;

        assert!(matches!(result, Err(TopicRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn list_active_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![Vec::<TopicModel>::new()]);

        let result = repo(db).list_active(PageRequest::default()).await.unwrap();

        assert!(result.content.is_empty());
        assert_eq!(result.total_pages, 0);
    }

    // =====================================================
    // find_by_id / duplicate_exists
    // =====================================================

    #[tokio::test]
    async fn find_by_id_returns_inactive_topic() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(5, 1, "Old", "CLOSED", false)]])
            .append_query_results(vec![vec![author(1, "Ana")]]);

        let topic = repo(db)
            .find_by_id(TopicId::from(5))
            .await
            .unwrap()
            .expect("topic should be found");

        assert!(!topic.active);
        assert_eq!(topic.author.name, "Ana");
    }

    #[tokio::test]
    async fn find_by_id_unknown_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()]);

        assert_eq!(repo(db).find_by_id(TopicId::from(99999)).await, Ok(None));
    }

    #[tokio::test]
    async fn duplicate_exists_reads_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .append_query_results(vec![vec![count_row(0)]]);
        let repo = repo(db);

        assert_eq!(repo.duplicate_exists("Traits", "Message").await, Ok(true));
        assert_eq!(repo.duplicate_exists("Traits", "Other").await, Ok(false));
    }

    // =====================================================
    // create_topic
    // =====================================================

    #[tokio::test]
    async fn create_topic_uses_given_author() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(10, 1, "Traits", "OPEN", true)]]);

        let topic = repo(db)
            .create_topic(NewTopicData {
                title: "Traits".to_string(),
                message: "Message for Traits".to_string(),
                course: "Rust".to_string(),
                author: TopicAuthor {
                    id: ProfileId::from(1),
                    name: "Ana".to_string(),
                },
                status: TopicStatus::Open,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!(topic.id, TopicId::from(10));
        assert_eq!(topic.author.name, "Ana");
        assert_eq!(topic.status, TopicStatus::Open);
        assert!(topic.active);
    }

    #[tokio::test]
    async fn create_topic_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![
            DbErr::Query(RuntimeErr::Internal("fk violation".into())),
        ]);

        let result = repo(db)
            .create_topic(NewTopicData {
                title: "T".to_string(),
                message: "M".to_string(),
                course: "C".to_string(),
                author: TopicAuthor {
                    id: ProfileId::from(1),
                    name: "Ana".to_string(),
                },
                status: TopicStatus::Open,
                created_at: Utc::now(),
            })
            .await;

        assert!(matches!(result, Err(TopicRepositoryError::DatabaseError(_))));
    }

    // =====================================================
    // update_topic / deactivate_topic
    // =====================================================

    #[tokio::test]
    async fn update_topic_changes_status() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "OPEN", true)]])
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "SOLVED", true)]])
            .append_query_results(vec![vec![author(1, "Ana")]]);

        let topic = repo(db)
            .update_topic(
                TopicId::from(4),
                TopicChanges {
                    status: Some(TopicStatus::Solved),
                    ..TopicChanges::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(topic.status, TopicStatus::Solved);
        assert_eq!(topic.author.name, "Ana");
    }

    #[tokio::test]
    async fn update_unknown_topic_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()]);

        let result = repo(db)
            .update_topic(TopicId::from(99999), TopicChanges::default())
            .await;

        assert_eq!(result, Err(TopicRepositoryError::TopicNotFound));
    }

    #[tokio::test]
    async fn deactivate_active_topic() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "OPEN", true)]])
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "OPEN", false)]]);

        assert_eq!(repo(db).deactivate_topic(TopicId::from(4)).await, Ok(()));
    }

    #[tokio::test]
    async fn deactivate_inactive_topic_is_noop() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "OPEN", false)]]);

        assert_eq!(repo(db).deactivate_topic(TopicId::from(4)).await, Ok(()));
    }

    #[tokio::test]
    async fn deactivate_unknown_topic_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()]);

        assert_eq!(
            repo(db).deactivate_topic(TopicId::from(99999)).await,
            Err(TopicRepositoryError::TopicNotFound)
        );
    }

    // =====================================================
    // Issued SQL
    // =====================================================

    #[tokio::test]
    async fn list_active_filters_count_and_page_on_active() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .append_query_results(vec![vec![topic_model(1, 1, "Traits", "OPEN", true)]])
            .append_query_results(vec![vec![author(1, "Ana")]]);
        let (repo, conn) = recording_repo(db);

        repo.list_active(PageRequest::default()).await.unwrap();

        let sql = executed_sql(repo, conn);
        assert_eq!(sql.len(), 3);
        assert!(sql[0].contains("COUNT"));
        assert!(sql[0].contains(r#""topics"."active" = $1"#));
        assert!(sql[1].contains(r#""topics"."active" = $1"#));
        assert!(sql[1].contains(r#"ORDER BY "topics"."id" ASC"#));
        assert!(sql[2].contains(r#""profiles"."id" IN"#));
    }

    #[tokio::test]
    async fn duplicate_check_only_considers_active_topics() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]]);
        let (repo, conn) = recording_repo(db);

        repo.duplicate_exists("Traits", "Message for Traits")
            .await
            .unwrap();

        let sql = executed_sql(repo, conn);
        assert_eq!(sql.len(), 1);
        assert!(sql[0].contains(r#""topics"."active" = $1"#));
        assert!(sql[0].contains(r#""topics"."title" = $2"#));
        assert!(sql[0].contains(r#""topics"."message" = $3"#));
    }

    #[tokio::test]
    async fn find_by_id_does_not_filter_on_active() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()]);
        let (repo, conn) = recording_repo(db);

        repo.find_by_id(TopicId::from(4)).await.unwrap();

        let sql = executed_sql(repo, conn);
        assert_eq!(sql.len(), 1);
        assert!(sql[0].contains(r#""topics"."id" = $1"#));
        assert!(!sql[0].contains(r#""topics"."active" ="#));
    }

    #[tokio::test]
    async fn update_locks_the_row_inside_one_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "OPEN", true)]])
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "SOLVED", true)]])
            .append_query_results(vec![vec![author(1, "Ana")]]);
        let (repo, conn) = recording_repo(db);

        repo.update_topic(
            TopicId::from(4),
            TopicChanges {
                status: Some(TopicStatus::Solved),
                ..TopicChanges::default()
            },
        )
        .await
        .unwrap();

        let sql = executed_sql(repo, conn);
        assert_eq!(sql.len(), 5);
        assert_eq!(sql[0], "BEGIN");
        assert!(sql[1].contains(r#""topics"."id" = $1"#));
        assert!(sql[1].ends_with("FOR UPDATE"));
        assert!(sql[2].starts_with(r#"UPDATE "topics""#));
        assert!(sql[3].contains(r#""profiles"."id" IN"#));
        assert_eq!(sql[4], "COMMIT");
    }

    #[tokio::test]
    async fn deactivate_writes_under_the_row_lock() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "OPEN", true)]])
            .append_query_results(vec![vec![topic_model(4, 1, "Traits", "OPEN", false)]]);
        let (repo, conn) = recording_repo(db);

        repo.deactivate_topic(TopicId::from(4)).await.unwrap();

        let sql = executed_sql(repo, conn);
        assert_eq!(sql.len(), 4);
        assert_eq!(sql[0], "BEGIN");
        assert!(sql[1].ends_with("FOR UPDATE"));
        assert!(sql[2].starts_with(r#"UPDATE "topics""#));
        assert_eq!(sql[3], "COMMIT");
    }

    #[tokio::test]
    async fn deactivate_unknown_topic_rolls_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()]);
        let (repo, conn) = recording_repo(db);

        let _ = repo.deactivate_topic(TopicId::from(99999)).await;

        let sql = executed_sql(repo, conn);
        assert_eq!(sql.len(), 3);
        assert_eq!(sql[0], "BEGIN");
        assert!(sql[1].ends_with("FOR UPDATE"));
        assert_eq!(sql[2], "ROLLBACK");
    }
}
