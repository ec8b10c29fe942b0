use async_trait::async_trait;
use mockall::mock;

use crate::profile::application::domain::entities::{Profile, ProfileId};
use crate::profile::application::ports::outgoing::{
    NewProfileData, ProfileChanges, ProfileRepository, ProfileRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::topic::application::domain::entities::{Topic, TopicId};
use crate::topic::application::ports::outgoing::{
    NewTopicData, TopicChanges, TopicRepository, TopicRepositoryError,
};

mock! {
    pub ProfileRepo {}
    #[async_trait]
    impl ProfileRepository for ProfileRepo {
        async fn list_active(
            &self,
            page: PageRequest,
        ) -> Result<PageResult<Profile>, ProfileRepositoryError>;

        async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, ProfileRepositoryError>;

        async fn save(&self, data: NewProfileData) -> Result<Profile, ProfileRepositoryError>;

        async fn update(
            &self,
            id: ProfileId,
            changes: ProfileChanges,
        ) -> Result<Profile, ProfileRepositoryError>;

        async fn deactivate(&self, id: ProfileId) -> Result<(), ProfileRepositoryError>;
    }
}

mock! {
    pub TopicRepo {}
    #[async_trait]
    impl TopicRepository for TopicRepo {
        async fn list_active(
            &self,
            page: PageRequest,
        ) -> Result<PageResult<Topic>, TopicRepositoryError>;

        async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicRepositoryError>;

        async fn duplicate_exists(
            &self,
            title: &str,
            message: &str,
        ) -> Result<bool, TopicRepositoryError>;

        async fn create_topic(&self, data: NewTopicData) -> Result<Topic, TopicRepositoryError>;

        async fn update_topic(
            &self,
            id: TopicId,
            changes: TopicChanges,
        ) -> Result<Topic, TopicRepositoryError>;

        async fn deactivate_topic(&self, id: TopicId) -> Result<(), TopicRepositoryError>;
    }
}
