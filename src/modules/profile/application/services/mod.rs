pub mod deactivate_profile_service;
pub mod get_profile_service;
pub mod list_profiles_service;
pub mod register_profile_service;
pub mod update_profile_service;

pub use deactivate_profile_service::DeactivateProfileService;
pub use get_profile_service::GetProfileService;
pub use list_profiles_service::ListProfilesService;
pub use register_profile_service::RegisterProfileService;
pub use update_profile_service::UpdateProfileService;
