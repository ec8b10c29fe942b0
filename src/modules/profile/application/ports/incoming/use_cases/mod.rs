pub mod deactivate_profile_use_case;
pub mod get_profile_use_case;
pub mod list_profiles_use_case;
pub mod register_profile_use_case;
pub mod update_profile_use_case;

pub use deactivate_profile_use_case::{DeactivateProfileError, DeactivateProfileUseCase};
pub use get_profile_use_case::{GetProfileError, GetProfileUseCase};
pub use list_profiles_use_case::{ListProfilesError, ListProfilesUseCase};
pub use register_profile_use_case::{
    ProfileCommandError, RegisterProfileCommand, RegisterProfileError, RegisterProfileUseCase,
};
pub use update_profile_use_case::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase};
