mod deactivate_profile;
mod get_profile;
mod list_profiles;
mod register_profile;
mod update_profile;

pub use deactivate_profile::deactivate_profile_handler;
pub use get_profile::get_profile_handler;
pub use list_profiles::list_profiles_handler;
pub use register_profile::register_profile_handler;
pub use update_profile::update_profile_handler;
