mod home_service;
mod roster_service;

pub use home_service::HomeService;
pub use roster_service::RosterService;
