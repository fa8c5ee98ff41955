pub mod admin_user;
pub mod current_user;

pub use admin_user::AdminUser;
pub use current_user::CurrentUser;
