pub mod users;
pub mod wishlist;
