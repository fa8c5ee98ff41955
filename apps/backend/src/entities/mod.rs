pub mod users;
pub mod wishlist_items;
