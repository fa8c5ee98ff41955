use actix_web::web;

use crate::middleware::require_auth::RequireAuth;

pub mod auth;
pub mod health;
pub mod wishlist;

/// Register application routes.
///
/// `main.rs` and the integration tests share this wiring, so the gate
/// placement exercised by tests is exactly what production serves.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    health::configure_routes(cfg);

    // Auth routes: /auth/** (login and logout are open; the user list
    // carries its own gates)
    cfg.service(web::scope("/auth").configure(auth::configure_routes));

    // Wishlist CRUD: /api/wishlist/** — every route requires a valid
    // session token; mutations additionally require the admin gate.
    cfg.service(
        web::scope("/api/wishlist")
            .wrap(RequireAuth)
            .configure(wishlist::configure_routes),
    );
}
