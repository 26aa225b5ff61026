//! Route registration.

use actix_web::web;

use crate::handlers::{
    admin, disputes, health, listings, mandi_rates, messages, notifications, orders, reviews,
    users, watchlist,
};

/// Mounts every endpoint under `/v1/api`.
///
/// `/users/me` is registered before `/users/{id}` so the literal segment
/// wins the match.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/api")
            .service(health::health)
            // Listings
            .service(listings::list_listings)
            .service(listings::get_listing)
            .service(listings::create_listing)
            .service(listings::update_listing)
            .service(listings::delete_listing)
            .service(listings::supplier_listings)
            // Orders
            .service(orders::list_orders)
            .service(orders::create_order)
            .service(orders::update_order)
            // Mandi rates
            .service(mandi_rates::list_rates)
            .service(mandi_rates::seed_rates)
            // Users
            .service(users::get_me)
            .service(users::update_me)
            .service(users::get_user)
            // Messaging
            .service(messages::list_messages)
            .service(messages::send_message)
            .service(messages::mark_message_read)
            // Reviews
            .service(reviews::list_reviews)
            .service(reviews::create_review)
            // Watchlist
            .service(watchlist::list_watchlist)
            .service(watchlist::add_watch)
            .service(watchlist::remove_watch)
            // Notifications
            .service(notifications::list_notifications)
            .service(notifications::mark_notification_read)
            // Disputes and admin
            .service(disputes::list_disputes)
            .service(disputes::create_dispute)
            .service(disputes::update_dispute)
            .service(admin::list_users)
            .service(admin::update_user)
            .service(admin::list_listings)
            .service(admin::analytics),
    );
}
