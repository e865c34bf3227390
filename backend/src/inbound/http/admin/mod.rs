//! Administration surface mounted under `/admin`.
//!
//! Every handler except [`auth::login`] and [`auth::logout`] requires an
//! admin session established by `POST /admin/login`.

pub mod auth;
pub mod categories;
pub mod dto;
pub mod item_sizes;
pub mod items;
pub mod sizes;

use actix_web::web;

/// Register the admin handlers on a scope.
///
/// `items/by-slug/{slug}` is registered ahead of `items/{id}` so the literal
/// segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::logout)
        .service(sizes::list_sizes)
        .service(sizes::create_size)
        .service(sizes::get_size)
        .service(sizes::rename_size)
        .service(sizes::delete_size)
        .service(sizes::list_size_items)
        .service(categories::list_categories)
        .service(categories::create_category)
        .service(categories::get_category)
        .service(categories::update_category)
        .service(categories::delete_category)
        .service(categories::list_category_items)
        .service(items::list_items)
        .service(items::create_item)
        .service(items::get_item_by_slug)
        .service(items::get_item)
        .service(items::update_item)
        .service(items::delete_item)
        .service(item_sizes::list_item_sizes)
        .service(item_sizes::attach_size)
        .service(item_sizes::set_size_availability)
        .service(item_sizes::detach_size);
}
