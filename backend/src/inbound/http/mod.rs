//! HTTP inbound adapter exposing the REST endpoints.
//!
//! [`configure_routes`] registers every resource handler and the route
//! listing; health probes are wired separately by the server because they
//! depend on [`health::HealthState`] rather than [`state::HttpState`].

use actix_web::{ResponseError, web};

use crate::domain::Error;

pub mod envelope;
pub mod error;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod schemas;
pub mod sitemap;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;

/// Path segments that do not parse (e.g. `/user/luke`) answer 404 with the
/// standard error body.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let error = Error::not_found(format!("no resource at {}", req.path()));
        actix_web::error::InternalError::from_response(err, error.error_response()).into()
    })
}

/// Register the route listing and every resource handler on `cfg`.
///
/// ```
/// use actix_web::App;
/// use holocron::inbound::http::configure_routes;
///
/// let _app = App::new().configure(configure_routes);
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(path_config())
        .service(sitemap::list_routes)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(favorites::list_user_favorites)
        .service(planets::list_planets)
        .service(planets::create_planet)
        .service(planets::get_planet)
        .service(planets::update_planet)
        .service(planets::delete_planet)
        .service(people::list_people)
        .service(people::create_person)
        .service(people::get_person)
        .service(people::update_person)
        .service(people::delete_person)
        .service(favorites::create_favorite_planet)
        .service(favorites::delete_favorite_planet)
        .service(favorites::create_favorite_person)
        .service(favorites::delete_favorite_person);
}
