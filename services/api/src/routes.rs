//! API service routes

use axum::{
    Router, middleware,
    routing::{get, patch, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{app, facilities, files, finances, reports, rents, room_types, rooms, tenants, users},
    middleware::require_api_key,
    openapi::ApiDoc,
    state::AppState,
};

/// Create the router for the API service
///
/// The API-key middleware wraps every route; it lets the public paths
/// through itself. Bearer tokens are checked per handler by
/// [`AuthUser`](crate::guard::AuthUser).
pub fn create_router(state: AppState) -> Router {
    let users_routes = Router::new()
        .route("/users", patch(users::login).get(users::find_all))
        .route(
            "/users/{id}",
            get(users::find_one).put(users::update).delete(users::delete),
        );

    let rental_routes = Router::new()
        .route(
            "/tenants",
            get(tenants::get_tenants).post(tenants::create_tenant),
        )
        .route(
            "/tenants/{id}",
            get(tenants::get_tenant)
                .put(tenants::update_tenant)
                .delete(tenants::delete_tenant),
        )
        .route(
            "/roomtypes",
            get(room_types::get_room_types).post(room_types::create_room_type),
        )
        .route(
            "/roomtypes/{id}",
            get(room_types::get_room_type)
                .put(room_types::update_room_type)
                .delete(room_types::delete_room_type),
        )
        .route(
            "/facilities",
            get(facilities::get_facilities).post(facilities::create_facility),
        )
        .route(
            "/facilities/{id}",
            get(facilities::get_facility)
                .put(facilities::update_facility)
                .delete(facilities::delete_facility),
        )
        .route("/rooms", get(rooms::get_rooms).post(rooms::create_room))
        .route(
            "/rooms/{id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .route("/rents", get(rents::get_rents).post(rents::create_rent))
        .route(
            "/rents/{id}",
            get(rents::get_rent)
                .put(rents::update_rent)
                .delete(rents::delete_rent),
        )
        .route("/rents/{id}/end", patch(rents::end_rent))
        .route(
            "/finances",
            get(finances::get_finances).post(finances::create_finance),
        )
        .route(
            "/finances/{id}",
            put(finances::update_finance)
                .get(finances::get_finance)
                .delete(finances::delete_finance),
        )
        .route("/reports/summary", get(reports::get_summary));

    Router::new()
        .route("/", get(app::root))
        .merge(users_routes)
        .merge(rental_routes)
        .nest_service("/files", files::router(&state))
        .merge(SwaggerUi::new("/docs").url("/docs-json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
