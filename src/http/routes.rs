//! Route configuration for the family endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::clients::PersonClient;

use super::handlers::{
    create_family_member, delete_family_member, get_family_member, greeting, list_family,
    search_by_city, search_by_company, search_by_first_name, search_by_likes,
    update_family_member,
};

/// Creates the family router with all endpoints.
///
/// Routes:
/// - `GET /` - Greeting
/// - `GET /family` - Every family member, in order
/// - `GET /family/:id` - One family member
/// - `POST /family/search/firstName` - Search by first name, body `{"text": ...}`
/// - `POST /family/search/city` - Search by city
/// - `POST /family/search/likes` - Search by likes
/// - `POST /family/search/company` - Search by company
/// - `POST /family/create` - Add a family member
/// - `PUT /family/update/:id` - Replace a family member's fields
/// - `DELETE /family/delete/id/:id` - Remove a family member
pub fn family_router() -> Router<PersonClient> {
    Router::new()
        .route("/", get(greeting))
        .route("/family", get(list_family))
        .route("/family/:id", get(get_family_member))
        .route("/family/search/firstName", post(search_by_first_name))
        .route("/family/search/city", post(search_by_city))
        .route("/family/search/likes", post(search_by_likes))
        .route("/family/search/company", post(search_by_company))
        .route("/family/create", post(create_family_member))
        .route("/family/update/:id", put(update_family_member))
        .route("/family/delete/id/:id", delete(delete_family_member))
}

/// The complete application: family routes, request tracing and the client as state.
pub fn app(client: PersonClient) -> Router {
    family_router()
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
