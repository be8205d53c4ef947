use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .nest("/generate", generate_routes())
        .routes(routes!(handlers::icons::list_icons))
        .routes(routes!(handlers::credits::get_credits))
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::register))
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::me))
}

fn generate_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::generate::generate_icon))
}
