use axum::response::Html;

const GENERATE_PAGE: &str = include_str!("../../assets/generate.html");

/// Serve the prompt form.
pub async fn generate_page() -> Html<&'static str> {
    Html(GENERATE_PAGE)
}
