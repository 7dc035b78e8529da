// ABOUTME: HTTP request handlers for password and fake-user generation
// ABOUTME: Renders generated data as small HTML fragments

use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::info;

use crate::state::AppState;
use kiosk_config::constants::DEFAULT_GENERATED_USERS;
use kiosk_datagen::GeneratedUser;

/// Generate a password of the requested length.
///
/// The length is an unsigned path segment, so negative or non-numeric
/// input never reaches this handler. Zero is allowed and yields an empty
/// password.
pub async fn generate_password(Path(length): Path<usize>) -> Html<String> {
    info!("Generating password of length {}", length);

    let password = kiosk_datagen::generate_password(length);
    Html(format!(
        "<p>Length: {};</p>\n<p>{}</p>\n",
        password.chars().count(),
        password
    ))
}

/// Generate the default batch of fake users.
pub async fn generate_users_default(State(state): State<AppState>) -> Html<String> {
    render_users(&state.generator.generate(DEFAULT_GENERATED_USERS))
}

/// Generate a batch of `count` fake users.
pub async fn generate_users(
    State(state): State<AppState>,
    Path(count): Path<usize>,
) -> Html<String> {
    info!("Generating {} fake users", count);

    render_users(&state.generator.generate(count))
}

fn render_users(users: &[GeneratedUser]) -> Html<String> {
    let mut body = format!("<h1>{} users</h1>\n<ul>\n", users.len());
    for user in users {
        body.push_str(&format!("<li>{} {}</li>\n", user.name, user.email));
    }
    body.push_str("</ul>\n");
    Html(body)
}
