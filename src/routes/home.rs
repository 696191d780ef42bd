pub const HOME_MESSAGE: &str = "Welcome Home";

#[tracing::instrument(name = "Home page")]
pub async fn home() -> &'static str {
    HOME_MESSAGE
}
