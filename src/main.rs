use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quiznix::{bank::QuestionBank, config, mailer::Mailer, paths, state::AppState, store::Stores};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quiznix=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let variant = config::load_variant_config();

  let bank = QuestionBank::from_paths();
  if bank.list_categories().is_empty() {
    tracing::warn!("No question categories found in {}", paths::quizdata_dir());
  }

  let state = AppState::new(Stores::from_paths(), bank, Mailer::from_env(), variant);
  let app = quiznix::router(state);

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::SERVER_PORT);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
