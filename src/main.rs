// src/main.rs

use std::sync::Arc;

use content_board::api::HttpApi;
use content_board::config::Config;
use content_board::handlers::{community, session};
use content_board::models::post::Post;
use content_board::ranking;
use content_board::state::Board;
use content_board::utils::clock::{Clock, SystemClock};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from .env (if present) and the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "board.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let api = match HttpApi::new(config.api_url.clone()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let mut board = Board::new(Arc::new(api), Arc::new(SystemClock));

    match session::refresh_session(&mut board).await {
        Ok(Some(user)) => println!("Signed in as {}", user.username),
        Ok(None) | Err(_) => match session::login_url(&config.api_url) {
            Ok(url) => println!("Not signed in. Log in at {}", url),
            Err(e) => tracing::warn!("No login URL: {}", e),
        },
    }

    if let Err(e) = community::refresh_feed(&mut board).await {
        eprintln!("{}", e.notice("load content"));
        std::process::exit(1);
    }

    let now = board.clock.now();
    for post in ranking::rank(board.feed.posts(), now) {
        println!("{:>7.2}  {}", ranking::score(post, now), summary_line(post));
    }
}

fn summary_line(post: &Post) -> String {
    let mut line = format!(
        "[{}] {} by {} ({} comments)",
        post.kind.as_str(),
        post.title,
        post.author_username,
        post.comments.len()
    );
    if let Some(top) = post.most_popular_comment() {
        line.push_str(&format!(" top: \"{}\" ({} likes)", top.content, top.likes));
    }
    line
}
