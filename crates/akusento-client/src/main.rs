//! akusento: terminal pitch-accent guessing game

use akusento::config::{DEFAULT_MAX_MORA, DEFAULT_MIN_MORA};
use akusento::game::{MatchPolicy, is_submittable};
use akusento_client::{AccentApiClient, GameSession, render};
use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use dialoguer::Input;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "akusento", version, about = "お題と同じアクセントの言葉を当てるゲーム")]
struct Args {
  /// akusento-api base URL
  #[arg(long, env = "AKUSENTO_API_URL", default_value = "http://127.0.0.1:8000")]
  base_url: String,

  /// Minimum mora count of target words
  #[arg(long, default_value_t = DEFAULT_MIN_MORA)]
  min_mora: usize,

  /// Maximum mora count of target words
  #[arg(long, default_value_t = DEFAULT_MAX_MORA)]
  max_mora: usize,

  /// How guesses are judged: exact | same-class
  #[arg(long, default_value = "exact")]
  match_policy: MatchPolicy,

  /// Log level written to stderr (RUST_LOG takes precedence)
  #[arg(long, env = "AKUSENTO_LOG_LEVEL", default_value = "warn")]
  log_level: String,
}

/// What the player typed at the prompt
enum Command {
  Quit,
  Next,
  Guess(String),
}

fn parse_command(input: &str) -> Command {
  match input.trim() {
    "q" | "Q" => Command::Quit,
    "n" | "N" => Command::Next,
    other => Command::Guess(other.to_string()),
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  if args.min_mora == 0 || args.min_mora > args.max_mora {
    bail!(
      "モーラ数の範囲が不正です: min_mora={}, max_mora={}",
      args.min_mora,
      args.max_mora
    );
  }

  let client = AccentApiClient::new(&args.base_url).context("API クライアントの作成に失敗しました")?;
  let mut session = GameSession::new(client, args.min_mora, args.max_mora, args.match_policy);

  println!("{}", style("アクセント当てゲーム").bold());
  println!("お題と同じアクセントの言葉を入力してください（n: 次のお題, q: 終了）");
  println!("{}", style(render::policy_line(session.policy())).dim());

  start(&mut session).await;

  loop {
    let line = prompt().await?;

    match parse_command(&line) {
      Command::Quit => break,
      Command::Next => start(&mut session).await,
      Command::Guess(text) => {
        if !is_submittable(&text) {
          continue;
        }
        let Some(round) = session.round() else {
          println!("お題がありません。n で新しいお題を取得します");
          continue;
        };
        if round.is_finished() {
          println!("このお題は終了しました。n で次のお題へ");
          continue;
        }

        match session.submit(&text).await {
          Ok(Some(_)) => {
            if let Some(round) = session.round() {
              println!("{}", render::verdict(round));
              println!("{}", style(render::score_line(session.score())).dim());
            }
          }
          Ok(None) => {}
          Err(e) => {
            tracing::warn!(error = %e, "Guess failed");
            println!("{}", style("解析に失敗しました。もう一度入力してください").yellow());
          }
        }
      }
    }
  }

  println!("{}", render::score_line(session.score()));
  Ok(())
}

/// Fetches a target word; failures leave the player at the prompt.
async fn start(session: &mut GameSession) {
  match session.next_word().await {
    Ok(round) => println!("\n{}", render::target_banner(round)),
    Err(e) => {
      tracing::warn!(error = %e, "Target word fetch failed");
      println!(
        "{}",
        style("お題を取得できませんでした。n で再試行します").yellow()
      );
    }
  }
}

/// Reads one line on the blocking pool so the runtime is never blocked on stdin.
async fn prompt() -> Result<String> {
  let line = tokio::task::spawn_blocking(|| {
    Input::<String>::new().with_prompt("回答").allow_empty(true).interact_text()
  })
  .await
  .context("入力スレッドの実行に失敗しました")??;
  Ok(line)
}
