use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use magic_path::{analyzer, cli, config, error, intake, report};
use magic_path_common::{AnalysisResult, Event, UploadSession};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        if let Some(notice) = err.notice() {
            eprintln!("⚠️  {}", notice);
        }
        return Err(err).context("magic-path failed");
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze { image, prompt, endpoint, timeout, json, details } => {
            let config = Config::load()?.with_overrides(endpoint, timeout);
            let client = analyzer::AnalysisClient::new(&config)?;

            // 1. 画像読み込み
            let candidate = intake::load_candidate(&image)?;
            let mut session = UploadSession::new();
            session.handle(Event::Select(candidate))?;
            if let Some(prompt) = prompt {
                session.handle(Event::SetPrompt(prompt))?;
            }

            // 2. 解析
            let spinner = spinner(&format!("Analyzing {} ...", image.display()));
            let outcome = analyzer::analyze_session(&mut session, &client).await;
            spinner.finish_and_clear();
            outcome?;

            // 3. 出力
            let result = session
                .result()
                .ok_or_else(|| error::MagicPathError::Network("解析結果がありません".into()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                println!("{}", report::render(result, details));
            }
        }

        Commands::Describe { input, details } => {
            let result = read_result(&input)?;
            println!("{}", report::render(&result, details));
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let path = Config::config_path()?;
            let mut config = Config::load_from(&path)?;

            if set_endpoint.is_some() || set_timeout.is_some() {
                config = config.with_overrides(set_endpoint, set_timeout);
                config.validate()?;
                config.save_to(&path)?;
                println!("✔ 設定を保存しました: {}", path.display());
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", path.display());
            }
        }
    }

    Ok(())
}

fn read_result(input: &Path) -> Result<AnalysisResult> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    Ok(serde_json::from_str(&content)?)
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner());
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
