use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "magic-path")]
#[command(about = "画像をAI解析サービスに送り、結果を説明文にする", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析して説明文を出力
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 解析に添えるプロンプト
        #[arg(short, long)]
        prompt: Option<String>,

        /// 解析サービスのURL（設定ファイルより優先）
        #[arg(long)]
        endpoint: Option<String>,

        /// タイムアウト秒数
        #[arg(long)]
        timeout: Option<u64>,

        /// 解析結果のJSONをそのまま出力
        #[arg(long)]
        json: bool,

        /// 詳細（カテゴリ・ラベル等）も表示
        #[arg(short, long)]
        details: bool,
    },

    /// 保存済みの解析結果JSONから説明文を生成（"-" で標準入力）
    Describe {
        /// 解析結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 詳細も表示
        #[arg(short, long)]
        details: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 解析サービスのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "magic-path", "analyze", "dog.jpg", "-p", "What breed?", "--details", "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { image, prompt, json, details, .. } => {
                assert_eq!(image, PathBuf::from("dog.jpg"));
                assert_eq!(prompt.as_deref(), Some("What breed?"));
                assert!(!json);
                assert!(details);
            }
            _ => panic!("analyze expected"),
        }
    }

    #[test]
    fn test_analyze_requires_image() {
        assert!(Cli::try_parse_from(["magic-path", "analyze"]).is_err());
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["magic-path", "config", "--set-timeout", "30", "--show"]).unwrap();
        match cli.command {
            Commands::Config { set_endpoint, set_timeout, show } => {
                assert!(set_endpoint.is_none());
                assert_eq!(set_timeout, Some(30));
                assert!(show);
            }
            _ => panic!("config expected"),
        }
    }
}
