use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "estimate-scan")]
#[command(about = "見積ワークブック抽出・役職カード作成・案件台帳突合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 進捗バーを表示しない
    #[arg(long, global = true)]
    pub no_progress: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 見積フォルダを抽出して scan_results.json を出力
    Scan {
        /// 見積フォルダ（省略時は設定・環境変数）
        folder: Option<PathBuf>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 先頭N件だけ処理
        #[arg(short, long)]
        limit: Option<usize>,

        /// お試し実行（設定の trial_limit 件だけ処理）
        #[arg(long, conflicts_with = "limit")]
        trial: bool,
    },

    /// scan_results.json から役職カードを作成
    RateCard {
        /// 入力 scan_results.json
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Excel（rate_card_master.xlsx）も出力
        #[arg(long)]
        excel: bool,
    },

    /// scan_results.json と案件台帳JSONを突合
    Join {
        /// 入力 scan_results.json
        #[arg(required = true)]
        input: PathBuf,

        /// 案件台帳JSON
        #[arg(short, long, required = true)]
        registry: PathBuf,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 抽出から役職カード・突合まで一括実行
    Run {
        /// 見積フォルダ（省略時は設定・環境変数）
        folder: Option<PathBuf>,

        /// 案件台帳JSON（省略時は突合しない）
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 先頭N件だけ処理
        #[arg(short, long)]
        limit: Option<usize>,

        /// お試し実行（設定の trial_limit 件だけ処理）
        #[arg(long, conflicts_with = "limit")]
        trial: bool,

        /// Excel（rate_card_master.xlsx）も出力
        #[arg(long)]
        excel: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 見積フォルダを設定
        #[arg(long)]
        set_input_dir: Option<PathBuf>,

        /// 出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
