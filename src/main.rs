use anyhow::{Context, Result};
use clap::Parser;
use estimate_scan::cli::{Cli, Commands};
use estimate_scan::config::Config;
use estimate_scan::extractor::{self, ScanOptions};
use estimate_scan::{export, matcher, rate_card, scanner, ScanError};
use estimate_scan_common::{RateCardEntry, ScanBatch};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// 役職カードの要約で表示する件数
const TOP_ROLES: usize = 20;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let show_progress = config.show_progress && !cli.no_progress;

    match cli.command {
        Commands::Scan { folder, output, limit, trial } => {
            println!("📊 estimate-scan - 見積抽出\n");

            let folder = config.resolve_input_dir(folder)?;
            let output_dir = config.resolve_output_dir(output);
            let limit = resolve_limit(limit, trial, &config);

            let batch = run_scan(&folder, limit, show_progress)?;
            let path = export::write_scan_batch(&output_dir, &batch)
                .with_context(|| format!("抽出結果を保存できません: {}", output_dir.display()))?;
            print_scan_summary(&batch);
            println!("✔ 結果を保存: {}", path.display());

            println!("\n✅ 抽出完了");
        }

        Commands::RateCard { input, output, excel } => {
            println!("🧾 estimate-scan - 役職カード作成\n");

            let batch = load_batch(&input)?;
            let output_dir = export::artifact_dir(&output.unwrap_or_else(|| parent_dir(&input)))?;
            run_rate_card(&batch, &output_dir, excel)?;

            println!("\n✅ 役職カード作成完了");
        }

        Commands::Join { input, registry, output } => {
            println!("🔗 estimate-scan - 案件台帳突合\n");

            let batch = load_batch(&input)?;
            let output_dir = export::artifact_dir(&output.unwrap_or_else(|| parent_dir(&input)))?;
            run_join(&batch, &registry, &output_dir)?;

            println!("\n✅ 突合完了");
        }

        Commands::Run { folder, registry, output, limit, trial, excel } => {
            println!("🚀 estimate-scan - 一括処理\n");

            let folder = config.resolve_input_dir(folder)?;
            // 抽出結果・役職カード・突合結果を同じディレクトリに書く
            let output_dir = export::artifact_dir(&config.resolve_output_dir(output))?;
            let limit = resolve_limit(limit, trial, &config);
            let steps = if registry.is_some() { 3 } else { 2 };

            // 1. 抽出
            println!("[1/{}] 見積ファイルを抽出中...", steps);
            let batch = run_scan(&folder, limit, show_progress)?;
            let path = export::write_scan_batch(&output_dir, &batch)
                .with_context(|| format!("抽出結果を保存できません: {}", output_dir.display()))?;
            print_scan_summary(&batch);
            println!("✔ 結果を保存: {}\n", path.display());

            // 2. 役職カード
            println!("[2/{}] 役職カードを作成中...", steps);
            run_rate_card(&batch, &output_dir, excel)?;

            // 3. 突合
            if let Some(registry) = registry {
                println!("\n[3/{}] 案件台帳と突合中...", steps);
                run_join(&batch, &registry, &output_dir)?;
            }

            println!("\n✅ 完了");
        }

        Commands::Config { set_input_dir, set_output_dir, show } => {
            let mut config = config;
            let changed = set_input_dir.is_some() || set_output_dir.is_some();

            if let Some(dir) = set_input_dir {
                config.set_input_dir(dir)?;
                println!("✔ 見積フォルダを設定しました");
            }
            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 出力ディレクトリを設定しました");
            }

            if show || !changed {
                println!("設定: {}", Config::config_path()?.display());
                println!("  見積フォルダ: {}", display_or_unset(config.input_dir.as_deref()));
                println!("  出力ディレクトリ: {}", display_or_unset(config.output_dir.as_deref()));
                println!("  お試し件数: {}", config.trial_limit);
                println!("  進捗バー: {}", if config.show_progress { "表示" } else { "非表示" });
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_limit(limit: Option<usize>, trial: bool, config: &Config) -> Option<usize> {
    if trial {
        Some(config.trial_limit)
    } else {
        limit
    }
}

fn run_scan(folder: &Path, limit: Option<usize>, show_progress: bool) -> Result<ScanBatch> {
    let files = scanner::scan_folder(folder)?;
    if files.is_empty() {
        return Err(ScanError::NoWorkbooksFound(folder.display().to_string()).into());
    }
    match limit {
        Some(n) if n < files.len() => println!("✔ {}件の見積ファイルを検出（先頭{}件を処理）", files.len(), n),
        _ => println!("✔ {}件の見積ファイルを検出", files.len()),
    }

    let options = ScanOptions { limit, show_progress };
    Ok(extractor::scan_documents(&files, &options))
}

fn run_rate_card(batch: &ScanBatch, output_dir: &Path, excel: bool) -> Result<()> {
    let entries = rate_card::build_rate_card(&batch.results);
    let written = export::write_rate_card(output_dir, &entries, excel)
        .with_context(|| format!("役職カードを保存できません: {}", output_dir.display()))?;

    println!("✔ {}件の役職にまとめました", entries.len());
    print_top_roles(&entries);
    for path in written {
        println!("✔ 出力: {}", path.display());
    }
    Ok(())
}

fn run_join(batch: &ScanBatch, registry_path: &Path, output_dir: &Path) -> Result<()> {
    let registry = matcher::load_registry(registry_path)
        .with_context(|| format!("案件台帳を読み込めません: {}", registry_path.display()))?;
    println!("✔ 案件台帳: {}件", registry.len());

    let output = matcher::join(&batch.results, &registry)?;
    let (index_path, report_path) = export::write_join_output(output_dir, &output)
        .with_context(|| format!("突合結果を保存できません: {}", output_dir.display()))?;

    let report = &output.report;
    println!("  一致: {}", report.matched);
    println!("  抽出のみ: {}", report.scan_only);
    println!("  台帳のみ: {}", report.list_only);
    println!("  台帳の重複ファイル名: {}", report.duplicate_count);
    println!("  出力レコード数: {}", report.total_enriched_records);
    println!("✔ 出力: {}", index_path.display());
    println!("✔ 出力: {}", report_path.display());
    Ok(())
}

fn load_batch(input: &Path) -> Result<ScanBatch> {
    export::read_scan_batch(input)
        .with_context(|| format!("抽出結果を読み込めません: {}", input.display()))
}

fn print_scan_summary(batch: &ScanBatch) {
    println!(
        "✔ {}件を抽出（エラー {}件、{:.1}秒）",
        batch.total_scanned, batch.errors, batch.elapsed_seconds
    );
    for (format, count) in &batch.format_counts {
        println!("  {}: {}", format, count);
    }
}

fn print_top_roles(entries: &[RateCardEntry]) {
    for entry in entries.iter().take(TOP_ROLES) {
        let mut flags = Vec::new();
        if entry.has_ot_variant {
            flags.push("OT");
        }
        if entry.has_dt_variant {
            flags.push("DT");
        }
        if entry.has_weekend_variant {
            flags.push("WE");
        }
        if entry.has_afterhours_variant {
            flags.push("AH");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join("/"))
        };
        println!(
            "  [{:5}] {} ${}-${}{}",
            entry.occurrences,
            entry.role,
            entry.unit_rate_range.min,
            entry.unit_rate_range.max,
            flags
        );
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn display_or_unset(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "未設定".to_string())
}
