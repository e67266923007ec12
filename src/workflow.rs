//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 各サブコマンドの処理フローを実装します。
//! レポートは引数で受け取った `out` (通常は標準出力) に、進捗はログ (標準エラー出力) に出します。

use crate::cli::{Cli, Commands};
use jpeg_testbench::domain::pixel_dump::{self, PixelFormat, Rect};
use jpeg_testbench::domain::sample_set;
use jpeg_testbench::domain::InspectionReport;
use jpeg_testbench::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

// --- public な main 関数 ---

/// パース済みのコマンドを実行します。
///
/// # 引数
/// * `cli`: コマンドラインからパースされた引数 (`cli::Cli`)。
/// * `out`: レポートの出力先。
///
/// # 戻り値
/// * `Ok(())`: 処理が正常に完了した場合。
/// * `Err(AppError)`: 処理中にエラーが発生した場合。エラーはそのまま呼び出し元に返す。
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), AppError> {
    match cli.command {
        Commands::Test { output_dir } => generate(&output_dir),
        Commands::Check { image } => check(&image, out),
        Commands::Dump { image, color, rect } => dump(&image, color, rect, out),
    }
}

// --- private なヘルパー関数 ---

/// `test` コマンド: サンプルJPEGを2枚書き出す。
fn generate(output_dir: &Path) -> Result<(), AppError> {
    info!("サンプル画像を書き出します: {}", output_dir.display());
    for path in sample_set::generate_in(output_dir)? {
        info!("  -> 完了: {}", path.display());
    }
    Ok(())
}

/// `check` コマンド: レポートの4行と属性ダンプを出力する。
fn check<W: Write>(image: &Path, out: &mut W) -> Result<(), AppError> {
    debug!("画像を読み込みます: {}", image.display());
    // レポートがすべて揃ってから出力する
    let report = InspectionReport::from_path(image)?;

    for line in report.summary_lines() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{:?}", report)?;
    Ok(())
}

/// `dump` コマンド: 指定範囲の画素値を出力する。
fn dump<W: Write>(
    image: &Path,
    color: PixelFormat,
    rect: Option<Rect>,
    out: &mut W,
) -> Result<(), AppError> {
    let bytes = fs::read(image)?;
    let (report, decoded) = InspectionReport::decode(image, &bytes)?;
    info!(
        "デコード完了: {} {} ({}, {})",
        report.format_name(),
        report.mode(),
        report.size().0,
        report.size().1
    );

    let text = pixel_dump::render(&decoded, color, rect)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
