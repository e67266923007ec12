mod cli;
mod workflow;

use clap::Parser;
use cli::Cli;
use jpeg_testbench::error::AppError;
use tracing::Level;

fn main() -> Result<(), AppError> {
    // コマンドライン引数を解析します (不正な場合は使い方を表示して終了コード2)
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // レポートは標準出力、ログは標準エラー出力に分けて出します
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    workflow::run(cli, &mut out)
}

/// `-v` の数に応じてログの出力レベルを決めます。
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
