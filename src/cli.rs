use clap::{ArgAction, Parser, Subcommand};
use jpeg_testbench::domain::{PixelFormat, Rect};
use std::path::PathBuf;

/// JPEGのテスト用画像を生成・確認するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// ログを詳細にする (-v: info, -vv: debug)。ログは標準エラー出力に出ます
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 赤一色の image_baseline.jpg と青一色の image.jpg (240x320, 画質85) を書き出す
    Test {
        /// 出力先フォルダのパス (オプション: デフォルトはカレントディレクトリ)
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// 画像ファイルのフォーマット、カラーモード、サイズ、メタデータを表示する
    Check {
        /// 確認する画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,
    },

    /// JPEGをデコードし、指定範囲の画素値を表示する
    Dump {
        /// デコードする画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 出力形式 (grayscale, rgb565, bgr565, rgb888, bgr888, rgba8888, bgra8888)
        #[arg(short, long, default_value = "rgb888")]
        color: PixelFormat,

        /// 対象範囲 `x,y,w,h` (オプション: デフォルトは画像全体)
        #[arg(short, long)]
        rect: Option<Rect>,
    },
}
