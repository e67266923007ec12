//! `test` コマンドで書き出すサンプルJPEGの組を定義するモジュール。

use super::encoder_options::EncoderOptions;
use super::solid_image::{FillColor, SolidImage};
use crate::error::AppError;
use std::path::{Path, PathBuf};

/// 赤一色、全オプションを明示したベースラインJPEG。
pub const BASELINE_FILE_NAME: &str = "image_baseline.jpg";
/// 青一色、画質のみ指定したJPEG。
pub const DEFAULT_FILE_NAME: &str = "image.jpg";

/// 1枚分のサンプル定義。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpec {
    pub file_name: &'static str,
    pub color: FillColor,
    pub options: EncoderOptions,
}

/// 書き出すサンプルの一覧を、書き出し順に返します。
///
/// `image.jpg` は画質以外をエンコーダの既定値に任せています。
/// 2枚の指定方法が揃っていないのは元の挙動どおりです。
pub fn sample_specs() -> [SampleSpec; 2] {
    [
        SampleSpec {
            file_name: BASELINE_FILE_NAME,
            color: FillColor::Red,
            options: EncoderOptions::new(EncoderOptions::DEFAULT_QUALITY, false, false),
        },
        SampleSpec {
            file_name: DEFAULT_FILE_NAME,
            color: FillColor::Blue,
            options: EncoderOptions::with_quality(EncoderOptions::DEFAULT_QUALITY),
        },
    ]
}

/// サンプルJPEGを `output_dir` に書き出し、書き出したパスを返します。
///
/// 既存のファイルは上書きします。1枚目で失敗した場合、2枚目は書き出しません。
pub fn generate_in(output_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut written = Vec::with_capacity(2);
    for spec in sample_specs() {
        let path = output_dir.join(spec.file_name);
        SolidImage::new(spec.color).save_jpeg(&path, &spec.options)?;
        written.push(path);
    }
    Ok(written)
}

/// カレントディレクトリにサンプルJPEGを書き出します。
pub fn generate() -> Result<Vec<PathBuf>, AppError> {
    generate_in(Path::new("."))
}
