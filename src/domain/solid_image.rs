// use宣言：必要なクレートやモジュールをスコープに取り込む

use super::encoder_options::EncoderOptions;
use crate::error::AppError;
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;

/// サンプル画像の幅 (px)。
pub const SAMPLE_WIDTH: u32 = 240;
/// サンプル画像の高さ (px)。
pub const SAMPLE_HEIGHT: u32 = 320;

// --- 構造体定義 ---

/// 塗りつぶしに使う色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillColor {
    Red,
    Blue,
}

impl FillColor {
    /// RGB の画素値を返します。
    pub fn rgb(self) -> Rgb<u8> {
        match self {
            FillColor::Red => Rgb([255, 0, 0]),
            FillColor::Blue => Rgb([0, 0, 255]),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FillColor::Red => "red",
            FillColor::Blue => "blue",
        }
    }
}

/// 単色で塗りつぶされた RGB 画像。
///
/// 生成後は変更せず、JPEGにエンコードして保存したら破棄する想定です。
#[derive(Debug, Clone, PartialEq)]
pub struct SolidImage {
    color: FillColor,
    buffer: RgbImage,
}

// --- 実装ブロック ---

impl SolidImage {
    /// 既定サイズ (240x320) の単色画像を作成します。
    pub fn new(color: FillColor) -> Self {
        Self::with_size(SAMPLE_WIDTH, SAMPLE_HEIGHT, color)
    }

    /// 任意サイズの単色画像を作成します。
    pub fn with_size(width: u32, height: u32, color: FillColor) -> Self {
        Self {
            color,
            buffer: RgbImage::from_pixel(width, height, color.rgb()),
        }
    }

    pub fn color(&self) -> FillColor {
        self.color
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// メモリ上で JPEG にエンコードし、そのバイト列を返します。
    ///
    /// # 引数
    /// * `options`: エンコーダに渡すパラメータ。エンコード前に検証されます。
    ///
    /// # 戻り値
    /// * `Ok(Vec<u8>)`: JPEGのバイト列。
    /// * `Err(AppError)`: オプションが不正な場合、またはエンコードに失敗した場合。
    pub fn encode_jpeg(&self, options: &EncoderOptions) -> Result<Vec<u8>, AppError> {
        options.validate()?;

        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, options.quality);
        self.buffer.write_with_encoder(encoder)?;
        Ok(bytes)
    }

    /// JPEG にエンコードして `path` に書き込みます。既存のファイルは上書きされます。
    ///
    /// エンコードが終わってから一括で書き込むため、失敗時に中途半端なファイルは残りません。
    pub fn save_jpeg(&self, path: &Path, options: &EncoderOptions) -> Result<(), AppError> {
        let bytes = self.encode_jpeg(options)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

// --- テストモジュール ---
