// use宣言：必要なクレートやモジュールをスコープに取り込む

use super::codec_info::{CodecInfo, MetadataValue};
use super::color_mode::ColorMode;
use super::format_name::format_name;
use super::jpeg_markers;
use crate::error::AppError;
use image::{ColorType, DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

// --- 構造体定義 ---

/// 画像ファイルを読み込んで得られる診断情報。
///
/// `from_path` でのみ作成され、その時点でファイル全体のデコードまで完了しています。
/// 表示前にすべての情報が揃うため、読み込みに失敗した場合は何も出力されません。
#[derive(Debug)]
pub struct InspectionReport {
    path: PathBuf,
    file_len: usize,
    format: ImageFormat,
    mode: ColorMode,
    size: (u32, u32),
    info: CodecInfo,
    decoded_color: ColorType,
    bits_per_pixel: u16,
}

// --- 実装ブロック ---

impl InspectionReport {
    /// 画像ファイルを開いてデコードし、レポートを作成します。
    ///
    /// # 引数
    /// * `path`: 画像ファイルのパス。フォーマットは拡張子ではなく内容から判定します。
    ///
    /// # 戻り値
    /// * `Ok(InspectionReport)`: デコードに成功した場合。
    /// * `Err(AppError)`: ファイルが存在しない、または画像として読めない場合。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        Self::from_bytes(path, &bytes)
    }

    /// 読み込み済みのバイト列からレポートを作成します。`path` は表示用です。
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self, AppError> {
        Ok(Self::decode(path, bytes)?.0)
    }

    /// デコード済みの画像も合わせて返します。画素ダンプ用。
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<(Self, DynamicImage), AppError> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = reader
            .format()
            .ok_or_else(|| AppError::UnknownFormat(path.to_path_buf()))?;

        let mut decoder = reader.into_decoder()?;
        let size = decoder.dimensions();
        let mode = ColorMode::from(decoder.original_color_type());

        let mut info = match format {
            ImageFormat::Jpeg => jpeg_markers::scan(bytes),
            _ => CodecInfo::new(),
        };
        if let Some(exif) = decoder.exif_metadata()? {
            info.insert("exif", MetadataValue::Bytes(exif));
        }
        if let Some(icc) = decoder.icc_profile()? {
            info.insert("icc_profile", MetadataValue::Bytes(icc));
        }

        // 画素データまで読み切り、壊れたファイルをここで検出する
        let image = DynamicImage::from_decoder(decoder)?;
        let decoded_color = image.color();

        let report = Self {
            path: path.to_path_buf(),
            file_len: bytes.len(),
            format,
            mode,
            size,
            info,
            decoded_color,
            bits_per_pixel: decoded_color.bits_per_pixel(),
        };
        Ok((report, image))
    }

    // --- ゲッターメソッド ---

    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn format(&self) -> ImageFormat {
        self.format
    }
    pub fn format_name(&self) -> String {
        format_name(self.format)
    }
    pub fn mode(&self) -> &ColorMode {
        &self.mode
    }
    /// (幅, 高さ)
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
    pub fn info(&self) -> &CodecInfo {
        &self.info
    }
    pub fn file_len(&self) -> usize {
        self.file_len
    }
    /// デコード後の画素の型。CMYK などは RGB に変換済み。
    pub fn decoded_color(&self) -> ColorType {
        self.decoded_color
    }
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    /// 標準出力に表示する4行 (Format / Mode / Size / Info)。
    pub fn summary_lines(&self) -> [String; 4] {
        [
            format!("Format: {}", self.format_name()),
            format!("Mode: {}", self.mode),
            format!("Size: ({}, {})", self.size.0, self.size.1),
            format!("Info: {}", self.info),
        ]
    }
}

// --- テストモジュール ---
