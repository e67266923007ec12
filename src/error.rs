use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("画像コーデックのエラー: {0}")]
    Image(#[from] image::ImageError),

    #[error("画像フォーマットを判別できませんでした: {0}")]
    UnknownFormat(PathBuf),

    #[error("エンコーダが対応していないオプションです: {0}")]
    UnsupportedEncoderOption(String),

    #[error(
        "指定された矩形 ({x},{y},{width},{height}) が画像 ({image_width}x{image_height}) の範囲外です"
    )]
    RectOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}
