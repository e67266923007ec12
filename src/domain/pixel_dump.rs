//! デコード済み画像の画素値を、指定した出力形式・矩形でテキストに書き出すモジュール。

use crate::error::AppError;
use image::{DynamicImage, GenericImageView};
use std::fmt::Write as _;
use std::str::FromStr;
use thiserror::Error;

// --- 出力形式 ---

/// 画素の出力形式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    Grayscale,
    Rgb565,
    Bgr565,
    #[default]
    Rgb888,
    Bgr888,
    Rgba8888,
    Bgra8888,
}

impl PixelFormat {
    pub const NAMES: [&'static str; 7] = [
        "grayscale",
        "rgb565",
        "bgr565",
        "rgb888",
        "bgr888",
        "rgba8888",
        "bgra8888",
    ];

    /// RGBA の画素を、この形式でメモリに並ぶ順の8bit値に変換します。
    ///
    /// 565形式は一度16bitに詰めてから各成分を8bitに戻すため、下位ビットの情報は失われます。
    pub fn channels(self, [r, g, b, a]: [u8; 4]) -> Vec<u8> {
        match self {
            PixelFormat::Grayscale => vec![luma(r, g, b)],
            PixelFormat::Rgb565 => expand565(pack565(r, g, b)).to_vec(),
            PixelFormat::Bgr565 => expand565(pack565(b, g, r)).to_vec(),
            PixelFormat::Rgb888 => vec![r, g, b],
            PixelFormat::Bgr888 => vec![b, g, r],
            PixelFormat::Rgba8888 => vec![r, g, b, a],
            PixelFormat::Bgra8888 => vec![b, g, r, a],
        }
    }
}

/// ITU-R BT.601 の係数で輝度を求める。
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b) + 500) / 1000;
    y.min(255) as u8
}

fn pack565(hi: u8, mid: u8, lo: u8) -> u16 {
    (u16::from(hi >> 3) << 11) | (u16::from(mid >> 2) << 5) | u16::from(lo >> 3)
}

fn expand565(v: u16) -> [u8; 3] {
    let hi = ((v >> 11) & 0x1F) as u8;
    let mid = ((v >> 5) & 0x3F) as u8;
    let lo = (v & 0x1F) as u8;
    [(hi << 3) | (hi >> 2), (mid << 2) | (mid >> 4), (lo << 3) | (lo >> 2)]
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color format: {} (expected one of: {})", .0, PixelFormat::NAMES.join(", "))]
pub struct ParsePixelFormatError(String);

impl FromStr for PixelFormat {
    type Err = ParsePixelFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grayscale" => Ok(PixelFormat::Grayscale),
            "rgb565" => Ok(PixelFormat::Rgb565),
            "bgr565" => Ok(PixelFormat::Bgr565),
            "rgb888" => Ok(PixelFormat::Rgb888),
            "bgr888" => Ok(PixelFormat::Bgr888),
            "rgba8888" => Ok(PixelFormat::Rgba8888),
            "bgra8888" => Ok(PixelFormat::Bgra8888),
            other => Err(ParsePixelFormatError(other.to_string())),
        }
    }
}

// --- 矩形 ---

/// 画素ダンプの対象範囲。`x,y,w,h` 形式で指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid rectangle format: {0}")]
pub struct ParseRectError(String);

impl FromStr for Rect {
    type Err = ParseRectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRectError(s.to_string());
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        match values[..] {
            [x, y, width, height] if width > 0 && height > 0 => Ok(Rect {
                x,
                y,
                width,
                height,
            }),
            _ => Err(invalid()),
        }
    }
}

impl Rect {
    /// 画像全体を表す矩形。
    pub fn full(image: &DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// 右端・下端の座標 (両端を含む)。
    pub fn right(&self) -> u32 {
        self.x + self.width - 1
    }
    pub fn bottom(&self) -> u32 {
        self.y + self.height - 1
    }

    /// 画像内に収まっているかを検証します。
    fn check_within(&self, image_width: u32, image_height: u32) -> Result<(), AppError> {
        let fits = |start: u32, len: u32, limit: u32| {
            len > 0 && start.checked_add(len).is_some_and(|end| end <= limit)
        };
        if fits(self.x, self.width, image_width) && fits(self.y, self.height, image_height) {
            Ok(())
        } else {
            Err(AppError::RectOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width,
                image_height,
            })
        }
    }
}

// --- ダンプ本体 ---

/// 画像の `rect` の範囲を `pixel_format` で書き出したテキストを返します。
///
/// 1行目に `(左,上)-(右,下)`、以降は1行に1ラスタ分の画素を `(  r,  g,  b) ` の形で並べます。
/// `rect` が `None` の場合は画像全体が対象です。
pub fn render(
    image: &DynamicImage,
    pixel_format: PixelFormat,
    rect: Option<Rect>,
) -> Result<String, AppError> {
    let (image_width, image_height) = image.dimensions();
    let rect = rect.unwrap_or_else(|| Rect::full(image));
    rect.check_within(image_width, image_height)?;

    let rgba = image.to_rgba8();
    let mut out = String::new();
    // String への書き込みは失敗しない
    let _ = writeln!(
        out,
        "({},{})-({},{})",
        rect.x,
        rect.y,
        rect.right(),
        rect.bottom()
    );
    for y in rect.y..=rect.bottom() {
        for x in rect.x..=rect.right() {
            let values = pixel_format.channels(rgba.get_pixel(x, y).0);
            let joined = values
                .iter()
                .map(|v| format!("{:3}", v))
                .collect::<Vec<_>>()
                .join(",");
            let _ = write!(out, "({}) ", joined);
        }
        out.push('\n');
    }
    Ok(out)
}
