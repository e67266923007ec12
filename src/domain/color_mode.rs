use image::ExtendedColorType;
use std::fmt;

/// 画像のカラーモード。表示には "RGB" や "L" などの短い識別子を使います。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    Bilevel,
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
    Cmyk,
    Luma16,
    LumaAlpha16,
    Rgb16,
    Rgba16,
    RgbF32,
    RgbaF32,
    /// 上記以外。デコーダが返した型名をそのまま保持する。
    Other(String),
}

impl ColorMode {
    pub fn as_str(&self) -> &str {
        match self {
            ColorMode::Bilevel => "1",
            ColorMode::Luma => "L",
            ColorMode::LumaAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Cmyk => "CMYK",
            ColorMode::Luma16 => "I;16",
            ColorMode::LumaAlpha16 => "LA;16",
            ColorMode::Rgb16 => "RGB;16",
            ColorMode::Rgba16 => "RGBA;16",
            ColorMode::RgbF32 => "RGB;F",
            ColorMode::RgbaF32 => "RGBA;F",
            ColorMode::Other(name) => name,
        }
    }
}

impl From<ExtendedColorType> for ColorMode {
    fn from(color: ExtendedColorType) -> Self {
        match color {
            ExtendedColorType::L1 => ColorMode::Bilevel,
            ExtendedColorType::L8 => ColorMode::Luma,
            ExtendedColorType::La8 => ColorMode::LumaAlpha,
            ExtendedColorType::Rgb8 => ColorMode::Rgb,
            ExtendedColorType::Rgba8 => ColorMode::Rgba,
            ExtendedColorType::Cmyk8 => ColorMode::Cmyk,
            ExtendedColorType::L16 => ColorMode::Luma16,
            ExtendedColorType::La16 => ColorMode::LumaAlpha16,
            ExtendedColorType::Rgb16 => ColorMode::Rgb16,
            ExtendedColorType::Rgba16 => ColorMode::Rgba16,
            ExtendedColorType::Rgb32F => ColorMode::RgbF32,
            ExtendedColorType::Rgba32F => ColorMode::RgbaF32,
            other => ColorMode::Other(format!("{:?}", other)),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_color_types_map_to_short_names() {
        assert_eq!(ColorMode::from(ExtendedColorType::Rgb8).to_string(), "RGB");
        assert_eq!(ColorMode::from(ExtendedColorType::L8).to_string(), "L");
        assert_eq!(ColorMode::from(ExtendedColorType::Rgba8).to_string(), "RGBA");
        assert_eq!(ColorMode::from(ExtendedColorType::Cmyk8).to_string(), "CMYK");
        assert_eq!(ColorMode::from(ExtendedColorType::L16).to_string(), "I;16");
    }

    #[test]
    fn unlisted_color_type_keeps_debug_name() {
        let mode = ColorMode::from(ExtendedColorType::Unknown(3));
        assert_eq!(mode, ColorMode::Other("Unknown(3)".to_string()));
    }
}
