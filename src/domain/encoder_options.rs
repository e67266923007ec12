use crate::error::AppError;

/// JPEGエンコーダに渡すパラメータ。
///
/// `image` クレートのエンコーダはベースライン方式・標準ハフマンテーブル固定のため、
/// `optimize` と `progressive` は `false` のときだけエンコードできます。
/// `true` を指定した場合は `validate` がエラーを返し、ファイルは書き込まれません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// 画質 (1〜100)。
    pub quality: u8,
    /// ハフマンテーブルを画像ごとに最適化するかどうか。
    pub optimize: bool,
    /// プログレッシブ方式で出力するかどうか。
    pub progressive: bool,
}

impl EncoderOptions {
    pub const DEFAULT_QUALITY: u8 = 85;

    /// すべてのオプションを明示して作成します。
    pub fn new(quality: u8, optimize: bool, progressive: bool) -> Self {
        Self {
            quality,
            optimize,
            progressive,
        }
    }

    /// 画質だけを指定し、残りはエンコーダの既定値 (optimize=false, progressive=false) を使います。
    pub fn with_quality(quality: u8) -> Self {
        Self::new(quality, false, false)
    }

    /// エンコーダが受け付けられる組み合わせかどうかを検証します。
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=100).contains(&self.quality) {
            return Err(AppError::UnsupportedEncoderOption(format!(
                "quality は 1〜100 の範囲で指定してください (指定値: {})",
                self.quality
            )));
        }
        if self.optimize {
            return Err(AppError::UnsupportedEncoderOption(
                "optimize=true (ハフマンテーブル最適化) には対応していません".to_string(),
            ));
        }
        if self.progressive {
            return Err(AppError::UnsupportedEncoderOption(
                "progressive=true (プログレッシブJPEG) には対応していません".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self::with_quality(Self::DEFAULT_QUALITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_quality_85_and_baseline() {
        let options = EncoderOptions::default();
        assert_eq!(options, EncoderOptions::new(85, false, false));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn with_quality_matches_explicit_baseline_options() {
        // 既定値のみのオプションと、すべて明示したオプションは同じ値になる
        assert_eq!(
            EncoderOptions::with_quality(85),
            EncoderOptions::new(85, false, false)
        );
    }

    #[test]
    fn validate_rejects_out_of_range_quality() {
        for quality in [0u8, 101, 255] {
            let err = EncoderOptions::with_quality(quality).validate().unwrap_err();
            assert!(matches!(err, AppError::UnsupportedEncoderOption(_)));
        }
        assert!(EncoderOptions::with_quality(1).validate().is_ok());
        assert!(EncoderOptions::with_quality(100).validate().is_ok());
    }

    #[test]
    fn validate_rejects_optimize_and_progressive() {
        let optimize = EncoderOptions::new(85, true, false).validate();
        assert!(matches!(
            optimize,
            Err(AppError::UnsupportedEncoderOption(msg)) if msg.contains("optimize")
        ));

        let progressive = EncoderOptions::new(85, false, true).validate();
        assert!(matches!(
            progressive,
            Err(AppError::UnsupportedEncoderOption(msg)) if msg.contains("progressive")
        ));
    }
}
