use serde::{Deserialize, Serialize};

/// Emits the matched file into the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FileLoaderOptions {
    /// Output name template (`[path]`, `[name]`, `[ext]` placeholders)
    pub name: String,

    /// Prefix used when the emitted file is referenced from CSS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

impl FileLoaderOptions {
    pub fn fonts() -> Self {
        Self {
            name: "./fonts/[name].[ext]".to_string(),
            public_path: Some("../".to_string()),
        }
    }

    pub fn images() -> Self {
        Self {
            name: "[path][name].[ext]".to_string(),
            public_path: None,
        }
    }
}

/// Image optimizer settings, one block per codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ImageLoaderOptions {
    /// Skip optimization entirely (debug builds)
    pub bypass_on_debug: bool,
    pub mozjpeg: MozJpegOptions,
    pub optipng: OptiPngOptions,
    pub pngquant: PngQuantOptions,
    pub gifsicle: GifsicleOptions,
}

impl Default for ImageLoaderOptions {
    fn default() -> Self {
        Self {
            bypass_on_debug: false,
            mozjpeg: MozJpegOptions::default(),
            optipng: OptiPngOptions::default(),
            pngquant: PngQuantOptions::default(),
            gifsicle: GifsicleOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MozJpegOptions {
    pub progressive: bool,
    pub quality: u8,
}

impl Default for MozJpegOptions {
    fn default() -> Self {
        Self {
            progressive: true,
            quality: 65,
        }
    }
}

/// optipng is off; pngquant handles PNGs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptiPngOptions {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PngQuantOptions {
    /// Quality range, `min-max`
    pub quality: String,
    pub speed: u8,
}

impl Default for PngQuantOptions {
    fn default() -> Self {
        Self {
            quality: "65-90".to_string(),
            speed: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GifsicleOptions {
    pub interlaced: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_defaults_match_codec_table() {
        assert_eq!(
            serde_json::to_value(ImageLoaderOptions::default()).unwrap(),
            json!({
                "bypassOnDebug": false,
                "mozjpeg": { "progressive": true, "quality": 65 },
                "optipng": { "enabled": false },
                "pngquant": { "quality": "65-90", "speed": 4 },
                "gifsicle": { "interlaced": false }
            })
        );
    }

    #[test]
    fn image_loader_fills_missing_codecs() {
        let options: ImageLoaderOptions =
            serde_json::from_value(json!({ "pngquant": { "speed": 1 } })).unwrap();
        assert_eq!(options.pngquant.speed, 1);
        assert_eq!(options.pngquant.quality, "65-90");
        assert_eq!(options.mozjpeg, MozJpegOptions::default());
    }

    #[test]
    fn file_loader_requires_name() {
        let result: Result<FileLoaderOptions, _> =
            serde_json::from_value(json!({ "publicPath": "../" }));
        assert!(result.is_err());
    }

    #[test]
    fn only_font_options_carry_public_path() {
        assert_eq!(
            serde_json::to_value(FileLoaderOptions::images()).unwrap(),
            json!({ "name": "[path][name].[ext]" })
        );
        assert_eq!(
            serde_json::to_value(FileLoaderOptions::fonts()).unwrap(),
            json!({ "name": "./fonts/[name].[ext]", "publicPath": "../" })
        );
    }
}
