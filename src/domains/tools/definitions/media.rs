//! Color, CSS and image tools.

use super::{DEFAULT_AUTHOR, DEFAULT_GITHUB, ToolDefinition, bundled_icon};
use crate::domains::tools::descriptor::{Icon, ToolTag};

/// Color picker and box-shadow generator.
pub struct ColorTool;

impl ToolDefinition for ColorTool {
    const PATH: &'static str = "toolPages/color";
    const NAME: &'static str = "颜色工具";
    const DESCRIPTION: &'static str = "颜色选择器、阴影生成器，支持多种阴影效果";
    const TAGS: &'static [&'static str] = &["颜色", "阴影", "CSS", ToolTag::Design.as_str()];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("color")
    }
}

/// Preset and generated color palettes.
pub struct ColorsTool;

impl ToolDefinition for ColorsTool {
    const PATH: &'static str = "toolPages/colors";
    const NAME: &'static str = "色系推荐";
    const DESCRIPTION: &'static str = "提供预设色系和自定义色系生成功能";
    const TAGS: &'static [&'static str] = &[
        "设计",
        "配色",
        "生成",
        ToolTag::Design.as_str(),
        ToolTag::Generator.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("colors")
    }
}

/// CSS effect showcase.
pub struct CssTool;

impl ToolDefinition for CssTool {
    const PATH: &'static str = "toolPages/css";
    const NAME: &'static str = "CSS效果库";
    const DESCRIPTION: &'static str = "各种实用CSS效果展示和代码片段";
    const TAGS: &'static [&'static str] = &["CSS", "动画", "效果", ToolTag::Design.as_str()];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("css")
    }
}

/// Images rendered as ASCII art.
pub struct ImageToAsciiTool;

impl ToolDefinition for ImageToAsciiTool {
    const PATH: &'static str = "toolPages/imageToAscii";
    const NAME: &'static str = "图片转字符画";
    const DESCRIPTION: &'static str = "将图片转换为ASCII字符组成的艺术字符画";
    const TAGS: &'static [&'static str] = &[
        "图片",
        "字符画",
        "ASCII字符",
        ToolTag::Image.as_str(),
        ToolTag::Converter.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("imageToAscii")
    }
}

/// Single and tiled text watermarks.
pub struct ImageWatermarkTool;

impl ToolDefinition for ImageWatermarkTool {
    const PATH: &'static str = "toolPages/imageWatermark";
    const NAME: &'static str = "图片水印";
    const DESCRIPTION: &'static str = "图片水印工具可以对各种类型图片进行自定义水印添加。提供单文字和平铺模式以及常用自定义文字颜色，大小，偏移和平铺内容边距等操作";
    const TAGS: &'static [&'static str] = &["图片", "水印", "自定义", ToolTag::Image.as_str()];
    const AUTHOR: Option<&'static str> = Some("Setruth");
    const GITHUB: Option<&'static str> = Some("https://github.com/Setruth");

    fn icon() -> Option<Icon> {
        bundled_icon("imageWatermark")
    }
}
