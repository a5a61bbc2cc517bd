//! Encoding and URL tools.

use super::{DEFAULT_AUTHOR, DEFAULT_GITHUB, ToolDefinition, bundled_icon};
use crate::domains::tools::descriptor::{Icon, ToolTag};

/// Base64, URL and JWT encoding.
pub struct CodeTool;

impl ToolDefinition for CodeTool {
    const PATH: &'static str = "toolPages/code";
    const NAME: &'static str = "编码转换";
    const DESCRIPTION: &'static str = "支持Base64、URL、JWT等多种编码格式转换";
    const TAGS: &'static [&'static str] = &[
        "编码",
        "解码",
        "转换",
        ToolTag::Encoding.as_str(),
        ToolTag::Converter.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("code")
    }
}

/// Image compression and Base64 conversion.
pub struct ImgTool;

impl ToolDefinition for ImgTool {
    const PATH: &'static str = "toolPages/img";
    const NAME: &'static str = "Base64图片工具";
    const DESCRIPTION: &'static str = "支持图片压缩、转换等功能，支持拖放上传";
    const TAGS: &'static [&'static str] = &[
        "图片",
        "压缩",
        "Base64",
        ToolTag::Image.as_str(),
        ToolTag::Encoding.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("img")
    }
}

/// Short links with optional access password.
pub struct ShortUrlTool;

impl ToolDefinition for ShortUrlTool {
    const PATH: &'static str = "toolPages/shortUrl";
    const NAME: &'static str = "短链接生成";
    const DESCRIPTION: &'static str = "生成短链接，支持访问密码保护";
    const TAGS: &'static [&'static str] = &[
        "短链接",
        "URL",
        "加密访问",
        ToolTag::Generator.as_str(),
        ToolTag::Utility.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("shortUrl")
    }
}
