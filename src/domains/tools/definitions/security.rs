//! Cryptography and credential tools.

use super::{DEFAULT_AUTHOR, DEFAULT_GITHUB, ToolDefinition, bundled_icon};
use crate::domains::tools::descriptor::{Icon, ToolTag};

/// RSA key pairs, encryption and decryption.
pub struct RsaTool;

impl ToolDefinition for RsaTool {
    const PATH: &'static str = "toolPages/rsa";
    const NAME: &'static str = "RSA加解密";
    const DESCRIPTION: &'static str = "生成RSA公私钥对，支持多种密钥长度";
    const TAGS: &'static [&'static str] = &[
        "加密",
        "解密",
        "RSA",
        ToolTag::Security.as_str(),
        ToolTag::Generator.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("rsa")
    }
}

/// MD5 digests, 32 or 16 characters, either case.
pub struct Md5Tool;

impl ToolDefinition for Md5Tool {
    const PATH: &'static str = "toolPages/md5";
    const NAME: &'static str = "MD5加密";
    const DESCRIPTION: &'static str = "将输入文本转换为MD5加密格式，支持32位和16位大小写输出";
    const TAGS: &'static [&'static str] = &[
        "加密",
        "MD5",
        ToolTag::Security.as_str(),
        ToolTag::Encoding.as_str(),
    ];
    const AUTHOR: Option<&'static str> = Some("duobaowa");
    const GITHUB: Option<&'static str> = Some("https://github.com/DuoBaoWa");

    fn icon() -> Option<Icon> {
        bundled_icon("md5")
    }
}

/// Recovers connection passwords stored by Navicat.
pub struct NavicatTool;

impl ToolDefinition for NavicatTool {
    const PATH: &'static str = "toolPages/navicat";
    const NAME: &'static str = "Navicat密码解密";
    const DESCRIPTION: &'static str = "解密Navicat存储的数据库连接密码";
    const TAGS: &'static [&'static str] = &["Navicat", "解密", ToolTag::Security.as_str()];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("navicat")
    }
}
