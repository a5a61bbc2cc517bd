//! Generators.

use super::{DEFAULT_AUTHOR, DEFAULT_GITHUB, ToolDefinition, bundled_icon};
use crate::domains::tools::descriptor::{Icon, ToolTag};

/// UUIDs, hashes and QR codes.
pub struct GenerateTool;

impl ToolDefinition for GenerateTool {
    const PATH: &'static str = "toolPages/generate";
    const NAME: &'static str = "生成工具";
    const DESCRIPTION: &'static str = "UUID生成、哈希计算、二维码生成";
    const TAGS: &'static [&'static str] = &[
        "UUID",
        "哈希",
        "二维码",
        ToolTag::Generator.as_str(),
        ToolTag::Security.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("generate")
    }
}

pub struct PasswordTool;

impl ToolDefinition for PasswordTool {
    const PATH: &'static str = "toolPages/password";
    const NAME: &'static str = "密码生成";
    const DESCRIPTION: &'static str = "生成随机密码，支持自定义长度、字符类型和排除字符";
    const TAGS: &'static [&'static str] = &[
        "密码",
        "生成",
        "随机",
        ToolTag::Generator.as_str(),
        ToolTag::Security.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("password")
    }
}

/// Cron expressions with upcoming run times.
pub struct CronTool;

impl ToolDefinition for CronTool {
    const PATH: &'static str = "toolPages/cron";
    const NAME: &'static str = "Cron表达式";
    const DESCRIPTION: &'static str = "Cron表达式生成和验证工具，支持查看未来运行时间";
    const TAGS: &'static [&'static str] = &[
        "定时",
        "调度",
        "验证",
        ToolTag::Generator.as_str(),
        ToolTag::Utility.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("cron")
    }
}

/// Rounded icons in several sizes.
pub struct IconTool;

impl ToolDefinition for IconTool {
    const PATH: &'static str = "toolPages/icon";
    const NAME: &'static str = "图标生成器";
    const DESCRIPTION: &'static str = "支持生成各种尺寸的圆角图标";
    const TAGS: &'static [&'static str] = &[
        "图标",
        "生成器",
        "工具",
        ToolTag::Generator.as_str(),
        ToolTag::Design.as_str(),
        ToolTag::Image.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("icon")
    }
}
