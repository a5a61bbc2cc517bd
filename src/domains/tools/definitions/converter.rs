//! Unit and format converters.

use super::{DEFAULT_AUTHOR, DEFAULT_GITHUB, ToolDefinition, bundled_icon};
use crate::domains::tools::descriptor::{Icon, ToolTag};

/// Unix timestamps to dates and back.
pub struct TimeTool;

impl ToolDefinition for TimeTool {
    const PATH: &'static str = "toolPages/time";
    const NAME: &'static str = "时间转换";
    const DESCRIPTION: &'static str = "Unix时间戳与日期格式互转工具，支持毫秒/秒级时间戳转换";
    const TAGS: &'static [&'static str] = &[
        "时间",
        "转换",
        "格式化",
        ToolTag::Converter.as_str(),
        ToolTag::Utility.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("time")
    }
}

/// Number base conversion.
pub struct ScaleTool;

impl ToolDefinition for ScaleTool {
    const PATH: &'static str = "toolPages/scale";
    const NAME: &'static str = "进制转换";
    const DESCRIPTION: &'static str = "支持二进制、八进制、十进制、十六进制等数字进制转换";
    const TAGS: &'static [&'static str] = &["进制", "转换", "计算", ToolTag::Converter.as_str()];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("scale")
    }
}

/// Amounts written out in capital RMB numerals.
pub struct MoneyTool;

impl ToolDefinition for MoneyTool {
    const PATH: &'static str = "toolPages/money";
    const NAME: &'static str = "人民币大写转换";
    const DESCRIPTION: &'static str = "将数字金额转换为人民币大写形式";
    const TAGS: &'static [&'static str] =
        &["转换", "金额", "人民币", ToolTag::Converter.as_str()];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("money")
    }
}

/// JSON and YAML in both directions.
pub struct YmlTool;

impl ToolDefinition for YmlTool {
    const PATH: &'static str = "toolPages/yml";
    const NAME: &'static str = "JSON/YAML转换";
    const DESCRIPTION: &'static str = "支持JSON和YAML格式互相转换，支持格式化";
    const TAGS: &'static [&'static str] = &[
        "JSON",
        "YAML",
        "转换",
        ToolTag::Converter.as_str(),
        ToolTag::TextProcessing.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("yml")
    }
}
