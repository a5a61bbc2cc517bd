//! Text processing tools.

use super::{DEFAULT_AUTHOR, DEFAULT_GITHUB, ToolDefinition, bundled_icon};
use crate::domains::tools::descriptor::{Icon, ToolTag};

/// JSON formatting, minification and validation.
pub struct JsonTool;

impl ToolDefinition for JsonTool {
    const PATH: &'static str = "toolPages/json";
    const NAME: &'static str = "JSON工具";
    const DESCRIPTION: &'static str = "支持JSON格式化、压缩、校验等功能";
    const TAGS: &'static [&'static str] = &[
        "JSON",
        "格式化",
        "校验",
        ToolTag::TextProcessing.as_str(),
        ToolTag::Utility.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("json")
    }
}

/// Regular expression tester with a library of common patterns.
pub struct RegularTool;

impl ToolDefinition for RegularTool {
    const PATH: &'static str = "toolPages/regular";
    const NAME: &'static str = "正则表达式工具";
    const DESCRIPTION: &'static str = "支持正则表达式测试、常用正则匹配";
    const TAGS: &'static [&'static str] = &[
        "正则",
        "匹配",
        "测试",
        ToolTag::TextProcessing.as_str(),
        ToolTag::Utility.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("regular")
    }
}

/// Naming convention converter (camelCase, PascalCase, snake_case, ...).
pub struct CaseTool;

impl ToolDefinition for CaseTool {
    const PATH: &'static str = "toolPages/case";
    const NAME: &'static str = "命名转换";
    const DESCRIPTION: &'static str =
        "支持多种命名格式转换，包括驼峰、帕斯卡、下划线等命名规范";
    const TAGS: &'static [&'static str] = &[
        "命名",
        "转换",
        "格式化",
        ToolTag::TextProcessing.as_str(),
        ToolTag::Converter.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("case")
    }
}

/// Grid paper with character statistics.
pub struct WordCountTool;

impl ToolDefinition for WordCountTool {
    const PATH: &'static str = "toolPages/wordCount";
    const NAME: &'static str = "方格纸工具";
    const DESCRIPTION: &'static str = "生成方格纸背景，支持中英文、标点符号、空格等字符的统计，可以将内容填写到方格纸上预览和导出";
    const TAGS: &'static [&'static str] = &[
        "工具",
        "方格纸",
        "字数统计",
        "文本分析",
        ToolTag::TextProcessing.as_str(),
    ];
    const AUTHOR: Option<&'static str> = Some("CncCbz");
    const GITHUB: Option<&'static str> = Some("https://github.com/CncCbz");

    fn icon() -> Option<Icon> {
        bundled_icon("wordCount")
    }
}

/// Summaries of web pages.
pub struct SummaryTool;

impl ToolDefinition for SummaryTool {
    const PATH: &'static str = "toolPages/summary";
    const NAME: &'static str = "页面总结工具";
    const DESCRIPTION: &'static str = "快速生成网页内容的摘要总结";
    const TAGS: &'static [&'static str] = &[
        "总结",
        "网页",
        "爬取",
        ToolTag::TextProcessing.as_str(),
        ToolTag::Utility.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    // Lower-case file name in this tool's directory
    fn icon() -> Option<Icon> {
        Some(Icon::Asset("summary/icon.vue".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_metadata() {
        let d = JsonTool::descriptor();
        assert_eq!(d.name, "JSON工具");
        assert_eq!(d.tags, vec!["JSON", "格式化", "校验", "text-processing", "utility"]);
        assert_eq!(d.icon, Some(Icon::Asset("json/Icon.vue".to_string())));
        assert_eq!(d.author.as_deref(), Some("LYX9527"));
        assert_eq!(d.email, None);
    }

    #[test]
    fn test_author_tags_come_before_categories() {
        let d = WordCountTool::descriptor();
        assert_eq!(&d.tags[..4], &["工具", "方格纸", "字数统计", "文本分析"]);
        assert_eq!(d.vocabulary_tags().collect::<Vec<_>>(), vec![ToolTag::TextProcessing]);
        assert_eq!(d.github.as_deref(), Some("https://github.com/CncCbz"));
    }
}
