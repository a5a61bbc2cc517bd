//! Starter tools shipped as templates for new tool authors.
//!
//! They carry no author and are listed like any other tool.

use super::{ToolDefinition, bundled_icon};
use crate::domains::tools::descriptor::{Icon, ToolTag};

pub struct ExampleTool;

impl ToolDefinition for ExampleTool {
    const PATH: &'static str = "toolPages/example";
    const NAME: &'static str = "示例工具";
    const DESCRIPTION: &'static str = "用来做开发例子的示例工具";
    const TAGS: &'static [&'static str] = &["工具", "示例", ToolTag::Utility.as_str()];

    fn icon() -> Option<Icon> {
        bundled_icon("example")
    }
}

pub struct TimeManageTool;

impl ToolDefinition for TimeManageTool {
    const PATH: &'static str = "toolPages/timeManage";
    const NAME: &'static str = "Example Tool";
    const DESCRIPTION: &'static str = "This is an example tool.";
    const TAGS: &'static [&'static str] = &["example", ToolTag::Utility.as_str()];

    fn icon() -> Option<Icon> {
        bundled_icon("timeManage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_have_no_author() {
        for d in [ExampleTool::descriptor(), TimeManageTool::descriptor()] {
            assert!(d.author.is_none());
            assert!(d.github.is_none());
        }
    }
}
