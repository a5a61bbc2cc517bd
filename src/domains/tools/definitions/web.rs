//! Network, upload and scripting tools.

use super::{DEFAULT_AUTHOR, DEFAULT_GITHUB, ToolDefinition, bundled_icon};
use crate::domains::tools::descriptor::{Icon, ToolTag};

/// HTTP request builder with response preview.
pub struct PostmanTool;

impl ToolDefinition for PostmanTool {
    const PATH: &'static str = "toolPages/postman";
    const NAME: &'static str = "HTTP请求测试";
    const DESCRIPTION: &'static str = "支持多种请求方法、参数配置、响应预览";
    const TAGS: &'static [&'static str] = &["HTTP", "API", "测试", ToolTag::Utility.as_str()];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("postman")
    }
}

pub struct WebSocketTool;

impl ToolDefinition for WebSocketTool {
    const PATH: &'static str = "toolPages/websocket";
    const NAME: &'static str = "WebSocket测试";
    const DESCRIPTION: &'static str = "WebSocket连接测试工具，支持实时消息收发";
    const TAGS: &'static [&'static str] =
        &["WebSocket", "测试", "连接", ToolTag::Utility.as_str()];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("websocket")
    }
}

/// Drag-and-drop upload to S3-compatible storage (R2, MinIO, ...).
pub struct S3Tool;

impl ToolDefinition for S3Tool {
    const PATH: &'static str = "toolPages/s3";
    const NAME: &'static str = "S3 文件上传";
    const DESCRIPTION: &'static str =
        "兼容 S3 API 的文件拖拽上传工具，支持 R2、MinIO 等兼容 S3 的存储服务";
    const TAGS: &'static [&'static str] = &[
        "上传",
        "存储",
        "S3",
        "R2",
        "AWS",
        ToolTag::Utility.as_str(),
    ];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    // Shares the image tool's icon
    fn icon() -> Option<Icon> {
        bundled_icon("img")
    }
}

/// Aggregated news feeds.
pub struct NowHappenTool;

impl ToolDefinition for NowHappenTool {
    const PATH: &'static str = "toolPages/nowhappen";
    const NAME: &'static str = "实时新闻聚合";
    const DESCRIPTION: &'static str = "聚合多个新闻源的最新资讯，一站式获取热点新闻";
    const TAGS: &'static [&'static str] = &["新闻", "资讯", "聚合", ToolTag::Utility.as_str()];
    const AUTHOR: Option<&'static str> = DEFAULT_AUTHOR;
    const GITHUB: Option<&'static str> = DEFAULT_GITHUB;

    fn icon() -> Option<Icon> {
        bundled_icon("nowhappen")
    }
}

/// Runs pasted or local JavaScript files.
pub struct LoadingJsTool;

impl ToolDefinition for LoadingJsTool {
    const PATH: &'static str = "toolPages/loadingJs";
    const NAME: &'static str = "Js脚本运行器";
    const DESCRIPTION: &'static str = "一个可以运行JavaScript脚本的工具，可以加载本地JavaScript文件，也可以输入JavaScript代码并运行。";
    const TAGS: &'static [&'static str] =
        &["JavaScript", "运行时", ToolTag::Utility.as_str()];
    const AUTHOR: Option<&'static str> = Some("一勺");
    const GITHUB: Option<&'static str> = Some("https://github.com/ZRMYDYCG");

    fn icon() -> Option<Icon> {
        bundled_icon("loadingJs")
    }
}
