//! Built-in tool catalogue - central registration of all bundled tools.
//!
//! This is the explicit registration list the registry discovers from.
//! When adding a new tool:
//! 1. Create the definition in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `builtin_modules()`

use super::definitions::{
    CaseTool, CodeTool, ColorTool, ColorsTool, CronTool, CssTool, ExampleTool, GenerateTool,
    IconTool, ImageToAsciiTool, ImageWatermarkTool, ImgTool, JsonTool, LoadingJsTool, Md5Tool,
    MoneyTool, NavicatTool, NowHappenTool, PasswordTool, PostmanTool, RegularTool, RsaTool,
    S3Tool, ScaleTool, ShortUrlTool, SummaryTool, TimeManageTool, TimeTool, WebSocketTool,
    WordCountTool, YmlTool,
};
use super::source::{StaticSource, ToolModule};

/// Name of the built-in source in logs.
pub const BUILTIN_SOURCE: &str = "builtin";

/// Every bundled tool, ordered by directory name the way the home page
/// discovers them.
pub fn builtin_modules() -> Vec<ToolModule> {
    vec![
        ToolModule::from_definition::<CaseTool>(),
        ToolModule::from_definition::<CodeTool>(),
        ToolModule::from_definition::<ColorTool>(),
        ToolModule::from_definition::<ColorsTool>(),
        ToolModule::from_definition::<CronTool>(),
        ToolModule::from_definition::<CssTool>(),
        ToolModule::from_definition::<ExampleTool>(),
        ToolModule::from_definition::<GenerateTool>(),
        ToolModule::from_definition::<IconTool>(),
        ToolModule::from_definition::<ImageToAsciiTool>(),
        ToolModule::from_definition::<ImageWatermarkTool>(),
        ToolModule::from_definition::<ImgTool>(),
        ToolModule::from_definition::<JsonTool>(),
        ToolModule::from_definition::<LoadingJsTool>(),
        ToolModule::from_definition::<Md5Tool>(),
        ToolModule::from_definition::<MoneyTool>(),
        ToolModule::from_definition::<NavicatTool>(),
        ToolModule::from_definition::<NowHappenTool>(),
        ToolModule::from_definition::<PasswordTool>(),
        ToolModule::from_definition::<PostmanTool>(),
        ToolModule::from_definition::<RegularTool>(),
        ToolModule::from_definition::<RsaTool>(),
        ToolModule::from_definition::<S3Tool>(),
        ToolModule::from_definition::<ScaleTool>(),
        ToolModule::from_definition::<ShortUrlTool>(),
        ToolModule::from_definition::<SummaryTool>(),
        ToolModule::from_definition::<TimeTool>(),
        ToolModule::from_definition::<TimeManageTool>(),
        ToolModule::from_definition::<WebSocketTool>(),
        ToolModule::from_definition::<WordCountTool>(),
        ToolModule::from_definition::<YmlTool>(),
    ]
}

/// The built-in catalogue as a registry source.
pub fn builtin_source() -> StaticSource {
    StaticSource::new(BUILTIN_SOURCE, builtin_modules())
}
