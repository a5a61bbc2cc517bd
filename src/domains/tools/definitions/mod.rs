//! Built-in tool definitions.
//!
//! Each tool is a unit struct implementing [`ToolDefinition`], grouped by
//! category. Every tool lives under `toolPages/<dir>` and the directory name
//! is its identifier, so two definitions must never share a `PATH`.
//!
//! `TAGS` lists the author's own tags first, followed by the categories of
//! [`ToolTag`](super::descriptor::ToolTag) the tool belongs to.
//!
//! ## Adding a New Tool
//!
//! 1. Add a struct to the matching category file (or a new file)
//! 2. Implement `ToolDefinition` for it
//! 3. Export it here
//! 4. Register it in `catalog.rs`

pub mod converter;
pub mod encoding;
pub mod generator;
pub mod media;
pub mod samples;
pub mod security;
pub mod text;
pub mod web;

pub use converter::{MoneyTool, ScaleTool, TimeTool, YmlTool};
pub use encoding::{CodeTool, ImgTool, ShortUrlTool};
pub use generator::{CronTool, GenerateTool, IconTool, PasswordTool};
pub use media::{ColorTool, ColorsTool, CssTool, ImageToAsciiTool, ImageWatermarkTool};
pub use samples::{ExampleTool, TimeManageTool};
pub use security::{Md5Tool, NavicatTool, RsaTool};
pub use text::{CaseTool, JsonTool, RegularTool, SummaryTool, WordCountTool};
pub use web::{LoadingJsTool, NowHappenTool, PostmanTool, S3Tool, WebSocketTool};

use super::descriptor::{Icon, ToolDescriptor};

/// Author shared by most built-in tools.
pub(crate) const DEFAULT_AUTHOR: Option<&str> = Some("LYX9527");
pub(crate) const DEFAULT_GITHUB: Option<&str> = Some("https://github.com/LYX9527");

/// Trait for built-in tool definitions.
///
/// Each tool provides its metadata as constants; `descriptor()` assembles
/// them into a [`ToolDescriptor`].
pub trait ToolDefinition {
    /// Where the tool lives. The last segment becomes the tool identifier.
    const PATH: &'static str;

    /// Display name.
    const NAME: &'static str;

    /// What the tool does.
    const DESCRIPTION: &'static str;

    /// Tags in display order.
    const TAGS: &'static [&'static str];

    const AUTHOR: Option<&'static str> = None;
    const EMAIL: Option<&'static str> = None;
    const GITHUB: Option<&'static str> = None;

    /// The tool's icon. `None` lets the UI draw a default.
    fn icon() -> Option<Icon> {
        None
    }

    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            tags: Self::TAGS.iter().map(|tag| tag.to_string()).collect(),
            icon: Self::icon(),
            author: Self::AUTHOR.map(str::to_string),
            email: Self::EMAIL.map(str::to_string),
            github: Self::GITHUB.map(str::to_string),
        }
    }
}

/// Icon pointing at the `Icon.vue` component in a tool's directory.
pub(crate) fn bundled_icon(dir: &str) -> Option<Icon> {
    Some(Icon::Asset(format!("{dir}/Icon.vue")))
}
