//! Generators for the derived artifacts: the README listing and the site's
//! embedded data script.

pub mod embed;
pub mod readme;

pub use embed::{render_tools_data, tool_count};
pub use readme::{heading_anchor, render_readme, render_tool_entry};
