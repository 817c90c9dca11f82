pub mod anchor;
pub mod blocks;
pub mod context;
pub mod copy;
pub mod history;
pub mod link;
pub mod page;

pub use anchor::resolve_anchor;
pub use blocks::{render_block, render_blocks, render_landing};
pub use context::{LinkConfig, RenderContext};
pub use copy::{Catalog, CopyError};
pub use history::render_history;
pub use link::{resolve_href, resolve_page_href};
pub use page::render_page;
