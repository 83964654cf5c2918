//! Reusable widgets used by the picfind terminal UI.

mod chrome;
mod detail;
mod input;
mod logs;
mod results;
mod suggestions;

pub use chrome::{BANNER_TITLE, COPYRIGHT_NOTICE, render_banner, render_footer, render_status};
pub use detail::render_detail;
pub use input::{InputContext, ProgressState, render_input};
pub use logs::render_logs;
pub use results::{ResultsView, render_results};
pub use suggestions::render_suggestions;
