//! Plain-text rendering of the viewer state.
//!
//! Pure function of `PostViewer`, with no terminal handling, so every
//! rendering rule is testable as string assertions. Errors are wrapped in
//! ANSI red so they stand out when the host prints to a terminal.

use crate::view::{PostViewer, ViewState};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Render the viewer to display text: a header naming the configured API
/// address, then the body for the current state.
///
/// - `Loading` shows a progress line.
/// - `Failed` shows the error message in red.
/// - `Loaded` shows one block per post, labeled with its id and title, or a
///   "no posts" placeholder when the list is empty.
pub fn render(viewer: &PostViewer) -> String {
    let mut out = String::new();
    out.push_str("Simple Blog\n");
    out.push_str(&format!(
        "Connecting to API: {}\n\n",
        viewer.configured_url().unwrap_or("Not Configured")
    ));

    match viewer.state() {
        ViewState::Uninitialized => {}
        ViewState::Loading => out.push_str("Loading posts...\n"),
        ViewState::Failed(err) => out.push_str(&format!("{RED}{err}{RESET}\n")),
        ViewState::Loaded(posts) => {
            if posts.is_empty() {
                out.push_str("No posts to display.\n");
            } else {
                for post in posts {
                    out.push_str(&format!("#{} {}\n{}\n\n", post.id, post.title, post.content));
                }
            }
        }
    }
    out
}
