//! shotclip: screenshot-to-clipboard tool with a local web editor
//!
//! Captures a screenshot through platform-specific external commands, copies
//! it to the system clipboard, and optionally serves it through a minimal
//! local editor page. All pixel work is delegated to OS utilities; this
//! crate is the dispatch, sequencing, and serving glue around them.

pub mod capture;
pub mod clipboard;
pub mod countdown;
pub mod error;
pub mod model;
pub mod run;
pub mod server;
pub mod util;
