//! Core completion logic for the Lx language
//!
//! This crate provides the data and the context check behind editor
//! completion for Lx, independent of any host protocol:
//!
//! - **Completion**: built-in function, keyword, and literal items
//! - **Tag containment**: whether a cursor offset sits inside an
//!   `<?lx ... ?>` code block
//!
//! # Example
//!
//! ```
//! use lx_lsp_core::{get_all_completions, offset_in_code_block};
//!
//! let doc = "<?lx print(1); ?>";
//! if offset_in_code_block(doc, 10) {
//!     println!("Total completions: {}", get_all_completions().len());
//! }
//! ```

pub mod builtins;
pub mod completion;
pub mod template;

// Re-export main types for convenience
pub use completion::{
    get_all_completions, get_function_completions, get_keyword_completions,
    get_literal_completions, CompletionEntry, CompletionKind,
};
pub use template::{offset_in_code_block, CLOSE_TAG, OPEN_TAG};
