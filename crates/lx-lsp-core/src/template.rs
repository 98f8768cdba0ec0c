//! Tag containment for Lx template documents
//!
//! Lx code is embedded in host text between `<?lx` and `?>` markers, the
//! same framing the CGI runner uses when compiling templates. Completion
//! only applies inside an open, unclosed code block, or anywhere in a
//! document that carries no markers at all.

/// Opening marker of an Lx code block.
pub const OPEN_TAG: &str = "<?lx";

/// Closing marker of an Lx code block.
pub const CLOSE_TAG: &str = "?>";

/// Report whether `offset` falls inside Lx code.
///
/// A document without any opening marker is treated as pure Lx. Otherwise
/// the last `<?lx` and the last `?>` before the cursor decide containment:
/// no preceding opening marker, or a closing marker after the nearest
/// opening one, means the cursor sits in host text. A cursor still inside
/// the opening marker (or on the separator that terminates it) does not
/// count as code either.
pub fn offset_in_code_block(text: &str, offset: usize) -> bool {
    if !text.contains(OPEN_TAG) {
        return true;
    }

    let prefix = &text[..offset.min(text.len())];

    let open = match prefix.rfind(OPEN_TAG) {
        Some(idx) => idx,
        None => return false,
    };
    if let Some(close) = prefix.rfind(CLOSE_TAG) {
        if close > open {
            return false;
        }
    }

    offset > open + OPEN_TAG.len() + 1
}
