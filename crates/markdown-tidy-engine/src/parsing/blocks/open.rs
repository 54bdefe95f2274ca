use super::{
    classify::LineClass,
    kinds::{Container, FenceSig, LinkRefParts},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    /// `containers` is empty unless the fence sits inside a block quote or
    /// list item.
    FencedCode {
        sig: FenceSig,
        containers: Vec<Container>,
    },
    IndentedCode,
    Heading { level: u8, marker_end: usize },
    LinkRefDef(LinkRefParts),
}

/// Decides which block a non-blank line outside a fence starts, if any.
///
/// Returns `None` for paragraph text.
pub fn try_open_leaf(c: &LineClass) -> Option<BlockOpen> {
    // Precedence: code beats everything else.
    if let Some(sig) = &c.fence_sig {
        return Some(BlockOpen::FencedCode {
            sig: sig.clone(),
            containers: vec![],
        });
    }
    if c.is_indented {
        return Some(BlockOpen::IndentedCode);
    }
    if let Some(nested) = &c.nested_code {
        return Some(match &nested.fence {
            Some(sig) => BlockOpen::FencedCode {
                sig: sig.clone(),
                containers: nested.containers.clone(),
            },
            None => BlockOpen::IndentedCode,
        });
    }
    if let Some((level, marker_end)) = c.heading {
        return Some(BlockOpen::Heading { level, marker_end });
    }
    c.link_ref.clone().map(BlockOpen::LinkRefDef)
}
