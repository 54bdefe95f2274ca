pub mod code_fence;
pub mod container;
pub mod heading;
pub mod indented_code;
pub mod link_ref_def;

pub use code_fence::{CodeFence, FenceChar, FenceSig};
pub use container::{Container, ContainerPrefix, NestedLine};
pub use heading::AtxHeading;
pub use indented_code::IndentedCode;
pub use link_ref_def::{LinkRefDefinition, LinkRefParts};
