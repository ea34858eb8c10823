mod college;
mod common;
mod event;
mod faq;
mod gallery;
mod sponsor;
mod team;

pub use college::*;
pub use common::*;
pub use event::*;
pub use faq::*;
pub use gallery::*;
pub use sponsor::*;
pub use team::*;
