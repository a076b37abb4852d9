//! Remote booklet API
//!
//! Discovery, book metadata and section bodies, all behind one
//! authenticated [`BookletClient`].

mod client;
mod errors;
pub mod types;

pub use client::BookletClient;
pub use errors::ApiError;
pub use types::{BookId, BookInfo, BookInfoResult, SectionRef};
