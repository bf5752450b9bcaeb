//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod malformed_record;
pub mod message;

// Re-export for convenience
pub use error::{InputError, ParseError, PreviewError};
pub use identifiers::{InvalidMessageId, InvalidUserId, MessageId, UserId};
pub use malformed_record::MalformedRecord;
pub use message::{Mention, Message};
