//! Section-specific line parsers.
//!
//! One module per section grammar. Each parser receives a single content
//! line plus the document under construction and applies the line directly;
//! the section state machine in the parent module decides which parser a
//! line belongs to. All parsers share the permissive contract: recognized
//! input mutates the document, unrecognized input reports
//! [`Outcome::Ignored`](crate::Outcome), and only the format-definition
//! rules raise hard errors.

pub(crate) mod events;
pub(crate) mod script_info;
pub(crate) mod styles;
