//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Member, Message) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's gateway
//! would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! #[test]
//! fn converts_message() {
//!     let author = create_test_user(1, "author", None, false);
//!     let away = create_test_user(2, "away", None, false);
//!     let message = create_test_message(10, 20, Some(30), author, "hi <@2>", vec![away]);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `message::create_test_message` - Create Serenity Message objects
//! - `message::create_test_mention` - Attach guild member data to a mentioned user

pub mod member;
pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use message::{create_test_mention, create_test_message};
pub use user::create_test_user;
