//! Warden Test Utils
//!
//! Provides shared testing utilities for the warden bot. The crate offers factory
//! functions that build Serenity model objects from gateway-shaped JSON, so conversion
//! code can be tested against the same structures Discord delivers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_user;
//!
//! #[test]
//! fn test_user_conversion() {
//!     let user = create_test_user(175928847299117063, "alice", Some("Alice"), false);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
