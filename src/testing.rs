//! Fluent assertion API for comment trees
//!
//!     Tests that walk the tree by hand tend to check node counts and little else, and they
//!     break in many places whenever a node changes shape. The assertions here name what is
//!     being checked (`param_name`, `direction`, `text`) and carry a context string into every
//!     failure message, so a failing check points at the exact node.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use comment_ast::testing::assert_comment;
//!
//!     assert_comment(&full)
//!         .block_count(2)
//!         .block(0, |block| {
//!             block.assert_paragraph().text("Copies a string.")
//!         })
//!         .block(1, |block| {
//!             block
//!                 .assert_param_command()
//!                 .param_name("dst")
//!                 .direction(PassDirection::Out, true)
//!                 .index(0)
//!         });
//!     ```

mod assertions;

pub use assertions::{
    BlockAssertion, BlockCommandAssertion, FullCommentAssertion, InlineAssertion,
    ParagraphAssertion, ParamCommandAssertion, TParamCommandAssertion, VerbatimBlockAssertion,
    VerbatimLineAssertion,
};

use crate::ast::FullComment;

/// Create an assertion builder for a full comment
pub fn assert_comment<'n, 'a>(full: &'n FullComment<'a>) -> FullCommentAssertion<'n, 'a> {
    FullCommentAssertion {
        full,
        context: "FullComment".to_string(),
    }
}
