pub mod arrays;
pub mod demo;
pub mod expression;
pub mod history;
pub mod leetcode;
pub mod monotonic;
pub mod strings;
