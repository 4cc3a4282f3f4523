mod arrays_tests;
mod leetcode_tests;
mod stack_tests;
mod strings_tests;
