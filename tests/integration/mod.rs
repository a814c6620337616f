//! Integration tests for the gitignored toolkit

mod enumeration;
mod test_utils;
