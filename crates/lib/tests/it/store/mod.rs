//! Session store integration tests

mod json_file_tests;
