//! Integration tests for marquee

mod animation_test;
mod cli_test;
mod helpers;
mod text_test;
