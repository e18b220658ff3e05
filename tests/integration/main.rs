//! Integration tests for wirecube.

mod cli_test;
mod config_test;
mod cube_test;
mod driver_test;
