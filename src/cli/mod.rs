//! Command-line interface module.

mod args;
pub mod generate;
pub mod init;
pub mod routes;

pub use args::{Cli, Commands, GenerateArgs, RouteFormat, RoutesArgs};
