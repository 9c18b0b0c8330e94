//! Routes command implementation.
//!
//! Prints the enumerated route list for inspection and CI diffing.

use std::fs;
use std::io::Write;

use anyhow::Result;

use crate::cli::{RouteFormat, RoutesArgs};
use crate::config::SiteConfig;
use crate::content::FsContent;
use crate::log;
use crate::route::enumerate_routes;

/// Execute routes command
pub fn run_routes(args: &RoutesArgs, config: &SiteConfig) -> Result<()> {
    let source = FsContent::new(config);
    let routes = enumerate_routes(&config.i18n, &source)?;

    let formatted = format_routes(&routes, args)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("routes"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Format the route list as text or JSON.
fn format_routes(routes: &[String], args: &RoutesArgs) -> Result<String> {
    let formatted = match args.format {
        RouteFormat::Text => routes.join("\n"),
        RouteFormat::Json => {
            if args.pretty {
                serde_json::to_string_pretty(routes)?
            } else {
                serde_json::to_string(routes)?
            }
        }
    };
    Ok(formatted)
}
