use clap::Parser;
use serde_json::json;

use path_router::routing::{Params, PathPattern, DEFAULT_QUERY_SEPARATOR};

#[derive(Parser)]
#[command(name = "route-check")]
#[command(about = "Compile a route template and test a path against it", long_about = None)]
struct Cli {
    /// Route template, e.g. "/book/{isbn}"
    template: String,

    /// Request path to match, e.g. "/book/978-0316371247"
    path: String,

    /// Raw query string to overlay on the captures
    #[arg(short, long)]
    query: Option<String>,

    #[arg(short, long, default_value = DEFAULT_QUERY_SEPARATOR)]
    separator: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let pattern = PathPattern::compile(&cli.template)?;

    let params = pattern.captures(&cli.path).map(|captures| {
        let mut params = Params::from_captures(captures);
        if let Some(query) = &cli.query {
            params.overlay_query(query, &cli.separator);
        }
        params
    });

    let report = json!({
        "template": pattern.template(),
        "regex": pattern.as_str(),
        "names": pattern.names(),
        "matched": params.is_some(),
        "params": params,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
