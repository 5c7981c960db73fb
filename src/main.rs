use clap::Parser;
use scb_regions::region::{Region, RegionCatalog, RegionResolver};
use scb_regions::server;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// SCB Regions — find Swedish region codes offline
///
/// Resolves a municipality, county or nation by name or code and prints
/// the canonical record. Accepts names without å/ä/ö.
///
/// Examples:
///   regions Göteborg
///   regions --query Goteborg --all
///   regions 1480
///   regions --county 14 --plain
///   regions --serve --port 8080
#[derive(Parser)]
#[command(name = "regions", version, about, long_about = None)]
struct Cli {
    /// Region name or code (positional). Example: regions Kungälv
    #[arg(index = 1)]
    query_positional: Option<String>,

    /// Region name or code (named). Example: --query "Upplands Väsby"
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Print every matching candidate instead of the best match.
    #[arg(long, short = 'a')]
    all: bool,

    /// List the municipalities of a county code (e.g. 14).
    #[arg(long)]
    county: Option<String>,

    /// List all counties.
    #[arg(long)]
    counties: bool,

    /// Print catalog statistics.
    #[arg(long)]
    stats: bool,

    /// One line per region instead of JSON.
    #[arg(long)]
    plain: bool,

    /// Start the HTTP server.
    #[arg(long)]
    serve: bool,

    /// Server bind host.
    #[arg(long, env = "SCB_REGIONS_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Server bind port.
    #[arg(long, env = "SCB_REGIONS_PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scb_regions=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let resolver = RegionResolver::builtin().unwrap_or_else(|e| fail(&format!("Invalid region catalog: {}", e)));

    if cli.serve {
        if let Err(e) = server::start(&cli.host, cli.port, resolver).await {
            fail(&format!("Server error: {}", e));
        }
        return;
    }

    run(&cli, &resolver);
}

fn run(cli: &Cli, resolver: &RegionResolver) {
    let catalog = resolver.catalog();

    // Priority: --stats > --counties > --county > query
    if cli.stats {
        let stats = catalog.stats();
        if cli.plain {
            println!("total:          {}", stats.total);
            println!("nations:        {}", stats.nations);
            println!("counties:       {}", stats.counties);
            println!("municipalities: {}", stats.municipalities);
        } else {
            print_json(&stats);
        }
        return;
    }

    if cli.counties {
        print_regions(catalog, &catalog.counties(), cli.plain);
        return;
    }

    if let Some(ref code) = cli.county {
        let list = catalog.municipalities_in_county(code);
        if list.is_empty() {
            tracing::warn!(county = %code, "no municipalities for county code");
        }
        print_regions(catalog, &list, cli.plain);
        return;
    }

    let Some(query) = cli.query.as_deref().or(cli.query_positional.as_deref()) else {
        eprintln!("Error: No region specified.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  regions Göteborg");
        eprintln!("  regions --query Goteborg --all");
        eprintln!("  regions --county 14");
        eprintln!("  regions --serve");
        std::process::exit(1);
    };

    if cli.all {
        let matches = resolver.search(query);
        if matches.is_empty() {
            fail(&format!("Region not found: '{}'", query));
        }
        print_regions(catalog, &matches, cli.plain);
        return;
    }

    match resolver.resolve(query) {
        Some(region) if cli.plain => println!("{}", plain_line(catalog, region)),
        Some(region) => print_json(region),
        None => fail(&format!("Region not found: '{}'", query)),
    }
}

fn print_regions(catalog: &RegionCatalog, regions: &[&Region], plain: bool) {
    if plain {
        for region in regions {
            println!("{}", plain_line(catalog, region));
        }
    } else {
        print_json(&regions);
    }
}

fn plain_line(catalog: &RegionCatalog, region: &Region) -> String {
    let county = catalog.county_of(region).map(|c| c.name.as_str());
    region.display_line(county)
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("Cannot serialize output: {}", e)),
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}
