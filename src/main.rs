use anyhow::Result;
use env_logger::Env;
use log::info;
use std::env;
use std::path::Path;
use std::time::Instant;

use tiny_sitemap::sitemap::config::defaults;
use tiny_sitemap::sitemap::{build, loader, SitemapConfig, SitemapWriter};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage:");
        println!("  {} generate [url_file] [output_path]", args[0]);
        println!(
            "  - url_file: File with one URL per line (default: {})",
            defaults::URL_FILE
        );
        println!(
            "  - output_path: Where the sitemap is written (default: {})",
            defaults::OUTPUT_PATH
        );
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "generate" => {
            // Parse optional arguments
            let url_file = args.get(2).map(|s| s.as_str()).unwrap_or(defaults::URL_FILE);
            let output_path = args
                .get(3)
                .map(|s| s.as_str())
                .unwrap_or(defaults::OUTPUT_PATH);

            let start = Instant::now();

            let urls = loader::load_urls(Path::new(url_file))?;
            info!("Loaded {} URLs from {}", urls.len(), url_file);

            let index = build(urls);

            let config = SitemapConfig::builder().output_path(output_path).build();
            let writer = SitemapWriter::new(config);
            writer.save_default(&index)?;

            let duration = start.elapsed();
            info!("Sitemap generated in {:?}", duration);

            println!("Sitemap generated successfully!");
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Use the 'generate' command");
        }
    }

    Ok(())
}
