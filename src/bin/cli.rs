use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gif_relay::embed::{JpegTranscoder, Transcoder};
use gif_relay::tenor::models::ResultsPage;
use gif_relay::tenor::{
    CategoriesRequest, CategoryType, FeaturedRequest, SearchRequest, TenorClient, TermsRequest,
    TrendingTermsRequest,
};
use gif_relay::AppConfig;
use std::path::PathBuf;
use std::process::exit;
use tracing::Level;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryKind {
    Featured,
    Trending,
}

impl From<CategoryKind> for CategoryType {
    fn from(kind: CategoryKind) -> Self {
        match kind {
            CategoryKind::Featured => CategoryType::Featured,
            CategoryKind::Trending => CategoryType::Trending,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search Tenor for GIFs
    Search {
        query: String,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
    },
    /// List featured GIFs
    Featured {
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
    },
    /// List GIF categories
    Categories {
        #[arg(long, value_enum)]
        kind: Option<CategoryKind>,
        #[arg(long)]
        locale: Option<String>,
    },
    /// Suggest related searches for a query
    SearchSuggestions {
        query: String,
        #[arg(long)]
        locale: Option<String>,
    },
    /// Complete a partial query
    Autocomplete {
        query: String,
        #[arg(long)]
        locale: Option<String>,
    },
    /// List trending search terms
    TrendingTerms {
        #[arg(long)]
        locale: Option<String>,
    },
    /// Convert a local preview image into the uploaded thumbnail format
    Transcode { input: PathBuf, output: PathBuf },
}

fn print_page(page: &ResultsPage) {
    for gif in &page.results {
        let preview = gif.media("preview").map(|m| m.url.as_str()).unwrap_or("-");
        println!("{}\t{}\t{}", gif.id, gif.content_description, preview);
    }
    if !page.next.is_empty() {
        println!("next: {}", page.next);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing/logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let cli = Cli::parse();

    // Transcoding is local and needs no config
    if let Commands::Transcode { input, output } = &cli.command {
        let bytes = tokio::fs::read(input).await?;
        let transcoder = JpegTranscoder::default();
        let jpeg = transcoder.transcode(&bytes)?;
        tokio::fs::write(output, &jpeg).await?;
        println!(
            "wrote {} bytes of {} to {}",
            jpeg.len(),
            transcoder.content_type(),
            output.display()
        );
        return Ok(());
    }

    let config_path = cli
        .config
        .ok_or_else(|| anyhow::anyhow!("Config file path required"))?;
    let cfg = AppConfig::new_from_file_and_env(&config_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        exit(1);
    });

    let tenor = TenorClient::from_config(&cfg, cfg.http_client()?)?;

    match cli.command {
        Commands::Search {
            query,
            locale,
            limit,
            cursor,
        } => {
            let page = tenor
                .search(&SearchRequest {
                    query,
                    locale,
                    limit,
                    cursor,
                })
                .await?;
            print_page(&page);
        }
        Commands::Featured {
            locale,
            limit,
            cursor,
        } => {
            let page = tenor
                .featured(&FeaturedRequest {
                    locale,
                    limit,
                    cursor,
                })
                .await?;
            print_page(&page);
        }
        Commands::Categories { kind, locale } => {
            let response = tenor
                .categories(&CategoriesRequest {
                    category_type: kind.map(Into::into),
                    locale,
                })
                .await?;
            for category in response.tags {
                println!("{}\t{}", category.searchterm, category.image);
            }
        }
        Commands::SearchSuggestions { query, locale } => {
            let response = tenor
                .search_suggestions(&TermsRequest { query, locale })
                .await?;
            for term in response.results {
                println!("{}", term);
            }
        }
        Commands::Autocomplete { query, locale } => {
            let response = tenor.autocomplete(&TermsRequest { query, locale }).await?;
            for term in response.results {
                println!("{}", term);
            }
        }
        Commands::TrendingTerms { locale } => {
            let response = tenor
                .trending_terms(&TrendingTermsRequest { locale })
                .await?;
            for term in response.results {
                println!("{}", term);
            }
        }
        Commands::Transcode { .. } => unreachable!("handled before loading config"),
    }

    Ok(())
}
