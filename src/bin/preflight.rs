use recipe_store::infra::config;
use recipe_store::{CommentService, RecipeService};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Optional env vars (or .env):\n\
           RECIPES_FILE   (default {})\n\
           COMMENTS_FILE  (default {})\n\
           BIND_ADDR      (default {})\n",
        config::DEFAULT_RECIPES_FILE,
        config::DEFAULT_COMMENTS_FILE,
        config::DEFAULT_BIND_ADDR,
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let (recipes_file, comments_file) = config::collection_files()?;
    let bind_addr = config::bind_addr()?;

    println!("> Preflight:");
    println!("  RECIPES_FILE={}", recipes_file.display());
    println!("  COMMENTS_FILE={}", comments_file.display());
    println!("  BIND_ADDR={}", bind_addr);

    // Loading is read-only: absent files are reported, not created.
    let recipes = RecipeService::open(&recipes_file);
    let stored = recipes
        .list(None)
        .await
        .map_err(|e| anyhow::anyhow!("Recipes file is not usable: {}", e))?;
    if recipes_file.exists() {
        println!("  Recipes: {} stored", stored.len());
    } else {
        println!("  Recipes: file absent (starts empty)");
    }

    let comments = CommentService::open(&comments_file);
    let threads = comments
        .thread_count()
        .await
        .map_err(|e| anyhow::anyhow!("Comments file is not usable: {}", e))?;
    if comments_file.exists() {
        println!("  Comment threads: {}", threads);
    } else {
        println!("  Comment threads: file absent (starts empty)");
    }

    println!("> Preflight OK");
    Ok(())
}
