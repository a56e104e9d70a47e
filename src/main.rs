use std::env;
use std::path::Path;

use log::debug;
use recipe_scan::RecipeScanner;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide a recipe text file or image as an argument")?;

    let is_image = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);

    let builder = if is_image {
        RecipeScanner::builder().image(path)
    } else {
        RecipeScanner::builder().text(std::fs::read_to_string(path)?)
    };

    let recipe = builder.build().await?;
    debug!(
        "Scanned {} ingredients and {} steps",
        recipe.ingredients.len(),
        recipe.steps.len()
    );

    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
