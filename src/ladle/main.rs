use clap::Parser;
use colored::*;
use ladle::api::{CmdMessage, ConfigAction, MessageLevel, RecipeApi};
use ladle::config::LadleConfig;
use ladle::error::Result;
use ladle::model::{Recipe, RecipeUpdate};
use ladle::store::fs::FileBackend;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RecipeApi<FileBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            ingredients,
            instructions,
        }) => handle_add(&mut ctx, title, ingredients, instructions),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::View { titles }) => handle_view(&ctx, titles),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Edit {
            title,
            new_title,
            ingredients,
            instructions,
        }) => handle_edit(&mut ctx, title, new_title, ingredients, instructions),
        Some(Commands::Delete { titles }) => handle_delete(&mut ctx, titles),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let (catalog_dir, catalog_file) = match &cli.file {
        Some(file) => {
            let dir = file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."));
            (dir, file.clone())
        }
        None => {
            let config = LadleConfig::load(&cli.dir).unwrap_or_default();
            let file = cli.dir.join(config.recipes_file());
            (cli.dir.clone(), file)
        }
    };

    let backend = FileBackend::new(catalog_file);
    let api = RecipeApi::open(backend, catalog_dir)?;
    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    ingredients: Vec<String>,
    instructions: String,
) -> Result<()> {
    let result = ctx.api.add_recipe(&title, &ingredients, &instructions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_recipes()?;
    print_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, titles: Vec<String>) -> Result<()> {
    let result = ctx.api.view_recipes(&titles)?;
    print_full_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_recipes(&term)?;
    print_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    title: String,
    new_title: Option<String>,
    ingredients: Option<Vec<String>>,
    instructions: Option<String>,
) -> Result<()> {
    let update = RecipeUpdate {
        title: new_title,
        ingredients,
        instructions,
    };
    let result = ctx.api.edit_recipe(&title, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, titles: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_recipes(&titles)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.catalog_path()?;
    if let Some(path) = &result.catalog_path {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("recipes-file = {}", config.recipes_file());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const COUNT_WIDTH: usize = 16;

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for (i, recipe) in recipes.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let count = format!(
            "{} ingredient{}",
            recipe.ingredients.len(),
            if recipe.ingredients.len() == 1 { "" } else { "s" }
        );

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + COUNT_WIDTH);
        let title = truncate_to_width(&recipe.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}{}",
            idx_str,
            title.bold(),
            " ".repeat(padding),
            count.dimmed()
        );
    }
}

fn print_full_recipes(recipes: &[Recipe]) {
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{}", recipe.title.bold());
        println!("--------------------------------");
        println!("{}", "Ingredients:".underline());
        for ingredient in &recipe.ingredients {
            println!("- {}", ingredient);
        }
        println!();
        println!("{}", "Instructions:".underline());
        println!("{}", recipe.instructions);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
