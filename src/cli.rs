// src/cli.rs
//
// Command-line front end. Every subcommand loads the dataset once, runs one
// query and prints a table (or CSV/TSV for piping).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ExplorerOptions;
use crate::config::consts::{CSV_SEP, TSV_SEP};
use crate::csv::rows_to_string;
use crate::dataset::{Dataset, DatasetLoader};
use crate::query;
use crate::recipe::CanonicalRecipe;
use crate::store;

#[derive(Debug, Parser)]
#[command(
    name = "recipe_explorer",
    disable_help_subcommand = true,
    about = "Query a scraped recipe export",
    long_about = "Load a recipe CSV export (recipe_id, recipe_name, recipe_ingredients, ...) \
                  and run ingredient searches, rankings and similarity queries over it.",
    after_help = "Settings are read from .store/explorer.cfg unless --config is given; \
                  --recipes overrides the file named there."
)]
pub struct Cli {
    /// Recipe CSV export
    #[arg(long, short = 'r', value_name = "PATH", global = true)]
    pub recipes: Option<PathBuf>,

    /// Settings file (key=value)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Tsv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recipes with an ingredient containing TERM
    Search {
        #[arg(value_name = "TERM")]
        term: String,
    },
    /// Recipes containing every listed ingredient
    Filter {
        #[arg(value_name = "INGREDIENT", required = true)]
        ingredients: Vec<String>,
    },
    /// Most used ingredients
    Top {
        #[arg(short = 'n', long = "limit")]
        n: Option<usize>,
    },
    /// Recipes with the fewest ingredients
    Least {
        #[arg(short = 'n', long = "limit")]
        n: Option<usize>,
    },
    /// Recipe count per category
    Categories,
    /// One random recipe from CATEGORY
    Random {
        #[arg(value_name = "CATEGORY")]
        category: String,
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Recipes sharing ingredients with recipe ID
    Similar {
        #[arg(value_name = "ID", allow_hyphen_values = true)]
        id: i64,
        #[arg(long = "min-shared")]
        min_shared: Option<usize>,
    },
    /// Full details of recipe ID
    Show {
        #[arg(value_name = "ID", allow_hyphen_values = true)]
        id: i64,
    },
    /// Every distinct ingredient name
    Ingredients,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init_stderr(cli.verbose);
    let out = execute(&cli)?;
    print!("{out}");
    Ok(())
}

/// Run one parsed command and return what it would print.
pub fn execute(cli: &Cli) -> Result<String> {
    let options = resolve_options(cli)?;
    let rows = store::load_raw_rows(&options.recipes_path)
        .wrap_err_with(|| format!("reading {}", options.recipes_path.display()))?;
    let dataset = DatasetLoader::new(options.categories.clone()).load(&rows);
    logd!("CLI: {:?} on {} recipes", cli.command, dataset.len());

    run_command(&cli.command, &dataset, &options, cli.format)
}

fn resolve_options(cli: &Cli) -> Result<ExplorerOptions> {
    let path = cli.config.clone().unwrap_or_else(ExplorerOptions::default_path);
    let mut options = ExplorerOptions::load(&path).wrap_err_with(|| format!("loading {}", path.display()))?;
    if let Some(recipes) = &cli.recipes {
        options.recipes_path = recipes.clone();
    }
    Ok(options)
}

pub fn run_command(cmd: &Command, dataset: &Dataset, options: &ExplorerOptions, format: Format) -> Result<String> {
    let out = match cmd {
        Command::Search { term } => {
            recipe_table(&query::search_by_ingredient_substring(dataset, term), format)
        }
        Command::Filter { ingredients } => {
            let wanted: Vec<String> = ingredients.iter().map(|s| s.trim().to_lowercase()).collect();
            recipe_table(&query::filter_by_all_ingredients(dataset, &wanted), format)
        }
        Command::Top { n } => {
            let ranked = query::ingredient_frequency(dataset, n.unwrap_or(options.top_n))?;
            let rows = ranked.into_iter().map(|(name, count)| vec![name, count.to_string()]).collect::<Vec<_>>();
            render(&["ingredient", "recipes"], &rows, format)
        }
        Command::Least { n } => {
            recipe_table(&query::least_ingredients(dataset, n.unwrap_or(options.least_n)), format)
        }
        Command::Categories => {
            let counts = query::category_counts(dataset);
            let rows = counts.iter().map(|(name, n)| vec![s!(name), n.to_string()]).collect::<Vec<_>>();
            render(&["category", "recipes"], &rows, format)
        }
        Command::Random { category, seed } => {
            let pick = match seed {
                Some(seed) => query::random_in_category(dataset, category, &mut StdRng::seed_from_u64(*seed)),
                None => query::random_in_category(dataset, category, &mut rand::rng()),
            };
            match pick {
                Some(recipe) => recipe_table(&[recipe], format),
                None => format!("No recipe found in category '{category}'.\n"),
            }
        }
        Command::Similar { id, min_shared } => {
            let similar = query::find_similar(dataset, *id, min_shared.unwrap_or(options.min_shared))?;
            let rows = similar
                .iter()
                .map(|s| {
                    let mut row = recipe_row(s.recipe);
                    row.insert(2, s.shared_count.to_string());
                    row
                })
                .collect::<Vec<_>>();
            render(&["id", "name", "shared", "count", "categories", "ingredients"], &rows, format)
        }
        Command::Show { id } => {
            let recipe = dataset.get(*id).ok_or_else(|| eyre!("recipe {id} not found"))?;
            show(recipe)
        }
        Command::Ingredients => {
            let rows = query::all_ingredients(dataset).into_iter().map(|n| vec![n]).collect::<Vec<_>>();
            render(&["ingredient"], &rows, format)
        }
    };
    Ok(out)
}

const RECIPE_HEADERS: [&str; 5] = ["id", "name", "count", "categories", "ingredients"];

fn recipe_row(r: &CanonicalRecipe) -> Vec<String> {
    vec![
        r.recipe_id().to_string(),
        s!(r.recipe_name()),
        r.num_ingredients().to_string(),
        r.categories().join(" "),
        r.ingredients_label(),
    ]
}

fn recipe_table(recipes: &[&CanonicalRecipe], format: Format) -> String {
    let rows: Vec<Vec<String>> = recipes.iter().map(|r| recipe_row(r)).collect();
    render(&RECIPE_HEADERS, &rows, format)
}

fn show(r: &CanonicalRecipe) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} (id {})\n", r.recipe_name(), r.recipe_id()));
    if let Some(score) = r.nutriscore() {
        out.push_str(&format!("nutriscore: {score}\n"));
    }
    if !r.categories().is_empty() {
        out.push_str(&format!("categories: {}\n", r.categories().join(", ")));
    }
    out.push_str(&format!("ingredients ({}):\n", r.num_ingredients()));
    for name in r.named_ingredients() {
        out.push_str(&format!("  - {name}\n"));
    }
    if let Some(desc) = r.description().filter(|d| !d.trim().is_empty()) {
        out.push_str(&format!("\n{}\n", desc.trim()));
    }
    if let Some(steps) = r.reproduction_steps().filter(|s| !s.trim().is_empty()) {
        out.push_str(&format!("\nsteps:\n{}\n", steps.trim()));
    }
    out
}

pub fn render(headers: &[&str], rows: &[Vec<String>], format: Format) -> String {
    match format {
        Format::Csv => rows_to_string(headers, rows, CSV_SEP),
        Format::Tsv => rows_to_string(headers, rows, TSV_SEP),
        Format::Table => aligned(headers, rows),
    }
}

// Left-aligned columns, two spaces apart. The last column is not padded.
fn aligned(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return s!("No results.\n");
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = aligned_line(&widths, headers.iter().copied());
    for row in rows {
        out.push_str(&aligned_line(&widths, row.iter().map(String::as_str)));
    }
    out
}

fn aligned_line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut s = String::new();
    for (i, cell) in cells.enumerate() {
        s.push_str(cell);
        if i + 1 < widths.len() {
            let pad = widths[i].saturating_sub(cell.chars().count());
            s.push_str(&" ".repeat(pad + 2));
        }
    }
    s.truncate(s.trim_end().len());
    s.push('\n');
    s
}
