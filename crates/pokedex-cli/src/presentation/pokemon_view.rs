//! Text, HTML and CSV views of a pokedex entry.
//!
//! Every view lays out the base fields first and, for detailed entries,
//! appends the description just before the closing element. All views end
//! with a single newline.

use pokedex_core::PokedexEntry;

use super::format::OutputFormat;

const TEXT_BORDER: &str = "=============================";
const CSV_HEADER: &str = "Id;Name;Height;Weight;";
const CSV_DESCRIPTION_HEADER: &str = "description;";

/// Render an entry in the requested format.
pub fn render(entry: &PokedexEntry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(entry),
        OutputFormat::Html => render_html(entry),
        OutputFormat::Csv => render_csv(entry),
    }
}

fn render_text(entry: &PokedexEntry) -> String {
    let pokemon = entry.pokemon();
    let mut lines = vec![
        TEXT_BORDER.to_string(),
        format!("Pokémon # {}", pokemon.id),
        format!("Nom : {}", pokemon.name),
        format!("Taille : {}", pokemon.height),
        format!("Poids : {}", pokemon.weight),
    ];
    if let Some(description) = entry.description() {
        lines.push(format!("Description : {description}"));
    }
    lines.push(TEXT_BORDER.to_string());
    join_lines(&lines)
}

fn render_html(entry: &PokedexEntry) -> String {
    let pokemon = entry.pokemon();
    let mut lines = vec![
        format!("<h1>{}</h1>", escape_html(&pokemon.name)),
        "<ul>".to_string(),
        format!("<li>Id : {}</li>", pokemon.id),
        format!("<li>Taille : {}</li>", pokemon.height),
        format!("<li>Poids : {}</li>", pokemon.weight),
    ];
    if let Some(description) = entry.description() {
        lines.push(format!("<li>Description : {}</li>", escape_html(description)));
    }
    lines.push("</ul>".to_string());
    join_lines(&lines)
}

fn render_csv(entry: &PokedexEntry) -> String {
    let pokemon = entry.pokemon();
    let mut header = CSV_HEADER.to_string();
    let mut row = format!(
        "{};{};{};{}",
        pokemon.id,
        quote_csv(&pokemon.name),
        pokemon.height,
        pokemon.weight
    );
    if let Some(description) = entry.description() {
        header.push_str(CSV_DESCRIPTION_HEADER);
        row.push(';');
        row.push_str(&quote_csv(description));
    }
    format!("{header}\n{row}\n")
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Wrap a field in double quotes, doubling embedded quotes.
fn quote_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
