use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use services::ApiContext;
use shared::{domain::SortOrder, protocol::PersonResponse};
use storage::Storage;

#[derive(Parser, Debug)]
struct Cli {
    /// Start from an empty store instead of the sample data.
    #[arg(long)]
    no_sample_data: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Countries,
    Persons {
        #[arg(long, default_value = "")]
        search_by: String,
        #[arg(long, default_value = "")]
        search_string: String,
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long, value_parser = parse_sort_order, default_value = "ASC")]
        sort_order: SortOrder,
    },
}

fn parse_sort_order(raw: &str) -> Result<SortOrder, String> {
    SortOrder::parse(raw).ok_or_else(|| format!("expected ASC or DESC, got '{raw}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let storage = if cli.no_sample_data {
        Storage::new()
    } else {
        Storage::with_sample_data()
    };
    let api = ApiContext::new(storage);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Countries => {
            for country in api.countries.get_all_countries() {
                writeln!(
                    out,
                    "{}\t{}",
                    country.country_id,
                    country.country_name.unwrap_or_default()
                )
                .context("failed to write country")?;
            }
        }
        Command::Persons {
            search_by,
            search_string,
            sort_by,
            sort_order,
        } => {
            let mut persons = api.persons.get_filtered_persons(&search_by, &search_string);
            if let Some(sort_by) = sort_by {
                persons = api.persons.get_sorted_persons(persons, &sort_by, sort_order);
            }
            for person in &persons {
                writeln!(out, "{}", person_line(person)).context("failed to write person")?;
            }
        }
    }

    Ok(())
}

fn person_line(person: &PersonResponse) -> String {
    [
        person.person_id.to_string(),
        person.person_name.clone().unwrap_or_default(),
        person.email.clone().unwrap_or_default(),
        person
            .date_of_birth
            .map(|dob| dob.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        person.age.map(|age| age.to_string()).unwrap_or_default(),
        person.gender.clone().unwrap_or_default(),
        person.country.clone().unwrap_or_default(),
        person.address.clone().unwrap_or_default(),
        person.receive_newsletter.to_string(),
    ]
    .join("\t")
}
