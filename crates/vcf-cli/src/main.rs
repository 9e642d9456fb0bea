//! `vcf` CLI — query and edit vCard contact files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Contacts in Friends but not Work
//! vcf categorydiff Friends Work contacts.vcf
//!
//! # Names and numbers of all Work contacts outside Spam
//! vcf get-contacts contacts.vcf --has Work --not Spam --name --number
//!
//! # Category histogram across several files
//! vcf count-categories a.vcf b.vcf
//!
//! # Delete two contacts, write the result elsewhere
//! vcf delete-contacts contacts.vcf "Jane Doe" "John Doe" -o cleaned.vcf
//!
//! # Strip everything but name and number from the listed contacts
//! vcf delete-contacts contacts.vcf --namefile old.txt --keep number
//! ```
//!
//! All subcommands accept `--out`/`-o` to write to a file instead of
//! stdout; `delete-contacts` overwrites its input file when `--out` is
//! omitted. Unreadable input files produce a warning on stderr and the
//! run continues with the rest.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use vcf_core::{
    category_counts, category_diff, delete_contacts, get_contacts, parse_all, Contact,
    ContactQuery, ParseOutcome, Projection,
};

#[derive(Parser)]
#[command(name = "vcf", version, about = "vCard (.vcf) query and edit utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Output contacts in category A but not in category B
    Categorydiff {
        /// Category the contact must have
        category_a: String,
        /// Category the contact must not have
        category_b: String,
        /// One or more .vcf files
        #[arg(required = true)]
        files: Vec<String>,
        /// Write matches to a file (default stdout)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Output contacts matching category and name criteria
    GetContacts {
        /// One or more .vcf files
        #[arg(required = true)]
        files: Vec<String>,
        /// Require one of these categories (repeat to AND; comma/semicolon
        /// separate alternatives within one value)
        #[arg(long, value_name = "CATEGORIES")]
        has: Vec<String>,
        /// Exclude contacts holding any of these categories
        #[arg(long, value_name = "CATEGORIES")]
        not: Vec<String>,
        /// Keep only contacts whose name contains one of these fragments
        /// (repeat or comma-separate)
        #[arg(long, value_name = "FRAGMENT")]
        searchname: Vec<String>,
        /// Output the contact name instead of the full vCard
        #[arg(long)]
        name: bool,
        /// Output the telephone number(s) instead of the full vCard
        #[arg(long)]
        number: bool,
        /// Output the contact categories
        #[arg(long)]
        category: bool,
        /// Write matches to a file (default stdout)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Count category occurrences across all contacts
    CountCategories {
        /// One or more .vcf files
        #[arg(required = true)]
        files: Vec<String>,
        /// Write counts to a file (default stdout)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Delete contacts by name, or truncate them to selected fields
    DeleteContacts {
        /// Input .vcf file to update
        vcf_file: String,
        /// Contact name(s) to delete (exact, case-insensitive)
        names: Vec<String>,
        /// Text file with one contact name per line
        #[arg(long)]
        namefile: Option<String>,
        /// For matching names, keep only the given fields instead of
        /// deleting the contact
        #[arg(long, value_parser = ["name", "number", "photo", "category"])]
        keep: Vec<String>,
        /// Write updated vCards to a file (default overwrites the input)
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Categorydiff {
            category_a,
            category_b,
            files,
            out,
        } => {
            let contacts = load_contacts(&files)?;
            let matches = category_diff(&contacts, &category_a, &category_b);
            let output = join_blocks(matches.iter().map(|c| c.to_vcf()));
            write_output(out.as_deref(), &output)?;
        }
        Commands::GetContacts {
            files,
            has,
            not,
            searchname,
            name,
            number,
            category,
            out,
        } => {
            let contacts = load_contacts(&files)?;
            let query = ContactQuery {
                has: has.iter().map(|v| split_list(v)).collect(),
                not: not.iter().map(|v| split_list(v)).collect(),
                searchname: searchname
                    .iter()
                    .flat_map(|v| v.split(','))
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect(),
            };
            let projection = Projection {
                name,
                number,
                category,
            };
            let lines = get_contacts(&contacts, &query, projection);
            let output = join_lines(&lines);
            write_output(out.as_deref(), &output)?;
        }
        Commands::CountCategories { files, out } => {
            let contacts = load_contacts(&files)?;
            let counts = category_counts(&contacts);
            let output = if counts.is_empty() {
                "No category counts available\n".to_string()
            } else {
                let mut text = String::from("Category counts:\n");
                for (category, count) in &counts {
                    text.push_str(&format!("  {category}: {count}\n"));
                }
                text
            };
            write_output(out.as_deref(), &output)?;
        }
        Commands::DeleteContacts {
            vcf_file,
            names,
            namefile,
            keep,
            out,
        } => {
            let contacts = load_contacts(std::slice::from_ref(&vcf_file))?;
            let mut targets = names;
            if let Some(path) = namefile {
                let listing = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read name file: {path}"))?;
                targets.extend(
                    listing
                        .lines()
                        .map(|l| l.trim().to_string())
                        .filter(|l| !l.is_empty()),
                );
            }
            let keep_keys: Vec<String> = keep.iter().map(|k| map_keep_field(k)).collect();
            let updated = delete_contacts(&contacts, &targets, &keep_keys);
            let output = join_blocks(updated.iter().map(Contact::to_vcf));
            // Default destination is the input file itself.
            let destination = out.unwrap_or(vcf_file);
            std::fs::write(&destination, output)
                .with_context(|| format!("failed to write file: {destination}"))?;
        }
    }

    Ok(())
}

/// Read every input file, warn and skip the unreadable ones, and parse
/// the rest into a single contact sequence in file order. Parse errors
/// are reported as warnings; only a run with no readable input at all
/// fails.
fn load_contacts(files: &[String]) -> Result<Vec<Contact>> {
    let mut sources = Vec::new();
    for path in files {
        match std::fs::read_to_string(path) {
            Ok(text) => sources.push(text),
            Err(err) => eprintln!("warning: {path}: {err}, skipping"),
        }
    }
    if sources.is_empty() {
        bail!("no readable input files (see `vcf --help` for usage)");
    }

    let ParseOutcome { contacts, errors } = parse_all(sources.iter().map(String::as_str));
    for error in &errors {
        eprintln!("warning: {error}");
    }
    Ok(contacts)
}

/// Split one `--has`/`--not` value into its OR-group of category names.
fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Map a `--keep` field name onto the vCard property key it retains.
fn map_keep_field(field: &str) -> String {
    match field {
        "name" => "FN",
        "number" => "TEL",
        "photo" => "PHOTO",
        "category" => "CATEGORIES",
        other => other,
    }
    .to_string()
}

/// Join vCard blocks with single newlines, with a trailing newline when
/// there is any output at all.
fn join_blocks<'a>(blocks: impl Iterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = blocks.collect();
    if joined.is_empty() {
        String::new()
    } else {
        let mut text = joined.join("\n");
        text.push('\n');
        text
    }
}

/// Join projection/summary lines with a trailing newline.
fn join_lines(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
