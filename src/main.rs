use chrono::{Local, NaiveDate};
use clap::Parser;
use impactlog::application::{
    export_review, export_weekly, init::init, render_review, render_standup, render_weekly,
    ConfigService, ExportFormat, LogService, SummaryService,
};
use impactlog::cli::{format_entry, format_entry_list, format_timeline, Cli, Commands, OutputArgs};
use impactlog::domain::{DateRange, EntryDraft, Link, TimeReference};
use impactlog::error::Result;
use impactlog::infrastructure::FileSystemRepository;
use serde::Serialize;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn resolve_date(input: &str) -> Result<NaiveDate> {
    Ok(TimeReference::parse(input)?.resolve(today()))
}

fn resolve_opt(input: Option<&str>) -> Result<Option<NaiveDate>> {
    input.map(resolve_date).transpose()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized impactlog at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("created = {}", config.created.to_rfc3339());
                println!("review_months = {}", config.review_months);
                println!("week_starts_on = {}", config.week_starts_on);
            } else if let Some(k) = key {
                match value {
                    Some(v) => {
                        service.set(&k, &v)?;
                        println!("Set {} = {}", k, v);
                    }
                    None => println!("{}", service.get(&k)?),
                }
            } else {
                println!("Usage: impactlog config [--list | <key> [<value>]]");
                println!("Valid keys: created, review_months, week_starts_on");
            }
            Ok(())
        }
        Commands::Add {
            date,
            work,
            impact,
            blockers,
            links,
        } => {
            let mut draft = EntryDraft::new(resolve_date(&date)?, work);
            draft.impact = impact;
            draft.blockers = blockers;
            draft.links = links
                .iter()
                .map(|l| Link::parse(l))
                .collect::<Result<Vec<_>>>()?;

            let mut service = LogService::new(FileSystemRepository::discover()?);
            let entry = service.record(draft)?;
            println!("Logged {} ({})", entry.date, entry.id);
            Ok(())
        }
        Commands::Show { date } => {
            let service = LogService::new(FileSystemRepository::discover()?);
            let entry = service.show(resolve_date(&date)?)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::List { from, to, limit } => {
            let service = LogService::new(FileSystemRepository::discover()?);
            let entries = service.list(
                resolve_opt(from.as_deref())?,
                resolve_opt(to.as_deref())?,
                limit,
            )?;
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Timeline { date, prev, next } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;

            let mut week = DateRange::week_of(resolve_date(&date)?, config.week_starts_on)?;
            if prev {
                week = week.previous_week()?;
            } else if next {
                week = week.next_week()?;
            }

            let days = LogService::new(repo).timeline(week)?;
            print!("{}", format_timeline(&days));
            Ok(())
        }
        Commands::Delete { id } => {
            let mut service = LogService::new(FileSystemRepository::discover()?);
            service.delete(&id)?;
            println!("Deleted {}", id);
            Ok(())
        }
        Commands::Standup { date, json } => {
            let service = SummaryService::new(FileSystemRepository::discover()?);
            let summary = service.standup(resolve_date(&date)?)?;
            if json {
                print_json(&summary)
            } else {
                println!("{}", render_standup(&summary));
                Ok(())
            }
        }
        Commands::Weekly {
            date,
            from,
            to,
            output,
        } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;

            let range = match (resolve_opt(from.as_deref())?, resolve_opt(to.as_deref())?) {
                (Some(start), Some(end)) => DateRange::new(start, end)?,
                _ => DateRange::week_of(resolve_date(&date)?, config.week_starts_on)?,
            };

            let summary = SummaryService::new(repo).weekly(range.start, range.end)?;
            emit(&summary, &output, |s| render_weekly(s, ExportFormat::Markdown), |s, dir| {
                export_weekly(s, dir)
            })
        }
        Commands::Review { from, to, output } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;

            let end = resolve_opt(to.as_deref())?.unwrap_or_else(today);
            let start = match resolve_opt(from.as_deref())? {
                Some(start) => start,
                None => DateRange::months_back(end, config.review_months)?.start,
            };

            let review = SummaryService::new(repo).review(start, end)?;
            emit(&review, &output, |r| render_review(r, ExportFormat::Markdown), |r, dir| {
                export_review(r, dir)
            })
        }
    }
}

/// Print a summary as JSON or markdown, then export it if asked
fn emit<T, R, E>(summary: &T, output: &OutputArgs, render: R, export: E) -> Result<()>
where
    T: Serialize,
    R: Fn(&T) -> String,
    E: Fn(&T, &std::path::Path) -> Result<std::path::PathBuf>,
{
    if output.json {
        print_json(summary)?;
    } else {
        println!("{}", render(summary));
    }

    if let Some(dir) = &output.export {
        let path = export(summary, dir)?;
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}
