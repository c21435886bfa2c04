mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use museu_core::forms::{
    Donation, DonationKind, EventSubmission, RichText, TourRequest, VisitorForm,
    VolunteerApplication,
};
use museu_core::notice::Notice;
use museu_db::FileStorage;
use museu_site::{
    AdminController, ExhibitionBrowser, FormSession, HttpSubmissionEndpoint, SiteConfig,
    Submitted,
};

use cli::{Cli, Command, EditFields, ExhibitionCommand, ExhibitionFields};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "museu_site=debug,museu_db=debug,museu_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // --- Configuration ---
    let mut config = SiteConfig::from_env().context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), api_url = %config.api_url, "Loaded configuration");

    let storage = FileStorage::new(&config.data_dir);

    match cli.cmd {
        Command::Exhibitions(cmd) => run_exhibitions(storage, cmd),
        Command::Browse { page, select } => run_browse(storage, &page, select),
        Command::Volunteer {
            name,
            email,
            phone,
            interests,
        } => {
            let form = VolunteerApplication {
                name,
                email,
                phone,
                interests: RichText::new(interests),
            };
            send(&config, form).await
        }
        Command::Event {
            title,
            date,
            organizer,
            email,
            description,
        } => {
            let form = EventSubmission {
                title,
                date,
                organizer,
                email,
                description: RichText::new(description),
            };
            send(&config, form).await
        }
        Command::Tour {
            name,
            email,
            phone,
            date,
            people,
            message,
        } => {
            let form = TourRequest {
                name,
                email,
                phone,
                date,
                people,
                message,
            };
            send(&config, form).await
        }
        Command::Donate {
            name,
            email,
            amount,
            item,
            message,
        } => {
            let kind = if item.is_some() {
                DonationKind::Item
            } else {
                DonationKind::Money
            };
            let form = Donation {
                kind,
                amount,
                item_description: item.unwrap_or_default(),
                name,
                email,
                message,
            };
            send(&config, form).await
        }
    }
}

// ---------------------------------------------------------------------------
// Exhibitions
// ---------------------------------------------------------------------------

fn run_exhibitions(storage: FileStorage, cmd: ExhibitionCommand) -> anyhow::Result<()> {
    let mut admin = AdminController::open(storage);

    match cmd {
        ExhibitionCommand::List => {
            let rows = admin.listing();
            if rows.is_empty() {
                println!("No exhibitions yet.");
            }
            for row in rows {
                println!("[{}] {} ({})", row.index, row.title, row.category);
                for url in row.images {
                    println!("      {url}");
                }
            }
        }
        ExhibitionCommand::Add(fields) => {
            fill_new(&mut admin, fields)?;
            report(admin.submit()?);
        }
        ExhibitionCommand::Edit { index, fields } => {
            admin.begin_edit(index)?;
            fill_edit(&mut admin, fields)?;
            report(admin.submit()?);
        }
        ExhibitionCommand::Delete { index } => {
            let removed = admin.delete(index)?;
            println!("Deleted [{index}] {}", removed.title);
        }
    }
    Ok(())
}

fn fill_new(admin: &mut AdminController<FileStorage>, fields: ExhibitionFields) -> anyhow::Result<()> {
    admin.set_title(fields.title);
    admin.set_description(fields.description);
    admin.set_category(fields.category);
    set_images(admin, fields.images)
}

fn fill_edit(admin: &mut AdminController<FileStorage>, fields: EditFields) -> anyhow::Result<()> {
    if let Some(title) = fields.title {
        admin.set_title(title);
    }
    if let Some(description) = fields.description {
        admin.set_description(description);
    }
    if let Some(category) = fields.category {
        admin.set_category(category);
    }
    if fields.images.is_empty() {
        return Ok(());
    }
    while admin.remove_image_slot(0)? {}
    set_images(admin, fields.images)
}

/// Fill slots starting from the single slot the draft holds.
fn set_images(admin: &mut AdminController<FileStorage>, images: Vec<String>) -> anyhow::Result<()> {
    for (position, url) in images.into_iter().enumerate() {
        if position > 0 {
            admin.append_image_slot();
        }
        admin.set_image_slot(position, url)?;
    }
    Ok(())
}

fn report(outcome: Submitted) {
    match outcome {
        Submitted::Created { index } => println!("Created exhibition [{index}]"),
        Submitted::Updated { index } => println!("Updated exhibition [{index}]"),
    }
}

// ---------------------------------------------------------------------------
// Public pages
// ---------------------------------------------------------------------------

fn run_browse(storage: FileStorage, page: &str, select: usize) -> anyhow::Result<()> {
    let mut browser = ExhibitionBrowser::for_path(storage, page)?;
    println!("{} exhibitions", browser.category().label());
    if let Some(message) = browser.empty_message() {
        println!("{message}");
        return Ok(());
    }
    browser.select(select)?;

    let tabs: Vec<String> = browser
        .tabs()
        .iter()
        .map(|tab| {
            if tab.active {
                format!("*{}*", tab.title)
            } else {
                tab.title.to_string()
            }
        })
        .collect();
    println!("{}", tabs.join(" | "));

    if let Some(showcase) = browser.showcase() {
        println!();
        println!("{}", showcase.title);
        println!("{}", showcase.description);
        for url in showcase.images {
            println!("  {url}");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Visitor forms
// ---------------------------------------------------------------------------

async fn send<F: VisitorForm>(config: &SiteConfig, form: F) -> anyhow::Result<()> {
    let endpoint = HttpSubmissionEndpoint::new(config)?;
    let mut session = FormSession::with_form(form);

    match session.submit(&endpoint).await {
        Notice::Success(message) => {
            println!("{message}");
            Ok(())
        }
        Notice::Invalid(errors) => {
            for field in errors.fields() {
                for message in errors.get(field).unwrap_or_default() {
                    eprintln!("{field}: {message}");
                }
            }
            anyhow::bail!("The form has errors; nothing was sent")
        }
        Notice::Failure(reason) => anyhow::bail!(reason),
    }
}
