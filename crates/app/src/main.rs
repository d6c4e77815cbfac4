use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, CatalogService, Clock, ContactService, FeedbackService, MentorshipService,
    PortfolioService, ProgressService, load_progress_file,
};
use storage::seed::DEMO_STUDENT;
use studio_core::content::BRAND;
use studio_core::model::{ProgressRecord, StudentId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "Automotive design studio: curriculum, progress, portfolio and mentorship")]
struct Cli {
    /// Student whose progress, portfolio and sessions are shown
    #[arg(long, global = true, env = "STUDIO_STUDENT_ID", default_value = DEMO_STUDENT)]
    student: String,

    /// Progress record (JSON) replacing the demo record
    #[arg(long, global = true, env = "STUDIO_PROGRESS_FILE")]
    progress: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the desktop window (default)
    Ui,
    /// Print the curriculum with per-level totals
    Outline,
    /// Print the progress summary for the active student
    Progress,
}

#[derive(Clone)]
struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn student_id(&self) -> StudentId {
        self.services.student_id().clone()
    }

    fn catalog(&self) -> CatalogService {
        self.services.catalog()
    }

    fn contact(&self) -> ContactService {
        self.services.contact()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn portfolio(&self) -> Arc<PortfolioService> {
        self.services.portfolio()
    }

    fn mentorship(&self) -> Arc<MentorshipService> {
        self.services.mentorship()
    }

    fn feedback(&self) -> Arc<FeedbackService> {
        self.services.feedback()
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "studio=info,services=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_record(path: Option<&Path>) -> anyhow::Result<Option<ProgressRecord>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let record = load_progress_file(path)
        .with_context(|| format!("loading progress from {}", path.display()))?;
    tracing::info!(path = %path.display(), student = %record.student_id, "progress file loaded");
    Ok(Some(record))
}

async fn build_services(cli: &Cli) -> anyhow::Result<AppServices> {
    let record = read_record(cli.progress.as_deref())?;
    let services = AppServices::demo(Clock::default(), StudentId::new(cli.student.as_str()), record)
        .await
        .context("preparing demo services")?;
    Ok(services)
}

fn print_outline(catalog: CatalogService) {
    for overview in catalog.level_overviews(&BTreeSet::new()) {
        let totals = overview.totals;
        println!(
            "{} ({} terms, {} lessons, {} weeks)",
            overview.level.name, totals.terms, totals.lessons, totals.weeks
        );
        for term in &overview.level.terms {
            println!("  {} [{}]", term.title, term.duration);
            for lesson in &term.lessons {
                println!("    {}  {}", lesson.id, lesson.title);
            }
        }
    }
}

async fn print_progress(services: &AppServices) -> anyhow::Result<()> {
    let student_id = services.student_id();
    let Some(dashboard) = services
        .progress()
        .dashboard(student_id)
        .await
        .context("loading progress dashboard")?
    else {
        println!("No progress recorded for {student_id}.");
        return Ok(());
    };

    println!("Student:   {student_id}");
    println!(
        "Completed: {} / {} lessons ({:.0}%)",
        dashboard.completed_lessons, dashboard.total_lessons, dashboard.completion
    );
    if let Some(level) = &dashboard.current_level_name {
        let term = dashboard.current_term_title.as_deref().unwrap_or("-");
        println!("Current:   {level} / {term}");
    }
    println!("Time:      {} min", dashboard.total_minutes);
    println!(
        "Streak:    {} days ({})",
        dashboard.record.streak,
        dashboard.streak_band.as_str()
    );
    for category in &dashboard.skill_categories {
        println!("  {:<16} {:.0}", category.name, category.average);
    }
    if !dashboard.deadlines.is_empty() {
        println!("Upcoming:");
        for deadline in &dashboard.deadlines {
            println!(
                "  {}  {:<10} {}",
                deadline.due_date.format("%Y-%m-%d"),
                deadline.kind.as_str(),
                deadline.title
            );
        }
    }
    Ok(())
}

fn launch_desktop(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some window managers default dioxus/tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(format!("{BRAND} Design Studio"))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let command = cli.command.as_ref().unwrap_or(&Commands::Ui);
    if matches!(command, Commands::Outline) {
        print_outline(CatalogService::new(studio_core::curriculum()));
        return Ok(());
    }

    // The desktop launcher owns its own runtime, so setup runs on a separate one.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let services = runtime.block_on(build_services(&cli))?;

    match command {
        Commands::Progress => runtime.block_on(print_progress(&services)),
        Commands::Ui | Commands::Outline => {
            drop(runtime);
            tracing::info!(student = %services.student_id(), "launching desktop window");
            launch_desktop(services);
            Ok(())
        }
    }
}
