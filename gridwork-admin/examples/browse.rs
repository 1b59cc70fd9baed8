//! Walk the user grid from the command line: paging, filtering,
//! selection and deletion against the in-memory directory.

use std::fs::File;

use gridwork::PageToken;
use gridwork_admin::{UsersPanel, sample_users};
use simplelog::{Config, LevelFilter, WriteLogger};

fn render_window(tokens: &[PageToken], current: usize) -> String {
    tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(n) if *n == current => format!("[{n}]"),
            PageToken::Page(n) => n.to_string(),
            PageToken::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let log_file = File::create("gridwork-admin.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut panel = UsersPanel::new(sample_users(57)).expect("Failed to build panel");

    println!("{} users total", panel.pagination().record_count().unwrap_or(0));
    while panel.pagination().current_page() < panel.pagination().page_count() {
        println!(
            "  {}",
            render_window(&panel.pagination().window(), panel.pagination().current_page())
        );
        panel.pagination().next_page();
    }
    println!(
        "  {}",
        render_window(&panel.pagination().window(), panel.pagination().current_page())
    );

    println!("\nFiltering to inactive users:");
    panel.status_filter().toggle("inactive");
    panel.refresh_record_count();
    println!(
        "  {} matches, facets: active={:?} inactive={:?}",
        panel.pagination().record_count().unwrap_or(0),
        panel.status_filter().facet("active"),
        panel.status_filter().facet("inactive"),
    );
    panel.status_filter().clear();
    panel.refresh_record_count();

    println!("\nSelecting the first page and deleting it:");
    panel.toolbar_mut().toggle_selection_mode();
    let directory = panel.directory().clone();
    directory.set_page_selected(true);
    panel.toolbar_mut().tick();
    println!("  {} rows selected", panel.toolbar().selected_count());
    panel.toolbar().delete_selected();
    println!(
        "  {} users remain",
        panel.pagination().record_count().unwrap_or(0)
    );
}
