//! Output formatting for terminal display.
//!
//! Provides the [`PrettyPrint`] trait for single entities and a
//! [`Renderer`] that turns view-model snapshots into page text.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::settings::Theme;
use crate::validation::Field;
use crate::view::{DetailView, ListView, LoadState};
use crate::{Item, SubmissionResponse};

pub const APP_TITLE: &str = "Digital Item Catalog";
const FOOTER: &str = "itemcat - browse the catalog, send feedback";

/// Trait for human-readable key-value output.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Item {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.name.chars().count().max(30));

        [
            self.name.clone(),
            divider,
            self.short_description.clone(),
            String::new(),
            self.full_description.clone(),
        ]
        .join("\n")
    }
}

impl PrettyPrint for SubmissionResponse {
    fn pretty_print(&self) -> String {
        let status = if self.success { "accepted" } else { "rejected" };
        format!("Submission {status}: {}", self.message)
    }
}

#[derive(Tabled)]
struct ItemRow {
    id: u64,
    name: String,
    #[tabled(rename = "description")]
    short_description: String,
    link: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            short_description: item.short_description.clone(),
            link: item.route(),
        }
    }
}

/// Renders pages as text, optionally with ANSI colour.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
    color: bool,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme, color: true }
    }

    /// Renderer without escape codes.
    pub fn plain() -> Self {
        Self {
            theme: Theme::default(),
            color: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn paint(&self, text: &str, light: &str, dark: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let code = match self.theme {
            Theme::Light => light,
            Theme::Dark => dark,
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }

    pub fn error_banner(&self, message: &str) -> String {
        self.paint(&format!("! {message}"), "31", "91")
    }

    pub fn success_banner(&self, message: &str) -> String {
        self.paint(&format!("✓ {message}"), "32", "92")
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, "1;34", "1;96")
    }

    pub fn loading(&self) -> String {
        "Loading...".to_string()
    }

    /// Header, body and footer around a page.
    pub fn layout(&self, body: &str) -> String {
        let rule = "═".repeat(APP_TITLE.len() + 4);
        format!(
            "{}  [/]\n{rule}\n\n{body}\n\n{FOOTER}",
            self.heading(APP_TITLE)
        )
    }

    pub fn no_results(&self, query: &str) -> String {
        let query = query.trim();
        let hint = if query.is_empty() {
            "Try removing filters or try another search term.".to_string()
        } else {
            format!("Try a different term for: \"{query}\"")
        };
        format!("No items match your search\n{hint}")
    }

    pub fn item_table(&self, items: &[Item]) -> String {
        let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
        Table::new(rows).with(Style::rounded()).to_string()
    }

    /// `Page X of Y` with markers for the available directions.
    pub fn pagination(&self, view: &ListView) -> String {
        let prev = if view.has_previous { "[prev]" } else { "[----]" };
        let next = if view.has_next { "[next]" } else { "[----]" };
        format!(
            "{prev}  Page {} of {}  {next}   ({} items)",
            view.page, view.total_pages, view.filtered_count
        )
    }

    pub fn list_page(&self, view: &ListView) -> String {
        let mut parts = vec![self.heading("Item Catalog")];
        parts.push(format!("Search: {}", view.query));

        match &view.status {
            LoadState::Idle => {}
            LoadState::Loading => parts.push(self.loading()),
            LoadState::Failed(message) => parts.push(self.error_banner(message)),
            LoadState::Loaded => {
                if view.show_no_results {
                    parts.push(self.no_results(&view.query));
                } else {
                    parts.push(self.item_table(&view.items));
                }
                if view.show_pagination {
                    parts.push(self.pagination(view));
                }
            }
        }

        parts.join("\n\n")
    }

    pub fn detail_page(&self, view: &DetailView) -> String {
        let mut parts = Vec::new();

        match &view.status {
            LoadState::Loading => parts.push(self.loading()),
            LoadState::Failed(message) => parts.push(self.error_banner(message)),
            LoadState::Idle | LoadState::Loaded => {}
        }

        if let Some(item) = &view.item {
            parts.push(item.pretty_print());
            parts.push(self.form(view));
        }

        parts.join("\n\n")
    }

    fn form(&self, view: &DetailView) -> String {
        let form = &view.form;
        let mut lines = vec![self.heading("Submit Feedback / Request")];

        for field in Field::ALL {
            lines.push(format!(
                "{:<8} {}",
                format!("{}:", field.label()),
                field.value_of(&form.payload)
            ));
            if let Some(error) = form.field_errors.get(field) {
                lines.push(format!("         {}", self.error_banner(error)));
            }
        }

        if let Some(error) = &form.submit_error {
            lines.push(self.error_banner(error));
        }
        if let Some(success) = &form.submit_success {
            lines.push(self.success_banner(success));
        }

        let button = if view.can_submit {
            format!("[ {} ]", view.submit_label())
        } else {
            format!("( {} )", view.submit_label())
        };
        lines.push(button);

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ListViewModel;

    fn widget() -> Item {
        Item {
            id: 1,
            name: "Widget".to_string(),
            short_description: "A widget".to_string(),
            full_description: "A very fine widget".to_string(),
        }
    }

    #[test]
    fn test_item_pretty_print_format() {
        let output = widget().pretty_print();
        assert!(output.starts_with("Widget\n"));
        assert!(output.contains("A very fine widget"));
    }

    #[test]
    fn test_no_results_echoes_query() {
        let mut vm = ListViewModel::new();
        vm.finish_load(Ok(vec![widget()]));
        vm.set_query("gadget");

        let page = Renderer::plain().list_page(&vm.derive());
        assert!(page.contains("No items match your search"));
        assert!(page.contains("\"gadget\""));
        assert!(!page.contains("Page 1 of 1"));
    }

    #[test]
    fn test_list_page_shows_table_and_pagination() {
        let mut vm = ListViewModel::new();
        vm.finish_load(Ok(vec![widget()]));

        let page = Renderer::plain().list_page(&vm.derive());
        assert!(page.contains("Widget"));
        assert!(page.contains("/items/1"));
        assert!(page.contains("Page 1 of 1"));
    }

    #[test]
    fn test_plain_banners_have_no_escape_codes() {
        let renderer = Renderer::plain();
        assert_eq!(renderer.error_banner("boom"), "! boom");
        assert!(!renderer.layout("body").contains('\x1b'));
    }

    #[test]
    fn test_theme_changes_colours() {
        let light = Renderer::new(Theme::Light).error_banner("x");
        let dark = Renderer::new(Theme::Dark).error_banner("x");
        assert!(light.contains("\x1b[31m"));
        assert!(dark.contains("\x1b[91m"));
    }
}
