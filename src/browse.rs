//! Interactive browsing session.
//!
//! One page is mounted at a time. Navigating away discards the page's view
//! model; coming back mounts a fresh one and fetches again.

use crate::output::Renderer;
use crate::repository::ItemRepository;
use crate::settings::{SettingsStore, ThemeService};
use crate::validation::Field;
use crate::view::{DetailViewModel, ListViewModel, SubmitOutcome};

pub const HELP: &str = "\
Commands:
  search <text>     filter the list (resets to page 1)
  clear             clear the search
  next | prev       change page
  open <id>         show an item
  back              return to the list
  name <text>       set the form name
  email <text>      set the form email
  message <text>    set the form message
  submit            send the form
  theme             toggle light/dark
  help              show this help
  quit              leave";

/// The page currently on screen.
#[derive(Debug)]
pub enum Screen {
    List(ListViewModel),
    Detail(DetailViewModel),
}

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Text to show; the session continues.
    Render(String),
    Quit,
}

/// Line-driven session over a repository and a theme service.
pub struct Session<R: ItemRepository, S: SettingsStore> {
    repo: R,
    theme: ThemeService<S>,
    screen: Screen,
    color: bool,
}

impl<R: ItemRepository, S: SettingsStore> Session<R, S> {
    pub fn new(repo: R, theme: ThemeService<S>) -> Self {
        Self {
            repo,
            theme,
            screen: Screen::List(ListViewModel::new()),
            color: true,
        }
    }

    /// Disable ANSI colours in rendered pages.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn theme(&self) -> &ThemeService<S> {
        &self.theme
    }

    fn renderer(&self) -> Renderer {
        if self.color {
            Renderer::new(self.theme.theme())
        } else {
            Renderer::plain()
        }
    }

    /// Mount the list page and fetch items; returns the first render.
    pub async fn start(&mut self) -> String {
        self.show_list().await;
        self.render()
    }

    async fn show_list(&mut self) {
        let mut list = ListViewModel::new();
        list.load(&self.repo).await;
        self.screen = Screen::List(list);
    }

    async fn show_detail(&mut self, raw_id: &str) {
        let mut detail = DetailViewModel::mount(raw_id);
        detail.load(&self.repo).await;
        self.screen = Screen::Detail(detail);
    }

    /// Render the current page inside the layout.
    pub fn render(&self) -> String {
        let renderer = self.renderer();
        let body = match &self.screen {
            Screen::List(list) => renderer.list_page(&list.derive()),
            Screen::Detail(detail) => renderer.detail_page(&detail.derive()),
        };
        renderer.layout(&body)
    }

    /// Handle one line of user input.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&mut self, line: &str) -> Step {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let notice = match command {
            "" | "help" | "?" => return Step::Render(HELP.to_string()),
            "quit" | "exit" | "q" => return Step::Quit,
            "theme" => match self.theme.toggle() {
                Ok(theme) => Some(format!("Theme: {theme}")),
                Err(e) => Some(self.renderer().error_banner(&e.to_string())),
            },
            "back" | "home" => {
                self.show_list().await;
                None
            }
            "open" => {
                self.show_detail(arg).await;
                None
            }
            _ => self.handle_page_command(command, arg).await,
        };

        let page = self.render();
        Step::Render(match notice {
            Some(notice) => format!("{page}\n\n{notice}"),
            None => page,
        })
    }

    /// Commands that only make sense on the current page.
    async fn handle_page_command(&mut self, command: &str, arg: &str) -> Option<String> {
        match (command, &mut self.screen) {
            ("search", Screen::List(list)) => list.set_query(arg),
            ("clear", Screen::List(list)) => list.set_query(""),
            ("next", Screen::List(list)) => list.go_next(),
            ("prev" | "previous", Screen::List(list)) => list.go_previous(),
            ("submit", Screen::Detail(detail)) => {
                if detail.submit(&self.repo).await == SubmitOutcome::Blocked {
                    tracing::debug!("submit blocked");
                }
            }
            (command, Screen::Detail(detail)) => match command.parse::<Field>() {
                Ok(field) => detail.set_field(field, arg),
                Err(_) => return Some(unknown_command(command)),
            },
            (command, Screen::List(_)) => return Some(unknown_command(command)),
        }
        None
    }
}

fn unknown_command(command: &str) -> String {
    format!("Unknown command '{command}' here. Type 'help'.")
}
