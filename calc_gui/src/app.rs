//! Application state and update logic.

use std::collections::HashSet;

use iced::{Element, Length, Task, Theme};
use iced::widget::{column, container, row};

use calc_core::catalog::{CalculatorDescriptor, CategorySlug};
use calc_core::config::SiteConfig;
use calc_core::content::{self, Content};
use calc_core::form::FormValues;
use calc_core::report::Evaluation;
use calc_core::routing::{ResolvedPage, Route, Router};

use crate::ui;

/// Share of the main area given to the input panel
const INPUT_RATIO: f32 = 0.5;

#[derive(Debug, Clone)]
pub enum Message {
    /// Address bar text edited
    AddressChanged(String),
    /// Address bar submitted
    Navigate,
    /// Go straight to a site path (sidebar, links)
    Open(String),
    FieldChanged(&'static str, String),
    Calculate,
    ResetForm,
    SearchChanged(String),
    ToggleCategory(CategorySlug),
    ToggleDarkMode,
}

pub struct App {
    pub router: Router,
    pub page: ResolvedPage,
    pub address: String,
    pub form: FormValues,
    /// Last successful result, kept when a later attempt fails
    pub evaluation: Option<Evaluation>,
    pub error_message: Option<String>,
    pub content: Option<Content>,
    pub search: String,
    pub collapsed: HashSet<CategorySlug>,
    pub dark_mode: bool,
    pub status: String,
}

impl App {
    pub fn new(config: &SiteConfig, initial_path: &str) -> Self {
        let router = Router::new(config);
        let page = router.resolve("/");
        let mut app = Self {
            router,
            page,
            address: "/".to_string(),
            form: FormValues::new(),
            evaluation: None,
            error_message: None,
            content: None,
            search: String::new(),
            collapsed: HashSet::new(),
            dark_mode: false,
            status: "Ready".to_string(),
        };
        app.navigate(initial_path);
        app
    }

    pub fn boot() -> (Self, Task<Message>) {
        #[cfg(not(target_arch = "wasm32"))]
        let (config, path) = {
            let config_path = std::env::var_os("CALCFOLIO_CONFIG").map(std::path::PathBuf::from);
            let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
            (SiteConfig::load_or_default(config_path.as_deref()), path)
        };
        #[cfg(target_arch = "wasm32")]
        let (config, path) = (SiteConfig::default(), "/".to_string());

        (Self::new(&config, &path), Task::none())
    }

    pub fn title(&self) -> String {
        self.page.metadata.title.clone()
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The calculator on screen, if any
    pub fn calculator(&self) -> Option<&'static CalculatorDescriptor> {
        match self.page.route {
            Route::Calculator(calculator) => Some(calculator),
            _ => None,
        }
    }

    pub fn navigate(&mut self, path: &str) {
        let page = self.router.resolve(path);
        let same_calculator = matches!(
            (&page.route, &self.page.route),
            (Route::Calculator(a), Route::Calculator(b)) if a.id == b.id
        );
        if !same_calculator {
            self.form = FormValues::new();
            self.evaluation = None;
            self.error_message = None;
        }
        self.content = match page.route {
            Route::Calculator(calculator) => Some(content::for_calculator(calculator)),
            _ => None,
        };
        self.address = page.route.path().unwrap_or_else(|| path.to_string());
        self.status = match &page.route {
            Route::NotFound(_) => format!("No page at {}", path),
            _ => "Ready".to_string(),
        };
        tracing::debug!(path, title = %page.metadata.title, "navigated");
        self.page = page;
    }

    pub fn calculate(&mut self) {
        let Some(calculator) = self.calculator() else {
            return;
        };
        match calculator.kind.evaluate(&self.form) {
            Ok(evaluation) => {
                self.evaluation = Some(evaluation);
                self.error_message = None;
                self.status = format!("Calculated {}", calculator.title);
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.status = format!("Check your inputs ({})", e.error_code());
            }
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::AddressChanged(address) => self.address = address,
            Message::Navigate => {
                let address = self.address.clone();
                self.navigate(&address);
            }
            Message::Open(path) => self.navigate(&path),
            Message::FieldChanged(key, value) => self.form.set(key, value),
            Message::Calculate => self.calculate(),
            Message::ResetForm => {
                self.form = FormValues::new();
                self.evaluation = None;
                self.error_message = None;
                self.status = "Form cleared".to_string();
            }
            Message::SearchChanged(search) => self.search = search,
            Message::ToggleCategory(category) => {
                if !self.collapsed.remove(&category) {
                    self.collapsed.insert(category);
                }
            }
            Message::ToggleDarkMode => self.dark_mode = !self.dark_mode,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let main = row![
            ui::sidebar::view_sidebar(self, 240.0),
            ui::input_panel::view_input_panel(self, INPUT_RATIO),
            ui::results_panel::view_results_panel(self, INPUT_RATIO),
        ]
        .spacing(8)
        .height(Length::Fill);

        container(column![
            ui::toolbar::view_toolbar(&self.page.metadata.title, &self.address, self.dark_mode),
            main,
            ui::status_bar::view_status_bar(&self.page.metadata, &self.status),
        ]
        .spacing(6))
        .padding(8)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(path: &str) -> App {
        App::new(&SiteConfig::default(), path)
    }

    #[test]
    fn test_starts_on_requested_page() {
        let app = app("/science/mm-to-inches");
        assert_eq!(app.calculator().map(|c| c.slug), Some("mm-to-inches"));
        assert_eq!(app.title(), "Millimeters to Inches | Calcfolio");
        assert!(app.content.is_some());
    }

    #[test]
    fn test_address_bar_navigation_canonicalizes() {
        let mut app = app("/");
        app.update(Message::AddressChanged("BMI".to_string()));
        app.update(Message::Navigate);
        assert_eq!(app.address, "/health/bmi");
        assert_eq!(app.calculator().map(|c| c.slug), Some("bmi"));
    }

    #[test]
    fn test_unknown_address_keeps_text_and_reports() {
        let mut app = app("/");
        app.update(Message::Open("/nowhere".to_string()));
        assert!(matches!(app.page.route, Route::NotFound(_)));
        assert_eq!(app.address, "/nowhere");
        assert!(app.status.contains("/nowhere"));
    }

    #[test]
    fn test_error_keeps_previous_result() {
        let mut app = app("/math/cartesian-to-polar");
        app.update(Message::FieldChanged("x", "3".to_string()));
        app.update(Message::FieldChanged("y", "4".to_string()));
        app.update(Message::Calculate);
        let first = app.evaluation.clone().unwrap();
        assert_eq!(first.report.headline.value, "5.0000");

        app.update(Message::FieldChanged("y", "four".to_string()));
        app.update(Message::Calculate);
        assert!(app.error_message.is_some());
        assert_eq!(app.evaluation, Some(first));

        app.update(Message::FieldChanged("y", "4".to_string()));
        app.update(Message::Calculate);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_switching_calculators_clears_form() {
        let mut app = app("/math/cartesian-to-polar");
        app.update(Message::FieldChanged("x", "3".to_string()));
        app.update(Message::Open("/math/cartesian-to-polar".to_string()));
        assert_eq!(app.form.get("x"), Some("3"));
        app.update(Message::Open("/math/polar-to-cartesian".to_string()));
        assert!(app.form.is_blank("x"));
        assert!(app.evaluation.is_none());
    }

    #[test]
    fn test_toggle_category_and_theme() {
        let mut app = app("/");
        app.update(Message::ToggleCategory(CategorySlug::Math));
        assert!(app.collapsed.contains(&CategorySlug::Math));
        app.update(Message::ToggleCategory(CategorySlug::Math));
        assert!(app.collapsed.is_empty());
        app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Dark);
    }
}
