use std::sync::Arc;

use ecodev_core::{
    history::{HistoryFilter, HistoryStats},
    model::{Category, Submission, User},
    service::EcoDevService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Login,
    Menu,
    Submit,
    Result,
    History,
    QuickSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubmitField {
    Description,
    ImagePath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItem {
    Submit,
    History,
    QuickSearch,
    Logout,
}

impl MenuItem {
    pub(crate) const ALL: [MenuItem; 4] = [
        MenuItem::Submit,
        MenuItem::History,
        MenuItem::QuickSearch,
        MenuItem::Logout,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuItem::Submit => "Enviar novo resíduo",
            MenuItem::History => "Histórico de consultas",
            MenuItem::QuickSearch => "Busca rápida",
            MenuItem::Logout => "Sair",
        }
    }
}

pub(crate) struct App {
    pub service: Arc<EcoDevService>,

    pub screen: Screen,
    pub user: Option<User>,

    pub email_input: String,
    pub password_input: String,
    pub login_field: LoginField,

    pub menu_index: usize,

    pub description_input: String,
    pub image_input: String,
    pub submit_field: SubmitField,

    /// Submission shown on the result screen and the screen to return to.
    pub result: Option<Submission>,
    pub result_origin: Screen,

    pub history_term: String,
    pub history_category: Option<Category>,
    pub history_index: usize,

    pub search_input: String,
    pub search_index: usize,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<EcoDevService>) -> Self {
        Self {
            service,
            screen: Screen::Login,
            user: None,
            email_input: String::new(),
            password_input: String::new(),
            login_field: LoginField::Email,
            menu_index: 0,
            description_input: String::new(),
            image_input: String::new(),
            submit_field: SubmitField::Description,
            result: None,
            result_origin: Screen::Submit,
            history_term: String::new(),
            history_category: None,
            history_index: 0,
            search_input: String::new(),
            search_index: 0,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn selected_menu_item(&self) -> Option<MenuItem> {
        MenuItem::ALL.get(self.menu_index).copied()
    }

    pub(crate) fn open_menu_item(&mut self) {
        let Some(item) = self.selected_menu_item() else {
            return;
        };
        self.error_message = None;
        match item {
            MenuItem::Submit => {
                self.description_input.clear();
                self.image_input.clear();
                self.submit_field = SubmitField::Description;
                self.screen = Screen::Submit;
            }
            MenuItem::History => {
                self.history_index = 0;
                self.screen = Screen::History;
            }
            MenuItem::QuickSearch => {
                self.search_input.clear();
                self.search_index = 0;
                self.screen = Screen::QuickSearch;
            }
            MenuItem::Logout => self.logout(),
        }
    }

    pub(crate) fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "signed out");
        }
        self.password_input.clear();
        self.login_field = LoginField::Email;
        self.menu_index = 0;
        self.screen = Screen::Login;
    }

    pub(crate) fn history_filter(&self) -> HistoryFilter {
        HistoryFilter {
            term: self.history_term.clone(),
            category: self.history_category,
        }
    }

    pub(crate) fn filtered_history(&self) -> Vec<&Submission> {
        self.service.history().filter(&self.history_filter())
    }

    pub(crate) fn history_stats(&self) -> HistoryStats {
        self.service.history().stats()
    }

    /// Cycle all → recyclable → organic → hazardous → general → all.
    pub(crate) fn cycle_history_category(&mut self) {
        self.history_category = match self.history_category {
            None => Category::ALL.first().copied(),
            Some(current) => Category::ALL
                .iter()
                .skip_while(|category| **category != current)
                .nth(1)
                .copied(),
        };
        self.history_index = 0;
    }

    pub(crate) fn open_selected_history_entry(&mut self) {
        let selected = self
            .filtered_history()
            .get(self.history_index)
            .map(|submission| (*submission).clone());
        if let Some(submission) = selected {
            self.show_result(submission, Screen::History);
        }
    }

    pub(crate) fn show_result(&mut self, submission: Submission, origin: Screen) {
        self.result = Some(submission);
        self.result_origin = origin;
        self.screen = Screen::Result;
    }

    pub(crate) fn close_result(&mut self) {
        if self.result_origin == Screen::Submit {
            self.description_input.clear();
            self.image_input.clear();
            self.submit_field = SubmitField::Description;
        }
        self.result = None;
        self.screen = self.result_origin;
    }

    /// Replace the search term with the first suggestion, if any.
    pub(crate) fn accept_suggestion(&mut self) {
        let suggestion = self
            .service
            .catalogue()
            .suggestions(&self.search_input)
            .first()
            .map(|item| item.name.clone());
        if let Some(name) = suggestion {
            self.search_input = name;
            self.search_index = 0;
        }
    }

    pub(crate) fn search_result_count(&self) -> usize {
        self.service.catalogue().search(&self.search_input).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Arc::new(EcoDevService::embedded()))
    }

    #[test]
    fn category_filter_cycles_back_to_all() {
        let mut app = app();
        let mut seen = Vec::new();
        for _ in 0..5 {
            app.cycle_history_category();
            seen.push(app.history_category);
        }
        assert_eq!(
            seen,
            [
                Some(Category::Recyclable),
                Some(Category::Organic),
                Some(Category::Hazardous),
                Some(Category::General),
                None,
            ]
        );
    }

    #[test]
    fn history_entry_opens_result_and_returns() {
        let mut app = app();
        app.screen = Screen::History;
        app.history_index = 1;
        app.open_selected_history_entry();

        assert_eq!(app.screen, Screen::Result);
        let name = app.result.as_ref().map(|sub| sub.classification.name.clone());
        assert_eq!(name.as_deref(), Some("Pilha/Bateria"));

        app.close_result();
        assert_eq!(app.screen, Screen::History);
        assert!(app.result.is_none());
    }

    #[test]
    fn suggestion_replaces_search_term() {
        let mut app = app();
        app.search_input = "pilh".to_owned();
        app.accept_suggestion();
        assert_eq!(app.search_input, "Pilha");
        assert_eq!(app.search_result_count(), 1);
    }

    #[test]
    fn logout_returns_to_login() {
        let mut app = app();
        app.user = app.service.login("ana@example.com", "x").ok();
        app.screen = Screen::Menu;
        app.menu_index = 3;
        app.open_menu_item();
        assert_eq!(app.screen, Screen::Login);
        assert!(app.user.is_none());
    }
}
