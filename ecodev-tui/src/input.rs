use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, LoginField, MenuItem, Screen, SubmitField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.login`(...) with the typed credentials
    Login,
    /// Run `service.submit`(...) for the typed description
    Classify,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, BackTab, Char, Down, Enter, Esc, Tab, Up};

    // Global quit shortcut
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.is_loading {
        return Action::None;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::Login => match key.code {
            Tab | BackTab | Up | Down => {
                app.login_field = match app.login_field {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            Enter => match app.login_field {
                LoginField::Email => app.login_field = LoginField::Password,
                LoginField::Password => action = Action::Login,
            },
            Backspace => {
                login_input(app).pop();
            }
            Char(character) if is_plain(key) => login_input(app).push(character),
            _ => {}
        },

        Screen::Menu => match key.code {
            Up | Char('k') => {
                if app.menu_index > 0 {
                    app.menu_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.menu_index + 1 < MenuItem::ALL.len() {
                    app.menu_index += 1;
                }
            }
            Enter | Char(' ') => app.open_menu_item(),
            Char('q') => action = Action::Quit,
            Esc => app.logout(),
            _ => {}
        },

        Screen::Submit => match key.code {
            Tab | BackTab => {
                app.submit_field = match app.submit_field {
                    SubmitField::Description => SubmitField::ImagePath,
                    SubmitField::ImagePath => SubmitField::Description,
                };
            }
            Enter => {
                if app.description_input.trim().is_empty() {
                    app.error_message = Some("Descreva o resíduo antes de classificar".into());
                } else {
                    action = Action::Classify;
                }
            }
            Backspace => {
                submit_input(app).pop();
            }
            Esc => {
                app.error_message = None;
                app.screen = Screen::Menu;
            }
            Char(character) if is_plain(key) => submit_input(app).push(character),
            _ => {}
        },

        Screen::Result => match key.code {
            Esc | Enter | Backspace => app.close_result(),
            Char('m') => {
                app.close_result();
                app.screen = Screen::Menu;
            }
            _ => {}
        },

        Screen::History => match key.code {
            Up => {
                if app.history_index > 0 {
                    app.history_index -= 1;
                }
            }
            Down => {
                if app.history_index + 1 < app.filtered_history().len() {
                    app.history_index += 1;
                }
            }
            Tab => app.cycle_history_category(),
            Enter => app.open_selected_history_entry(),
            Backspace => {
                app.history_term.pop();
                app.history_index = 0;
            }
            Esc => app.screen = Screen::Menu,
            Char(character) if is_plain(key) => {
                app.history_term.push(character);
                app.history_index = 0;
            }
            _ => {}
        },

        Screen::QuickSearch => match key.code {
            Up => {
                if app.search_index > 0 {
                    app.search_index -= 1;
                }
            }
            Down => {
                if app.search_index + 1 < app.search_result_count() {
                    app.search_index += 1;
                }
            }
            Tab => app.accept_suggestion(),
            Backspace => {
                app.search_input.pop();
                app.search_index = 0;
            }
            Esc => app.screen = Screen::Menu,
            Char(character) if is_plain(key) => {
                app.search_input.push(character);
                app.search_index = 0;
            }
            _ => {}
        },
    }
    action
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

fn login_input(app: &mut App) -> &mut String {
    match app.login_field {
        LoginField::Email => &mut app.email_input,
        LoginField::Password => &mut app.password_input,
    }
}

fn submit_input(app: &mut App) -> &mut String {
    match app.submit_field {
        SubmitField::Description => &mut app.description_input,
        SubmitField::ImagePath => &mut app.image_input,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ecodev_core::service::EcoDevService;

    use super::*;

    fn app() -> App {
        App::new(Arc::new(EcoDevService::embedded()))
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    fn type_text(app: &mut App, text: &str) {
        for character in text.chars() {
            press(app, KeyCode::Char(character));
        }
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = app();
        let action = handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert_eq!(action, Action::Quit);
    }

    #[test]
    fn login_form_moves_between_fields() {
        let mut app = app();
        type_text(&mut app, "ana@example.com");
        assert_eq!(press(&mut app, KeyCode::Enter), Action::None);
        type_text(&mut app, "segredo");
        assert_eq!(press(&mut app, KeyCode::Enter), Action::Login);

        assert_eq!(app.email_input, "ana@example.com");
        assert_eq!(app.password_input, "segredo");
    }

    #[test]
    fn q_is_text_on_forms_but_quits_the_menu() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::None);
        assert_eq!(app.email_input, "q");

        app.screen = Screen::Menu;
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    }

    #[test]
    fn blank_description_is_not_classified() {
        let mut app = app();
        app.screen = Screen::Submit;
        type_text(&mut app, "   ");
        assert_eq!(press(&mut app, KeyCode::Enter), Action::None);
        assert!(app.error_message.is_some());

        type_text(&mut app, "pilha");
        assert_eq!(press(&mut app, KeyCode::Enter), Action::Classify);
    }

    #[test]
    fn tab_switches_to_image_path() {
        let mut app = app();
        app.screen = Screen::Submit;
        type_text(&mut app, "pote");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "foto.jpg");

        assert_eq!(app.description_input, "pote");
        assert_eq!(app.image_input, "foto.jpg");
    }

    #[test]
    fn keys_are_ignored_while_loading() {
        let mut app = app();
        app.is_loading = true;
        type_text(&mut app, "abc");
        assert!(app.email_input.is_empty());
    }

    #[test]
    fn history_typing_filters_entries() {
        let mut app = app();
        app.screen = Screen::History;
        type_text(&mut app, "banana");
        assert_eq!(app.filtered_history().len(), 1);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.history_index, 0);
    }
}
