use chrono::{Datelike, Local};
use ecodev_core::{
    catalogue::tip_for_day,
    model::{Category, Classification},
};
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap,
    },
};

use crate::app::{App, LoginField, MenuItem, Screen, SubmitField};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let title = match &app.user {
        Some(user) => format!("EcoDev – classificador de resíduos · {}", user.name),
        None => "EcoDev – classificador de resíduos".to_owned(),
    };
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL).title("EcoDev"));
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::Login => draw_login(frame, app, *content_area),
        Screen::Menu => draw_menu(frame, app, *content_area),
        Screen::Submit => draw_submit(frame, app, *content_area),
        Screen::Result => draw_result(frame, app, *content_area),
        Screen::History => draw_history(frame, app, *content_area),
        Screen::QuickSearch => draw_quick_search(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::Login => "Tab alterna campo · Enter entrar · Ctrl-C sair",
        Screen::Menu => "↑/↓ mover · Enter abrir · Esc logout · q/Ctrl-C sair",
        Screen::Submit => "Tab alterna campo · Enter classificar · Esc menu · Ctrl-C sair",
        Screen::Result => "Esc/Enter voltar · m menu · Ctrl-C sair",
        Screen::History => "Digite para filtrar · Tab categoria · ↑/↓ mover · Enter abrir · Esc menu",
        Screen::QuickSearch => "Digite para buscar · Tab aceita sugestão · ↑/↓ mover · Esc menu",
    };

    let status_text = if app.is_loading {
        format!("Processando… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_login(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [email_area, password_area, info_area] = chunks else {
        return;
    };

    let email = Paragraph::new(app.email_input.as_str())
        .block(field_block("E-mail", app.login_field == LoginField::Email));
    frame.render_widget(email, *email_area);

    let masked = "•".repeat(app.password_input.chars().count());
    let password =
        Paragraph::new(masked).block(field_block("Senha", app.login_field == LoginField::Password));
    frame.render_widget(password, *password_area);

    let info = Paragraph::new("Modo demonstração: qualquer e-mail e senha são aceitos.")
        .wrap(Wrap { trim: true });
    frame.render_widget(info, *info_area);
}

fn draw_menu(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [list_area, stats_area] = chunks else {
        return;
    };

    let items = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let prefix = if idx == app.menu_index { "> " } else { "  " };
            ListItem::new(format!("{prefix}{}", item.label()))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.menu_index));
    frame.render_stateful_widget(list, *list_area, &mut state);

    draw_stats(frame, app, *stats_area);
}

fn draw_stats(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let stats = app.history_stats();
    let line = Line::from(vec![
        Span::raw(format!("Total: {}  ", stats.total)),
        Span::styled(
            format!("Recicláveis: {}  ", stats.recyclable),
            Style::default().fg(category_color(Category::Recyclable)),
        ),
        Span::styled(
            format!("Orgânicos: {}  ", stats.organic),
            Style::default().fg(category_color(Category::Organic)),
        ),
        Span::styled(
            format!("Perigosos: {}", stats.hazardous),
            Style::default().fg(category_color(Category::Hazardous)),
        ),
    ]);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title("Suas estatísticas"));
    frame.render_widget(paragraph, area);
}

fn draw_submit(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [description_area, image_area, tips_area] = chunks else {
        return;
    };

    let description = Paragraph::new(app.description_input.as_str())
        .block(field_block(
            "Descrição do resíduo *",
            app.submit_field == SubmitField::Description,
        ))
        .wrap(Wrap { trim: false });
    frame.render_widget(description, *description_area);

    let image = Paragraph::new(app.image_input.as_str()).block(field_block(
        "Foto do resíduo (opcional, caminho do arquivo)",
        app.submit_field == SubmitField::ImagePath,
    ));
    frame.render_widget(image, *image_area);

    let tips = Paragraph::new(vec![
        Line::from("Plásticos: \"garrafinha PET\", \"embalagem plástica\""),
        Line::from("Pilhas/Baterias: \"pilha AA\", \"bateria celular\""),
        Line::from("Orgânicos: \"casca banana\", \"resto comida\""),
        Line::from("Papel: \"caixa papelão\", \"revista\""),
        Line::from("Vidro: \"pote conserva\", \"garrafa vinho\""),
        Line::from("Metal: \"lata\", \"tampa metal\", \"alumínio\""),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Exemplos reconhecidos (acentos são ignorados)"),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(tips, *tips_area);
}

fn draw_result(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(submission) = &app.result else {
        let paragraph = Paragraph::new("Nenhum resultado.")
            .block(Block::default().borders(Borders::ALL).title("Resultado"));
        frame.render_widget(paragraph, area);
        return;
    };
    let classification = &submission.classification;

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(collection_height(classification))])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [summary_area, points_area] = chunks else {
        return;
    };

    let color = category_color(classification.category);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                classification.name.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", classification.category.label()),
                Style::default().fg(color),
            ),
        ]),
        Line::from(format!("Descrição enviada: \"{}\"", submission.description)),
    ];
    if let Some(path) = &submission.image_path {
        lines.push(Line::from(format!("Foto: {path}")));
    }
    lines.extend([
        Line::from(""),
        Line::from(classification.description.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Como descartar:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(classification.disposal.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Dica importante:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(classification.tip.as_str()),
    ]);

    let summary = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title("Resultado da classificação"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, *summary_area);

    draw_collection_points(frame, classification, *points_area);
}

fn collection_height(classification: &Classification) -> u16 {
    let rows = u16::try_from(classification.collection_points.len()).unwrap_or(u16::MAX);
    rows.saturating_add(3)
}

fn draw_collection_points(frame: &mut Frame<'_>, classification: &Classification, area: Rect) {
    let rows = classification.collection_points.iter().map(|point| {
        Row::new(vec![
            Cell::from(point.name.clone()),
            Cell::from(point.address.clone()),
            Cell::from(point.hours.clone()),
            Cell::from(point.phone.clone().unwrap_or_else(|| "-".to_owned())),
            Cell::from(point.accepted_types.join(", ")),
        ])
    });

    let column_widths = [
        Constraint::Length(28),
        Constraint::Min(24),
        Constraint::Length(28),
        Constraint::Length(24),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Local", "Endereço", "Horário", "Telefone", "Aceita"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Pontos de coleta próximos"),
        )
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn draw_history(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [filter_area, list_area, stats_area] = chunks else {
        return;
    };

    let category_label = app
        .history_category
        .map_or("Todas", Category::label);
    let filter = Paragraph::new(app.history_term.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Buscar no histórico · categoria: {category_label}")),
    );
    frame.render_widget(filter, *filter_area);

    let entries = app.filtered_history();
    if entries.is_empty() {
        let paragraph = Paragraph::new("Nenhum item encontrado.")
            .block(Block::default().borders(Borders::ALL).title("Histórico"));
        frame.render_widget(paragraph, *list_area);
    } else {
        let rows = entries.iter().map(|submission| {
            let classification = &submission.classification;
            Row::new(vec![
                Cell::from(submission.created_at.format("%d/%m/%Y %H:%M").to_string()),
                Cell::from(classification.name.clone()),
                Cell::from(classification.category.label()),
                Cell::from(submission.description.clone()),
            ])
            .style(Style::default().fg(category_color(classification.category)))
        });

        let column_widths = [
            Constraint::Length(17),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Min(20),
        ];

        let table = Table::new(rows, column_widths)
            .header(
                Row::new(vec!["Data", "Item", "Categoria", "Descrição"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::ALL).title("Histórico"))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .column_spacing(1);

        let mut state = TableState::default();
        state.select(Some(app.history_index));
        frame.render_stateful_widget(table, *list_area, &mut state);
    }

    draw_stats(frame, app, *stats_area);
}

fn draw_quick_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, suggestion_area, results_area] = chunks else {
        return;
    };

    let input = Paragraph::new(app.search_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Como descartar seu resíduo? (ex: garrafa pet, pilha, casca de banana)"),
    );
    frame.render_widget(input, *input_area);

    let catalogue = app.service.catalogue();

    let suggestions = catalogue.suggestions(&app.search_input);
    let suggestion_text = if suggestions.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = suggestions.iter().map(|item| item.name.as_str()).collect();
        format!("Sugestões: {}", names.join(" · "))
    };
    frame.render_widget(
        Paragraph::new(suggestion_text).style(Style::default().fg(Color::DarkGray)),
        *suggestion_area,
    );

    if app.search_input.trim().is_empty() {
        let today = Local::now().date_naive().ordinal();
        let mut lines = vec![
            Line::from(Span::styled(
                tip_for_day(today),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Pesquisas mais comuns:"),
        ];
        lines.extend(catalogue.popular().iter().map(|item| {
            Line::from(Span::styled(
                format!("  {}", item.name),
                Style::default().fg(category_color(item.category)),
            ))
        }));
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Busca rápida"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *results_area);
        return;
    }

    let results = catalogue.search(&app.search_input);
    if results.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(format!(
                "Não encontramos informações sobre \"{}\"",
                app.search_input
            )),
            Line::from("Tente termos como: garrafa pet, pilha, papelão, óleo de cozinha"),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Nenhum resultado encontrado"),
        )
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *results_area);
        return;
    }

    let items = results
        .iter()
        .map(|item| {
            let color = category_color(item.category);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        item.name.as_str(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  [{}]", item.category.label()), Style::default().fg(color)),
                ]),
                Line::from(format!("  {}", item.description)),
                Line::from(format!("  Como descartar: {}", item.disposal)),
                Line::from(format!("  Dica: {}", item.tip)),
            ])
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Resultados para \"{}\"", app.search_input)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.search_index));
    frame.render_stateful_widget(list, *results_area, &mut state);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Recyclable => Color::Blue,
        Category::Organic => Color::Yellow,
        Category::Hazardous => Color::Red,
        Category::General => Color::Gray,
    }
}
