//! Nabha Health Pharmacy Stock Checker — interactive Ratatui TUI
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  Pharmacy Stock Checker                                              │
//!   ├─── search ──────────────────────────────────┬─── location ──────────┤
//!   │  > para_                                    │  < All Locations >     │
//!   ├─────────────────────────────────────────────┴────────────────────────┤
//!   │  Medicine cards (or "No medicines found")                           │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  Emergency helpline                                                 │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! The visible list is recomputed on every keystroke.

use std::{io, path::PathBuf, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use nabha_contracts::{BadgeVariant, Medicine, PharmacyStock, StockStatus};
use nabha_stock::{mock_data::EMERGENCY_HELPLINE, render, Catalog, StockView};

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    view: StockView,
    /// Vertical scroll offset of the medicine list, in lines.
    scroll: u16,
    quit: bool,
}

impl App {
    fn new(catalog: Catalog) -> Self {
        Self {
            view: StockView::new(catalog),
            scroll: 0,
            quit: false,
        }
    }

    /// Apply one key press to the screen state.
    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            // Ctrl-C / Ctrl-Q quit; plain letters are search input.
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.quit = true,

            KeyCode::Char(c) if !ctrl => {
                self.view.push_char(c);
                self.scroll = 0;
            }
            KeyCode::Backspace => {
                self.view.pop_char();
                self.scroll = 0;
            }
            // Esc is the "Clear Search" action.
            KeyCode::Esc => {
                self.view.clear_search();
                self.scroll = 0;
            }

            KeyCode::Tab => self.view.next_location(),
            KeyCode::BackTab => self.view.prev_location(),

            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),

            _ => {}
        }
    }
}

// ── Styling helpers ───────────────────────────────────────────────────────────

fn status_color(status: StockStatus) -> Color {
    match status.badge_variant() {
        BadgeVariant::Default => Color::Green,
        BadgeVariant::Secondary => Color::Yellow,
        BadgeVariant::Destructive => Color::Red,
    }
}

fn pharmacy_lines(pharmacy: &PharmacyStock) -> Vec<Line<'static>> {
    let color = status_color(pharmacy.stock);
    vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                pharmacy.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(pharmacy.stock.glyph().to_string(), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("      @ {}   # {}   ", pharmacy.location, pharmacy.quantity),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" {} ", pharmacy.stock.label()),
                Style::default().fg(Color::Black).bg(color),
            ),
            Span::styled("   Call ", Style::default().fg(Color::Cyan)),
            Span::styled(pharmacy.tel_link(), Style::default().fg(Color::Cyan)),
        ]),
    ]
}

/// Build the display lines for the medicine list (or the empty state).
fn medicine_lines(medicines: &[&Medicine]) -> Vec<Line<'static>> {
    if medicines.is_empty() {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                render::EMPTY_TITLE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(render::EMPTY_HINT, Style::default().fg(Color::Gray))),
            Line::from(vec![
                Span::styled("[Esc] ", Style::default().fg(Color::Cyan)),
                Span::raw(render::CLEAR_SEARCH_HINT),
            ]),
        ];
    }

    let mut lines = Vec::new();
    for (i, med) in medicines.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                med.name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", med.category),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for pharmacy in &med.pharmacies {
            lines.extend(pharmacy_lines(pharmacy));
        }
    }
    lines
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    // Split into: header, search row, medicine list, helpline, footer.
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // search + location
            Constraint::Min(6),    // medicine cards
            Constraint::Length(4), // helpline
            Constraint::Length(3), // footer
        ])
        .split(full);

    render_header(f, outer_chunks[0]);

    let search_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(outer_chunks[1]);

    render_search(f, search_chunks[0], app);
    render_location(f, search_chunks[1], app);
    render_medicines(f, outer_chunks[2], app);
    render_helpline(f, outer_chunks[3]);
    render_footer(f, outer_chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Pharmacy Stock Checker    ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Check medicine availability at local pharmacies in real-time",
            Style::default().fg(Color::Gray),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let term = app.view.search_term();
    let content = if term.is_empty() {
        Line::from(Span::styled(
            "Search medicines...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled(term.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ])
    };
    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(search, area);
}

fn render_location(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.view.location().label(),
            Style::default().fg(Color::White),
        ),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]);
    let selector = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Location ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(selector, area);
}

fn render_medicines(f: &mut Frame, area: Rect, app: &App) {
    let visible = app.view.visible();
    let title = format!(
        " Medicines ({} of {}) ",
        visible.len(),
        app.view.catalog().len()
    );
    let paragraph = Paragraph::new(medicine_lines(&visible))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_helpline(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            render::HELPLINE_TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{}: ", render::HELPLINE_SUBTITLE),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                EMERGENCY_HELPLINE,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let helpline = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(helpline, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let spans = vec![
        Span::styled(" [type] ", key),
        Span::raw("Search  "),
        Span::styled("[Esc] ", key),
        Span::raw("Clear  "),
        Span::styled("[Tab] ", key),
        Span::raw("Location  "),
        Span::styled("[↑/↓] ", key),
        Span::raw("Scroll  "),
        Span::styled("[Ctrl-Q] ", key),
        Span::raw("Quit"),
    ];
    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Optional first argument: a TOML catalog file.
    let catalog_path = std::env::args().nth(1).map(PathBuf::from);
    let catalog = match Catalog::load(catalog_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("nabha-tui: {}", e);
            std::process::exit(1);
        }
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(catalog);

    while !app.quit {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events reported on some platforms.
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use nabha_contracts::Location;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_filters_on_every_keystroke() {
        let mut app = App::new(Catalog::sample());
        type_str(&mut app, "p");
        // Paracetamol and Blood Pressure Monitor.
        assert_eq!(app.view.visible().len(), 2);
        type_str(&mut app, "ara");
        assert_eq!(app.view.visible().len(), 1);
    }

    #[test]
    fn letters_q_and_c_are_search_input_not_quit() {
        let mut app = App::new(Catalog::sample());
        type_str(&mut app, "qc");
        assert!(!app.quit);
        assert_eq!(app.view.search_term(), "qc");

        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.quit);
    }

    #[test]
    fn escape_clears_search_and_restores_list() {
        let mut app = App::new(Catalog::sample());
        type_str(&mut app, "xyz-not-found");
        assert!(app.view.is_empty_result());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view.visible().len(), 5);
    }

    #[test]
    fn backspace_and_scroll_reset() {
        let mut app = App::new(Catalog::sample());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 2);

        type_str(&mut app, "ab");
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.search_term(), "a");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn tab_cycles_location_without_filtering() {
        let mut app = App::new(Catalog::sample());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.location(), Location::MainMarket);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view.location(), Location::HospitalRoad);
        assert_eq!(app.view.visible().len(), 5);
    }

    #[test]
    fn empty_list_renders_empty_state_lines() {
        let lines = medicine_lines(&[]);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("No medicines found"));
        assert!(text.contains("Clear Search"));
    }

    #[test]
    fn card_lines_cover_each_pharmacy() {
        let catalog = Catalog::sample();
        let visible = catalog.search("insulin");
        // Title + two lines per pharmacy.
        assert_eq!(medicine_lines(&visible).len(), 1 + 2 * 3);
    }
}
