use super::theme::Theme;
use crate::application::{LeaderboardApp, LeaderboardPage, Response, render_error_boundary};
use crate::domain::{CalendarUnit, MIN_YEAR, PageLink, PeriodCalendar, PeriodKey};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::tty::IsTty;
use log::debug;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{self, Stdout, stdout};

/// Which board is on screen. Kept apart from the terminal so key handling
/// can be exercised without a TTY.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub unit: CalendarUnit,
    /// First day of the period being shown
    pub start: NaiveDate,
    pub page: u32,
    /// Page count of the last board fetched
    pub total_pages: u32,
    pub show_help: bool,
    pub should_exit: bool,
}

impl BoardState {
    pub fn new(unit: CalendarUnit, calendar: &PeriodCalendar, now: DateTime<Utc>) -> Self {
        Self {
            unit,
            start: calendar.current_start(unit, now),
            page: 1,
            total_pages: 1,
            show_help: false,
            should_exit: false,
        }
    }

    pub fn key(&self) -> PeriodKey {
        PeriodKey::containing(self.unit, self.start)
    }

    pub fn handle_key(&mut self, key: KeyEvent, calendar: &PeriodCalendar, now: DateTime<Utc>) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
                self.should_exit = true;
            }
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_exit = true;
            }

            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => self.shift(-1, calendar, now),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => self.shift(1, calendar, now),

            (KeyCode::Char('n'), _) | (KeyCode::PageDown, _) => {
                if self.page < self.total_pages {
                    self.page += 1;
                }
            }
            (KeyCode::Char('p'), _) | (KeyCode::PageUp, _) => {
                if self.page > 1 {
                    self.page -= 1;
                }
            }

            (KeyCode::Char('d'), KeyModifiers::NONE) => self.switch_unit(CalendarUnit::Day),
            (KeyCode::Char('w'), _) => self.switch_unit(CalendarUnit::Week),
            (KeyCode::Char('m'), _) => self.switch_unit(CalendarUnit::Month),
            (KeyCode::Char('y'), _) => self.switch_unit(CalendarUnit::Year),

            (KeyCode::Char('t'), _) => {
                self.start = calendar.current_start(self.unit, now);
                self.page = 1;
            }

            (KeyCode::Char('?'), _) => {
                self.show_help = !self.show_help;
            }

            _ => {}
        }
    }

    /// Move `delta` periods, never past the current one or before year 1
    fn shift(&mut self, delta: i32, calendar: &PeriodCalendar, now: DateTime<Utc>) {
        if delta > 0 && self.start >= calendar.current_start(self.unit, now) {
            return;
        }
        if let Some(start) = self.unit.step(self.start, delta) {
            if i64::from(start.year()) >= MIN_YEAR {
                self.start = start;
                self.page = 1;
            }
        }
    }

    /// The period of the new unit containing the current start has already
    /// begun, so the board stays valid.
    fn switch_unit(&mut self, unit: CalendarUnit) {
        if unit != self.unit {
            self.unit = unit;
            self.start = unit.truncate(self.start);
            self.page = 1;
        }
    }
}

/// Full screen leaderboard browser
pub struct BoardView<'a> {
    app: &'a LeaderboardApp,
    state: BoardState,
    now: DateTime<Utc>,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl<'a> BoardView<'a> {
    pub fn new(
        app: &'a LeaderboardApp,
        unit: CalendarUnit,
        now: DateTime<Utc>,
    ) -> io::Result<Self> {
        if !IsTty::is_tty(&std::io::stdout()) {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Not running in a TTY, cannot initialize terminal interface",
            ));
        }

        enable_raw_mode()
            .map_err(|e| io::Error::other(format!("Failed to enable raw mode: {}", e)))?;

        stdout().execute(EnterAlternateScreen).map_err(|e| {
            let _ = disable_raw_mode();
            io::Error::other(format!("Failed to enter alternate screen: {}", e))
        })?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).map_err(|e| {
            let _ = disable_raw_mode();
            let _ = stdout().execute(LeaveAlternateScreen);
            io::Error::other(format!("Failed to create terminal: {}", e))
        })?;

        Ok(Self {
            app,
            state: BoardState::new(unit, app.calendar(), now),
            now,
            terminal,
            theme: Theme::by_name(&app.config().theme),
        })
    }

    fn calculate_centered_area(available: Rect, needed_width: u16, needed_height: u16) -> Rect {
        let width = available.width.min(needed_width);
        let height = available.height.min(needed_height);
        Rect {
            x: available.x + available.width.saturating_sub(width) / 2,
            y: available.y + available.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    fn create_header(page: &LeaderboardPage, theme: &Theme) -> Paragraph<'static> {
        let dimmed = Style::default().fg(theme.colors.dimmed);
        let accent = Style::default().fg(theme.colors.accent);

        let previous = match &page.previous {
            Some(previous) => Span::styled(format!("← {}", previous.label), accent),
            None => Span::styled("earliest".to_string(), dimmed),
        };
        let next = match &page.next {
            Some(next) => Span::styled(format!("{} →", next.label), accent),
            None => Span::styled("current".to_string(), dimmed),
        };

        Paragraph::new(vec![
            Line::from(Span::styled(page.title.clone(), theme.colors.title())),
            Line::from(vec![
                previous,
                Span::styled("   •   ".to_string(), dimmed),
                next,
            ]),
        ])
        .alignment(Alignment::Center)
    }

    fn create_product_table(page: &LeaderboardPage, theme: &Theme) -> Table<'static> {
        let header_style = Style::default().fg(theme.colors.header);
        let header = Row::new(
            ["#", "Product", "Description", "Votes", "Comments", "Views"]
                .into_iter()
                .map(|title| Cell::from(title).style(header_style)),
        )
        .height(1);

        let first = page.products.first_rank();
        let rows: Vec<Row> = page
            .products
            .items
            .iter()
            .enumerate()
            .map(|(i, product)| {
                Row::new(vec![
                    Cell::from((first + i).to_string())
                        .style(Style::default().fg(theme.colors.dimmed)),
                    Cell::from(product.name.clone())
                        .style(Style::default().fg(theme.colors.focused)),
                    Cell::from(product.description.clone())
                        .style(Style::default().fg(theme.colors.dimmed)),
                    Cell::from(format!("▲ {}", product.votes_count))
                        .style(Style::default().fg(theme.colors.votes)),
                    Cell::from(product.comments_count.to_string()),
                    Cell::from(product.views_count.to_string()),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(20),
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(9),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::NONE))
        .column_spacing(1)
    }

    fn create_pagination(page: &LeaderboardPage, theme: &Theme) -> Paragraph<'static> {
        let dimmed = Style::default().fg(theme.colors.dimmed);
        let mut spans = Vec::new();
        for link in page.products.links.iter() {
            let span = match link {
                PageLink::Page {
                    is_current: true, ..
                } => Span::styled(format!(" {} ", link.label()), theme.colors.current_page()),
                PageLink::Ellipsis => Span::styled(link.label(), dimmed),
                _ => Span::styled(link.label(), Style::default().fg(theme.colors.accent)),
            };
            spans.push(span);
            spans.push(Span::raw("  "));
        }
        spans.pop();

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn create_help_text(theme: &Theme) -> Paragraph<'static> {
        Paragraph::new(Line::from(Span::styled(
            "←→/hl=Period • n/p=Page • d/w/m/y=Unit • t=Current • ?=Help • q=Quit",
            Style::default().fg(theme.colors.dimmed),
        )))
        .alignment(Alignment::Center)
    }

    fn create_error(status: u16, text: String, theme: &Theme) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Error {}", status),
                theme.colors.title(),
            )),
            Line::from(Span::styled(
                text,
                Style::default().fg(theme.colors.error_text),
            )),
        ])
        .alignment(Alignment::Center)
    }

    /// Run the browser until the user quits; returns the last board shown
    pub fn run(&mut self) -> io::Result<PeriodKey> {
        loop {
            if self.state.should_exit {
                break;
            }

            let key = self.state.key();
            let page = self.state.page.to_string();
            let response =
                self.app
                    .leaderboard(self.state.unit, &key.segments(), Some(page.as_str()), self.now);
            if let Some(body) = response.body() {
                self.state.total_pages = body.products.state.total_pages;
            }

            let show_help = self.state.show_help;
            let theme = &self.theme;

            self.terminal.draw(|frame| {
                const HEADER_HEIGHT: u16 = 3;
                const TABLE_HEIGHT: u16 = 14;
                const PAGINATION_HEIGHT: u16 = 2;
                const HELP_HEIGHT: u16 = 1;
                const PREFERRED_WIDTH: u16 = 100;

                let size = frame.area();
                let total_height = HEADER_HEIGHT
                    + TABLE_HEIGHT
                    + PAGINATION_HEIGHT
                    + if show_help { HELP_HEIGHT } else { 0 };
                let area = Self::calculate_centered_area(
                    size,
                    PREFERRED_WIDTH.min(size.width.saturating_sub(2)),
                    total_height,
                );

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(HEADER_HEIGHT),
                        Constraint::Length(TABLE_HEIGHT),
                        Constraint::Length(PAGINATION_HEIGHT),
                        Constraint::Length(if show_help { HELP_HEIGHT } else { 0 }),
                    ])
                    .split(area);

                match &response {
                    Response::Page { body } => {
                        frame.render_widget(Self::create_header(body, theme), chunks[0]);
                        frame.render_widget(Self::create_product_table(body, theme), chunks[1]);
                        frame.render_widget(Self::create_pagination(body, theme), chunks[2]);
                    }
                    Response::Error { status, payload } => {
                        let text = render_error_boundary(*status, payload.as_ref());
                        frame.render_widget(Self::create_error(*status, text, theme), chunks[1]);
                    }
                    Response::Redirect { location, .. } => {
                        let text = format!("Redirect to {}", location);
                        frame.render_widget(Paragraph::new(text), chunks[1]);
                    }
                }

                if show_help {
                    frame.render_widget(Self::create_help_text(theme), chunks[3]);
                }
            })?;

            if poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.state.handle_key(key, self.app.calendar(), self.now);
                    debug!("Board is now {} page {}", self.state.key(), self.state.page);
                }
            }
        }

        self.cleanup()?;
        Ok(self.state.key())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        Ok(())
    }
}

impl<'a> Drop for BoardView<'a> {
    fn drop(&mut self) {
        // Fallback if run() exited early with an error
        let _ = self.cleanup();
    }
}
