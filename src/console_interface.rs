use crate::core::CellContent::{
    Capsule, Empty, Food, GhostDoor, WallArcNE, WallArcNW, WallArcSE, WallArcSW, WallHorizontal, WallVertical,
};
use crate::core::{Board, CellContent, Direction, GhostMarker, GridCell, Level};
use crate::error::{PlannerError, Result};
use crate::models::PlanRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::collections::BTreeSet;
use std::io;

const PLAYER: char = 'P';
const GHOST: char = 'G';
const DEAD_GHOST: char = 'X';
const PATH: char = '*';
const DANGER: char = '!';

pub fn cell_symbol(cell: CellContent) -> char {
    match cell {
        Empty => ' ',
        Food => '.',
        Capsule => 'o',
        WallVertical => '|',
        WallHorizontal => '-',
        WallArcNE => '╮',
        WallArcNW => '╭',
        WallArcSW => '╰',
        WallArcSE => '╯',
        GhostDoor => '=',
    }
}

fn cell_from_symbol(ch: char) -> Option<CellContent> {
    Some(match ch {
        ' ' => Empty,
        '.' => Food,
        'o' => Capsule,
        '|' => WallVertical,
        '-' => WallHorizontal,
        '╮' => WallArcNE,
        '╭' => WallArcNW,
        '╰' => WallArcSW,
        '╯' => WallArcSE,
        '=' => GhostDoor,
        _ => return None,
    })
}

/// Parses a level drawn one character per cell. Actors stand on empty cells.
pub fn parse_level(s: &str) -> Result<Level> {
    let mut grid: Vec<Vec<CellContent>> = Vec::new();
    let mut player = None;
    let mut ghosts = Vec::new();
    let max_width = s.lines().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut i = 0;
    for line in s.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(max_width);
        for (j, ch) in line.chars().enumerate() {
            let cell = GridCell::new(i as i32, j as i32);
            let c = match ch {
                PLAYER => {
                    player = Some(cell);
                    Empty
                }
                GHOST => {
                    ghosts.push(GhostMarker { cell, dead: false });
                    Empty
                }
                DEAD_GHOST => {
                    ghosts.push(GhostMarker { cell, dead: true });
                    Empty
                }
                _ => cell_from_symbol(ch).ok_or_else(|| PlannerError::UnknownSymbol {
                    symbol: ch.to_string(),
                    row: i,
                    col: j,
                })?,
            };
            row.push(c);
        }
        // Pad row to max width with Empty
        while row.len() < max_width {
            row.push(Empty);
        }
        grid.push(row);
        i += 1;
    }

    Ok(Level {
        board: Board::new(grid)?,
        player: player.ok_or(PlannerError::MissingPlayer)?,
        ghosts,
        power_mode: false,
    })
}

fn render_symbols<F>(level: &Level, overlay: F) -> String
where
    F: Fn(&GridCell) -> Option<char>,
{
    let mut result = String::new();
    for (i, row) in level.board.grid.iter().enumerate() {
        for (j, &c) in row.iter().enumerate() {
            let pos = GridCell::new(i as i32, j as i32);
            let ch = if pos == level.player {
                PLAYER
            } else if let Some(ghost) = level.ghosts.iter().find(|g| g.cell == pos) {
                if ghost.dead { DEAD_GHOST } else { GHOST }
            } else {
                overlay(&pos).unwrap_or_else(|| cell_symbol(c))
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn render_level_to_string(level: &Level) -> String {
    render_symbols(level, |_| None)
}

/// Marks the planned path with `*` and walkable cells inside the danger zone with `!`.
pub fn render_plan_to_string(level: &Level, danger_zone: &BTreeSet<GridCell>, path: &[GridCell]) -> String {
    render_symbols(level, |pos| {
        if path.contains(pos) {
            Some(PATH)
        } else if danger_zone.contains(pos) && level.board.is_walkable(pos) {
            Some(DANGER)
        } else {
            None
        }
    })
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

fn symbol_color(ch: char) -> Color {
    match ch {
        PLAYER => Color::Yellow,
        GHOST => Color::Red,
        DEAD_GHOST => Color::DarkGray,
        PATH => Color::Green,
        DANGER => Color::LightRed,
        '.' => Color::White,
        'o' => Color::LightYellow,
        '=' => Color::Magenta,
        _ => Color::Blue,
    }
}

fn colored_lines(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| {
            Line::from(
                line.chars()
                    .map(|ch| Span::styled(ch.to_string(), Style::default().fg(symbol_color(ch))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

pub fn render_game(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, state: &PlanRenderState) -> Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        // Board area
        let board_text = render_plan_to_string(&state.level, &state.danger_zone, state.path());
        let board_paragraph = Paragraph::new(colored_lines(&board_text))
            .block(Block::default().borders(Borders::ALL).title("Pac-Man planner"))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(state.status_line())
            .block(Block::default().borders(Borders::ALL).title("Planner"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        // Instructions
        let instructions = if state.won {
            "Board cleared! Press any key to quit."
        } else {
            "WASD / arrows move, N applies the plan, P toggles power mode, R resets, Q quits"
        };
        let instructions = match &state.error {
            Some(err) => format!("{} | Error: {}", instructions, err),
            None => instructions.to_string(),
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
    ApplyPlan,
    TogglePower,
    Reset,
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => ConsoleInput::UserAction(UserAction::ApplyPlan),
                KeyCode::Char('p') | KeyCode::Char('P') => ConsoleInput::UserAction(UserAction::TogglePower),
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Reset),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
