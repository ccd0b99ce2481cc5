use std::io::{self, stdout};

use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};
use twenty48::{CellSnapshot, Direction as Slide, Game, GameState, GRID_SIZE};

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut app = App {
        game: Game::new(rand::random()),
    };

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|frame| app.ui(frame))?;
        should_quit = app.handle_events()?;
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

struct App {
    game: Game,
}

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;

const BOARD_WIDGET_WIDTH: u16 = CELL_WIDTH * GRID_SIZE as u16;
const BOARD_WIDGET_HEIGHT: u16 = CELL_HEIGHT * GRID_SIZE as u16;

struct BoardWidget {
    snapshot: Vec<CellSnapshot>,
}

impl Widget for BoardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BOARD_WIDGET_WIDTH),
                Constraint::Min(0),
            ])
            .split(area)[1];
        for cell in &self.snapshot {
            let x = area.x + u16::from(cell.x) * CELL_WIDTH;
            let y = area.y + u16::from(cell.y) * CELL_HEIGHT;
            let block = Block::new()
                .border_type(BorderType::Rounded)
                .borders(Borders::all());
            block.render(
                Rect {
                    x,
                    y,
                    width: CELL_WIDTH,
                    height: CELL_HEIGHT,
                },
                buf,
            );
            if let Some((_, value)) = cell.tile {
                buf.set_string(x + 1, y + 1, format!("{:>5}", value), Style::new());
            }
        }
    }
}

impl App {
    fn ui(&self, frame: &mut Frame) {
        let main_layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(BOARD_WIDGET_HEIGHT + 1),
                Constraint::Length(1),
                Constraint::Min(0),
            ],
        )
        .split(frame.size());
        frame.render_widget(
            BoardWidget {
                snapshot: self.game.snapshot(),
            },
            main_layout[0],
        );
        let status = match self.game.state() {
            GameState::GameOver => "Game over! Press r to restart, q to quit",
            _ => "Slide with the arrow keys, q to quit",
        };
        frame.render_widget(Paragraph::new(status).centered(), main_layout[1]);
    }

    fn handle_events(&mut self) -> io::Result<bool> {
        if event::poll(std::time::Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(false);
                }
                let direction = match key.code {
                    KeyCode::Char('q') => return Ok(true),
                    KeyCode::Char('r') => {
                        if self.game.state() == GameState::GameOver {
                            self.game = Game::new(rand::random());
                        }
                        None
                    }
                    KeyCode::Up => Some(Slide::Up),
                    KeyCode::Down => Some(Slide::Down),
                    KeyCode::Left => Some(Slide::Left),
                    KeyCode::Right => Some(Slide::Right),
                    _ => None,
                };
                if let Some(direction) = direction {
                    self.game
                        .attempt_move(direction)
                        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
                }
            }
        }
        Ok(false)
    }
}
