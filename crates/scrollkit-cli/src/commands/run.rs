use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use scrollkit_core::AppConfig;
use scrollkit_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{DocumentWidget, OutlineWidget, StatusBarWidget},
};

pub fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Scrollkit"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler =
        EventHandler::with_animation_tick(config.ui.tick_rate_ms, config.ui.animation_tick());

    let mut app = App::new(config);

    // Track if we need the animation frame rate.
    // Checked at the END of each iteration to set the NEXT iteration's
    // tick rate, so a fresh jump speeds up immediately.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Advance queued scroll animations before drawing
        app.pump_frames();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            // Two-column layout: outline + document
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(3, 10), Constraint::Ratio(7, 10)])
                .split(main_layout[0]);

            // Relayout for the document panel's inner text area
            app.resize(
                columns[1].width.saturating_sub(2),
                columns[1].height.saturating_sub(2),
            );

            OutlineWidget::render(frame, columns[0], &app);
            DocumentWidget::render(frame, columns[1], &app);
            StatusBarWidget::render(frame, main_layout[1], &app);
        })?;

        // Handle events (use the faster tick rate during animations)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(_, _) => {
                    // Relayout happens inside the draw closure
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.viewport.is_animating();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except the gg sequence
    if action != Action::PendingG && action != Action::JumpToTop {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::Select => app.jump_to_selected(),
        Action::JumpToTop => {
            app.clear_pending_key();
            app.jump_to_top();
        }
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::CycleEasing => app.cycle_easing(),
        Action::None => {}
    }
}
