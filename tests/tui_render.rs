use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use smart_dashboard::config::Config;
use smart_dashboard::fields::{Status, Tint};
use smart_dashboard::tui::app::App;
use smart_dashboard::tui::colors::{tint_colors, GREEN_BG, RED_BG, YELLOW_BG};
use smart_dashboard::tui::enums::AppState;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn draw(app: &App) -> Buffer {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn logged_in() -> App {
    let mut app = App::new(Config::default());
    app.handle_key(key(KeyCode::Enter));
    app
}

#[test]
fn login_screen_shows_prefilled_form() {
    let app = App::new(Config::default());
    let text = screen_text(&draw(&app));
    assert!(text.contains("Smart Dashboard"));
    assert!(text.contains("Secure access to your workspace"));
    assert!(text.contains("admin@gmail.com"));
    assert!(!text.contains("password"), "password is masked");
    assert!(text.contains("Login to Dashboard"));
    assert!(text.contains("This is a preview environment"));
}

#[test]
fn dashboard_first_page() {
    let app = logged_in();
    assert_eq!(app.state(), AppState::Dashboard);
    let text = screen_text(&draw(&app));
    assert!(text.contains("Workspace Overview"));
    assert!(text.contains("Admin User"));
    for title in ["Total items", "Completed", "In progress", "Pending"] {
        assert!(text.contains(title), "missing card {title}");
    }
    assert!(text.contains("Bug Fixing"));
    assert!(text.contains("Dashboard Development"));
    assert!(text.contains("Responsive Design"));
    assert!(!text.contains("UI Design"), "fourth task is on page 2");
    assert!(text.contains("Previous"));
    assert!(text.contains("Next"));
    assert!(text.contains("Page 1 of 2"));
}

#[test]
fn second_page_after_next() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Right));
    let text = screen_text(&draw(&app));
    assert!(text.contains("UI Design"));
    assert!(!text.contains("Bug Fixing"));
    assert!(text.contains("Page 2 of 2"));
}

#[test]
fn empty_result_message_and_no_pagination() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Char('/')));
    for c in "zzz".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    let text = screen_text(&draw(&app));
    assert!(text.contains("No tasks match your criteria"));
    assert!(!text.contains("Previous"));
    // Cards still count the whole dataset.
    assert_eq!(app.dashboard().map(|d| d.metrics().total), Some(4));
}

#[test]
fn status_badges_are_tinted() {
    let app = logged_in();
    let buffer = draw(&app);
    let area = buffer.area;
    let mut seen = Vec::new();
    // Table rows start below the header, cards and filter bar.
    for y in 10..area.height {
        let row: String = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
        for (label, bg) in [("Pending", RED_BG), ("In progress", YELLOW_BG), ("Completed", GREEN_BG)] {
            if let Some(col) = row.find(label) {
                let x = row[..col].chars().count() as u16;
                assert_eq!(buffer[(x, y)].bg, bg, "{label} badge background");
                seen.push(label);
            }
        }
    }
    assert!(seen.contains(&"Pending"));
    assert!(seen.contains(&"In progress"));
    assert!(seen.contains(&"Completed"));
}

#[test]
fn tint_table_is_exhaustive_and_distinct() {
    let tints = [Tint::Blue, Tint::Green, Tint::Yellow, Tint::Red];
    let backgrounds: Vec<Color> = tints.iter().map(|t| tint_colors(*t).0).collect();
    for (i, a) in backgrounds.iter().enumerate() {
        for b in &backgrounds[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(tint_colors(Status::Completed.tint()).0, GREEN_BG);
}
