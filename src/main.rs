use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use chordview::render::{keyboard_svg, keyboard_text, table_text};
use chordview::{parse_symbol, App, Direction, Event, ViewerConfig};

const USAGE: &str = "Usage: chordview [--config FILE] <symbol>
       chordview [--config FILE] --table
       chordview [--config FILE] --svg <symbol> [output.svg]
       chordview [--config FILE] --interactive";

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    // Parse flags
    let mut config = ViewerConfig::default();
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            exit_with_usage();
        }
        config = match ViewerConfig::load(&args[1]) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        };
        args.drain(..2);
    }

    match args.first().map(String::as_str) {
        None => exit_with_usage(),
        Some("--table") => {
            let app = App::new(config);
            print!("{}", table_text(&app.table(), app.view().active, None));
        }
        Some("--svg") => {
            let Some((symbol, output)) = svg_args(&args[1..]) else { exit_with_usage() };
            let mut app = App::new(config);
            select_or_exit(&mut app, &symbol);
            let notes = app.highlighted_notes();
            let svg = keyboard_svg(
                &app.keyboard(),
                &notes,
                app.selection().root_note(),
                app.spelling(),
            );
            match output {
                Some(path) => {
                    if let Err(e) = fs::write(path, &svg) {
                        eprintln!("Error writing to '{}': {}", path, e);
                        process::exit(1);
                    }
                    eprintln!("Wrote {} keyboard to {}", app.label(), path);
                }
                None => print!("{}", svg),
            }
        }
        Some("--interactive") => {
            if let Err(e) = run_interactive(App::new(config)) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Some(_) => {
            let symbol = args.join(" ");
            let mut app = App::new(config);
            select_or_exit(&mut app, &symbol);
            println!("{}: {}", app.label(), app.view().notes.join(" "));
            print_keyboard(&app);
        }
    }
}

/// Split `--svg` arguments into the symbol and an optional output path.
/// The symbol may span several words (`F major scale`); a trailing word
/// ending in `.svg` is the output path.
fn svg_args(args: &[String]) -> Option<(String, Option<&String>)> {
    let (output, words) = match args.split_last() {
        Some((last, rest)) if last.ends_with(".svg") => (Some(last), rest),
        _ => (None, args),
    };
    if words.is_empty() {
        return None;
    }
    Some((words.join(" "), output))
}

fn exit_with_usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn select_or_exit(app: &mut App, symbol: &str) {
    match parse_symbol(symbol) {
        Ok(selection) => {
            app.update(Event::Select(selection));
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn print_keyboard(app: &App) {
    let notes = app.highlighted_notes();
    print!(
        "{}",
        keyboard_text(&app.keyboard(), &notes, app.selection().root_note(), app.spelling())
    );
}

fn print_frame(app: &App) {
    let view = app.view();
    print!("{}", table_text(&app.table(), view.active, Some(view.focus)));
    println!();
    println!("{}: {}", view.label, view.notes.join(" "));
    print_keyboard(app);
}

/// Line-driven session: arrows as words or vi keys, `enter`, `toggle`,
/// a symbol to jump straight to it, `quit`.
fn run_interactive(mut app: App) -> io::Result<()> {
    print_frame(&app);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let event = match line.trim() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(()),
            "up" | "k" => Event::Move(Direction::Up),
            "down" | "j" => Event::Move(Direction::Down),
            "left" | "h" => Event::Move(Direction::Left),
            "right" | "l" => Event::Move(Direction::Right),
            "enter" | "select" => Event::Activate,
            "toggle" | "t" => Event::ToggleMinorAlignment,
            symbol => match parse_symbol(symbol) {
                Ok(selection) => Event::Select(selection),
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            },
        };
        app.update(event);
        print_frame(&app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_svg_args_multi_word_symbol() {
        let args = strings(&["F", "major", "scale"]);
        let (symbol, output) = svg_args(&args).unwrap();
        assert_eq!(symbol, "F major scale");
        assert_eq!(output, None);

        let mut app = App::default();
        select_or_exit(&mut app, &symbol);
        assert_eq!(app.label(), "F major scale");
    }

    #[test]
    fn test_svg_args_with_output_path() {
        let args = strings(&["F", "major", "out.svg"]);
        let (symbol, output) = svg_args(&args).unwrap();
        assert_eq!(symbol, "F major");
        assert_eq!(output.map(String::as_str), Some("out.svg"));

        let args = strings(&["Am7", "keys.svg"]);
        assert_eq!(svg_args(&args).unwrap().0, "Am7");
    }

    #[test]
    fn test_svg_args_need_a_symbol() {
        assert!(svg_args(&[]).is_none());
        assert!(svg_args(&strings(&["out.svg"])).is_none());
    }
}
